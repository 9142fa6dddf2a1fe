mod common;

use common::{course, date, ids};
use msf_finder::models::ZipCode;
use msf_finder::services::proximity::{
    MAX_APPROX_DISTANCE, approximate_distance, filter_nearby, parse_zip_number, within_radius,
};

fn zip(s: &str) -> ZipCode {
    ZipCode::parse(s).expect("valid zip")
}

#[test]
fn test_same_zip_is_zero() {
    assert_eq!(approximate_distance("28202", "28202"), Some(0));
}

#[test]
fn test_boundary_distance_is_kept() {
    let d = approximate_distance("28202", "38202");
    assert_eq!(d, Some(100));

    let start = date(2099, 1, 1);
    let nearby = filter_nearby(vec![course(1, "38202", start, 5)], &zip("28202"));
    assert_eq!(ids(&nearby), vec![1]);
    assert_eq!(nearby[0].distance, MAX_APPROX_DISTANCE);
}

#[test]
fn test_far_course_is_dropped() {
    assert_eq!(approximate_distance("28202", "48202"), Some(200));

    let start = date(2099, 1, 1);
    let nearby = filter_nearby(vec![course(1, "48202", start, 5)], &zip("28202"));
    assert!(nearby.is_empty());
}

#[test]
fn test_distance_rounds_half_up() {
    assert_eq!(approximate_distance("28202", "28252"), Some(1));
    assert_eq!(approximate_distance("28202", "28249"), Some(0));
    assert_eq!(approximate_distance("28202", "28351"), Some(1));
    assert_eq!(approximate_distance("28202", "28352"), Some(2));
}

#[test]
fn test_distance_is_symmetric() {
    let zips = ["00501", "27253", "28202", "28401", "28731", "38202", "99950"];
    for a in zips {
        for b in zips {
            assert_eq!(approximate_distance(a, b), approximate_distance(b, a), "{} vs {}", a, b);
        }
        assert_eq!(approximate_distance(a, a), Some(0));
    }
}

#[test]
fn test_zip_number_uses_leading_digits() {
    assert_eq!(parse_zip_number("28202-1234"), Some(28202));
    assert_eq!(parse_zip_number(" 28401"), Some(28401));
    assert_eq!(parse_zip_number("00501"), Some(501));
    assert_eq!(parse_zip_number("NC 28202"), None);
    assert_eq!(parse_zip_number(""), None);
}

#[test]
fn test_non_numeric_institution_zip_is_dropped() {
    let start = date(2099, 1, 1);
    let courses = vec![course(1, "unknown", start, 5), course(2, "28202", start, 5)];

    let nearby = filter_nearby(courses, &zip("28202"));
    assert_eq!(ids(&nearby), vec![2]);
}

#[test]
fn test_sorted_by_distance_with_stable_ties() {
    let courses = vec![
        course(1, "48202", date(2099, 1, 1), 5),
        course(2, "28302", date(2099, 1, 2), 5),
        course(3, "38202", date(2099, 1, 3), 5),
        course(4, "28202", date(2099, 1, 4), 5),
        course(5, "28102", date(2099, 1, 5), 5),
    ];

    let nearby = filter_nearby(courses, &zip("28202"));

    assert_eq!(ids(&nearby), vec![4, 2, 5, 3]);
    assert!(nearby.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn test_threshold_is_idempotent() {
    let courses = vec![
        course(1, "28202", date(2099, 1, 1), 5),
        course(2, "35000", date(2099, 1, 2), 5),
        course(3, "40000", date(2099, 1, 3), 5),
    ];

    let once = filter_nearby(courses, &zip("28202"));
    let twice = within_radius(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_filter_only_returns_given_courses_unchanged() {
    let courses = vec![
        course(1, "28202", date(2099, 1, 1), 1),
        course(2, "28230", date(2099, 1, 2), 12),
    ];

    let nearby = filter_nearby(courses.clone(), &zip("28202"));

    for n in &nearby {
        let original = courses.iter().find(|c| c.id == n.course.id).expect("known course");
        assert_eq!(&n.course, original);
        assert!(n.course.seats_available > 0);
    }
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert!(filter_nearby(Vec::new(), &zip("28202")).is_empty());
}
