//! ZIP-code proximity ranking.
//!
//! Distance here is a stand-in: the absolute difference between the two ZIP
//! codes read as integers, divided by 100 and rounded. ZIP numbering only
//! loosely follows geography, so courses can be misranked. Nothing in this
//! module does geodesic math.

use tracing::debug;

use crate::models::{Course, NearbyCourse, ZipCode};

/// Courses farther than this (in approximate miles) are dropped.
pub const MAX_APPROX_DISTANCE: u32 = 100;

/// Reads the leading run of digits, so `"28202-1234"` is 28202 and a value
/// with no leading digit has no number at all.
pub fn parse_zip_number(zip: &str) -> Option<u32> {
    let trimmed = zip.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `round(|a - b| / 100)`, halves rounding up.
pub fn approximate_distance(user_zip: &str, institution_zip: &str) -> Option<u32> {
    let a = parse_zip_number(user_zip)?;
    let b = parse_zip_number(institution_zip)?;
    Some(distance_between(a, b))
}

fn distance_between(a: u32, b: u32) -> u32 {
    let diff = u64::from(a.abs_diff(b));
    ((diff + 50) / 100) as u32
}

/// Pairs each course with its distance from `zip`.
pub fn rank_course(course: Course, zip: &ZipCode) -> Option<NearbyCourse> {
    let institution_zip = parse_zip_number(&course.institution.zip_code)?;
    let distance = distance_between(zip.value(), institution_zip);
    Some(NearbyCourse { course, distance })
}

/// Keeps courses within [`MAX_APPROX_DISTANCE`] of `zip`, nearest first.
/// Equal distances keep their incoming order.
pub fn filter_nearby(courses: Vec<Course>, zip: &ZipCode) -> Vec<NearbyCourse> {
    let ranked = courses
        .into_iter()
        .filter_map(|course| {
            let id = course.id;
            let ranked = rank_course(course, zip);
            if ranked.is_none() {
                debug!("Dropping course {}: institution ZIP is not numeric", id);
            }
            ranked
        })
        .collect();

    let mut nearby = within_radius(ranked);
    nearby.sort_by_key(|n| n.distance);
    nearby
}

pub fn within_radius(courses: Vec<NearbyCourse>) -> Vec<NearbyCourse> {
    courses
        .into_iter()
        .filter(|n| n.distance <= MAX_APPROX_DISTANCE)
        .collect()
}
