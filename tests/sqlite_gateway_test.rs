mod common;

use chrono::{TimeZone, Utc};
use common::date;
use msf_finder::gateway::{CourseGateway, SqliteGateway, sqlite::migrate};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn setup() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    migrate(&pool).await.expect("Failed to run migrations");

    for (id, name, city, zipcode) in [
        (1_i64, "Central Piedmont Community College", "Charlotte", "28202"),
        (2, "Cape Fear Community College", "Wilmington", "28401"),
    ] {
        sqlx::query("INSERT INTO colleges (id, name, city, zipcode, latitude, longitude) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(city)
            .bind(zipcode)
            .bind(35.2_f64)
            .bind(-80.8_f64)
            .execute(&pool)
            .await
            .expect("Failed to insert college");
    }

    pool
}

#[allow(clippy::too_many_arguments)]
async fn insert_course(
    pool: &SqlitePool,
    id: i64,
    college_id: i64,
    start_date: &str,
    seats: i64,
    waitlist: bool,
    location: Option<&str>,
    scraped_at: &str,
) {
    sqlx::query(
        r#"
        INSERT INTO courses
            (id, college_id, title, start_date, start_time, location, seats_available,
            price, waitlist_available, registration_url, scraped_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(college_id)
    .bind(format!("Basic RiderCourse {}", id))
    .bind(start_date)
    .bind("7:30 AM")
    .bind(location)
    .bind(seats)
    .bind("$275.00")
    .bind(waitlist)
    .bind(format!("https://cfcc-register.fundfive.com/section/{}", id))
    .bind(scraped_at)
    .execute(pool)
    .await
    .expect("Failed to insert course");
}

#[tokio::test]
async fn test_fetch_upcoming_filters_and_orders() {
    let pool = setup().await;
    insert_course(&pool, 1, 1, "2026-11-02", 4, false, None, "2026-10-16 08:00:00").await;
    insert_course(&pool, 2, 2, "2026-10-16", 1, true, Some("Main Campus, Range B"), "2026-10-16T08:00:00Z").await;
    insert_course(&pool, 3, 1, "2026-10-15", 6, false, None, "2026-10-16 08:00:00").await;
    insert_course(&pool, 4, 2, "2026-10-20", 0, true, None, "2026-10-16 08:00:00").await;

    let gateway = SqliteGateway::new(pool);
    let courses = gateway
        .fetch_upcoming(date(2026, 10, 16))
        .await
        .expect("Failed to fetch courses");

    let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let first = &courses[0];
    assert_eq!(first.institution.name, "Cape Fear Community College");
    assert_eq!(first.institution.zip_code, "28401");
    assert_eq!(first.institution_id, 2);
    assert_eq!(first.start_date, date(2026, 10, 16));
    assert_eq!(first.seats_available, 1);
    assert!(first.waitlist_available);
    assert_eq!(first.location.as_deref(), Some("Main Campus, Range B"));
    assert_eq!(first.price, "$275.00");

    let second = &courses[1];
    assert_eq!(second.institution.city, "Charlotte");
    assert_eq!(second.location, None);
    assert_eq!(
        second.scraped_at,
        Some(Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn test_blank_location_is_treated_as_missing() {
    let pool = setup().await;
    insert_course(&pool, 1, 1, "2099-05-01", 3, false, Some("  "), "2026-10-16 08:00:00").await;

    let courses = SqliteGateway::new(pool)
        .fetch_upcoming(date(2026, 10, 16))
        .await
        .expect("Failed to fetch courses");

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].location, None);
}

#[tokio::test]
async fn test_empty_store_returns_no_rows() {
    let pool = setup().await;
    let gateway = SqliteGateway::new(pool);

    let courses = gateway.fetch_upcoming(date(2026, 10, 16)).await.expect("Failed to fetch");
    assert!(courses.is_empty());
    gateway.ping().await.expect("ping should succeed");
}

#[tokio::test]
async fn test_query_error_fails_whole_call() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    // no schema: the query itself fails
    let result = SqliteGateway::new(pool).fetch_upcoming(date(2026, 10, 16)).await;
    assert!(matches!(result, Err(msf_finder::error::AppError::Gateway(_))));
}
