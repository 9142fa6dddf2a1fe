use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};

use super::CourseGateway;
use super::dto::{non_empty, parse_timestamp, seats_from};
use crate::error::AppError;
use crate::models::{Course, Institution};

const UPCOMING_COURSES_SQL: &str = r#"
    SELECT
        c.id,
        c.college_id,
        c.title,
        c.start_date,
        c.start_time,
        c.price,
        c.seats_available,
        c.waitlist_available,
        c.location,
        c.registration_url,
        c.scraped_at,
        k.name AS college_name,
        k.city AS college_city,
        k.zipcode AS college_zipcode,
        k.latitude AS college_latitude,
        k.longitude AS college_longitude
    FROM courses c
    JOIN colleges k ON k.id = c.college_id
    WHERE c.start_date >= ?1
      AND c.seats_available > 0
    ORDER BY c.start_date ASC
"#;

#[derive(Debug, FromRow)]
struct UpcomingCourseRow {
    id: i64,
    college_id: i64,
    title: String,
    start_date: NaiveDate,
    start_time: Option<String>,
    price: Option<String>,
    seats_available: i64,
    waitlist_available: bool,
    location: Option<String>,
    registration_url: Option<String>,
    scraped_at: Option<String>,
    college_name: String,
    college_city: String,
    college_zipcode: String,
    college_latitude: Option<f64>,
    college_longitude: Option<f64>,
}

impl TryFrom<UpcomingCourseRow> for Course {
    type Error = AppError;

    fn try_from(row: UpcomingCourseRow) -> Result<Self, Self::Error> {
        Ok(Course {
            id: row.id,
            institution_id: row.college_id,
            institution: Institution {
                id: row.college_id,
                name: row.college_name,
                city: row.college_city,
                zip_code: row.college_zipcode,
                latitude: row.college_latitude,
                longitude: row.college_longitude,
            },
            title: row.title,
            start_date: row.start_date,
            start_time: row.start_time.unwrap_or_default(),
            price: row.price.unwrap_or_default(),
            seats_available: seats_from(row.id, row.seats_available)?,
            waitlist_available: row.waitlist_available,
            location: non_empty(row.location),
            registration_url: row.registration_url.unwrap_or_default(),
            scraped_at: row.scraped_at.as_deref().and_then(parse_timestamp),
        })
    }
}

/// Reads a local SQL mirror of the `colleges` and `courses` tables.
pub struct SqliteGateway {
    db: SqlitePool,
}

impl SqliteGateway {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Opens (creating if needed) the database at `database_url` and brings
    /// its schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        migrate(&pool).await?;
        Ok(Self::new(pool))
    }
}

pub async fn migrate(db: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .map_err(sqlx::Error::from)?;
    Ok(())
}

#[async_trait]
impl CourseGateway for SqliteGateway {
    async fn fetch_upcoming(&self, today: NaiveDate) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, UpcomingCourseRow>(UPCOMING_COURSES_SQL)
            .bind(today.format("%Y-%m-%d").to_string())
            .fetch_all(&self.db)
            .await
            .map_err(|e| AppError::Gateway(format!("Course query failed: {}", e)))?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("select 1").execute(&self.db).await?;
        Ok(())
    }
}
