use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{Course, Institution};

/// Embedded resource requested alongside each course row.
pub const COURSE_SELECT: &str = "*,colleges(id,name,city,zipcode,latitude,longitude)";

/// A `courses` row as PostgREST returns it, with the owning college embedded.
#[derive(Debug, Deserialize)]
pub struct CourseRow {
    pub id: i64,
    pub college_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    pub seats_available: i64,
    #[serde(default)]
    pub waitlist_available: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub scraped_at: Option<String>,
    #[serde(default)]
    pub colleges: Option<CollegeRow>,
}

#[derive(Debug, Deserialize)]
pub struct CollegeRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl From<CollegeRow> for Institution {
    fn from(row: CollegeRow) -> Self {
        Institution {
            id: row.id,
            name: row.name,
            city: row.city.unwrap_or_default(),
            zip_code: row.zipcode.unwrap_or_default(),
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

impl TryFrom<CourseRow> for Course {
    type Error = AppError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let college = row.colleges.ok_or_else(|| {
            AppError::Gateway(format!("Course {} has no college attached", row.id))
        })?;

        Ok(Course {
            id: row.id,
            institution_id: row.college_id,
            institution: college.into(),
            title: row.title.unwrap_or_default(),
            start_date: row.start_date,
            start_time: row.start_time.unwrap_or_default(),
            price: price_text(row.price),
            seats_available: seats_from(row.id, row.seats_available)?,
            waitlist_available: row.waitlist_available.unwrap_or(false),
            location: non_empty(row.location),
            registration_url: row.registration_url.unwrap_or_default(),
            scraped_at: row.scraped_at.as_deref().and_then(parse_timestamp),
        })
    }
}

/// Prices are scraped as text but may have been stored as numbers.
fn price_text(value: Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn seats_from(course_id: i64, seats: i64) -> Result<u32, AppError> {
    u32::try_from(seats).map_err(|_| {
        AppError::Gateway(format!("Course {} has invalid seat count {}", course_id, seats))
    })
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Accepts RFC3339 as well as the zone-less forms SQL defaults produce,
/// which are taken as UTC.
pub(crate) fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
        .map(|naive| naive.and_utc())
}
