use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Institution;

/// One scheduled offering, joined with its institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub institution_id: i64,
    pub institution: Institution,
    pub title: String,
    pub start_date: NaiveDate,
    pub start_time: String,
    pub price: String,
    pub seats_available: u32,
    pub waitlist_available: bool,
    pub location: Option<String>,
    pub registration_url: String,
    pub scraped_at: Option<DateTime<Utc>>,
}

/// A course paired with its approximate distance from the searched ZIP code.
/// Built per search and never written back into the course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyCourse {
    #[serde(flatten)]
    pub course: Course,
    pub distance: u32,
}
