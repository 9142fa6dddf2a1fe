#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use msf_finder::error::AppError;
use msf_finder::gateway::CourseGateway;
use msf_finder::models::{Course, Institution};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn institution(id: i64, zip: &str) -> Institution {
    Institution {
        id,
        name: format!("College {}", id),
        city: format!("Town {}", id),
        zip_code: zip.to_string(),
        latitude: None,
        longitude: None,
    }
}

pub fn course(id: i64, zip: &str, start_date: NaiveDate, seats: u32) -> Course {
    Course {
        id,
        institution_id: id * 10,
        institution: institution(id * 10, zip),
        title: format!("Basic RiderCourse {}", id),
        start_date,
        start_time: "8:00 AM".to_string(),
        price: "$275.00".to_string(),
        seats_available: seats,
        waitlist_available: false,
        location: None,
        registration_url: format!("https://register.example.edu/section/{}", id),
        scraped_at: Some(Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap()),
    }
}

pub fn ids(courses: &[msf_finder::models::NearbyCourse]) -> Vec<i64> {
    courses.iter().map(|n| n.course.id).collect()
}

/// Always fails, like an unreachable store.
pub struct FailingGateway;

#[async_trait]
impl CourseGateway for FailingGateway {
    async fn fetch_upcoming(&self, _today: NaiveDate) -> Result<Vec<Course>, AppError> {
        Err(AppError::Gateway("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Gateway("connection refused".to_string()))
    }
}

/// Counts how often the store is queried.
#[derive(Default)]
pub struct CountingGateway {
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CourseGateway for CountingGateway {
    async fn fetch_upcoming(&self, _today: NaiveDate) -> Result<Vec<Course>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}
