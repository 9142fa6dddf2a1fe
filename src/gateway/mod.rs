pub mod dto;
pub mod sqlite;

use std::env;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use tracing::{debug, error};

use crate::error::AppError;
use crate::models::Course;

pub use sqlite::SqliteGateway;

/// Read side of the course store.
#[async_trait]
pub trait CourseGateway: Send + Sync {
    /// Every course starting on or after `today` with at least one open seat,
    /// joined with its institution and ordered by start date. Either the whole
    /// result set or an error.
    async fn fetch_upcoming(&self, today: NaiveDate) -> Result<Vec<Course>, AppError>;

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
}

impl SupabaseConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let url = lookup("SUPABASE_URL")
            .ok_or_else(|| AppError::Config("SUPABASE_URL is not set".to_string()))?;
        let api_key = lookup("SUPABASE_KEY")
            .ok_or_else(|| AppError::Config("SUPABASE_KEY is not set".to_string()))?;

        Ok(Self { url, api_key })
    }
}

/// Queries the hosted store through its PostgREST interface.
pub struct SupabaseGateway {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseGateway {
    pub fn new(config: SupabaseConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn courses_url(&self, today: NaiveDate) -> Result<Url, AppError> {
        let endpoint = format!("{}/rest/v1/courses", self.config.url.trim_end_matches('/'));
        let start_filter = format!("gte.{}", today.format("%Y-%m-%d"));

        Url::parse_with_params(
            &endpoint,
            &[
                ("select", dto::COURSE_SELECT),
                ("start_date", start_filter.as_str()),
                ("seats_available", "gt.0"),
                ("order", "start_date.asc"),
            ],
        )
        .map_err(|e| AppError::Config(format!("Invalid SUPABASE_URL {}: {}", self.config.url, e)))
    }

    async fn query_courses(&self, today: NaiveDate) -> Result<Vec<dto::CourseRow>, AppError> {
        let url = self.courses_url(today)?;

        let response = self.client
            .get(url)
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!("Supabase API error {}: {}", status, body)));
        }

        let body_text = response.text().await?;
        serde_json::from_str::<Vec<dto::CourseRow>>(&body_text)
            .map_err(|e| {
                error!("Failed to parse: {}", e);
                AppError::Gateway(format!("Failed to parse Supabase response: {}", e))
            })
    }
}

#[async_trait]
impl CourseGateway for SupabaseGateway {
    async fn fetch_upcoming(&self, today: NaiveDate) -> Result<Vec<Course>, AppError> {
        let rows = self.query_courses(today).await?;
        debug!("Supabase returned {} course rows", rows.len());

        rows.into_iter().map(Course::try_from).collect()
    }
}

/// Serves a fixed list of courses, applying the same filter and ordering as
/// the real stores.
#[derive(Debug, Clone, Default)]
pub struct StaticGateway {
    courses: Vec<Course>,
}

impl StaticGateway {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CourseGateway for StaticGateway {
    async fn fetch_upcoming(&self, today: NaiveDate) -> Result<Vec<Course>, AppError> {
        let mut upcoming: Vec<Course> = self.courses
            .iter()
            .filter(|c| c.start_date >= today && c.seats_available > 0)
            .cloned()
            .collect();
        upcoming.sort_by_key(|c| c.start_date);
        Ok(upcoming)
    }
}
