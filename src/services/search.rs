use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::gateway::CourseGateway;
use crate::models::{NearbyCourse, SearchState, ZipCode};
use crate::services::proximity::filter_nearby;

pub const SEARCH_FAILED_MESSAGE: &str = "Error searching for courses. Please try again.";

pub struct SearchService {
    gateway: Arc<dyn CourseGateway>,
}

impl SearchService {
    pub fn new(gateway: Arc<dyn CourseGateway>) -> Self {
        Self { gateway }
    }

    /// One gateway round trip, then the proximity filter.
    pub async fn find_nearby(
        &self,
        zip: &ZipCode,
        today: NaiveDate,
    ) -> Result<Vec<NearbyCourse>, AppError> {
        let courses = self.gateway.fetch_upcoming(today).await?;
        let fetched = courses.len();
        let nearby = filter_nearby(courses, zip);
        debug!("{} of {} upcoming courses are near {}", nearby.len(), fetched, zip);
        Ok(nearby)
    }

    /// Runs a search from `state` and returns the state it ends in.
    pub async fn search(&self, state: SearchState, zip: &ZipCode, today: NaiveDate) -> SearchState {
        info!("Searching courses near {}", zip);
        let state = state.begin(zip);

        match self.find_nearby(zip, today).await {
            Ok(results) => {
                info!("Found {} courses near {}", results.len(), zip);
                state.complete(results)
            }
            Err(e) => {
                error!("Error fetching courses: {}", e);
                state.fail(SEARCH_FAILED_MESSAGE)
            }
        }
    }

    pub async fn search_today(&self, state: SearchState, zip: &ZipCode) -> SearchState {
        self.search(state, zip, today()).await
    }
}

/// The query date: the current UTC calendar day.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
