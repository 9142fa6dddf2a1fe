use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::AppError;
use crate::models::{NearbyCourse, SearchState, ZipCode, sanitize_zip_input};
use crate::services::{SearchService, search::today};
use crate::state::AppState;
use crate::view::{INVALID_ZIP_MESSAGE, PageContext, render_page};

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    zip: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub zip_code: ZipCode,
    pub count: usize,
    pub courses: Vec<NearbyCourse>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_page))
        .route("/api/courses", get(search_courses))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> StatusCode {
    match state.gateway.ping().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            error!("health check failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// The page. A `zip` parameter is cleaned the way the input field cleans
/// keystrokes; anything short of five digits never reaches the store.
async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let raw = params.zip.unwrap_or_default();
    let input = sanitize_zip_input(&raw);

    let (search_state, input_notice) = if raw.is_empty() {
        (SearchState::new(), None)
    } else {
        match ZipCode::parse(&input) {
            Ok(zip) => {
                let service = SearchService::new(state.gateway.clone());
                (service.search_today(SearchState::new(), &zip).await, None)
            }
            Err(_) => (SearchState::with_input(input), Some(INVALID_ZIP_MESSAGE)),
        }
    };

    Html(render_page(&PageContext {
        state: &search_state,
        site: &state.site,
        input_notice,
    }))
}

async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let zip = ZipCode::parse(params.zip.as_deref().unwrap_or_default())?;

    let service = SearchService::new(state.gateway.clone());
    let courses = service.find_nearby(&zip, today()).await?;

    Ok(Json(SearchResponse {
        zip_code: zip,
        count: courses.len(),
        courses,
    }))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;
    debug!("{} {} -> {} in {:?}", method, path, response.status(), started.elapsed());
    response
}
