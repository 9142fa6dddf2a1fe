use serde::Serialize;

use super::{NearbyCourse, ZipCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

/// What the page should show for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView {
    /// Nothing searched yet.
    Initial,
    Loading,
    /// The last search failed. Earlier results, if any, are still present.
    Failed,
    /// The last search succeeded with no matches.
    Empty,
    Results,
}

/// State of the search page. Every transition consumes the old value and
/// returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub phase: SearchPhase,
    pub zip_code: String,
    pub results: Vec<NearbyCourse>,
    pub error_message: Option<String>,
    pub searched: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle with a ZIP typed into the field but nothing submitted.
    pub fn with_input(zip_code: impl Into<String>) -> Self {
        Self {
            zip_code: zip_code.into(),
            ..Self::default()
        }
    }

    pub fn begin(self, zip: &ZipCode) -> Self {
        Self {
            phase: SearchPhase::Searching,
            zip_code: zip.to_string(),
            error_message: None,
            searched: true,
            ..self
        }
    }

    pub fn complete(self, results: Vec<NearbyCourse>) -> Self {
        Self {
            phase: SearchPhase::Idle,
            results,
            error_message: None,
            ..self
        }
    }

    /// Back to idle with a failure notice. Results are left as they were.
    pub fn fail(self, message: impl Into<String>) -> Self {
        Self {
            phase: SearchPhase::Idle,
            error_message: Some(message.into()),
            ..self
        }
    }

    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn view(&self) -> SearchView {
        if self.is_searching() {
            SearchView::Loading
        } else if self.error_message.is_some() {
            SearchView::Failed
        } else if !self.results.is_empty() {
            SearchView::Results
        } else if self.searched {
            SearchView::Empty
        } else {
            SearchView::Initial
        }
    }
}
