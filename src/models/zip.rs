use std::fmt;

use serde::Serialize;

use crate::error::AppError;

pub const ZIP_LEN: usize = 5;

/// A ZIP code known to be exactly five ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        if can_submit(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(AppError::InvalidZip(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u32 {
        self.0.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drops every non-digit character and clips the rest to five characters,
/// the way the search field treats keystrokes.
pub fn sanitize_zip_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(ZIP_LEN)
        .collect()
}

/// Submission is allowed only for exactly five digits.
pub fn can_submit(input: &str) -> bool {
    input.len() == ZIP_LEN && input.bytes().all(|b| b.is_ascii_digit())
}
