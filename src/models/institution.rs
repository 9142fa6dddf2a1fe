use serde::{Deserialize, Serialize};

/// The college hosting one or more courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: i64,
    pub name: String,
    pub city: String,
    #[serde(rename = "zipcode")]
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
