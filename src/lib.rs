//! ZIP-code search over upcoming motorcycle safety course offerings.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod view;
