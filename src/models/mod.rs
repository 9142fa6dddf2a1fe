pub mod course;
pub mod institution;
pub mod search;
pub mod zip;

pub use course::{Course, NearbyCourse};
pub use institution::Institution;
pub use search::{SearchPhase, SearchState, SearchView};
pub use zip::{ZipCode, can_submit, sanitize_zip_input};
