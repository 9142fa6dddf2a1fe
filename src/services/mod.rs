pub mod proximity;
pub mod search;

pub use proximity::{MAX_APPROX_DISTANCE, approximate_distance, filter_nearby, within_radius};
pub use search::{SEARCH_FAILED_MESSAGE, SearchService};
