pub mod controller;
pub mod messages;

pub use controller::{RetryPolicy, SearchController, SearchError, SearchState};
