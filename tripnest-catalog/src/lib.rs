pub mod duration;
pub mod pricing;
pub mod query;

pub use duration::DurationBucket;
pub use pricing::{PackagePrice, PriceRange};
pub use query::{PackageQuery, SortBy, DISPLAY_LIMIT};

/// Returned when a filter or sort option name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {option}: {value}")]
pub struct ParseOptionError {
    pub option: &'static str,
    pub value: String,
}
