//! CIDR aggregation logic.
//!
//! - [`sort`] - canonical ordering of blocks
//! - [`merge`] - the pairwise sibling/duplicate merge rule
//! - [`aggregate`] - fixed-point reduction of a block list

mod aggregate;
mod merge;
mod sort;

// Re-export public functions
pub use aggregate::{aggregate, aggregate_with, is_aggregated, Strategy};
pub use merge::merge;
pub use sort::{compare, sort};
