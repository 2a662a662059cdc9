//! Aggregate (summarize) lists of CIDR network blocks.
//!
//! Sibling blocks of equal size are merged into their common parent, and
//! duplicates collapse, until no further merge is possible.
//!
//! ```
//! use cidr_aggregate::{aggregate, NetBlock};
//!
//! let blocks: Vec<NetBlock> = ["192.0.2.0/26", "192.0.2.64/26", "192.0.2.128/25"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! assert_eq!(aggregate(&blocks), vec!["192.0.2.0/24".parse::<NetBlock>().unwrap()]);
//! ```
//!
//! Blocks must already be canonical (host bits zero). [`NetBlock::new`] and
//! parsing enforce that; [`NetBlock::truncate`] clears host bits instead.

pub mod error;
pub mod models;
pub mod processing;

pub use error::CidrError;
pub use models::NetBlock;
pub use processing::{aggregate, aggregate_with, sort, Strategy};
