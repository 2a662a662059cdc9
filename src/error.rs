//! Error types for building network blocks.
//!
//! Only construction and parsing can fail. Sorting and aggregation are
//! defined over already-valid blocks and never return errors.

use thiserror::Error;

/// Errors raised while constructing or parsing a [`crate::models::NetBlock`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Network length {len} is too long (max {max})")]
    PrefixTooLong { len: u8, max: u8 },

    #[error("Address {0} has host bits set beyond the prefix")]
    HostBitsSet(String),

    #[error("Mask is not a contiguous run of leading ones: {0:?}")]
    InvalidMask(Vec<u8>),

    #[error("Mask is {mask} bytes wide, address is {addr} bytes")]
    MaskWidthMismatch { addr: usize, mask: usize },

    #[error("Invalid CIDR format: {0}")]
    InvalidFormat(String),

    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Invalid subnet mask: {0}")]
    InvalidPrefix(String),
}
