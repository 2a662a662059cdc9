//! Domain models for CIDR aggregation.
//!
//! - [`NetBlock`] - IPv4/IPv6 network block in canonical form
//! - [`mask`] helpers - byte-level netmask arithmetic

mod mask;
mod net_block;

// Re-export public types
pub use mask::{apply_mask, mask_from_prefix, one_bit_shorter_mask, prefix_from_mask};
pub use net_block::{NetBlock, IPV4_MAX_PREFIX, IPV6_MAX_PREFIX};
