//! Pairwise merge rule for adjacent blocks.

use crate::models::{apply_mask, mask_from_prefix, one_bit_shorter_mask, NetBlock};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Try to merge `a` with the block `b` that follows it in sorted order.
///
/// Returns `a` itself for an exact duplicate, the parent block when `a` and
/// `b` are the lower and upper halves of it, and `None` otherwise. Blocks of
/// different sizes or address families never merge.
pub fn merge(a: &NetBlock, b: &NetBlock) -> Option<NetBlock> {
    if a.prefix() != b.prefix() {
        return None;
    }
    match (a.addr(), b.addr()) {
        (IpAddr::V4(x), IpAddr::V4(y)) => merge_octets(x.octets(), y.octets(), a.prefix())
            .map(|(addr, prefix)| NetBlock::from_parts(IpAddr::V4(Ipv4Addr::from(addr)), prefix)),
        (IpAddr::V6(x), IpAddr::V6(y)) => merge_octets(x.octets(), y.octets(), a.prefix())
            .map(|(addr, prefix)| NetBlock::from_parts(IpAddr::V6(Ipv6Addr::from(addr)), prefix)),
        _ => None,
    }
}

fn merge_octets<const N: usize>(a: [u8; N], b: [u8; N], prefix: u8) -> Option<([u8; N], u8)> {
    if a == b {
        return Some((a, prefix));
    }
    let parent_prefix = prefix.checked_sub(1)?;
    let widened = one_bit_shorter_mask(mask_from_prefix::<N>(prefix));
    let parent = apply_mask(a, widened);
    if parent == a && apply_mask(b, widened) == parent {
        Some((parent, parent_prefix))
    } else {
        None
    }
}
