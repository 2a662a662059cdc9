//! Canonical ordering of network blocks.

use crate::models::NetBlock;
use std::cmp::Ordering;
use std::net::IpAddr;

/// Compare two blocks by base address bytes, most significant first.
///
/// The prefix length is not part of the key, so `10.0.0.0/8` and
/// `10.0.0.0/24` compare equal. IPv4 blocks order before IPv6 blocks.
pub fn compare(a: &NetBlock, b: &NetBlock) -> Ordering {
    match (a.addr(), b.addr()) {
        (IpAddr::V4(x), IpAddr::V4(y)) => x.octets().cmp(&y.octets()),
        (IpAddr::V6(x), IpAddr::V6(y)) => x.octets().cmp(&y.octets()),
        (IpAddr::V4(_), IpAddr::V6(_)) => Ordering::Less,
        (IpAddr::V6(_), IpAddr::V4(_)) => Ordering::Greater,
    }
}

/// Sort blocks in place by [`compare`].
///
/// The sort is stable: blocks with equal addresses keep their input order.
pub fn sort(blocks: &mut [NetBlock]) {
    blocks.sort_by(compare);
}
