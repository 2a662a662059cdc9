//! Network block (CIDR) value type.
//!
//! A [`NetBlock`] is a base address plus a prefix length. The base address
//! is always canonical: every bit beyond the prefix is zero. The strict
//! constructors reject anything else, [`NetBlock::truncate`] clears the host
//! bits instead.

use super::mask::{apply_mask, mask_from_prefix, prefix_from_mask};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length of an IPv4 block.
pub const IPV4_MAX_PREFIX: u8 = 32;
/// Maximum prefix length of an IPv6 block.
pub const IPV6_MAX_PREFIX: u8 = 128;

fn max_prefix_for(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_MAX_PREFIX,
        IpAddr::V6(_) => IPV6_MAX_PREFIX,
    }
}

/// Clear every bit of `addr` beyond `prefix`.
fn masked(addr: IpAddr, prefix: u8) -> IpAddr {
    match addr {
        IpAddr::V4(a) => IpAddr::V4(Ipv4Addr::from(apply_mask(
            a.octets(),
            mask_from_prefix::<4>(prefix),
        ))),
        IpAddr::V6(a) => IpAddr::V6(Ipv6Addr::from(apply_mask(
            a.octets(),
            mask_from_prefix::<16>(prefix),
        ))),
    }
}

/// An IPv4 or IPv6 network block in canonical form.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct NetBlock {
    addr: IpAddr,
    prefix: u8,
}

impl NetBlock {
    /// Create a block, rejecting an over-long prefix or host bits in `addr`.
    ///
    /// # Examples
    /// ```
    /// use cidr_aggregate::models::NetBlock;
    /// use std::net::{IpAddr, Ipv4Addr};
    ///
    /// let addr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 0));
    /// assert!(NetBlock::new(addr, 24).is_ok());
    /// assert!(NetBlock::new(addr, 33).is_err());
    /// ```
    pub fn new(addr: IpAddr, prefix: u8) -> Result<NetBlock, CidrError> {
        let block = NetBlock::truncate(addr, prefix)?;
        if block.addr != addr {
            return Err(CidrError::HostBitsSet(format!("{addr}/{prefix}")));
        }
        Ok(block)
    }

    /// Create a block, clearing any host bits in `addr`.
    pub fn truncate(addr: IpAddr, prefix: u8) -> Result<NetBlock, CidrError> {
        let max = max_prefix_for(&addr);
        if prefix > max {
            return Err(CidrError::PrefixTooLong { len: prefix, max });
        }
        Ok(NetBlock {
            addr: masked(addr, prefix),
            prefix,
        })
    }

    /// Create a block from an explicit netmask such as `255.255.255.0`.
    pub fn from_mask(addr: IpAddr, mask: &[u8]) -> Result<NetBlock, CidrError> {
        let width = usize::from(max_prefix_for(&addr) / 8);
        if mask.len() != width {
            return Err(CidrError::MaskWidthMismatch {
                addr: width,
                mask: mask.len(),
            });
        }
        let prefix = prefix_from_mask(mask).ok_or_else(|| CidrError::InvalidMask(mask.to_vec()))?;
        NetBlock::new(addr, prefix)
    }

    /// Build a block without validation. Callers guarantee canonical input.
    pub(crate) fn from_parts(addr: IpAddr, prefix: u8) -> NetBlock {
        NetBlock { addr, prefix }
    }

    /// The base (network) address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Number of leading mask bits.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn is_ipv4(&self) -> bool {
        self.addr.is_ipv4()
    }

    /// 32 for IPv4, 128 for IPv6.
    pub fn max_prefix(&self) -> u8 {
        max_prefix_for(&self.addr)
    }

    /// Address bytes, most significant first.
    pub fn octets(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(a) => a.octets().to_vec(),
            IpAddr::V6(a) => a.octets().to_vec(),
        }
    }

    /// Netmask bytes, same width as [`NetBlock::octets`].
    pub fn mask(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(_) => mask_from_prefix::<4>(self.prefix).to_vec(),
            IpAddr::V6(_) => mask_from_prefix::<16>(self.prefix).to_vec(),
        }
    }

    /// Lowest address in the block.
    pub fn network(&self) -> IpAddr {
        self.addr
    }

    /// Highest address in the block.
    pub fn broadcast(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(a) => {
                let mask = u32::from(Ipv4Addr::from(mask_from_prefix::<4>(self.prefix)));
                IpAddr::V4(Ipv4Addr::from(u32::from(a) | !mask))
            }
            IpAddr::V6(a) => {
                let mask = u128::from(Ipv6Addr::from(mask_from_prefix::<16>(self.prefix)));
                IpAddr::V6(Ipv6Addr::from(u128::from(a) | !mask))
            }
        }
    }

    /// Whether `ip` lies inside this block. Always false across families.
    pub fn contains(&self, ip: IpAddr) -> bool {
        if ip.is_ipv4() != self.addr.is_ipv4() {
            return false;
        }
        masked(ip, self.prefix) == self.addr
    }

    /// The enclosing block one bit shorter, `None` at `/0`.
    pub fn supernet(&self) -> Option<NetBlock> {
        let prefix = self.prefix.checked_sub(1)?;
        Some(NetBlock {
            addr: masked(self.addr, prefix),
            prefix,
        })
    }
}

impl std::fmt::Display for NetBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl FromStr for NetBlock {
    type Err = CidrError;

    /// Parse `"192.0.2.0/24"` or `"2001:db8::/32"`. Host bits must be zero.
    fn from_str(addr_cidr: &str) -> Result<NetBlock, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(CidrError::InvalidFormat(addr_cidr.to_string()));
        }
        let addr: IpAddr = parts[0]
            .parse()
            .map_err(|_| CidrError::InvalidAddress(parts[0].to_string()))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| CidrError::InvalidPrefix(parts[1].to_string()))?;
        NetBlock::new(addr, prefix)
    }
}

impl Serialize for NetBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetBlock::from_str(&s).map_err(de::Error::custom)
    }
}
