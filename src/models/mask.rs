//! Byte-level netmask helpers.
//!
//! Masks are fixed-width byte arrays, 4 bytes for IPv4 and 16 for IPv6,
//! holding a contiguous run of 1-bits from the most significant bit.

/// Return the canonical mask one bit shorter than `mask`.
///
/// Scans from the last byte towards the first, skips zero bytes and clears
/// the lowest set bit of the first non-zero byte found. On a canonical mask
/// that bit is the prefix boundary, so `/24` becomes `/23`. An all-zero
/// (`/0`) mask is returned unchanged.
///
/// # Examples
/// ```
/// use cidr_aggregate::models::one_bit_shorter_mask;
/// assert_eq!(
///     one_bit_shorter_mask([0xff, 0xff, 0xff, 0x00]),
///     [0xff, 0xff, 0xfe, 0x00]
/// );
/// assert_eq!(one_bit_shorter_mask([0u8; 4]), [0u8; 4]);
/// ```
pub fn one_bit_shorter_mask<const N: usize>(mask: [u8; N]) -> [u8; N] {
    let mut shorter = mask;
    if let Some(byte) = shorter.iter_mut().rev().find(|b| **b != 0) {
        *byte &= *byte - 1;
    }
    shorter
}

/// Build the canonical `N`-byte mask for a prefix length.
///
/// Lengths beyond `8 * N` saturate to an all-ones mask.
pub fn mask_from_prefix<const N: usize>(len: u8) -> [u8; N] {
    let mut mask = [0u8; N];
    let mut remaining = usize::from(len).min(N * 8);
    for byte in mask.iter_mut() {
        let bits = remaining.min(8);
        if bits > 0 {
            *byte = 0xff << (8 - bits);
        }
        remaining -= bits;
    }
    mask
}

/// Count the leading ones of a mask.
///
/// Returns `None` when the mask is not a contiguous run of ones followed
/// by zeros.
pub fn prefix_from_mask(mask: &[u8]) -> Option<u8> {
    let mut len: u32 = 0;
    let mut boundary_seen = false;
    for &byte in mask {
        if boundary_seen {
            if byte != 0 {
                return None;
            }
            continue;
        }
        let ones = byte.leading_ones();
        // bits after the leading ones must all be zero
        if (u32::from(byte) << ones) & 0xff != 0 {
            return None;
        }
        len += ones;
        if ones < 8 {
            boundary_seen = true;
        }
    }
    u8::try_from(len).ok()
}

/// AND every address byte with the matching mask byte.
pub fn apply_mask<const N: usize>(addr: [u8; N], mask: [u8; N]) -> [u8; N] {
    let mut masked = addr;
    for (byte, m) in masked.iter_mut().zip(mask) {
        *byte &= m;
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_bit_shorter_mask_ipv4() {
        let cases: [([u8; 4], [u8; 4]); 8] = [
            ([0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x00, 0x00]),
            ([0x80, 0x00, 0x00, 0x00], [0x00, 0x00, 0x00, 0x00]),
            ([0xc0, 0x00, 0x00, 0x00], [0x80, 0x00, 0x00, 0x00]),
            ([0xe0, 0x00, 0x00, 0x00], [0xc0, 0x00, 0x00, 0x00]),
            ([0xf0, 0x00, 0x00, 0x00], [0xe0, 0x00, 0x00, 0x00]),
            ([0xff, 0xf0, 0x00, 0x00], [0xff, 0xe0, 0x00, 0x00]),
            ([0xff, 0x00, 0x00, 0x00], [0xfe, 0x00, 0x00, 0x00]),
            ([0xff, 0xff, 0xff, 0xff], [0xff, 0xff, 0xff, 0xfe]),
        ];
        for (i, (mask, expected)) in cases.iter().enumerate() {
            assert_eq!(one_bit_shorter_mask(*mask), *expected, "case {i}");
        }
    }

    #[test]
    fn test_one_bit_shorter_mask_byte_boundary() {
        // /24 -> /23
        let shorter = one_bit_shorter_mask(mask_from_prefix::<4>(24));
        assert_eq!(shorter, [0xff, 0xff, 0xfe, 0x00]);
        assert_eq!(prefix_from_mask(&shorter), Some(23));
    }

    #[test]
    fn test_one_bit_shorter_mask_ipv6() {
        let shorter = one_bit_shorter_mask(mask_from_prefix::<16>(64));
        assert_eq!(shorter, mask_from_prefix::<16>(63));
        assert_eq!(one_bit_shorter_mask([0u8; 16]), [0u8; 16]);
        assert_eq!(
            one_bit_shorter_mask([0xff; 16]),
            mask_from_prefix::<16>(127)
        );
    }

    #[test]
    fn test_one_bit_shorter_mask_every_length() {
        for len in 1..=32u8 {
            assert_eq!(
                one_bit_shorter_mask(mask_from_prefix::<4>(len)),
                mask_from_prefix::<4>(len - 1),
                "ipv4 /{len}"
            );
        }
        for len in 1..=128u8 {
            assert_eq!(
                one_bit_shorter_mask(mask_from_prefix::<16>(len)),
                mask_from_prefix::<16>(len - 1),
                "ipv6 /{len}"
            );
        }
    }

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(mask_from_prefix::<4>(0), [0, 0, 0, 0]);
        assert_eq!(mask_from_prefix::<4>(8), [0xff, 0, 0, 0]);
        assert_eq!(mask_from_prefix::<4>(20), [0xff, 0xff, 0xf0, 0]);
        assert_eq!(mask_from_prefix::<4>(32), [0xff; 4]);
        assert_eq!(mask_from_prefix::<4>(40), [0xff; 4]);
    }

    #[test]
    fn test_prefix_from_mask() {
        assert_eq!(prefix_from_mask(&[0, 0, 0, 0]), Some(0));
        assert_eq!(prefix_from_mask(&[0xff, 0xff, 0xff, 0x00]), Some(24));
        assert_eq!(prefix_from_mask(&[0xff, 0xff, 0xff, 0xc0]), Some(26));
        assert_eq!(prefix_from_mask(&[0xff; 16]), Some(128));
        assert_eq!(prefix_from_mask(&[0xff, 0x00, 0xff, 0x00]), None);
        assert_eq!(prefix_from_mask(&[0xfe, 0x80, 0x00, 0x00]), None);
        assert_eq!(prefix_from_mask(&[0xa0, 0x00, 0x00, 0x00]), None);
        for len in 0..=128u8 {
            assert_eq!(prefix_from_mask(&mask_from_prefix::<16>(len)), Some(len));
        }
    }

    #[test]
    fn test_apply_mask() {
        assert_eq!(
            apply_mask([192, 0, 2, 77], mask_from_prefix::<4>(25)),
            [192, 0, 2, 0]
        );
        assert_eq!(
            apply_mask([192, 0, 2, 200], mask_from_prefix::<4>(25)),
            [192, 0, 2, 128]
        );
    }
}
