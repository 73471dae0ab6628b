//! # Address Parsing
//!
//! Hexadecimal text to [`VirtualAddress`]. Accepted forms:
//!
//! - optional leading `+`
//! - optional `0x` / `0X` prefix (`0xffffffff80200000`, `ffffffff80200000`)
//! - single `_` separators between digits or right after the prefix
//!   (`0xffff_ffff_8020_0000`, `0x_1000`)
//! - leading and trailing whitespace
//!
//! A `-` sign, empty digit strings and values wider than 64 bits are rejected.

use crate::VirtualAddress;
use core::str::FromStr;

/// Reasons a string is not a 64-bit hexadecimal address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAddressError {
    #[error("no hexadecimal digits")]
    Empty,
    #[error("invalid character {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
    #[error("value does not fit into 64 bits")]
    Overflow,
}

/// Parse a hexadecimal linear address.
///
/// ```rust
/// # use kernel_page_indices::*;
/// assert_eq!(parse_address("0xffff_ffff_8020_0000").unwrap().as_u64(), 0xFFFF_FFFF_8020_0000);
/// assert_eq!(parse_address("abc").unwrap().as_u64(), 0xABC);
/// assert!(parse_address("xyz").is_err());
/// ```
///
/// # Errors
/// - [`ParseAddressError::Empty`] if no digits remain after trimming and
///   prefix removal.
/// - [`ParseAddressError::InvalidDigit`] for non-hex characters or misplaced
///   underscores; `index` is the byte position in `input`.
/// - [`ParseAddressError::Overflow`] if the value exceeds `u64::MAX`.
pub fn parse_address(input: &str) -> Result<VirtualAddress, ParseAddressError> {
    let trimmed = input.trim();
    let lead = input.len() - input.trim_start().len();

    let (unsigned, lead) = match trimmed.strip_prefix('+') {
        Some(rest) => (rest, lead + 1),
        None => (trimmed, lead),
    };

    let (digits, start, prefixed) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(rest) => (rest, lead + 2, true),
        None => (unsigned, lead, false),
    };

    if digits.is_empty() {
        return Err(ParseAddressError::Empty);
    }

    let mut value = 0_u64;
    let mut pending_underscore: Option<usize> = None;
    // A separator may follow the prefix or a digit, never another separator.
    let mut separator_allowed = prefixed;

    for (i, c) in digits.char_indices() {
        let index = start + i;
        if c == '_' {
            if !separator_allowed || pending_underscore.is_some() {
                return Err(ParseAddressError::InvalidDigit { index, found: c });
            }
            pending_underscore = Some(index);
            continue;
        }

        let Some(digit) = c.to_digit(16) else {
            return Err(ParseAddressError::InvalidDigit { index, found: c });
        };

        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(ParseAddressError::Overflow)?;
        separator_allowed = true;
        pending_underscore = None;
    }

    if let Some(index) = pending_underscore {
        return Err(ParseAddressError::InvalidDigit { index, found: '_' });
    }

    Ok(VirtualAddress::new(value))
}

impl FromStr for VirtualAddress {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_and_bare() {
        assert_eq!(parse_address("0x0").unwrap().as_u64(), 0);
        assert_eq!(parse_address("0XdeadBEEF").unwrap().as_u64(), 0xDEAD_BEEF);
        assert_eq!(parse_address("abc").unwrap().as_u64(), 0xABC);
        assert_eq!(
            parse_address("  0xffffffff80200000\n").unwrap().as_u64(),
            0xFFFF_FFFF_8020_0000
        );
    }

    #[test]
    fn underscores_between_digits() {
        assert_eq!(
            parse_address("ffff_8000_0000_0000").unwrap().as_u64(),
            0xFFFF_8000_0000_0000
        );
        assert_eq!(parse_address("0x_1").unwrap().as_u64(), 1);
        assert_eq!(
            parse_address("_1"),
            Err(ParseAddressError::InvalidDigit { index: 0, found: '_' })
        );
        assert_eq!(
            parse_address("0x__1"),
            Err(ParseAddressError::InvalidDigit { index: 3, found: '_' })
        );
        assert_eq!(
            parse_address("0x_"),
            Err(ParseAddressError::InvalidDigit { index: 2, found: '_' })
        );
        assert_eq!(
            parse_address("1__2"),
            Err(ParseAddressError::InvalidDigit { index: 2, found: '_' })
        );
        assert_eq!(
            parse_address("12_"),
            Err(ParseAddressError::InvalidDigit { index: 2, found: '_' })
        );
    }

    #[test]
    fn leading_plus_sign() {
        assert_eq!(parse_address("+abc").unwrap().as_u64(), 2748);
        assert_eq!(parse_address("+0x10").unwrap().as_u64(), 0x10);
        assert_eq!(parse_address(" +0x_ff ").unwrap().as_u64(), 0xFF);
        assert_eq!(parse_address("+"), Err(ParseAddressError::Empty));
        assert_eq!(
            parse_address("++1"),
            Err(ParseAddressError::InvalidDigit { index: 1, found: '+' })
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_address(""), Err(ParseAddressError::Empty));
        assert_eq!(parse_address("   "), Err(ParseAddressError::Empty));
        assert_eq!(parse_address("0x"), Err(ParseAddressError::Empty));
        assert_eq!(
            parse_address("xyz"),
            Err(ParseAddressError::InvalidDigit { index: 0, found: 'x' })
        );
        assert_eq!(
            parse_address(" 0x12g4"),
            Err(ParseAddressError::InvalidDigit { index: 5, found: 'g' })
        );
        assert_eq!(
            parse_address("-0x10"),
            Err(ParseAddressError::InvalidDigit { index: 0, found: '-' })
        );
    }

    #[test]
    fn width_limit() {
        assert_eq!(
            parse_address("0xffffffffffffffff").unwrap().as_u64(),
            u64::MAX
        );
        assert_eq!(
            parse_address("0x0000000000000000001").unwrap().as_u64(),
            1
        );
        assert_eq!(
            parse_address("0x10000000000000000"),
            Err(ParseAddressError::Overflow)
        );
    }

    #[test]
    fn from_str_delegates() {
        let va: VirtualAddress = "0x1000".parse().unwrap();
        assert_eq!(va.as_u64(), 0x1000);
        assert!("zz".parse::<VirtualAddress>().is_err());
    }
}
