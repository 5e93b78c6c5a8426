//! Textual codec: `[+|-]digit+` literals in radix 2 through 36.

use crate::error::{BigIntError, ParseErrorKind};
use crate::magnitude;
use crate::sign::Sign;
use crate::value::BigInt;
use std::fmt;
use std::str::FromStr;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest `k` with `radix^k <= u32::MAX`, and `radix^k` itself.
fn chunk_params(radix: u32) -> (usize, u32) {
    let mut len = 1;
    let mut base = radix;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        len += 1;
    }
    (len, base)
}

fn check_radix(radix: u32) -> Result<(), BigIntError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(BigIntError::InvalidArgument(format!(
            "radix must be in 2..=36, got {radix}"
        )))
    }
}

fn parse_magnitude(digits: &str, radix: u32) -> Result<Vec<u32>, ParseErrorKind> {
    if digits.is_empty() {
        return Err(ParseErrorKind::Empty);
    }
    let (chunk_len, _) = chunk_params(radix);
    let mut mag = Vec::with_capacity(digits.len() / chunk_len + 1);
    for chunk in digits.as_bytes().chunks(chunk_len) {
        let mut value = 0u32;
        for &b in chunk {
            let d = (b as char)
                .to_digit(radix)
                .ok_or(ParseErrorKind::InvalidDigit)?;
            value = value * radix + d;
        }
        magnitude::mul_small_add(&mut mag, radix.pow(chunk.len() as u32), value);
    }
    magnitude::normalize(&mut mag);
    Ok(mag)
}

/// Digits of a magnitude, most significant first, without sign or prefix.
fn magnitude_digits(mag: &[u32], radix: u32) -> String {
    if mag.is_empty() {
        return "0".to_string();
    }
    let (chunk_len, base) = chunk_params(radix);
    let mut chunks = Vec::new();
    let mut rest = mag.to_vec();
    while !rest.is_empty() {
        let (q, r) = magnitude::div_rem_small(&rest, base);
        chunks.push(r);
        rest = q;
    }

    // Collected least significant digit first.
    let mut reversed = Vec::with_capacity(chunks.len() * chunk_len);
    let last = chunks.len() - 1;
    for (i, &chunk) in chunks.iter().enumerate() {
        let mut c = chunk;
        let mut written = 0;
        while c != 0 || (i != last && written < chunk_len) {
            reversed.push(DIGITS[(c % radix) as usize]);
            c /= radix;
            written += 1;
        }
    }
    reversed.iter().rev().map(|&b| b as char).collect()
}

impl BigInt {
    /// Parse a signed decimal literal.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError, ParseErrorKind};
    ///
    /// assert_eq!(BigInt::parse("-0042").unwrap(), BigInt::from(-42));
    /// assert_eq!(BigInt::parse("+7").unwrap(), BigInt::from(7));
    /// assert_eq!(
    ///     BigInt::parse("abc"),
    ///     Err(BigIntError::Format(ParseErrorKind::InvalidDigit))
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<BigInt, BigIntError> {
        Self::parse_radix(s, 10)
    }

    /// Like [`BigInt::parse`], reporting failure as `None`.
    pub fn try_parse(s: &str) -> Option<BigInt> {
        Self::parse(s).ok()
    }

    /// Parse an input that may be absent; `None` is a `NullArgument` error.
    pub fn parse_opt(s: Option<&str>) -> Result<BigInt, BigIntError> {
        let s = s.ok_or(BigIntError::NullArgument("value"))?;
        Self::parse(s)
    }

    /// Parse `[+|-]digit+` where digits are `0-9a-zA-Z` below `radix`.
    pub fn parse_radix(s: &str, radix: u32) -> Result<BigInt, BigIntError> {
        check_radix(radix)?;
        let (sign, digits) = if let Some(rest) = s.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, s)
        };
        let mag = parse_magnitude(digits, radix)?;
        Ok(BigInt::from_parts(sign, mag))
    }

    /// Lowercase digits in `radix`, with a leading `-` for negative values.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, BigIntError> {
        check_radix(radix)?;
        let digits = magnitude_digits(&self.mag, radix);
        Ok(if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        })
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &magnitude_digits(&self.mag, 10))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &magnitude_digits(&self.mag, 16))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = magnitude_digits(&self.mag, 16).to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &magnitude_digits(&self.mag, 2))
    }
}
