//! Conversions to and from primitive numbers and two's-complement bytes.

use crate::bitwise;
use crate::error::BigIntError;
use crate::magnitude::{self, LIMB_BITS};
use crate::sign::Sign;
use crate::value::BigInt;

// ============================================================================
// Primitive integers
// ============================================================================

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                BigInt::from_parts(Sign::Positive, magnitude::from_u128(value as u128))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                BigInt::from_parts(sign, magnitude::from_u128(value.unsigned_abs() as u128))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_try_into_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                let overflow = BigIntError::Overflow { target: stringify!($t) };
                if value.is_negative() {
                    return Err(overflow);
                }
                let m = magnitude::to_u128(&value.mag).ok_or(overflow.clone())?;
                <$t>::try_from(m).map_err(|_| overflow)
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        }
    )*};
}

macro_rules! impl_try_into_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                let overflow = BigIntError::Overflow { target: stringify!($t) };
                let m = magnitude::to_u128(&value.mag).ok_or(overflow.clone())?;
                if value.is_negative() {
                    // |MIN| is one past MAX.
                    if m > <$t>::MAX as u128 + 1 {
                        return Err(overflow);
                    }
                    Ok((m as $t).wrapping_neg())
                } else {
                    <$t>::try_from(m).map_err(|_| overflow)
                }
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = BigIntError;

            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        }
    )*};
}

impl_try_into_unsigned!(u8, u16, u32, u64, u128, usize);
impl_try_into_signed!(i8, i16, i32, i64, i128, isize);

// ============================================================================
// Floating point
// ============================================================================

impl BigInt {
    /// Nearest `f64`; values beyond `f64::MAX` become infinite.
    pub fn to_f64(&self) -> f64 {
        let mag = &self.mag;
        let value = if mag.len() <= 3 {
            magnitude::to_u128(mag).unwrap_or(0) as f64
        } else if mag.len() > 40 {
            // More than 1280 bits: beyond any finite f64.
            f64::INFINITY
        } else {
            // Top 96 bits plus a sticky bit for the discarded limbs round
            // exactly like the full value would.
            let low = mag.len() - 3;
            let mut top = magnitude::to_u128(&mag[low..]).unwrap_or(0);
            if mag[..low].iter().any(|&l| l != 0) {
                top |= 1;
            }
            top as f64 * 2f64.powi((low as u32 * LIMB_BITS) as i32)
        };
        if self.is_negative() {
            -value
        } else {
            value
        }
    }
}

impl TryFrom<&BigInt> for f64 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let f = value.to_f64();
        if f.is_finite() {
            Ok(f)
        } else {
            Err(BigIntError::Overflow { target: "f64" })
        }
    }
}

impl TryFrom<BigInt> for f64 {
    type Error = BigIntError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        f64::try_from(&value)
    }
}

/// Truncates toward zero. NaN and infinities are rejected.
impl TryFrom<f64> for BigInt {
    type Error = BigIntError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(BigIntError::Overflow { target: "BigInt" });
        }
        let truncated = value.trunc();
        if truncated == 0.0 {
            return Ok(BigInt::zero());
        }
        let bits = truncated.abs().to_bits();
        // |truncated| >= 1, so the value is normal and the implicit bit is set.
        let exponent = ((bits >> 52) & 0x7ff) as i64 - 1075;
        let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        let mag = if exponent >= 0 {
            magnitude::shl(&magnitude::from_u128(mantissa as u128), exponent as usize)
        } else {
            magnitude::from_u128((mantissa >> (-exponent)) as u128)
        };
        let sign = if value < 0.0 { Sign::Negative } else { Sign::Positive };
        Ok(BigInt::from_parts(sign, mag))
    }
}

// ============================================================================
// Two's-complement bytes
// ============================================================================

impl BigInt {
    /// Decode little-endian two's complement. An empty slice is zero.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_signed_bytes_le(&[0x80, 0x00]), BigInt::from(128));
    /// assert_eq!(BigInt::from_signed_bytes_le(&[0x80]), BigInt::from(-128));
    /// assert_eq!(BigInt::from_signed_bytes_le(&[]), BigInt::zero());
    /// ```
    pub fn from_signed_bytes_le(bytes: &[u8]) -> BigInt {
        let Some(&top) = bytes.last() else {
            return BigInt::zero();
        };
        let fill = if top & 0x80 != 0 { 0xff } else { 0x00 };
        let limbs = bytes
            .chunks(4)
            .map(|chunk| {
                let mut word = [fill; 4];
                word[..chunk.len()].copy_from_slice(chunk);
                u32::from_le_bytes(word)
            })
            .collect();
        bitwise::from_twos_complement(limbs)
    }

    pub fn from_signed_bytes_be(bytes: &[u8]) -> BigInt {
        let le: Vec<u8> = bytes.iter().rev().copied().collect();
        Self::from_signed_bytes_le(&le)
    }

    /// Minimal little-endian two's-complement encoding.
    ///
    /// A zero high byte is kept whenever the next byte down has its top bit
    /// set, so 128 encodes as `[0x80, 0x00]`. Zero encodes as `[0x00]`.
    pub fn to_signed_bytes_le(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let limbs = bitwise::to_twos_complement(self, self.mag.len() + 1);
        let mut bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
        let fill = if self.is_negative() { 0xff } else { 0x00 };
        while bytes.len() > 1 {
            let n = bytes.len();
            let redundant = bytes[n - 1] == fill && (bytes[n - 2] & 0x80) == (fill & 0x80);
            if !redundant {
                break;
            }
            bytes.pop();
        }
        bytes
    }

    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self.to_signed_bytes_le();
        bytes.reverse();
        bytes
    }
}
