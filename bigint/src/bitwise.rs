//! Two's-complement view of a sign-magnitude value.
//!
//! Bitwise operators act on the conceptually infinite two's-complement bit
//! stream of each operand: non-negative values are zero-extended, negative
//! values `-m` are represented as `!(m - 1)` and one-extended. The stream is
//! materialized only for the duration of a single operation.

use crate::arith;
use crate::error::BigIntError;
use crate::magnitude::{self, adc, LIMB_BITS};
use crate::sign::Sign;
use crate::value::BigInt;

/// The low `len` limbs of `x`'s two's-complement stream.
///
/// `len` must exceed `x.mag.len()` so the top limb is pure sign extension.
pub(crate) fn to_twos_complement(x: &BigInt, len: usize) -> Vec<u32> {
    debug_assert!(len > x.mag.len());
    let mut limbs = x.mag.clone();
    limbs.resize(len, 0);
    if x.sign == Sign::Negative {
        negate_in_place(&mut limbs);
    }
    limbs
}

/// Read a finite two's-complement limb sequence whose top bit is the sign.
pub(crate) fn from_twos_complement(mut limbs: Vec<u32>) -> BigInt {
    let negative = limbs.last().map_or(false, |&top| top >> (LIMB_BITS - 1) == 1);
    if negative {
        negate_in_place(&mut limbs);
        magnitude::normalize(&mut limbs);
        BigInt::from_parts(Sign::Negative, limbs)
    } else {
        magnitude::normalize(&mut limbs);
        BigInt::from_parts(Sign::Positive, limbs)
    }
}

/// `!limbs + 1` modulo the buffer width.
fn negate_in_place(limbs: &mut [u32]) {
    let mut carry = 1;
    for limb in limbs.iter_mut() {
        let (r, c) = adc(!*limb, 0, carry);
        *limb = r;
        carry = c;
    }
}

fn combine(x: &BigInt, y: &BigInt, op: impl Fn(u32, u32) -> u32) -> BigInt {
    let len = x.mag.len().max(y.mag.len()) + 1;
    let a = to_twos_complement(x, len);
    let b = to_twos_complement(y, len);
    let limbs = a.iter().zip(b.iter()).map(|(&l, &r)| op(l, r)).collect();
    from_twos_complement(limbs)
}

pub(crate) fn and(x: &BigInt, y: &BigInt) -> BigInt {
    if x.is_zero() || y.is_zero() {
        return BigInt::zero();
    }
    combine(x, y, |a, b| a & b)
}

pub(crate) fn or(x: &BigInt, y: &BigInt) -> BigInt {
    combine(x, y, |a, b| a | b)
}

pub(crate) fn xor(x: &BigInt, y: &BigInt) -> BigInt {
    combine(x, y, |a, b| a ^ b)
}

/// `!x == -(x + 1)`.
pub(crate) fn not(x: &BigInt) -> BigInt {
    arith::neg(&x.increment())
}

/// Multiply by `2^bits`, keeping the sign.
///
/// Panics if the result cannot be addressed; [`BigInt::checked_shl`]
/// reports that case as an error instead.
pub(crate) fn shl(x: &BigInt, bits: u64) -> BigInt {
    if bits == 0 || x.is_zero() {
        return x.clone();
    }
    let Ok(bits) = usize::try_from(bits) else {
        panic!("shift count {bits} exceeds the address space");
    };
    BigInt::from_parts(x.sign, magnitude::shl(&x.mag, bits))
}

/// Arithmetic right shift: floor division by `2^bits`.
pub(crate) fn shr(x: &BigInt, bits: u64) -> BigInt {
    if bits == 0 {
        return x.clone();
    }
    // Counts past usize::MAX already shift out every limb.
    let bits = usize::try_from(bits).unwrap_or(usize::MAX);
    match x.sign {
        Sign::Zero => BigInt::zero(),
        Sign::Positive => BigInt::from_parts(Sign::Positive, magnitude::shr(&x.mag, bits)),
        // -m >> k == -((m - 1) >> k) - 1
        Sign::Negative => {
            let m = magnitude::sub(&x.mag, &[1]);
            let shifted = magnitude::shr(&m, bits);
            BigInt::from_parts(Sign::Negative, magnitude::add(&shifted, &[1]))
        }
    }
}

/// Shift left by a signed count; negative counts shift right.
pub(crate) fn shl_signed(x: &BigInt, bits: i64) -> BigInt {
    if bits >= 0 {
        shl(x, bits.unsigned_abs())
    } else {
        shr(x, bits.unsigned_abs())
    }
}

/// Shift right by a signed count; negative counts shift left.
pub(crate) fn shr_signed(x: &BigInt, bits: i64) -> BigInt {
    if bits >= 0 {
        shr(x, bits.unsigned_abs())
    } else {
        shl(x, bits.unsigned_abs())
    }
}

/// Reject a left shift whose result would exceed [`BigInt::MAX_CHECKED_BITS`].
fn check_growth(x: &BigInt, bits: u64) -> Result<(), BigIntError> {
    if x.is_zero() {
        return Ok(());
    }
    let width = magnitude::bit_len(&x.mag).saturating_add(bits);
    if width > BigInt::MAX_CHECKED_BITS {
        return Err(BigIntError::InvalidArgument(format!(
            "shift by {bits} bits would exceed {} bits",
            BigInt::MAX_CHECKED_BITS
        )));
    }
    Ok(())
}

impl BigInt {
    /// Like `self << bits`, but fails instead of allocating a result wider
    /// than [`BigInt::MAX_CHECKED_BITS`]. Negative counts shift right.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// assert_eq!(BigInt::from(3).checked_shl(4).unwrap(), BigInt::from(48));
    /// assert!(matches!(
    ///     BigInt::one().checked_shl(i64::MAX),
    ///     Err(BigIntError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn checked_shl(&self, bits: i64) -> Result<BigInt, BigIntError> {
        if bits > 0 {
            check_growth(self, bits.unsigned_abs())?;
        }
        Ok(shl_signed(self, bits))
    }

    /// Like `self >> bits`; negative counts shift left and are bounded the
    /// same way as [`BigInt::checked_shl`].
    pub fn checked_shr(&self, bits: i64) -> Result<BigInt, BigIntError> {
        if bits < 0 {
            check_growth(self, bits.unsigned_abs())?;
        }
        Ok(shr_signed(self, bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_twos_complement_view() {
        assert_eq!(to_twos_complement(&big(5), 2), vec![5, 0]);
        assert_eq!(to_twos_complement(&big(-1), 2), vec![u32::MAX, u32::MAX]);
        assert_eq!(to_twos_complement(&big(-256), 2), vec![0xffff_ff00, u32::MAX]);
        assert_eq!(to_twos_complement(&BigInt::zero(), 1), vec![0]);
    }

    #[test]
    fn test_from_twos_complement() {
        assert_eq!(from_twos_complement(vec![u32::MAX, u32::MAX]), big(-1));
        assert_eq!(from_twos_complement(vec![0x8000_0000]), big(i32::MIN as i64));
        assert_eq!(from_twos_complement(vec![0x8000_0000, 0]), big(0x8000_0000));
        assert_eq!(from_twos_complement(vec![0, 0]), BigInt::zero());
    }

    #[test]
    fn test_and_or_xor_match_i64() {
        let values = [0i64, 1, -1, 7, -7, 0xff, -0x100, i32::MIN as i64, 1 << 40, -(1 << 40) - 3];
        for &a in &values {
            for &b in &values {
                assert_eq!(and(&big(a), &big(b)), big(a & b), "{a} & {b}");
                assert_eq!(or(&big(a), &big(b)), big(a | b), "{a} | {b}");
                assert_eq!(xor(&big(a), &big(b)), big(a ^ b), "{a} ^ {b}");
            }
        }
    }

    #[test]
    fn test_not() {
        assert_eq!(not(&BigInt::zero()), big(-1));
        assert_eq!(not(&big(-1)), BigInt::zero());
        assert_eq!(not(&big(41)), big(-42));
    }

    #[test]
    fn test_shr_floors_negative_values() {
        assert_eq!(shr(&big(-1), 1), big(-1));
        assert_eq!(shr(&big(-4), 1), big(-2));
        assert_eq!(shr(&big(-5), 1), big(-3));
        assert_eq!(shr(&big(-5), 100), big(-1));
        assert_eq!(shr(&big(5), 100), BigInt::zero());
    }

    #[test]
    fn test_signed_shift_counts() {
        assert_eq!(shl_signed(&big(3), 4), big(48));
        assert_eq!(shl_signed(&big(48), -4), big(3));
        assert_eq!(shr_signed(&big(-3), -2), big(-12));
        assert_eq!(shr_signed(&big(-12), 2), big(-3));
    }

    #[test]
    fn test_shift_counts_beyond_usize() {
        assert_eq!(shr(&big(12345), u64::MAX), BigInt::zero());
        assert_eq!(shr(&big(-12345), u64::MAX), big(-1));
        assert_eq!(shr_signed(&big(-7), i64::MAX), big(-1));
        assert_eq!(shl(&BigInt::zero(), u64::MAX), BigInt::zero());
        assert_eq!(shl_signed(&big(9), i64::MIN), BigInt::zero());
    }

    #[test]
    fn test_checked_shifts_bound_growth() {
        assert_eq!(big(1).checked_shl(70).unwrap(), BigInt::from(1u128 << 70));
        assert_eq!(big(-9).checked_shr(1).unwrap(), big(-5));
        assert_eq!(big(5).checked_shr(-1).unwrap(), big(10));
        assert_eq!(big(5).checked_shl(-1).unwrap(), big(2));
        assert!(BigInt::zero().checked_shl(i64::MAX).unwrap().is_zero());
        assert_eq!(big(-5).checked_shr(i64::MAX).unwrap(), big(-1));

        let limit = BigInt::MAX_CHECKED_BITS as i64;
        assert!(big(1).checked_shl(limit - 1).is_ok());
        assert!(matches!(
            big(1).checked_shl(limit),
            Err(BigIntError::InvalidArgument(_))
        ));
        assert!(matches!(
            big(-1).checked_shr(-(1 << 62)),
            Err(BigIntError::InvalidArgument(_))
        ));
    }
}
