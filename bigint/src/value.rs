//! The `BigInt` value type: a sign plus a canonical magnitude.

use crate::magnitude;
use crate::sign::Sign;
use std::cmp::Ordering;

/// Arbitrary-precision signed integer.
///
/// Limbs are stored in little-endian order (`mag[0]` is least significant)
/// with no most-significant zero limb, so structural equality and hashing
/// agree with numeric equality.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) mag: Vec<u32>,
}

impl BigInt {
    /// Widest result, in bits, that [`BigInt::checked_shl`] and
    /// [`BigInt::checked_pow`] will produce.
    pub const MAX_CHECKED_BITS: u64 = 1 << 24;

    /// Build from a sign and an arbitrary limb vector.
    ///
    /// The magnitude is canonicalized; an all-zero magnitude yields zero
    /// regardless of `sign`, and a `Sign::Zero` with a nonzero magnitude is
    /// read as positive.
    ///
    /// ```
    /// use bigint::{BigInt, Sign};
    ///
    /// let b = BigInt::from_sign_magnitude(Sign::Negative, vec![0, 1, 0]);
    /// assert_eq!(b.to_string(), "-4294967296");
    /// assert_eq!(BigInt::from_sign_magnitude(Sign::Negative, vec![0]), BigInt::zero());
    /// ```
    pub fn from_sign_magnitude(sign: Sign, mut mag: Vec<u32>) -> Self {
        magnitude::normalize(&mut mag);
        let sign = match sign {
            Sign::Zero => Sign::Positive,
            s => s,
        };
        Self::from_parts(sign, mag)
    }

    /// Internal constructor: `mag` must already be canonical.
    #[inline]
    pub(crate) fn from_parts(sign: Sign, mag: Vec<u32>) -> Self {
        debug_assert!(mag.last() != Some(&0), "non-canonical magnitude");
        if mag.is_empty() {
            Self::zero()
        } else {
            debug_assert!(sign != Sign::Zero);
            Self { sign, mag }
        }
    }

    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            mag: Vec::new(),
        }
    }

    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            mag: vec![1],
        }
    }

    pub fn minus_one() -> Self {
        Self {
            sign: Sign::Negative,
            mag: vec![1],
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// -1, 0 or 1.
    #[inline]
    pub fn signum(&self) -> i32 {
        self.sign.signum()
    }

    /// Little-endian limbs of the absolute value; empty for zero.
    #[inline]
    pub fn magnitude(&self) -> &[u32] {
        &self.mag
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.mag == [1]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    pub fn is_even(&self) -> bool {
        self.mag.first().map_or(true, |&low| low & 1 == 0)
    }

    /// True for positive powers of two (1, 2, 4, ...).
    pub fn is_power_of_two(&self) -> bool {
        self.sign == Sign::Positive && magnitude::is_power_of_two(&self.mag)
    }

    /// Bits needed to hold the value in two's complement, sign bit excluded.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(0).bit_length(), 0);
    /// assert_eq!(BigInt::from(255).bit_length(), 8);
    /// assert_eq!(BigInt::from(-128).bit_length(), 7);
    /// assert_eq!(BigInt::from(-129).bit_length(), 8);
    /// ```
    pub fn bit_length(&self) -> u64 {
        match self.sign {
            Sign::Zero => 0,
            Sign::Positive => magnitude::bit_len(&self.mag),
            // -m needs as many bits as m - 1.
            Sign::Negative => magnitude::bit_len(&magnitude::sub(&self.mag, &[1])),
        }
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => magnitude::cmp(&self.mag, &other.mag),
            Sign::Negative => magnitude::cmp(&other.mag, &self.mag),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
