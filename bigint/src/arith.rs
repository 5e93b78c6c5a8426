//! Signed arithmetic: magnitude primitives combined with sign rules.

use crate::error::BigIntError;
use crate::magnitude;
use crate::sign::Sign;
use crate::value::BigInt;
use std::cmp::Ordering;

pub(crate) fn add(x: &BigInt, y: &BigInt) -> BigInt {
    add_signed(x, y, y.sign)
}

pub(crate) fn sub(x: &BigInt, y: &BigInt) -> BigInt {
    add_signed(x, y, -y.sign)
}

/// `x + y`, with `y` taken to carry `y_sign`.
fn add_signed(x: &BigInt, y: &BigInt, y_sign: Sign) -> BigInt {
    match (x.sign, y_sign) {
        (_, Sign::Zero) => x.clone(),
        (Sign::Zero, s) => BigInt::from_parts(s, y.mag.clone()),
        (a, b) if a == b => BigInt::from_parts(a, magnitude::add(&x.mag, &y.mag)),
        (a, b) => match magnitude::cmp(&x.mag, &y.mag) {
            Ordering::Greater => BigInt::from_parts(a, magnitude::sub(&x.mag, &y.mag)),
            Ordering::Less => BigInt::from_parts(b, magnitude::sub(&y.mag, &x.mag)),
            Ordering::Equal => BigInt::zero(),
        },
    }
}

pub(crate) fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    BigInt::from_parts(x.sign * y.sign, magnitude::mul(&x.mag, &y.mag))
}

pub(crate) fn neg(x: &BigInt) -> BigInt {
    BigInt {
        sign: -x.sign,
        mag: x.mag.clone(),
    }
}

impl BigInt {
    /// Additive inverse. Zero stays zero.
    pub fn negate(&self) -> BigInt {
        neg(self)
    }

    pub fn abs(&self) -> BigInt {
        match self.sign {
            Sign::Negative => neg(self),
            _ => self.clone(),
        }
    }

    /// `self + 1`.
    pub fn increment(&self) -> BigInt {
        add(self, &BigInt::one())
    }

    /// `self - 1`.
    pub fn decrement(&self) -> BigInt {
        sub(self, &BigInt::one())
    }

    /// Truncating division and remainder.
    ///
    /// The quotient rounds toward zero; the remainder takes the sign of
    /// `self` (or is zero), so `q * divisor + r == self`.
    ///
    /// ```
    /// use bigint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-17).div_rem(&BigInt::from(5)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-2)));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        let (q, r) = magnitude::div_rem(&self.mag, &divisor.mag)?;
        Ok((
            BigInt::from_parts(self.sign * divisor.sign, q),
            BigInt::from_parts(self.sign, r),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Raise to a non-negative power by repeated squaring.
    ///
    /// `x.pow(0)` is 1 for every `x`, zero included.
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// assert_eq!(BigInt::from(2).pow(10).unwrap(), BigInt::from(1024));
    /// assert_eq!(BigInt::from(-3).pow(3).unwrap(), BigInt::from(-27));
    /// assert!(matches!(BigInt::from(2).pow(-1), Err(BigIntError::InvalidArgument(_))));
    /// ```
    pub fn pow(&self, exponent: i32) -> Result<BigInt, BigIntError> {
        if exponent < 0 {
            return Err(BigIntError::InvalidArgument(format!(
                "exponent must be non-negative, got {exponent}"
            )));
        }
        let mut exp = exponent as u32;
        let mut result = BigInt::one();
        if exp == 0 {
            return Ok(result);
        }
        let mut base = self.clone();
        loop {
            if exp & 1 == 1 {
                result = mul(&result, &base);
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = mul(&base, &base);
        }
        Ok(result)
    }

    /// Like [`BigInt::pow`], but fails instead of computing a result that may
    /// be wider than [`BigInt::MAX_CHECKED_BITS`].
    ///
    /// ```
    /// use bigint::{BigInt, BigIntError};
    ///
    /// assert_eq!(BigInt::from(2).checked_pow(100).unwrap(), BigInt::one() << 100);
    /// assert!(matches!(
    ///     BigInt::from(3).checked_pow(i32::MAX),
    ///     Err(BigIntError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn checked_pow(&self, exponent: i32) -> Result<BigInt, BigIntError> {
        let grows = self.mag.len() > 1 || self.mag.first().map_or(false, |&limb| limb > 1);
        if exponent > 0 && grows {
            let bits = magnitude::bit_len(&self.mag);
            let exp = exponent.unsigned_abs() as u64;
            // A power of two has exactly (bits - 1) * exp + 1 bits.
            let width = if magnitude::is_power_of_two(&self.mag) {
                (bits - 1).saturating_mul(exp).saturating_add(1)
            } else {
                bits.saturating_mul(exp)
            };
            if width > BigInt::MAX_CHECKED_BITS {
                return Err(BigIntError::InvalidArgument(format!(
                    "power with exponent {exponent} would exceed {} bits",
                    BigInt::MAX_CHECKED_BITS
                )));
            }
        }
        self.pow(exponent)
    }

    /// `self^exponent mod modulus`, with the sign a truncating remainder of
    /// `self^exponent` would have.
    pub fn mod_pow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, BigIntError> {
        if exponent.is_negative() {
            return Err(BigIntError::InvalidArgument(
                "exponent must be non-negative".into(),
            ));
        }
        if modulus.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let m = &modulus.mag;
        let mut result = magnitude::div_rem_nonzero(&[1], m).1;
        let mut base = magnitude::div_rem_nonzero(&self.mag, m).1;
        let bits = magnitude::bit_len(&exponent.mag);
        for i in 0..bits {
            let limb = exponent.mag[(i / 32) as usize];
            if (limb >> (i % 32)) & 1 == 1 {
                result = magnitude::div_rem_nonzero(&magnitude::mul(&result, &base), m).1;
            }
            if i + 1 < bits {
                base = magnitude::div_rem_nonzero(&magnitude::mul(&base, &base), m).1;
            }
        }
        let sign = if self.is_negative() && !exponent.is_even() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(BigInt::from_parts(sign, result))
    }

    /// Greatest common divisor of the absolute values; never negative.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.mag.clone();
        let mut b = other.mag.clone();
        while !b.is_empty() {
            let (_, r) = magnitude::div_rem_nonzero(&a, &b);
            a = b;
            b = r;
        }
        BigInt::from_parts(Sign::Positive, a)
    }
}

/// `gcd(0, n) == |n|` and `gcd(0, 0) == 0`.
pub fn greatest_common_divisor(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

pub fn min<'a>(a: &'a BigInt, b: &'a BigInt) -> &'a BigInt {
    if b < a {
        b
    } else {
        a
    }
}

pub fn max<'a>(a: &'a BigInt, b: &'a BigInt) -> &'a BigInt {
    if b > a {
        b
    } else {
        a
    }
}
