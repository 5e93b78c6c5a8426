use serde::{Deserialize, Serialize};
use std::ops::{Mul, Neg};

/// Sign of a BigInt. The declaration order gives `Negative < Zero < Positive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl Sign {
    /// -1, 0 or 1.
    #[inline]
    pub fn signum(self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        assert!(Sign::Negative < Sign::Zero);
        assert!(Sign::Zero < Sign::Positive);
        assert_eq!(Sign::default(), Sign::Zero);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(-Sign::Negative, Sign::Positive);
        assert_eq!(-Sign::Zero, Sign::Zero);
    }

    #[test]
    fn test_mul_table() {
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Positive * Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Zero * Sign::Negative, Sign::Zero);
        assert_eq!(Sign::Positive * Sign::Zero, Sign::Zero);
    }

    #[test]
    fn test_serde_unit_variants() {
        assert_eq!(serde_json::to_string(&Sign::Negative).unwrap(), "\"Negative\"");
        for sign in [Sign::Negative, Sign::Zero, Sign::Positive] {
            let json = serde_json::to_string(&sign).unwrap();
            assert_eq!(serde_json::from_str::<Sign>(&json).unwrap(), sign);
        }
        assert!(serde_json::from_str::<Sign>("\"Unknown\"").is_err());
    }
}
