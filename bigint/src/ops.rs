//! Operator traits. Every operator returns a fresh value; compound
//! assignment rebinds the left-hand side.
//!
//! `/` and `%` panic on a zero divisor like the primitive integers do;
//! [`BigInt::checked_div`] and [`BigInt::checked_rem`] report it as an error.

use crate::arith;
use crate::bitwise;
use crate::value::BigInt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

fn div(x: &BigInt, y: &BigInt) -> BigInt {
    match x.checked_div(y) {
        Ok(q) => q,
        Err(e) => panic!("attempt to divide by zero: {e}"),
    }
}

fn rem(x: &BigInt, y: &BigInt) -> BigInt {
    match x.checked_rem(y) {
        Ok(r) => r,
        Err(e) => panic!("attempt to calculate the remainder with a divisor of zero: {e}"),
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $func:path) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &BigInt) -> BigInt {
                $func(self, other)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $func(self, &other)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &BigInt) -> BigInt {
                $func(&self, other)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $func(&self, &other)
            }
        }
    };
}

macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident, $func:path) => {
        impl $imp<&BigInt> for BigInt {
            #[inline]
            fn $method(&mut self, other: &BigInt) {
                *self = $func(self, other);
            }
        }

        impl $imp<BigInt> for BigInt {
            #[inline]
            fn $method(&mut self, other: BigInt) {
                *self = $func(self, &other);
            }
        }
    };
}

forward_binop!(impl Add, add, arith::add);
forward_binop!(impl Sub, sub, arith::sub);
forward_binop!(impl Mul, mul, arith::mul);
forward_binop!(impl Div, div, div);
forward_binop!(impl Rem, rem, rem);
forward_binop!(impl BitAnd, bitand, bitwise::and);
forward_binop!(impl BitOr, bitor, bitwise::or);
forward_binop!(impl BitXor, bitxor, bitwise::xor);

forward_assign_op!(impl AddAssign, add_assign, arith::add);
forward_assign_op!(impl SubAssign, sub_assign, arith::sub);
forward_assign_op!(impl MulAssign, mul_assign, arith::mul);
forward_assign_op!(impl DivAssign, div_assign, div);
forward_assign_op!(impl RemAssign, rem_assign, rem);
forward_assign_op!(impl BitAndAssign, bitand_assign, bitwise::and);
forward_assign_op!(impl BitOrAssign, bitor_assign, bitwise::or);
forward_assign_op!(impl BitXorAssign, bitxor_assign, bitwise::xor);

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        arith::neg(&self)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        arith::neg(self)
    }
}

impl Not for BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        bitwise::not(&self)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        bitwise::not(self)
    }
}

// Signed counts shift the other way when negative.
macro_rules! impl_shift_signed {
    ($($t:ty),*) => {$(
        impl Shl<$t> for &BigInt {
            type Output = BigInt;

            fn shl(self, bits: $t) -> BigInt {
                bitwise::shl_signed(self, bits as i64)
            }
        }

        impl Shl<$t> for BigInt {
            type Output = BigInt;

            fn shl(self, bits: $t) -> BigInt {
                bitwise::shl_signed(&self, bits as i64)
            }
        }

        impl Shr<$t> for &BigInt {
            type Output = BigInt;

            fn shr(self, bits: $t) -> BigInt {
                bitwise::shr_signed(self, bits as i64)
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            fn shr(self, bits: $t) -> BigInt {
                bitwise::shr_signed(&self, bits as i64)
            }
        }

        impl ShlAssign<$t> for BigInt {
            fn shl_assign(&mut self, bits: $t) {
                *self = bitwise::shl_signed(self, bits as i64);
            }
        }

        impl ShrAssign<$t> for BigInt {
            fn shr_assign(&mut self, bits: $t) {
                *self = bitwise::shr_signed(self, bits as i64);
            }
        }
    )*};
}

macro_rules! impl_shift_unsigned {
    ($($t:ty),*) => {$(
        impl Shl<$t> for &BigInt {
            type Output = BigInt;

            fn shl(self, bits: $t) -> BigInt {
                bitwise::shl(self, bits as u64)
            }
        }

        impl Shl<$t> for BigInt {
            type Output = BigInt;

            fn shl(self, bits: $t) -> BigInt {
                bitwise::shl(&self, bits as u64)
            }
        }

        impl Shr<$t> for &BigInt {
            type Output = BigInt;

            fn shr(self, bits: $t) -> BigInt {
                bitwise::shr(self, bits as u64)
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            fn shr(self, bits: $t) -> BigInt {
                bitwise::shr(&self, bits as u64)
            }
        }

        impl ShlAssign<$t> for BigInt {
            fn shl_assign(&mut self, bits: $t) {
                *self = bitwise::shl(self, bits as u64);
            }
        }

        impl ShrAssign<$t> for BigInt {
            fn shr_assign(&mut self, bits: $t) {
                *self = bitwise::shr(self, bits as u64);
            }
        }
    )*};
}

impl_shift_signed!(i32, i64, isize);
impl_shift_unsigned!(u32, u64, usize);
