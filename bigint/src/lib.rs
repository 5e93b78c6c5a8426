//! Arbitrary-precision signed integers.
//!
//! Values are stored as a sign plus a canonical little-endian magnitude of
//! 32-bit limbs. Bitwise operators behave as if the value were an
//! infinitely sign-extended two's-complement integer.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "-170141183460469231731687303715884105728".parse().unwrap();
//! let b = BigInt::from(3u8);
//! assert_eq!((&a * &b).to_string(), "-510423550381407695195061911147652317184");
//! assert_eq!(!BigInt::from(0), BigInt::from(-1));
//! ```

pub mod arith;
pub mod bitwise;
pub mod convert;
pub mod error;
pub(crate) mod magnitude;
mod ops;
mod serde_impl;
pub mod sign;
pub mod text;
mod value;

pub use arith::{greatest_common_divisor, max, min};
pub use error::{BigIntError, ParseErrorKind};
pub use sign::Sign;
pub use value::BigInt;
