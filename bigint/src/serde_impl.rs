//! BigInt serializes as its decimal string so no format truncates it.
//! Deserialization also accepts native integers.

use crate::value::BigInt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a decimal integer string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::parse(value).map_err(|err| E::custom(format_args!("{err}: {value:?}")))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
