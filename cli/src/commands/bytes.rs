use anyhow::{bail, Context, Result};
use bigint::BigInt;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Hex rendering of the minimal two's-complement encoding of `value`.
pub fn encode(value: &str, order: Endian) -> Result<String> {
    let x = BigInt::parse(value).with_context(|| format!("invalid value `{value}`"))?;
    let bytes = match order {
        Endian::Little => x.to_signed_bytes_le(),
        Endian::Big => x.to_signed_bytes_be(),
    };
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    Ok(out)
}

pub fn decode(hex: &str, order: Endian) -> Result<BigInt> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.len() % 2 != 0 {
        bail!("hex input must have an even number of digits");
    }
    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| {
            let pair = digits.get(i..i + 2).context("non-ASCII hex input")?;
            u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex byte `{pair}`"))
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(match order {
        Endian::Little => BigInt::from_signed_bytes_le(&bytes),
        Endian::Big => BigInt::from_signed_bytes_be(&bytes),
    })
}

pub fn bytes_command(value: &str, order: Endian) -> Result<()> {
    println!("{}", encode(value, order)?);
    Ok(())
}

pub fn from_bytes_command(hex: &str, order: Endian) -> Result<()> {
    println!("{}", decode(hex, order)?);
    Ok(())
}
