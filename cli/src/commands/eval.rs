use anyhow::{bail, Context, Result};
use bigint::{max, min, BigInt};
use std::cmp::Ordering;

const UNARY_OPS: &[&str] = &["neg", "abs", "~", "not", "inc", "dec"];

/// Evaluate one whitespace-separated expression and render the result.
///
/// Accepted forms: `VALUE`, `UNARY VALUE`, `VALUE BINARY VALUE`, and
/// `powmod BASE EXP MOD`. A missing operand is reported as a null argument.
pub fn evaluate(line: &str, radix: u32) -> Result<String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let value = evaluate_tokens(&tokens)?;
    Ok(value.to_str_radix(radix)?)
}

pub fn evaluate_tokens(tokens: &[&str]) -> Result<BigInt> {
    let Some(&head) = tokens.first() else {
        bail!("empty expression");
    };

    if UNARY_OPS.contains(&head) {
        expect_at_most(tokens, 2)?;
        let x = operand(tokens, 1)?;
        return Ok(apply_unary(head, &x));
    }

    if head == "powmod" {
        expect_at_most(tokens, 4)?;
        let base = operand(tokens, 1)?;
        let exponent = operand(tokens, 2)?;
        let modulus = operand(tokens, 3)?;
        return Ok(base.mod_pow(&exponent, &modulus)?);
    }

    let a = operand(tokens, 0)?;
    let Some(&op) = tokens.get(1) else {
        return Ok(a);
    };
    expect_at_most(tokens, 3)?;
    let b = operand(tokens, 2)?;
    apply_binary(op, &a, &b)
}

fn expect_at_most(tokens: &[&str], n: usize) -> Result<()> {
    if tokens.len() > n {
        bail!("unexpected token `{}`", tokens[n]);
    }
    Ok(())
}

fn operand(tokens: &[&str], index: usize) -> Result<BigInt> {
    let token = tokens.get(index).copied();
    BigInt::parse_opt(token).with_context(|| format!("operand {}", index + 1))
}

fn apply_unary(op: &str, x: &BigInt) -> BigInt {
    match op {
        "neg" => -x,
        "abs" => x.abs(),
        "inc" => x.increment(),
        "dec" => x.decrement(),
        _ => !x,
    }
}

fn apply_binary(op: &str, a: &BigInt, b: &BigInt) -> Result<BigInt> {
    let value = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => a.checked_div(b)?,
        "%" => a.checked_rem(b)?,
        "**" | "pow" => {
            let exponent = i32::try_from(b).context("exponent")?;
            a.checked_pow(exponent)?
        }
        "gcd" => a.gcd(b),
        "min" => min(a, b).clone(),
        "max" => max(a, b).clone(),
        "&" => a & b,
        "|" => a | b,
        "^" => a ^ b,
        "<<" => a.checked_shl(i64::try_from(b).context("shift count")?)?,
        ">>" => a.checked_shr(i64::try_from(b).context("shift count")?)?,
        "cmp" => BigInt::from(match a.cmp(b) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }),
        _ => bail!("unknown operator `{op}`"),
    };
    Ok(value)
}

pub fn eval_command(expr: &[String], radix: u32) -> Result<()> {
    let line = expr.join(" ");
    println!("{}", evaluate(&line, radix)?);
    Ok(())
}
