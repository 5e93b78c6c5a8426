//! Sign-agnostic arithmetic on little-endian limb sequences.
//!
//! Every function takes canonical input (no most-significant zero limb, zero
//! is the empty slice) and returns canonical output.

use crate::error::BigIntError;
use std::cmp::Ordering;

/// Bits per limb.
pub(crate) const LIMB_BITS: u32 = 32;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: u32, b: u32, carry: u32) -> (u32, u32) {
    let tmp = a as u64 + b as u64 + carry as u64;
    (tmp as u32, (tmp >> 32) as u32)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let tmp = (a as u64).wrapping_sub(b as u64).wrapping_sub(borrow as u64);
    (tmp as u32, (tmp >> 63) as u32)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
const fn mac(a: u32, b: u32, c: u32, carry: u32) -> (u32, u32) {
    let tmp = a as u64 * b as u64 + c as u64 + carry as u64;
    (tmp as u32, (tmp >> 32) as u32)
}

/// Strip most-significant zero limbs.
#[inline]
pub(crate) fn normalize(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

pub(crate) fn from_u128(mut value: u128) -> Vec<u32> {
    let mut limbs = Vec::with_capacity(4);
    while value != 0 {
        limbs.push(value as u32);
        value >>= LIMB_BITS;
    }
    limbs
}

/// The magnitude as a `u128`, or `None` when it needs more than four limbs.
pub(crate) fn to_u128(a: &[u32]) -> Option<u128> {
    if a.len() > 4 {
        return None;
    }
    Some(
        a.iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | limb as u128),
    )
}

// ============================================================================
// Comparison and inspection
// ============================================================================

/// Length first, then limbs from the most significant end.
pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Number of significant bits.
pub(crate) fn bit_len(a: &[u32]) -> u64 {
    match a.last() {
        None => 0,
        Some(&top) => {
            (a.len() as u64 - 1) * LIMB_BITS as u64 + (LIMB_BITS - top.leading_zeros()) as u64
        }
    }
}

pub(crate) fn is_power_of_two(a: &[u32]) -> bool {
    match a.split_last() {
        None => false,
        Some((top, rest)) => top.is_power_of_two() && rest.iter().all(|&l| l == 0),
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &limb) in long.iter().enumerate() {
        let (r, c) = adc(limb, short.get(i).copied().unwrap_or(0), carry);
        result.push(r);
        carry = c;
    }
    result.push(carry);
    normalize(&mut result);
    result
}

/// `a - b`. The caller guarantees `a >= b`.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");
    let mut result = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &limb) in a.iter().enumerate() {
        let (r, out) = sbb(limb, b.get(i).copied().unwrap_or(0), borrow);
        result.push(r);
        borrow = out;
    }
    debug_assert_eq!(borrow, 0);
    normalize(&mut result);
    result
}

/// Schoolbook multiplication.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut wide = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = mac(x, y, wide[i + j], carry);
            wide[i + j] = lo;
            carry = hi;
        }
        wide[i + b.len()] = carry;
    }
    normalize(&mut wide);
    wide
}

/// `limbs = limbs * factor + addend`, in place on a scratch buffer.
pub(crate) fn mul_small_add(limbs: &mut Vec<u32>, factor: u32, addend: u32) {
    let mut carry = addend;
    for limb in limbs.iter_mut() {
        let (lo, hi) = mac(*limb, factor, 0, carry);
        *limb = lo;
        carry = hi;
    }
    if carry != 0 {
        limbs.push(carry);
    }
}

/// Divide by a single nonzero limb.
pub(crate) fn div_rem_small(a: &[u32], divisor: u32) -> (Vec<u32>, u32) {
    debug_assert!(divisor != 0);
    let d = divisor as u64;
    let mut quotient = vec![0u32; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = (rem << LIMB_BITS) | a[i] as u64;
        quotient[i] = (cur / d) as u32;
        rem = cur % d;
    }
    normalize(&mut quotient);
    (quotient, rem as u32)
}

/// Quotient and remainder with `a = q*b + r`, `r < b`.
pub(crate) fn div_rem(a: &[u32], b: &[u32]) -> Result<(Vec<u32>, Vec<u32>), BigIntError> {
    if b.is_empty() {
        return Err(BigIntError::DivisionByZero);
    }
    Ok(div_rem_nonzero(a, b))
}

/// `div_rem` for a divisor already known to be nonzero.
pub(crate) fn div_rem_nonzero(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    match cmp(a, b) {
        Ordering::Less => return (Vec::new(), a.to_vec()),
        Ordering::Equal => return (vec![1], Vec::new()),
        Ordering::Greater => {}
    }
    if b.len() == 1 {
        let (q, r) = div_rem_small(a, b[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }
    long_div(a, b)
}

/// Knuth, TAOCP vol. 2, 4.3.1, Algorithm D. Requires `b.len() >= 2` and `a > b`.
fn long_div(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    const BASE: u64 = 1 << LIMB_BITS;

    // D1: normalize so the divisor's top bit is set.
    let shift = b[b.len() - 1].leading_zeros();
    let mut v = shl_bits_padded(b, shift);
    let spill = v.pop();
    debug_assert_eq!(spill, Some(0));
    let mut u = shl_bits_padded(a, shift);

    let n = v.len();
    let m = a.len() - n;
    let v_top = v[n - 1] as u64;
    let v_next = v[n - 2] as u64;
    let mut q = vec![0u32; m + 1];

    for j in (0..=m).rev() {
        // D3: estimate the quotient digit from the top two limbs.
        let num = ((u[j + n] as u64) << LIMB_BITS) | u[j + n - 1] as u64;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat >= BASE || qhat * v_next > ((rhat << LIMB_BITS) | u[j + n - 2] as u64) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= BASE {
                break;
            }
        }

        // D4: multiply and subtract.
        let mut carry = 0;
        let mut borrow = 0;
        for i in 0..n {
            let (lo, hi) = mac(qhat as u32, v[i], 0, carry);
            carry = hi;
            let (r, out) = sbb(u[i + j], lo, borrow);
            u[i + j] = r;
            borrow = out;
        }
        let (r, underflow) = sbb(u[j + n], carry, borrow);
        u[j + n] = r;

        // D6: the estimate was one too large, add the divisor back.
        if underflow != 0 {
            qhat -= 1;
            let mut c = 0;
            for i in 0..n {
                let (r, c2) = adc(u[i + j], v[i], c);
                u[i + j] = r;
                c = c2;
            }
            u[j + n] = u[j + n].wrapping_add(c);
        }
        q[j] = qhat as u32;
    }

    // D8: unnormalize the remainder.
    u.truncate(n);
    normalize(&mut u);
    let r = shr(&u, shift as usize);
    normalize(&mut q);
    (q, r)
}

// ============================================================================
// Shifts
// ============================================================================

/// `a << shift` for `shift < 32`, always one limb longer than `a`.
fn shl_bits_padded(a: &[u32], shift: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 1);
    if shift == 0 {
        out.extend_from_slice(a);
        out.push(0);
        return out;
    }
    let mut carry = 0;
    for &limb in a {
        out.push((limb << shift) | carry);
        carry = limb >> (LIMB_BITS - shift);
    }
    out.push(carry);
    out
}

pub(crate) fn shl(a: &[u32], bits: usize) -> Vec<u32> {
    if a.is_empty() {
        return Vec::new();
    }
    let limb_shift = bits / LIMB_BITS as usize;
    let bit_shift = (bits % LIMB_BITS as usize) as u32;
    let mut out = vec![0u32; limb_shift];
    out.extend(shl_bits_padded(a, bit_shift));
    normalize(&mut out);
    out
}

pub(crate) fn shr(a: &[u32], bits: usize) -> Vec<u32> {
    let limb_shift = bits / LIMB_BITS as usize;
    if limb_shift >= a.len() {
        return Vec::new();
    }
    let bit_shift = (bits % LIMB_BITS as usize) as u32;
    let src = &a[limb_shift..];
    let mut out: Vec<u32> = if bit_shift == 0 {
        src.to_vec()
    } else {
        src.iter()
            .enumerate()
            .map(|(i, &limb)| {
                let high = src
                    .get(i + 1)
                    .map_or(0, |&next| next << (LIMB_BITS - bit_shift));
                (limb >> bit_shift) | high
            })
            .collect()
    };
    normalize(&mut out);
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mag(v: u128) -> Vec<u32> {
        from_u128(v)
    }

    #[test]
    fn test_from_to_u128() {
        assert!(mag(0).is_empty());
        assert_eq!(mag(1), vec![1]);
        assert_eq!(mag(1 << 32), vec![0, 1]);
        assert_eq!(to_u128(&mag(u128::MAX)), Some(u128::MAX));
        assert_eq!(to_u128(&[0, 0, 0, 0, 1]), None);
    }

    #[test]
    fn test_cmp() {
        assert_eq!(cmp(&[], &[]), Ordering::Equal);
        assert_eq!(cmp(&[5], &[]), Ordering::Greater);
        assert_eq!(cmp(&[0, 1], &[u32::MAX]), Ordering::Greater);
        assert_eq!(cmp(&[1, 2], &[2, 2]), Ordering::Less);
    }

    #[test]
    fn test_add_carry() {
        assert_eq!(add(&[u32::MAX], &[1]), vec![0, 1]);
        assert_eq!(add(&[], &[7]), vec![7]);
        assert_eq!(add(&[u32::MAX, u32::MAX], &[1]), vec![0, 0, 1]);
    }

    #[test]
    fn test_sub_borrow() {
        assert_eq!(sub(&[0, 1], &[1]), vec![u32::MAX]);
        assert!(sub(&[42], &[42]).is_empty());
        assert_eq!(sub(&mag(1 << 64), &[1]), vec![u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_mul() {
        assert!(mul(&[], &[3]).is_empty());
        assert_eq!(mul(&[6], &[7]), vec![42]);
        let m = u64::MAX as u128;
        assert_eq!(mul(&mag(m), &mag(m)), mag(m * m));
    }

    #[test]
    fn test_mul_small_add() {
        let mut limbs = Vec::new();
        mul_small_add(&mut limbs, 10, 0);
        assert!(limbs.is_empty());
        mul_small_add(&mut limbs, 10, 7);
        assert_eq!(limbs, vec![7]);
        let mut limbs = vec![u32::MAX];
        mul_small_add(&mut limbs, 16, 15);
        assert_eq!(limbs, mag(u32::MAX as u128 * 16 + 15));
    }

    #[test]
    fn test_div_rem_small() {
        let (q, r) = div_rem_small(&mag(1_000_000_000_007), 10);
        assert_eq!(q, mag(100_000_000_000));
        assert_eq!(r, 7);
    }

    #[test]
    fn test_div_rem_zero_divisor() {
        assert_eq!(div_rem(&[1], &[]), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_div_rem_trivial_cases() {
        assert_eq!(div_rem(&[3], &[5]).unwrap(), (vec![], vec![3]));
        assert_eq!(div_rem(&[5], &[5]).unwrap(), (vec![1], vec![]));
        assert_eq!(div_rem(&[], &[5]).unwrap(), (vec![], vec![]));
    }

    #[test]
    fn test_long_div_matches_u128() {
        let cases: [(u128, u128); 6] = [
            (u128::MAX, u64::MAX as u128 + 2),
            (u128::MAX, 0x1_0000_0001),
            (0x8000_0000_0000_0000_0000_0000_0000_0000, 0x8000_0000_0000_0001),
            (0xffff_fffe_0000_0001_ffff_ffff, 0xffff_ffff_ffff_ffff),
            (123_456_789_012_345_678_901_234_567_890, 9_876_543_210_123),
            (0x7fff_ffff_8000_0000_0000_0000_0000_0000, 0x8000_0000_ffff_ffff),
        ];
        for (a, b) in cases {
            let (q, r) = div_rem(&mag(a), &mag(b)).unwrap();
            assert_eq!(q, mag(a / b), "{a} / {b}");
            assert_eq!(r, mag(a % b), "{a} % {b}");
        }
    }

    #[test]
    fn test_long_div_identity_wide() {
        // (2^160 - 1) / (2^96 + 3), checked via q*b + r == a.
        let a: Vec<u32> = vec![u32::MAX; 5];
        let b: Vec<u32> = vec![3, 0, 0, 1];
        let (q, r) = div_rem(&a, &b).unwrap();
        assert_eq!(cmp(&r, &b), Ordering::Less);
        assert_eq!(add(&mul(&q, &b), &r), a);
    }

    #[test]
    fn test_shifts() {
        assert_eq!(shl(&[1], 0), vec![1]);
        assert_eq!(shl(&[1], 32), vec![0, 1]);
        assert_eq!(shl(&[0x8000_0000], 1), vec![0, 1]);
        assert!(shl(&[], 100).is_empty());
        assert_eq!(shr(&[0, 1], 32), vec![1]);
        assert_eq!(shr(&[0, 1], 1), vec![0x8000_0000]);
        assert!(shr(&[u32::MAX], 32).is_empty());
        assert!(shr(&[1, 1], 200).is_empty());
    }

    #[test]
    fn test_bit_len_and_power_of_two() {
        assert_eq!(bit_len(&[]), 0);
        assert_eq!(bit_len(&[1]), 1);
        assert_eq!(bit_len(&[0, 0x80]), 40);
        assert!(is_power_of_two(&[0, 0, 4]));
        assert!(!is_power_of_two(&[1, 4]));
        assert!(!is_power_of_two(&[]));
    }
}
