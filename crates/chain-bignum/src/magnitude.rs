//! Unsigned magnitude arithmetic on little-endian `u32` limb slices.
//!
//! Every function here operates on canonical magnitudes: no trailing zero
//! limbs, the empty slice is zero. Callers in `bigint` attach the sign.

use std::cmp::Ordering;

/// Strip trailing zero limbs, restoring the canonical form.
pub(crate) fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Number of significant bits in a magnitude (zero has zero bits).
pub(crate) fn bits(limbs: &[u32]) -> usize {
    match limbs.last() {
        Some(&top) => limbs.len() * 32 - top.leading_zeros() as usize,
        None => 0,
    }
}

pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for i in 0..long.len() {
        let sum = long[i] as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
        out.push(sum as u32);
        carry = sum >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    out
}

/// Requires `a >= b`.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for i in 0..a.len() {
        let diff = a[i] as i64 - b.get(i).copied().unwrap_or(0) as i64 - borrow;
        if diff < 0 {
            out.push((diff + (1i64 << 32)) as u32);
            borrow = 1;
        } else {
            out.push(diff as u32);
            borrow = 0;
        }
    }
    trim(&mut out);
    out
}

pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let t = out[i + j] as u64 + ai as u64 * bj as u64 + carry;
            out[i + j] = t as u32;
            carry = t >> 32;
        }
        out[i + b.len()] = carry as u32;
    }
    trim(&mut out);
    out
}

pub(crate) fn shl(a: &[u32], n: usize) -> Vec<u32> {
    if a.is_empty() {
        return Vec::new();
    }
    let limb_shift = n / 32;
    let bit_shift = n % 32;
    let mut out = vec![0u32; limb_shift];
    if bit_shift == 0 {
        out.extend_from_slice(a);
        return out;
    }
    let mut carry = 0u32;
    for &limb in a {
        out.push((limb << bit_shift) | carry);
        carry = limb >> (32 - bit_shift);
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

pub(crate) fn shr(a: &[u32], n: usize) -> Vec<u32> {
    let limb_shift = n / 32;
    if limb_shift >= a.len() {
        return Vec::new();
    }
    let bit_shift = n % 32;
    let mut out = Vec::with_capacity(a.len() - limb_shift);
    if bit_shift == 0 {
        out.extend_from_slice(&a[limb_shift..]);
    } else {
        for i in limb_shift..a.len() {
            let low = a[i] >> bit_shift;
            let high = if i + 1 < a.len() {
                a[i + 1] << (32 - bit_shift)
            } else {
                0
            };
            out.push(low | high);
        }
    }
    trim(&mut out);
    out
}

/// Schoolbook long division, Knuth Algorithm D in base 2^32.
///
/// Requires a non-empty divisor. Returns `(quotient, remainder)`.
pub(crate) fn div_rem(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!v.is_empty());
    if cmp(u, v) == Ordering::Less {
        return (Vec::new(), u.to_vec());
    }
    if v.len() == 1 {
        return div_rem_single(u, v[0]);
    }

    let n = v.len();
    let m = u.len();
    let s = v[n - 1].leading_zeros() as usize;

    // Normalize so the top divisor limb has its high bit set.
    let mut vn = vec![0u32; n];
    for i in (1..n).rev() {
        vn[i] = if s == 0 {
            v[i]
        } else {
            (v[i] << s) | (v[i - 1] >> (32 - s))
        };
    }
    vn[0] = v[0] << s;

    let mut un = vec![0u32; m + 1];
    un[m] = if s == 0 { 0 } else { u[m - 1] >> (32 - s) };
    for i in (1..m).rev() {
        un[i] = if s == 0 {
            u[i]
        } else {
            (u[i] << s) | (u[i - 1] >> (32 - s))
        };
    }
    un[0] = u[0] << s;

    let mut quo = vec![0u32; m - n + 1];
    for j in (0..=(m - n)).rev() {
        // Estimate the quotient digit from the top two dividend limbs.
        let num = ((un[j + n] as u64) << 32) | un[j + n - 1] as u64;
        let mut qhat = num / vn[n - 1] as u64;
        let mut rhat = num % vn[n - 1] as u64;
        loop {
            if qhat >= 1u64 << 32
                || qhat * vn[n - 2] as u64 > (rhat << 32) + un[j + n - 2] as u64
            {
                qhat -= 1;
                rhat += vn[n - 1] as u64;
                if rhat < 1u64 << 32 {
                    continue;
                }
            }
            break;
        }

        // Multiply-and-subtract qhat * vn from the dividend window.
        let mut mul_carry = 0u64;
        let mut borrow = 0i64;
        for i in 0..n {
            let p = qhat * vn[i] as u64 + mul_carry;
            mul_carry = p >> 32;
            let t = un[i + j] as i64 - borrow - (p & 0xFFFF_FFFF) as i64;
            un[i + j] = t as u32;
            borrow = i64::from(t < 0);
        }
        let t = un[j + n] as i64 - borrow - mul_carry as i64;
        un[j + n] = t as u32;

        // qhat was one too large: add the divisor back.
        if t < 0 {
            qhat -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> 32;
            }
            un[j + n] = (un[j + n] as u64 + carry) as u32;
        }
        quo[j] = qhat as u32;
    }

    // Denormalize the remainder.
    let mut rem = vec![0u32; n];
    for i in 0..n - 1 {
        rem[i] = if s == 0 {
            un[i]
        } else {
            (un[i] >> s) | (un[i + 1] << (32 - s))
        };
    }
    rem[n - 1] = un[n - 1] >> s;

    trim(&mut quo);
    trim(&mut rem);
    (quo, rem)
}

fn div_rem_single(u: &[u32], v: u32) -> (Vec<u32>, Vec<u32>) {
    let d = v as u64;
    let mut quo = vec![0u32; u.len()];
    let mut rem = 0u64;
    for i in (0..u.len()).rev() {
        let cur = (rem << 32) | u[i] as u64;
        quo[i] = (cur / d) as u32;
        rem = cur % d;
    }
    trim(&mut quo);
    let rem = if rem == 0 { Vec::new() } else { vec![rem as u32] };
    (quo, rem)
}
