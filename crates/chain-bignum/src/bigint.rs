//! Immutable sign-magnitude arbitrary-precision integers.
//!
//! `BigInt` is a pure value type: every operation returns a new value, so
//! instances can be shared freely across concurrent signature verifications.
//! Canonical zero has sign `0` and an empty magnitude, which keeps equality
//! and comparison free of `-0` ambiguity.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::errors::BignumError;
use crate::magnitude;

/// Arbitrary-precision signed integer with sign-magnitude representation.
///
/// Invariants:
/// - `sign` is `-1`, `0`, or `1`;
/// - `sign == 0` exactly when `limbs` is empty;
/// - `limbs` is little-endian base-2^32 with no trailing zero limbs.
#[derive(Clone, PartialEq, Eq)]
pub struct BigInt {
    sign: i8,
    limbs: Vec<u32>,
}

impl BigInt {
    /// The canonical zero.
    pub fn zero() -> Self {
        BigInt { sign: 0, limbs: Vec::new() }
    }

    /// The integer one.
    pub fn one() -> Self {
        BigInt::from(1u64)
    }

    fn from_mag(sign: i8, mut limbs: Vec<u32>) -> Self {
        magnitude::trim(&mut limbs);
        if limbs.is_empty() {
            BigInt::zero()
        } else {
            BigInt { sign, limbs }
        }
    }

    /// Parses a big-endian byte sequence.
    ///
    /// With `signed == false` the bytes are a non-negative magnitude
    /// regardless of the high bit. With `signed == true` the bytes are
    /// interpreted as two's complement: a set high bit in the first byte
    /// makes the value negative. Empty input yields zero.
    pub fn from_bytes_be(bytes: &[u8], signed: bool) -> Self {
        if bytes.is_empty() {
            return BigInt::zero();
        }
        if signed && bytes[0] & 0x80 != 0 {
            // value = -(!bytes + 1)
            let inverted: Vec<u8> = bytes.iter().map(|b| !b).collect();
            let mag = magnitude::add(&limbs_from_be(&inverted), &[1]);
            return BigInt::from_mag(-1, mag);
        }
        BigInt::from_mag(1, limbs_from_be(bytes))
    }

    /// Encodes a non-negative value as exactly `len` big-endian bytes.
    ///
    /// Fails with `ValueOutOfRange` if the value is negative or does not
    /// fit in `len` bytes. This is the unsigned fixed-width form used for
    /// private scalars and signature components.
    pub fn to_bytes_be(&self, len: usize) -> Result<Vec<u8>, BignumError> {
        if self.sign < 0 {
            return Err(BignumError::ValueOutOfRange(len));
        }
        let mut bytes = Vec::with_capacity(self.limbs.len() * 4);
        for &limb in &self.limbs {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        if bytes.len() > len {
            return Err(BignumError::ValueOutOfRange(len));
        }
        bytes.resize(len, 0);
        bytes.reverse();
        Ok(bytes)
    }

    /// Parses an unsigned hex string, with optional `0x` prefix and
    /// optional leading `-`. Empty input yields zero.
    pub fn from_hex(s: &str) -> Result<Self, BignumError> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1i8, rest),
            None => (1i8, s),
        };
        let digits = digits.strip_prefix("0x").unwrap_or(digits);
        let mut nibbles = Vec::with_capacity(digits.len());
        for c in digits.chars() {
            let nibble = c.to_digit(16).ok_or(BignumError::InvalidHexDigit(c))?;
            nibbles.push(nibble as u8);
        }
        // Fold nibbles into bytes, most significant first.
        if nibbles.len() % 2 != 0 {
            nibbles.insert(0, 0);
        }
        let bytes: Vec<u8> = nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect();
        Ok(BigInt::from_mag(sign, limbs_from_be(&bytes)))
    }

    /// Sign of the value: `-1`, `0`, or `1`.
    pub fn signum(&self) -> i8 {
        self.sign
    }

    /// True for the canonical zero.
    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    /// Number of significant bits in the magnitude (zero has bit length 0).
    pub fn bit_length(&self) -> usize {
        magnitude::bits(&self.limbs)
    }

    /// Bit `i` of the magnitude, least-significant bit first.
    ///
    /// Scalar-multiplication loops scan these bits from
    /// `bit_length() - 1` down to zero.
    pub fn test_bit(&self, i: usize) -> bool {
        let limb = i / 32;
        limb < self.limbs.len() && (self.limbs[limb] >> (i % 32)) & 1 == 1
    }

    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt { sign: self.sign.abs(), limbs: self.limbs.clone() }
    }

    /// Truncated division: quotient rounds toward zero, remainder keeps the
    /// sign of the dividend. Fails with `DivisionByZero` on a zero divisor.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BignumError> {
        if rhs.sign == 0 {
            return Err(BignumError::DivisionByZero);
        }
        if self.sign == 0 {
            return Ok((BigInt::zero(), BigInt::zero()));
        }
        let (quo, rem) = magnitude::div_rem(&self.limbs, &rhs.limbs);
        Ok((
            BigInt::from_mag(self.sign * rhs.sign, quo),
            BigInt::from_mag(self.sign, rem),
        ))
    }

    /// Euclidean remainder: the representative of `self` in `[0, |n|)`.
    ///
    /// This is the reduction elliptic-curve arithmetic needs; a truncated
    /// remainder would hand negative residues to the field formulas.
    pub fn modulo(&self, n: &BigInt) -> Result<BigInt, BignumError> {
        if n.sign == 0 {
            return Err(BignumError::DivisionByZero);
        }
        let (_, rem) = self.div_rem(n)?;
        if rem.sign < 0 {
            Ok(&rem + &n.abs())
        } else {
            Ok(rem)
        }
    }

    /// Modular inverse via the extended Euclidean algorithm.
    ///
    /// Returns `x` in `[0, n)` with `self * x = 1 (mod n)`. Fails with
    /// `NotInvertible` when `gcd(self, n) != 1` and `NonPositiveModulus`
    /// when `n < 1`.
    pub fn mod_inverse(&self, n: &BigInt) -> Result<BigInt, BignumError> {
        if n.sign <= 0 {
            return Err(BignumError::NonPositiveModulus);
        }
        let mut r = n.clone();
        let mut new_r = self.modulo(n)?;
        let mut t = BigInt::zero();
        let mut new_t = BigInt::one();
        while !new_r.is_zero() {
            let (q, rem) = r.div_rem(&new_r)?;
            let next_t = &t - &(&q * &new_t);
            t = std::mem::replace(&mut new_t, next_t);
            r = std::mem::replace(&mut new_r, rem);
        }
        if r != BigInt::one() {
            return Err(BignumError::NotInvertible);
        }
        if t.sign < 0 {
            t = &t + n;
        }
        Ok(t)
    }

    /// Draws a uniformly random non-negative integer with exactly
    /// `bit_length` bits (top bit set) from a cryptographically secure
    /// source. Callers rejection-sample the result into their target range.
    pub fn random<R: RngCore + CryptoRng>(bit_length: usize, rng: &mut R) -> BigInt {
        if bit_length == 0 {
            return BigInt::zero();
        }
        let nbytes = bit_length.div_ceil(8);
        let mut buf = vec![0u8; nbytes];
        rng.fill_bytes(&mut buf);
        let excess = nbytes * 8 - bit_length;
        buf[0] &= 0xFF >> excess;
        buf[0] |= 0x80 >> excess;
        let value = BigInt::from_bytes_be(&buf, false);
        buf.zeroize();
        value
    }
}

fn limbs_from_be(bytes: &[u8]) -> Vec<u32> {
    let mut limbs: Vec<u32> = bytes
        .rchunks(4)
        .map(|chunk| chunk.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32))
        .collect();
    magnitude::trim(&mut limbs);
    limbs
}

impl From<u64> for BigInt {
    fn from(v: u64) -> Self {
        BigInt::from_mag(1, vec![v as u32, (v >> 32) as u32])
    }
}

impl From<u32> for BigInt {
    fn from(v: u32) -> Self {
        BigInt::from_mag(1, vec![v])
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        let mag = v.unsigned_abs();
        BigInt::from_mag(if v < 0 { -1 } else { 1 }, vec![mag as u32, (mag >> 32) as u32])
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.sign {
            1 => magnitude::cmp(&self.limbs, &other.limbs),
            -1 => magnitude::cmp(&other.limbs, &self.limbs),
            _ => Ordering::Equal,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.sign == 0 {
            return rhs.clone();
        }
        if rhs.sign == 0 {
            return self.clone();
        }
        if self.sign == rhs.sign {
            return BigInt::from_mag(self.sign, magnitude::add(&self.limbs, &rhs.limbs));
        }
        match magnitude::cmp(&self.limbs, &rhs.limbs) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                BigInt::from_mag(self.sign, magnitude::sub(&self.limbs, &rhs.limbs))
            }
            Ordering::Less => BigInt::from_mag(rhs.sign, magnitude::sub(&rhs.limbs, &self.limbs)),
        }
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_mag(self.sign * rhs.sign, magnitude::mul(&self.limbs, &rhs.limbs))
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt { sign: -self.sign, limbs: self.limbs.clone() }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

/// Logical shift of the magnitude; the sign is preserved. Only meaningful
/// for the non-negative values the signature engine shifts.
impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> BigInt {
        BigInt::from_mag(self.sign, magnitude::shr(&self.limbs, n))
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> BigInt {
        BigInt::from_mag(self.sign, magnitude::shl(&self.limbs, n))
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.limbs.clear();
        self.sign = 0;
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign < 0 {
            write!(f, "-")?;
        }
        write!(f, "0x")?;
        match self.limbs.last() {
            None => write!(f, "0"),
            Some(&top) => {
                write!(f, "{top:x}")?;
                for &limb in self.limbs.iter().rev().skip(1) {
                    write!(f, "{limb:08x}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}
