//! Affine point arithmetic.
//!
//! Points own their coordinates and hold a shared reference to the immutable
//! `Curve` they live on. The point at infinity is the group identity; it has
//! no affine coordinates. Coordinates are kept reduced to `[0, p)` so that
//! chord/tangent case analysis can compare them directly.
//!
//! The double-and-add loops here are variable-time, faithful to the bit-scan
//! algorithms they implement; they are not suitable for hosts where an
//! attacker can take fine-grained timings of signing.

use std::sync::Arc;

use chain_bignum::BigInt;

use crate::curve::Curve;
use crate::errors::CurveError;

/// A point on a short-Weierstrass curve: affine `(x, y)` or infinity.
#[derive(Debug, Clone)]
pub struct CurvePoint {
    curve: Arc<Curve>,
    coords: Option<(BigInt, BigInt)>,
}

impl PartialEq for CurvePoint {
    fn eq(&self, other: &Self) -> bool {
        *self.curve == *other.curve && self.coords == other.coords
    }
}

impl Eq for CurvePoint {}

impl CurvePoint {
    /// The point at infinity on `curve`.
    pub fn infinity(curve: &Arc<Curve>) -> CurvePoint {
        CurvePoint { curve: Arc::clone(curve), coords: None }
    }

    /// The curve's base point `G`.
    pub fn generator(curve: &Arc<Curve>) -> CurvePoint {
        CurvePoint {
            curve: Arc::clone(curve),
            coords: Some((curve.gx.clone(), curve.gy.clone())),
        }
    }

    /// Builds an affine point, checking that the coordinates are reduced
    /// field residues satisfying `y^2 = x^3 + a*x + b (mod p)`.
    pub fn new(curve: &Arc<Curve>, x: BigInt, y: BigInt) -> Result<CurvePoint, CurveError> {
        let zero = BigInt::zero();
        if x < zero || y < zero || x >= curve.p || y >= curve.p {
            return Err(CurveError::PointNotOnCurve);
        }
        let lhs = (&y * &y).modulo(&curve.p)?;
        let x_cubed = &(&x * &x) * &x;
        let rhs = (&(&x_cubed + &(&curve.a * &x)) + &curve.b).modulo(&curve.p)?;
        if lhs != rhs {
            return Err(CurveError::PointNotOnCurve);
        }
        Ok(CurvePoint { curve: Arc::clone(curve), coords: Some((x, y)) })
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// True for the group identity.
    pub fn is_infinity(&self) -> bool {
        self.coords.is_none()
    }

    /// Affine coordinates, or `None` for infinity.
    pub fn affine(&self) -> Option<(&BigInt, &BigInt)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    /// Point doubling by the tangent-line formula.
    ///
    /// Infinity doubles to infinity; so does a point with `y = 0`, whose
    /// tangent is vertical.
    pub fn double(&self) -> Result<CurvePoint, CurveError> {
        let Some((x, y)) = &self.coords else {
            return Ok(self.clone());
        };
        if y.is_zero() {
            return Ok(CurvePoint::infinity(&self.curve));
        }
        let p = &self.curve.p;
        let two = BigInt::from(2u64);
        let three = BigInt::from(3u64);
        let num = (&(&three * &(x * x)) + &self.curve.a).modulo(p)?;
        let den = (&two * y).mod_inverse(p)?;
        let lambda = (&num * &den).modulo(p)?;
        let x3 = (&(&lambda * &lambda) - &(&two * x)).modulo(p)?;
        let y3 = (&(&lambda * &(x - &x3)) - y).modulo(p)?;
        Ok(CurvePoint { curve: Arc::clone(&self.curve), coords: Some((x3, y3)) })
    }

    /// Point addition by the chord formula.
    ///
    /// Infinity is the identity; adding a point to its negation (same `x`,
    /// opposite `y`) yields infinity; adding a point to itself doubles.
    pub fn add(&self, other: &CurvePoint) -> Result<CurvePoint, CurveError> {
        let Some((x1, y1)) = &self.coords else {
            return Ok(other.clone());
        };
        let Some((x2, y2)) = &other.coords else {
            return Ok(self.clone());
        };
        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            // y2 = p - y1: the chord is vertical.
            return Ok(CurvePoint::infinity(&self.curve));
        }
        let p = &self.curve.p;
        let num = (y2 - y1).modulo(p)?;
        let den = (x2 - x1).modulo(p)?.mod_inverse(p)?;
        let lambda = (&num * &den).modulo(p)?;
        let x3 = (&(&(&lambda * &lambda) - x1) - x2).modulo(p)?;
        let y3 = (&(&lambda * &(x1 - &x3)) - y1).modulo(p)?;
        Ok(CurvePoint { curve: Arc::clone(&self.curve), coords: Some((x3, y3)) })
    }

    /// Scalar multiplication `k * self` by binary double-and-add, scanning
    /// the bits of `k` from most-significant to least. `k = 0` yields
    /// infinity; negative scalars are rejected.
    pub fn multiply(&self, k: &BigInt) -> Result<CurvePoint, CurveError> {
        if k.signum() < 0 {
            return Err(CurveError::NegativeScalar);
        }
        let mut acc = CurvePoint::infinity(&self.curve);
        for i in (0..k.bit_length()).rev() {
            acc = acc.double()?;
            if k.test_bit(i) {
                acc = acc.add(self)?;
            }
        }
        Ok(acc)
    }

    /// Computes `k * p + l * q` in one combined scan (Shamir's trick).
    ///
    /// `z = p + q` is precomputed; each step doubles the accumulator once
    /// and adds `p`, `q`, or `z` depending on which scalar bits are set.
    /// This halves the doublings versus two independent multiplications,
    /// and verification always needs exactly this combined form.
    pub fn sum_of_two_multiplies(
        p: &CurvePoint,
        k: &BigInt,
        q: &CurvePoint,
        l: &BigInt,
    ) -> Result<CurvePoint, CurveError> {
        if k.signum() < 0 || l.signum() < 0 {
            return Err(CurveError::NegativeScalar);
        }
        let z = p.add(q)?;
        let mut acc = CurvePoint::infinity(&p.curve);
        for i in (0..k.bit_length().max(l.bit_length())).rev() {
            acc = acc.double()?;
            match (k.test_bit(i), l.test_bit(i)) {
                (true, true) => acc = acc.add(&z)?,
                (true, false) => acc = acc.add(p)?,
                (false, true) => acc = acc.add(q)?,
                (false, false) => {}
            }
        }
        Ok(acc)
    }
}
