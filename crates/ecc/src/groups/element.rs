use std::marker::PhantomData;

use rand::Rng;
use zkpair_numeric::bitop::non_adjacent_form;
use zkpair_numeric::U256Ext;

use crate::curves::curve_params::{CurveParameters, PairingCurve, ScalarField};
use crate::error::EccError;
use crate::fields::field_element::FieldElement;
use crate::groups::affine_element::AffineElement;
use crate::groups::curve_group::CurveGroup;

/// An elliptic curve point in Jacobian projective coordinates (X : Y : Z).
///
/// Represents the affine point (X/Z^2, Y/Z^3). Z = 0 is the point at
/// infinity. Every point borrows the `CurveParameters` it was built from;
/// combining points from two different instances fails with
/// `CurveMismatch`.
pub struct Element<'p, C: PairingCurve, G: CurveGroup<C>> {
    pub x: G::Coordinate,
    pub y: G::Coordinate,
    pub z: G::Coordinate,
    params: &'p CurveParameters<C>,
    _group: PhantomData<G>,
}

impl<C: PairingCurve, G: CurveGroup<C>> Clone for Element<'_, C, G> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PairingCurve, G: CurveGroup<C>> Copy for Element<'_, C, G> {}

impl<C: PairingCurve, G: CurveGroup<C>> std::fmt::Debug for Element<'_, C, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_point_at_infinity() {
            write!(f, "Element<{}>(infinity)", G::NAME)
        } else {
            write!(f, "Element<{}>({:?}, {:?}, {:?})", G::NAME, self.x, self.y, self.z)
        }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl<'p, C: PairingCurve, G: CurveGroup<C>> Element<'p, C, G> {
    /// Construct from (x, y, z) coordinates. Not checked against the curve.
    #[inline]
    pub fn new(
        params: &'p CurveParameters<C>,
        x: G::Coordinate,
        y: G::Coordinate,
        z: G::Coordinate,
    ) -> Self {
        Self {
            x,
            y,
            z,
            params,
            _group: PhantomData,
        }
    }

    /// Construct from an affine point (sets z = 1).
    #[inline]
    pub fn from_affine(affine: &AffineElement<'p, C, G>) -> Self {
        Self::new(affine.params(), affine.x, affine.y, G::Coordinate::one())
    }

    #[inline]
    pub fn generator(params: &'p CurveParameters<C>) -> Self {
        let (x, y) = G::generator(params);
        Self::new(params, x, y, G::Coordinate::one())
    }

    #[inline]
    pub fn infinity(params: &'p CurveParameters<C>) -> Self {
        Self::new(
            params,
            G::Coordinate::zero(),
            G::Coordinate::one(),
            G::Coordinate::zero(),
        )
    }

    /// A uniformly random multiple of the generator.
    pub fn random_element<R: Rng + ?Sized>(params: &'p CurveParameters<C>, rng: &mut R) -> Self {
        let scalar = ScalarField::<C>::random(rng);
        Self::generator(params).mul(&scalar)
    }

    #[inline]
    pub fn params(&self) -> &'p CurveParameters<C> {
        self.params
    }

    #[inline]
    pub fn is_point_at_infinity(&self) -> bool {
        self.z.is_zero()
    }

    #[inline]
    fn check_instance(&self, other: &CurveParameters<C>) -> Result<(), EccError> {
        if self.params.same_instance(other) {
            Ok(())
        } else {
            Err(EccError::CurveMismatch)
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

impl<'p, C: PairingCurve, G: CurveGroup<C>> Element<'p, C, G> {
    /// Convert to affine coordinates via z-inverse.
    pub fn to_affine(&self) -> Result<AffineElement<'p, C, G>, EccError> {
        if self.is_point_at_infinity() {
            return Err(EccError::PointAtInfinity);
        }
        let z_inv = self.z.invert()?;
        let zz_inv = z_inv.sqr();
        let zzz_inv = zz_inv * z_inv;
        Ok(AffineElement::new_unchecked(
            self.params,
            self.x * zz_inv,
            self.y * zzz_inv,
        ))
    }

    /// Check if the point lies on the curve: y^2 == x^3 + a*x*z^4 + b*z^6.
    pub fn is_on_curve(&self) -> bool {
        if self.is_point_at_infinity() {
            return true;
        }
        let zz = self.z.sqr();
        let zzzz = zz.sqr();
        let mut rhs = self.x.sqr() * self.x + zzzz * zz * G::coeff_b(self.params);
        let a = G::coeff_a(self.params);
        if !a.is_zero() {
            rhs += self.x * a * zzzz;
        }
        self.y.sqr() == rhs
    }
}

// ---------------------------------------------------------------------------
// Point doubling
// ---------------------------------------------------------------------------

impl<C: PairingCurve, G: CurveGroup<C>> Element<'_, C, G> {
    /// Double this point in-place.
    pub fn self_dbl(&mut self) {
        if self.is_point_at_infinity() {
            return;
        }

        // T0 = x^2
        let t0 = self.x.sqr();
        // T1 = y^2
        let t1 = self.y.sqr();
        // T2 = y^4
        let t2 = t1.sqr();
        // S = 2*((y^2 + x)^2 - x^2 - y^4) = 4*x*y^2
        let t1 = ((t1 + self.x).sqr() - (t0 + t2)).double();
        // M = 3*x^2 + a*z^4
        let mut t3 = t0.double() + t0;
        let a = G::coeff_a(self.params);
        if !a.is_zero() {
            t3 += a * self.z.sqr().sqr();
        }
        // z3 = 2*y*z, before y is overwritten
        let new_z = self.z.double() * self.y;
        // x3 = M^2 - 2S
        let new_x = t3.sqr() - t1.double();
        // y3 = M*(S - x3) - 8*y^4
        let new_y = t3 * (t1 - new_x) - t2.double().double().double();

        self.x = new_x;
        self.y = new_y;
        self.z = new_z;
    }

    /// Return the double of this point.
    #[inline]
    pub fn double(&self) -> Self {
        let mut result = *self;
        result.self_dbl();
        result
    }
}

// ---------------------------------------------------------------------------
// Addition
// ---------------------------------------------------------------------------

impl<'p, C: PairingCurve, G: CurveGroup<C>> Element<'p, C, G> {
    /// Add an affine point to this projective point in-place. Both operands
    /// must share a parameters instance.
    fn add_assign_affine(&mut self, other: &AffineElement<'p, C, G>) {
        if self.is_point_at_infinity() {
            *self = Self::from_affine(other);
            return;
        }

        // T0 = z1^2
        let t0 = self.z.sqr();
        // H = x2*z1^2 - x1
        let t1 = other.x * t0 - self.x;
        // z1^3 * y2 - y1
        let t2 = self.z * t0 * other.y - self.y;

        if t1.is_zero() {
            if t2.is_zero() {
                self.self_dbl();
            } else {
                *self = Self::infinity(self.params);
            }
            return;
        }

        // R = 2*(z1^3*y2 - y1)
        let t2 = t2.double();
        // HH = H^2
        let t3 = t1.sqr();
        // z3 = (z1 + H)^2 - z1^2 - HH = 2*z1*H
        self.z = (self.z + t1).sqr() - (t0 + t3);
        // 4*HH
        let t3 = t3.double().double();
        // 4*HHH
        let t1 = t1 * t3;
        // 4*HH*x1
        let t3 = t3 * self.x;
        // x3 = R^2 - (8*HH*x1 + 4*HHH)
        self.x = t2.sqr() - (t3.double() + t1);
        // y3 = R*(4*HH*x1 - x3) - 2*y1*4*HHH
        self.y = (t3 - self.x) * t2 - (t1 * self.y).double();
    }

    /// Add another projective point to this one in-place. Both operands
    /// must share a parameters instance.
    fn add_assign_element(&mut self, other: &Self) {
        if other.is_point_at_infinity() {
            return;
        }
        if self.is_point_at_infinity() {
            *self = *other;
            return;
        }

        let z1z1 = self.z.sqr();
        let z2z2 = other.z.sqr();
        let u1 = z2z2 * self.x;
        let u2 = z1z1 * other.x;
        let s1 = z2z2 * other.z * self.y;
        let s2 = z1z1 * self.z * other.y;

        let f = s2 - s1;
        let h = u2 - u1;

        if h.is_zero() {
            if f.is_zero() {
                self.self_dbl();
            } else {
                *self = Self::infinity(self.params);
            }
            return;
        }

        let f = f.double();
        let i = h.double().sqr();
        let j = h * i;
        let u1 = u1 * i;

        self.x = f.sqr() - (u1.double() + j);
        self.y = (u1 - self.x) * f - (j * s1).double();
        self.z = ((self.z + other.z).sqr() - (z1z1 + z2z2)) * h;
    }

    /// P + Q. Handles infinity on either side, P == Q and P == -Q.
    pub fn add(&self, other: &Self) -> Result<Self, EccError> {
        self.check_instance(other.params)?;
        let mut result = *self;
        result.add_assign_element(other);
        Ok(result)
    }

    pub fn sub(&self, other: &Self) -> Result<Self, EccError> {
        self.add(&-*other)
    }

    /// P + Q with Q affine (Z = 1).
    pub fn mixed_add(&self, other: &AffineElement<'p, C, G>) -> Result<Self, EccError> {
        self.check_instance(other.params())?;
        let mut result = *self;
        result.add_assign_affine(other);
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Scalar multiplication
// ---------------------------------------------------------------------------

impl<'p, C: PairingCurve, G: CurveGroup<C>> Element<'p, C, G> {
    /// Multiply by a scalar field element.
    pub fn mul(&self, scalar: &ScalarField<C>) -> Self {
        self.scalar_mul(scalar.to_canonical_limbs().as_ref())
    }

    /// Multiply by an integer given as little-endian words, using
    /// non-adjacent-form double-and-add.
    pub fn scalar_mul(&self, scalar: &[u64]) -> Self {
        let naf = non_adjacent_form(scalar);
        let neg = -*self;
        let mut accumulator = Self::infinity(self.params);
        for &digit in naf.iter().rev() {
            accumulator.self_dbl();
            match digit {
                1 => accumulator.add_assign_element(self),
                -1 => accumulator.add_assign_element(&neg),
                _ => {}
            }
        }
        accumulator
    }

    /// [r]P == O, with r the prime group order.
    pub fn is_in_prime_order_subgroup(&self) -> bool {
        self.scalar_mul(&self.params.group_order().limbs())
            .is_point_at_infinity()
    }
}

// ---------------------------------------------------------------------------
// Batch operations
// ---------------------------------------------------------------------------

impl<C: PairingCurve, G: CurveGroup<C>> Element<'_, C, G> {
    /// Batch normalize: bring every point to z = 1 using a single inversion.
    ///
    /// Uses Montgomery's trick: accumulates the product of z-coordinates forward,
    /// inverts once, then walks backward to recover individual z-inverses.
    /// Infinity points are skipped in both passes.
    pub fn batch_normalize(elements: &mut [Self]) -> Result<(), EccError> {
        if elements.is_empty() {
            return Ok(());
        }

        let mut temporaries = Vec::with_capacity(elements.len());
        let mut accumulator = G::Coordinate::one();

        for element in elements.iter() {
            temporaries.push(accumulator);
            if !element.is_point_at_infinity() {
                accumulator *= element.z;
            }
        }

        accumulator = accumulator.invert()?;

        for (element, temporary) in elements.iter_mut().zip(temporaries).rev() {
            if element.is_point_at_infinity() {
                continue;
            }
            let z_inv = accumulator * temporary;
            let zz_inv = z_inv.sqr();
            accumulator *= element.z;
            element.x *= zz_inv;
            element.y *= zz_inv * z_inv;
            element.z = G::Coordinate::one();
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<C: PairingCurve, G: CurveGroup<C>> std::ops::Neg for Element<'_, C, G> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.params, self.x, -self.y, self.z)
    }
}

impl<C: PairingCurve, G: CurveGroup<C>> PartialEq for Element<'_, C, G> {
    fn eq(&self, other: &Self) -> bool {
        if !self.params.same_instance(other.params) {
            return false;
        }
        let am_inf = self.is_point_at_infinity();
        let is_inf = other.is_point_at_infinity();
        if am_inf || is_inf {
            return am_inf && is_inf;
        }
        let lhs_zz = self.z.sqr();
        let rhs_zz = other.z.sqr();
        self.x * rhs_zz == other.x * lhs_zz
            && self.y * rhs_zz * other.z == other.y * lhs_zz * self.z
    }
}

impl<C: PairingCurve, G: CurveGroup<C>> Eq for Element<'_, C, G> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::bls12_381::Bls12_381;
    use crate::curves::bn254::Bn254;
    use crate::curves::curve_params::Fq2;
    use crate::groups::curve_group::{G1, G2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn check_group_law<C: PairingCurve, G: CurveGroup<C>>(params: &CurveParameters<C>, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = Element::<C, G>::random_element(params, &mut rng);
        let q = Element::<C, G>::random_element(params, &mut rng);
        let r = Element::<C, G>::random_element(params, &mut rng);
        let o = Element::<C, G>::infinity(params);

        assert!(p.is_on_curve());
        assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
        assert_eq!(
            p.add(&q).unwrap().add(&r).unwrap(),
            p.add(&q.add(&r).unwrap()).unwrap()
        );
        assert_eq!(p.add(&o).unwrap(), p);
        assert_eq!(o.add(&p).unwrap(), p);
        assert!(p.add(&-p).unwrap().is_point_at_infinity());
        assert_eq!(p.add(&p).unwrap(), p.double());
        assert_eq!(p.sub(&q).unwrap().add(&q).unwrap(), p);
        assert!(p.double().is_on_curve());
        assert!(p.add(&q).unwrap().is_on_curve());

        let q_affine = q.to_affine().unwrap();
        assert_eq!(p.mixed_add(&q_affine).unwrap(), p.add(&q).unwrap());
        assert_eq!(q.mixed_add(&q_affine).unwrap(), q.double());
        assert!(o.mixed_add(&q_affine).unwrap() == q);
        assert!(q.mixed_add(&-q_affine).unwrap().is_point_at_infinity());
    }

    #[test]
    fn group_law_g1_and_g2() {
        let bn = CurveParameters::<Bn254>::new().unwrap();
        check_group_law::<Bn254, G1>(&bn, 1);
        check_group_law::<Bn254, G2>(&bn, 2);
        let bls = CurveParameters::<Bls12_381>::new().unwrap();
        check_group_law::<Bls12_381, G1>(&bls, 3);
        check_group_law::<Bls12_381, G2>(&bls, 4);
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let params = CurveParameters::<Bn254>::new().unwrap();
        let g = Element::<_, G1>::generator(&params);
        let mut expected = Element::infinity(&params);
        for k in 0u64..20 {
            assert_eq!(g.scalar_mul(&[k]), expected);
            assert_eq!(g.mul(&ScalarField::<Bn254>::from(k)), expected);
            expected = expected.add(&g).unwrap();
        }
    }

    #[test]
    fn scalar_mul_is_linear() {
        let params = CurveParameters::<Bls12_381>::new().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let g = Element::<_, G2>::generator(&params);
        let a = ScalarField::<Bls12_381>::random(&mut rng);
        let b = ScalarField::<Bls12_381>::random(&mut rng);
        assert_eq!(g.mul(&a).add(&g.mul(&b)).unwrap(), g.mul(&(a + b)));
        assert_eq!(g.mul(&a).mul(&b), g.mul(&(a * b)));
    }

    #[test]
    fn generators_have_prime_order() {
        let bn = CurveParameters::<Bn254>::new().unwrap();
        assert!(Element::<_, G1>::generator(&bn).is_in_prime_order_subgroup());
        assert!(Element::<_, G2>::generator(&bn).is_in_prime_order_subgroup());
        let bls = CurveParameters::<Bls12_381>::new().unwrap();
        assert!(Element::<_, G1>::generator(&bls).is_in_prime_order_subgroup());
        assert!(Element::<_, G2>::generator(&bls).is_in_prime_order_subgroup());
    }

    #[test]
    fn cofactor_points_are_outside_the_subgroup() {
        let params = CurveParameters::<Bls12_381>::new().unwrap();
        let x = crate::curves::curve_params::BaseField::<Bls12_381>::from(4);
        let p = AffineElement::<_, G1>::from_x_coordinate(&params, x, false).unwrap();
        let p = p.to_projective();
        assert!(p.is_on_curve());
        assert!(!p.is_in_prime_order_subgroup());
        // clearing the cofactor lands in the subgroup
        let cleared = p.scalar_mul(&params.cofactor().limbs());
        assert!(cleared.is_in_prime_order_subgroup());
    }

    #[test]
    fn to_affine_of_infinity_fails() {
        let params = CurveParameters::<Bn254>::new().unwrap();
        assert_eq!(
            Element::<_, G1>::infinity(&params).to_affine().unwrap_err(),
            EccError::PointAtInfinity
        );
        let g = Element::<_, G1>::generator(&params).double();
        let affine = g.to_affine().unwrap();
        assert!(affine.is_on_curve());
        assert_eq!(affine.to_projective(), g);
    }

    #[test]
    fn batch_normalize_matches_to_affine() {
        let params = CurveParameters::<Bls12_381>::new().unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let mut points: Vec<_> = (0..5)
            .map(|_| Element::<_, G2>::random_element(&params, &mut rng))
            .collect();
        points.insert(2, Element::infinity(&params));
        let expected: Vec<_> = points.iter().map(|p| p.to_affine().ok()).collect();

        Element::batch_normalize(&mut points).unwrap();
        for (point, affine) in points.iter().zip(expected) {
            match affine {
                Some(a) => {
                    assert_eq!(point.z, Fq2::<Bls12_381>::one());
                    assert_eq!((point.x, point.y), (a.x, a.y));
                }
                None => assert!(point.is_point_at_infinity()),
            }
        }
    }

    #[test]
    fn operands_from_different_instances_fail() {
        let a = CurveParameters::<Bn254>::new().unwrap();
        let b = CurveParameters::<Bn254>::new().unwrap();
        let p = Element::<_, G1>::generator(&a);
        let q = Element::<_, G1>::generator(&b);
        assert_eq!(p.add(&q).unwrap_err(), EccError::CurveMismatch);
        assert_eq!(p.sub(&q).unwrap_err(), EccError::CurveMismatch);
        assert_eq!(
            p.mixed_add(&q.to_affine().unwrap()).unwrap_err(),
            EccError::CurveMismatch
        );
        assert_ne!(p, q);
    }
}
