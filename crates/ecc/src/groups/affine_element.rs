use std::marker::PhantomData;

use crate::curves::curve_params::{BaseField, CurveParameters, PairingCurve};
use crate::error::EccError;
use crate::fields::field_element::FieldElement;
use crate::fields::field_params::FieldParams;
use crate::groups::curve_group::{CurveGroup, G1, G2};
use crate::groups::element::Element;

/// An elliptic curve point in affine coordinates (x, y).
///
/// There is no affine encoding of the point at infinity; use `Element` for
/// the identity.
pub struct AffineElement<'p, C: PairingCurve, G: CurveGroup<C>> {
    pub x: G::Coordinate,
    pub y: G::Coordinate,
    params: &'p CurveParameters<C>,
    _group: PhantomData<G>,
}

impl<C: PairingCurve, G: CurveGroup<C>> Clone for AffineElement<'_, C, G> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PairingCurve, G: CurveGroup<C>> Copy for AffineElement<'_, C, G> {}

impl<C: PairingCurve, G: CurveGroup<C>> std::fmt::Debug for AffineElement<'_, C, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AffineElement<{}>({:?}, {:?})", G::NAME, self.x, self.y)
    }
}

impl<'p, C: PairingCurve, G: CurveGroup<C>> AffineElement<'p, C, G> {
    /// Construct a point, checking the curve equation.
    pub fn new(
        params: &'p CurveParameters<C>,
        x: G::Coordinate,
        y: G::Coordinate,
    ) -> Result<Self, EccError> {
        let point = Self::new_unchecked(params, x, y);
        if !point.is_on_curve() {
            return Err(EccError::PointNotOnCurve);
        }
        Ok(point)
    }

    #[inline]
    pub fn new_unchecked(params: &'p CurveParameters<C>, x: G::Coordinate, y: G::Coordinate) -> Self {
        Self {
            x,
            y,
            params,
            _group: PhantomData,
        }
    }

    #[inline]
    pub fn generator(params: &'p CurveParameters<C>) -> Self {
        let (x, y) = G::generator(params);
        Self::new_unchecked(params, x, y)
    }

    #[inline]
    pub fn params(&self) -> &'p CurveParameters<C> {
        self.params
    }

    /// y^2 == x^3 + a*x + b
    pub fn is_on_curve(&self) -> bool {
        let mut rhs = self.x.sqr() * self.x + G::coeff_b(self.params);
        let a = G::coeff_a(self.params);
        if !a.is_zero() {
            rhs += a * self.x;
        }
        self.y.sqr() == rhs
    }

    #[inline]
    pub fn to_projective(&self) -> Element<'p, C, G> {
        Element::from_affine(self)
    }
}

impl<'p, C: PairingCurve> AffineElement<'p, C, G1> {
    /// Recover the point with abscissa `x`. `sign` selects the root whose
    /// canonical form is odd.
    pub fn from_x_coordinate(
        params: &'p CurveParameters<C>,
        x: BaseField<C>,
        sign: bool,
    ) -> Result<Self, EccError> {
        let rhs = x.sqr() * x + params.a() * x + params.b();
        let y = rhs.sqrt().ok_or(EccError::PointNotOnCurve)?;
        let y = y.conditional_negate(y.is_odd() != sign);
        Ok(Self::new_unchecked(params, x, y))
    }

    /// Uncompressed coordinates: big-endian x followed by big-endian y, each
    /// `8 * LIMBS` bytes wide.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = self.x.to_be_bytes();
        out.extend(self.y.to_be_bytes());
        out
    }

    /// Inverse of `to_be_bytes`. Coordinates are reduced mod p and the
    /// point must satisfy the curve equation.
    pub fn from_be_bytes(params: &'p CurveParameters<C>, bytes: &[u8]) -> Result<Self, EccError> {
        let width = std::mem::size_of::<<C::BaseFieldParams as FieldParams>::Limbs>();
        if bytes.len() != 2 * width {
            return Err(EccError::InvalidEncodingLength {
                expected: 2 * width,
                actual: bytes.len(),
            });
        }
        let (x, y) = bytes.split_at(width);
        Self::new(
            params,
            BaseField::<C>::from_be_bytes_mod_order(x),
            BaseField::<C>::from_be_bytes_mod_order(y),
        )
    }
}

impl<C: PairingCurve> AffineElement<'_, C, G2> {
    /// The untwist-Frobenius-twist endomorphism pi: (x, y) -> (x^p * cx, y^p * cy).
    /// On the prime-order subgroup it acts as multiplication by p.
    pub fn frobenius_endomorphism(&self) -> Self {
        Self::new_unchecked(
            self.params,
            self.x.conjugate() * self.params.frobenius_twist_x(),
            self.y.conjugate() * self.params.frobenius_twist_y(),
        )
    }
}

impl<C: PairingCurve, G: CurveGroup<C>> std::ops::Neg for AffineElement<'_, C, G> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new_unchecked(self.params, self.x, -self.y)
    }
}

impl<C: PairingCurve, G: CurveGroup<C>> PartialEq for AffineElement<'_, C, G> {
    fn eq(&self, other: &Self) -> bool {
        self.params.same_instance(other.params) && self.x == other.x && self.y == other.y
    }
}

impl<C: PairingCurve, G: CurveGroup<C>> Eq for AffineElement<'_, C, G> {}
