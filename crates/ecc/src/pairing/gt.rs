use crate::curves::curve_params::{CurveParameters, Fq12, PairingCurve};
use crate::error::EccError;

/// An element of the target group GT, the order-r subgroup of Fq12*.
///
/// Only the final exponentiation produces these, so every value lies in the
/// cyclotomic subgroup and inversion is a conjugation.
pub struct GtElement<'p, C: PairingCurve> {
    value: Fq12<C>,
    params: &'p CurveParameters<C>,
}

impl<C: PairingCurve> Clone for GtElement<'_, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PairingCurve> Copy for GtElement<'_, C> {}

impl<C: PairingCurve> std::fmt::Debug for GtElement<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GtElement<{}>({:?})", C::NAME, self.value)
    }
}

impl<'p, C: PairingCurve> GtElement<'p, C> {
    #[inline]
    pub(crate) fn new(params: &'p CurveParameters<C>, value: Fq12<C>) -> Self {
        Self { value, params }
    }

    #[inline]
    pub fn one(params: &'p CurveParameters<C>) -> Self {
        Self::new(params, Fq12::<C>::one())
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.value == Fq12::<C>::one()
    }

    #[inline]
    pub fn value(&self) -> &Fq12<C> {
        &self.value
    }

    #[inline]
    pub fn params(&self) -> &'p CurveParameters<C> {
        self.params
    }

    pub fn mul(&self, other: &Self) -> Result<Self, EccError> {
        if !self.params.same_instance(other.params) {
            return Err(EccError::FieldMismatch);
        }
        Ok(Self::new(self.params, self.value * other.value))
    }

    #[inline]
    pub fn sqr(&self) -> Self {
        Self::new(self.params, self.value.cyclotomic_squared())
    }

    /// `self^exp`, exponent as little-endian words.
    pub fn pow(&self, exp: &[u64]) -> Self {
        Self::new(self.params, self.value.cyclotomic_exp(exp))
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        Self::new(self.params, self.value.unitary_inverse())
    }
}

impl<C: PairingCurve> PartialEq for GtElement<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.params.same_instance(other.params) && self.value == other.value
    }
}

impl<C: PairingCurve> Eq for GtElement<'_, C> {}
