use crate::curves::curve_params::{BaseField, CurveParameters, Fq2, PairingCurve};
use crate::fields::field_element::FieldElement;

/// One of the two source groups of a pairing curve.
///
/// A group is y^2 = x^3 + a*x + b over its coordinate field. G1 lives over Fq,
/// G2 over Fq2 on the sextic twist.
pub trait CurveGroup<C: PairingCurve>: 'static + Send + Sync + Sized {
    type Coordinate: FieldElement;

    const NAME: &'static str;

    fn coeff_a(params: &CurveParameters<C>) -> Self::Coordinate;

    fn coeff_b(params: &CurveParameters<C>) -> Self::Coordinate;

    /// Affine coordinates of the group generator.
    fn generator(params: &CurveParameters<C>) -> (Self::Coordinate, Self::Coordinate);
}

/// Points over the base field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G1;

/// Points over Fq2 on the twist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G2;

impl<C: PairingCurve> CurveGroup<C> for G1 {
    type Coordinate = BaseField<C>;

    const NAME: &'static str = "G1";

    #[inline]
    fn coeff_a(params: &CurveParameters<C>) -> BaseField<C> {
        params.a()
    }

    #[inline]
    fn coeff_b(params: &CurveParameters<C>) -> BaseField<C> {
        params.b()
    }

    #[inline]
    fn generator(params: &CurveParameters<C>) -> (BaseField<C>, BaseField<C>) {
        params.g1_generator()
    }
}

impl<C: PairingCurve> CurveGroup<C> for G2 {
    type Coordinate = Fq2<C>;

    const NAME: &'static str = "G2";

    /// Sextic twists only exist for a = 0.
    #[inline]
    fn coeff_a(_params: &CurveParameters<C>) -> Fq2<C> {
        Fq2::<C>::zero()
    }

    #[inline]
    fn coeff_b(params: &CurveParameters<C>) -> Fq2<C> {
        params.twist_b()
    }

    #[inline]
    fn generator(params: &CurveParameters<C>) -> (Fq2<C>, Fq2<C>) {
        params.g2_generator()
    }
}
