// Line functions of the optimal ate Miller loop.
//
// G2 is walked in homogeneous projective coordinates on the twist. Each
// step returns the coefficients of the tangent or chord through the current
// point, already mapped to the sparse slots of Fq12; evaluating at a G1 point
// only scales two of them.

use crate::curves::curve_params::{BaseField, CurveParameters, Fq12, Fq2, PairingCurve, TwistType};
use crate::fields::field12::Field12Params;
use crate::fields::field2::Field2;

/// Coefficients of one line, before evaluation at a G1 point.
pub struct EllCoeffs<P: Field12Params> {
    pub o: Field2<P>,
    pub vw: Field2<P>,
    pub vv: Field2<P>,
}

impl<P: Field12Params> Clone for EllCoeffs<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Field12Params> Copy for EllCoeffs<P> {}

impl<P: Field12Params> std::fmt::Debug for EllCoeffs<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EllCoeffs")
            .field("o", &self.o)
            .field("vw", &self.vw)
            .field("vv", &self.vv)
            .finish()
    }
}

impl<P: Field12Params> PartialEq for EllCoeffs<P> {
    fn eq(&self, other: &Self) -> bool {
        self.o == other.o && self.vw == other.vw && self.vv == other.vv
    }
}

impl<P: Field12Params> Eq for EllCoeffs<P> {}

/// Line coefficients over the base field of curve `C`.
pub type Line<C> = EllCoeffs<<C as PairingCurve>::BaseFieldParams>;

/// Working point of the Miller loop, homogeneous (X : Y : Z) on the twist.
pub(crate) struct TwistPoint<C: PairingCurve> {
    pub x: Fq2<C>,
    pub y: Fq2<C>,
    pub z: Fq2<C>,
}

impl<C: PairingCurve> TwistPoint<C> {
    #[inline]
    pub fn from_affine(x: Fq2<C>, y: Fq2<C>) -> Self {
        Self { x, y, z: Fq2::<C>::one() }
    }
}

/// D-type lines carry xi in the constant slot.
#[inline]
fn twist_constant<C: PairingCurve>(params: &CurveParameters<C>, v: Fq2<C>) -> Fq2<C> {
    match params.twist_type() {
        TwistType::D => v.mul_by_non_residue(),
        TwistType::M => v,
    }
}

/// Doubling step, T <- 2T, returning the tangent line at T.
pub(crate) fn doubling_step<C: PairingCurve>(
    params: &CurveParameters<C>,
    current: &mut TwistPoint<C>,
) -> Line<C> {
    let two_inv = params.two_inv();

    // A = X*Y/2
    let a = (current.x * current.y).mul_by_fp(&two_inv);
    let b = current.y.sqr();
    let c = current.z.sqr();
    // E = 3*b'*Z^2
    let e = (c.double() + c) * params.twist_b();
    let f = e.double() + e;
    let g = (b + f).mul_by_fp(&two_inv);
    // H = (Y + Z)^2 - (Y^2 + Z^2) = 2YZ
    let h = (current.y + current.z).sqr() - (b + c);
    let i = e - b;
    let j = current.x.sqr();
    let ee = e.sqr();

    current.x = a * (b - f);
    current.y = g.sqr() - (ee.double() + ee);
    current.z = b * h;

    EllCoeffs {
        o: twist_constant(params, i),
        vw: -h,
        vv: j.double() + j,
    }
}

/// Mixed addition step, T <- T + Q with Q affine, returning the chord
/// through T and Q.
pub(crate) fn mixed_addition_step<C: PairingCurve>(
    params: &CurveParameters<C>,
    base: (&Fq2<C>, &Fq2<C>),
    current: &mut TwistPoint<C>,
) -> Line<C> {
    let (bx, by) = base;
    let d = current.x - *bx * current.z;
    let e = current.y - *by * current.z;
    let f = d.sqr();
    let g = e.sqr();
    let h = d * f;
    let i = current.x * f;
    let j = current.z * g + h - i.double();

    current.x = d * j;
    current.y = (i - j) * e - h * current.y;
    current.z = current.z * h;

    EllCoeffs {
        o: twist_constant(params, e * *bx - d * *by),
        vw: d,
        vv: -e,
    }
}

/// Multiply `f` by the line evaluated at the G1 point (xp, yp).
#[inline]
pub(crate) fn evaluate_line<C: PairingCurve>(
    params: &CurveParameters<C>,
    f: &Fq12<C>,
    line: &Line<C>,
    xp: &BaseField<C>,
    yp: &BaseField<C>,
) -> Fq12<C> {
    let vw = line.vw.mul_by_fp(yp);
    let vv = line.vv.mul_by_fp(xp);
    match params.twist_type() {
        TwistType::D => f.mul_by_024(&line.o, &vv, &vw),
        TwistType::M => f.mul_by_014(&line.o, &vv, &vw),
    }
}
