// Final exponentiation f -> f^((p^12 - 1)/r), up to a factor coprime to r.
//
// The easy part (p^6 - 1)(p^2 + 1) lands in the cyclotomic subgroup, where
// inversion is conjugation and squaring has the cheap Granger-Scott form.
// The hard part depends on the curve family.

use tracing::debug_span;

use crate::curves::curve_params::{CurveFamily, CurveParameters, Fq12, PairingCurve};
use crate::error::EccError;
use crate::fields::field12::{Field12, Field12Params};
use crate::pairing::gt::GtElement;

/// f^((p^6 - 1)(p^2 + 1)). Fails only for f = 0.
pub fn final_exponentiation_easy_part<P: Field12Params>(
    elt: &Field12<P>,
) -> Result<Field12<P>, EccError> {
    let a = elt.conjugate() * elt.invert()?;
    Ok(a * a.frobenius_map(2))
}

/// elt^z in the cyclotomic subgroup.
fn exp_by_z<C: PairingCurve>(params: &CurveParameters<C>, elt: &Fq12<C>) -> Fq12<C> {
    let r = elt.cyclotomic_exp(&[params.final_exponent_z()]);
    if params.final_exponent_z_is_negative() {
        r.unitary_inverse()
    } else {
        r
    }
}

/// elt^(-z) in the cyclotomic subgroup.
fn exp_by_neg_z<C: PairingCurve>(params: &CurveParameters<C>, elt: &Fq12<C>) -> Fq12<C> {
    let r = elt.cyclotomic_exp(&[params.final_exponent_z()]);
    if params.final_exponent_z_is_negative() {
        r
    } else {
        r.unitary_inverse()
    }
}

/// BN hard part, Fuentes-Castaneda et al. addition chain for
/// (p^4 - p^2 + 1)/r times 2z(6z^2 + 3z + 1).
fn bn_hard_part<C: PairingCurve>(params: &CurveParameters<C>, elt: &Fq12<C>) -> Fq12<C> {
    let a = exp_by_neg_z(params, elt);
    let b = a.cyclotomic_squared();
    let c = b.cyclotomic_squared();
    let d = c * b;
    let e = exp_by_neg_z(params, &d);
    let f = e.cyclotomic_squared();
    let g = exp_by_neg_z(params, &f);
    let h = d.unitary_inverse();
    let ii = g.unitary_inverse();
    let j = ii * e;
    let k = j * h;
    let l = k * b;
    let m = k * e;
    let n = m * *elt;
    let o = l.frobenius_map(1);
    let p = o * n;
    let q = k.frobenius_map(2);
    let r = q * p;
    let s = elt.unitary_inverse();
    let t = l * s;
    let u = t.frobenius_map(3);
    u * r
}

/// BLS12 hard part for 3(p^4 - p^2 + 1)/r, written as
/// (z - 1)^2 (z + p)(z^2 + p^2 - 1) + 3.
fn bls12_hard_part<C: PairingCurve>(params: &CurveParameters<C>, elt: &Fq12<C>) -> Fq12<C> {
    // elt^(z - 1)
    let t = exp_by_z(params, elt) * elt.unitary_inverse();
    // elt^((z - 1)^2)
    let a = exp_by_z(params, &t) * t.unitary_inverse();
    let b = exp_by_z(params, &a) * a.frobenius_map(1);
    let c = exp_by_z(params, &exp_by_z(params, &b)) * b.frobenius_map(2) * b.unitary_inverse();
    c * (elt.cyclotomic_squared() * *elt)
}

/// Raise a Miller loop output to the final exponent of `params`.
///
/// The exact exponent realized is `params.final_exponent()`.
pub fn final_exponentiation<'p, C: PairingCurve>(
    params: &'p CurveParameters<C>,
    f: &Fq12<C>,
) -> Result<GtElement<'p, C>, EccError> {
    let _span = debug_span!("final_exponentiation", curve = C::NAME).entered();

    let easy = final_exponentiation_easy_part(f)?;
    let value = match params.family() {
        CurveFamily::Bn => bn_hard_part(params, &easy),
        CurveFamily::Bls12 => bls12_hard_part(params, &easy),
    };
    Ok(GtElement::new(params, value))
}
