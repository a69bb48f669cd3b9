use tracing::{debug_span, trace};

use crate::curves::curve_params::{BaseField, CurveFamily, CurveParameters, Fq12, PairingCurve};
use crate::error::EccError;
use crate::groups::{Element, G1, G2};
use crate::pairing::lines::{doubling_step, evaluate_line, mixed_addition_step, Line, TwistPoint};

/// Miller lines of a fixed G2 point.
///
/// One line per doubling or addition step, in the order the loop consumes
/// them, followed by the two Frobenius lines on BN curves. The coefficients
/// are bound to the parameters instance of the point they came from and can
/// be reused against any number of G1 points of that instance.
pub struct MillerLoopCoefficients<'p, C: PairingCurve> {
    params: &'p CurveParameters<C>,
    ell_coeffs: Vec<Line<C>>,
    infinity: bool,
}

impl<C: PairingCurve> Clone for MillerLoopCoefficients<'_, C> {
    fn clone(&self) -> Self {
        Self {
            params: self.params,
            ell_coeffs: self.ell_coeffs.clone(),
            infinity: self.infinity,
        }
    }
}

impl<C: PairingCurve> std::fmt::Debug for MillerLoopCoefficients<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MillerLoopCoefficients")
            .field("curve", &C::NAME)
            .field("lines", &self.ell_coeffs.len())
            .field("infinity", &self.infinity)
            .finish()
    }
}

impl<'p, C: PairingCurve> MillerLoopCoefficients<'p, C> {
    #[inline]
    pub fn params(&self) -> &'p CurveParameters<C> {
        self.params
    }

    #[inline]
    pub fn ell_coeffs(&self) -> &[Line<C>] {
        &self.ell_coeffs
    }

    /// Precomputed from the point at infinity; every loop over these
    /// coefficients yields one.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }
}

/// Every digit below the leading one, most significant first.
fn loop_digits<C: PairingCurve>(params: &CurveParameters<C>) -> impl Iterator<Item = i8> {
    let table = params.ate_loop_table();
    let below_top = table.len().saturating_sub(1);
    table[..below_top].iter().rev().copied()
}

/// Number of lines `precompute_g2` emits for `params`.
pub fn line_count<C: PairingCurve>(params: &CurveParameters<C>) -> usize {
    let steps: usize = loop_digits(params).map(|d| if d == 0 { 1 } else { 2 }).sum();
    match params.family() {
        CurveFamily::Bn => steps + 2,
        CurveFamily::Bls12 => steps,
    }
}

/// Precompute the Miller lines of `q`.
///
/// The working point starts at Q for the leading digit. Every lower digit
/// doubles it and, for a digit of 1 or -1, adds Q or -Q. BN curves then
/// add Q1 = pi(Q) and Q2 = -pi^2(Q).
pub fn precompute_g2<'p, C: PairingCurve>(
    q: &Element<'p, C, G2>,
) -> Result<MillerLoopCoefficients<'p, C>, EccError> {
    let params = q.params();
    if q.is_point_at_infinity() {
        return Ok(MillerLoopCoefficients {
            params,
            ell_coeffs: Vec::new(),
            infinity: true,
        });
    }

    let _span = debug_span!("precompute_g2", curve = C::NAME).entered();

    let base = q.to_affine()?;
    let neg_base = -base;
    let mut current = TwistPoint::<C>::from_affine(base.x, base.y);
    let mut ell_coeffs = Vec::with_capacity(line_count(params));

    for digit in loop_digits(params) {
        ell_coeffs.push(doubling_step(params, &mut current));
        match digit {
            1 => ell_coeffs.push(mixed_addition_step(params, (&base.x, &base.y), &mut current)),
            -1 => ell_coeffs.push(mixed_addition_step(
                params,
                (&neg_base.x, &neg_base.y),
                &mut current,
            )),
            _ => {}
        }
    }

    if params.family() == CurveFamily::Bn {
        let q1 = base.frobenius_endomorphism();
        let q2 = -q1.frobenius_endomorphism();
        ell_coeffs.push(mixed_addition_step(params, (&q1.x, &q1.y), &mut current));
        ell_coeffs.push(mixed_addition_step(params, (&q2.x, &q2.y), &mut current));
    }

    trace!(lines = ell_coeffs.len(), "miller lines precomputed");

    Ok(MillerLoopCoefficients {
        params,
        ell_coeffs,
        infinity: false,
    })
}

/// Miller loop of one precomputed G2 point against `p`.
///
/// Fails with `FieldMismatch` when `p` and `coeffs` come from different
/// parameter instances.
pub fn miller_loop<C: PairingCurve>(
    coeffs: &MillerLoopCoefficients<'_, C>,
    p: &Element<'_, C, G1>,
) -> Result<Fq12<C>, EccError> {
    multi_miller_loop(coeffs.params, &[(coeffs, p)])
}

/// Product of Miller loops sharing one accumulator, so each squaring of f is
/// paid once for all pairs.
///
/// Pairs with an infinity on either side contribute one and are skipped.
pub fn multi_miller_loop<C: PairingCurve>(
    params: &CurveParameters<C>,
    pairs: &[(&MillerLoopCoefficients<'_, C>, &Element<'_, C, G1>)],
) -> Result<Fq12<C>, EccError> {
    let mut active: Vec<(&[Line<C>], BaseField<C>, BaseField<C>)> = Vec::with_capacity(pairs.len());
    for (coeffs, p) in pairs {
        if !coeffs.params.same_instance(params) || !p.params().same_instance(params) {
            return Err(EccError::FieldMismatch);
        }
        if coeffs.infinity || p.is_point_at_infinity() {
            continue;
        }
        let p = p.to_affine()?;
        active.push((coeffs.ell_coeffs.as_slice(), p.x, p.y));
    }

    let mut f = Fq12::<C>::one();
    if active.is_empty() {
        return Ok(f);
    }

    let mut it = 0;
    for digit in loop_digits(params) {
        f = f.sqr();
        let steps = if digit == 0 { 1 } else { 2 };
        for (lines, xp, yp) in &active {
            for line in &lines[it..it + steps] {
                f = evaluate_line(params, &f, line, xp, yp);
            }
        }
        it += steps;
    }

    if params.family() == CurveFamily::Bn {
        for (lines, xp, yp) in &active {
            for line in &lines[it..it + 2] {
                f = evaluate_line(params, &f, line, xp, yp);
            }
        }
    }

    if params.ate_loop_count_is_negative() {
        f = f.conjugate();
    }
    Ok(f)
}
