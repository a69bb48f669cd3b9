#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

use crate::curves::curve_params::{CurveParameters, PairingCurve};
use crate::error::EccError;
use crate::groups::{Element, G1, G2};
use crate::pairing::final_exponentiation::final_exponentiation;
use crate::pairing::gt::GtElement;
use crate::pairing::miller_loop::{miller_loop, multi_miller_loop, precompute_g2, MillerLoopCoefficients};

/// The reduced optimal ate pairing e(P, Q).
///
/// Returns one when either point is the identity. Fails with
/// `FieldMismatch` when P and Q were built from different parameter
/// instances.
#[instrument(skip_all, level = "debug", fields(curve = C::NAME))]
pub fn pairing<'p, C: PairingCurve>(
    p: &Element<'p, C, G1>,
    q: &Element<'p, C, G2>,
) -> Result<GtElement<'p, C>, EccError> {
    let params = p.params();
    if !params.same_instance(q.params()) {
        return Err(EccError::FieldMismatch);
    }
    if p.is_point_at_infinity() || q.is_point_at_infinity() {
        return Ok(GtElement::one(params));
    }
    let coeffs = precompute_g2(q)?;
    let f = miller_loop(&coeffs, p)?;
    final_exponentiation(params, &f)
}

/// Product of pairings prod e(P_i, Q_i), with one shared Miller loop and a
/// single final exponentiation.
#[instrument(skip_all, level = "debug", fields(curve = C::NAME, pairs = pairs.len()))]
pub fn pairing_product<'p, C: PairingCurve>(
    params: &'p CurveParameters<C>,
    pairs: &[(Element<'p, C, G1>, Element<'p, C, G2>)],
) -> Result<GtElement<'p, C>, EccError> {
    let mut coeffs: Vec<MillerLoopCoefficients<'p, C>> = Vec::with_capacity(pairs.len());
    for (p, q) in pairs {
        if !p.params().same_instance(params) || !q.params().same_instance(params) {
            return Err(EccError::FieldMismatch);
        }
        coeffs.push(precompute_g2(q)?);
    }
    let loop_inputs: Vec<_> = coeffs.iter().zip(pairs).map(|(c, (p, _))| (c, p)).collect();
    let f = multi_miller_loop(params, &loop_inputs)?;
    final_exponentiation(params, &f)
}

/// Whether prod e(P_i, Q_i) == 1.
pub fn pairing_check<'p, C: PairingCurve>(
    params: &'p CurveParameters<C>,
    pairs: &[(Element<'p, C, G1>, Element<'p, C, G2>)],
) -> Result<bool, EccError> {
    Ok(pairing_product(params, pairs)?.is_one())
}

/// Independent pairings of every pair, in input order.
#[cfg(feature = "parallel")]
#[instrument(skip_all, level = "debug", fields(curve = C::NAME, pairs = pairs.len()))]
pub fn batch_pairing<'p, C: PairingCurve>(
    pairs: &[(Element<'p, C, G1>, Element<'p, C, G2>)],
) -> Result<Vec<GtElement<'p, C>>, EccError> {
    pairs.par_iter().map(|(p, q)| pairing(p, q)).collect()
}

/// Independent pairings of every pair, in input order.
#[cfg(not(feature = "parallel"))]
#[instrument(skip_all, level = "debug", fields(curve = C::NAME, pairs = pairs.len()))]
pub fn batch_pairing<'p, C: PairingCurve>(
    pairs: &[(Element<'p, C, G1>, Element<'p, C, G2>)],
) -> Result<Vec<GtElement<'p, C>>, EccError> {
    pairs.iter().map(|(p, q)| pairing(p, q)).collect()
}
