use zkpair_numeric::random::DebugRng;
use zkpair_numeric::{significant_words, U256Ext};

use crate::curves::bls12_381::{Bls12_381, Bls12_381FqParams};
use crate::curves::bn254::{Bn254, Bn254FqParams, Bn254FrParams, Fq, Fq2, Fr};
use crate::curves::curve_params::{self, CurveParameters, Fq12, PairingCurve, ScalarField};
use crate::error::EccError;
use crate::fields::field_element::FieldElement;
use crate::fields::field_params::FieldParams;
use crate::groups::affine_element::AffineElement;
use crate::groups::curve_group::{G1, G2};
use crate::groups::element::Element;
use crate::pairing::{
    batch_pairing, final_exponentiation, final_exponentiation_easy_part, miller_loop,
    multi_miller_loop, pairing, pairing_check, pairing_product, precompute_g2, GtElement,
};

// =========================================================================
// Field arithmetic tests
// =========================================================================

#[test]
fn bn254_fq_modulus_matches_known_value() {
    let m = Bn254FqParams::MODULUS;
    assert_eq!(m[0], 0x3C208C16D87CFD47);
    assert_eq!(m[1], 0x97816a916871ca8d);
    assert_eq!(m[2], 0xb85045b68181585d);
    assert_eq!(m[3], 0x30644e72e131a029);
}

#[test]
fn bn254_fr_modulus_matches_known_value() {
    let m = Bn254FrParams::MODULUS;
    assert_eq!(m[0], 0x43E1F593F0000001);
    assert_eq!(m[1], 0x2833E84879B97091);
    assert_eq!(m[2], 0xB85045B68181585D);
    assert_eq!(m[3], 0x30644E72E131A029);
}

#[test]
fn bls12_381_fq_modulus_matches_known_value() {
    let m = Bls12_381FqParams::MODULUS;
    assert_eq!(m[0], 0xb9feffffffffaaab);
    assert_eq!(m[5], 0x1a0111ea397fe69a);
    assert_eq!(Bls12_381FqParams::MODULUS_BITS, 381);
}

#[test]
fn field_mul_inverse() {
    let a = Fq::from(7u64);
    assert_eq!(a * a.invert().unwrap(), Fq::one());
    assert_eq!(Fr::zero().invert(), Err(EccError::DivisionByZero));
}

#[test]
fn fq2_non_residue_is_minus_one() {
    let u = Fq2::new(Fq::zero(), Fq::one());
    assert_eq!(u.sqr(), -Fq2::one());
}

fn check_xi_is_a_sextic_non_residue<C: PairingCurve>() {
    let params = CurveParameters::<C>::new().unwrap();
    let xi = params.xi();
    // xi is a square in Fq2 iff its norm is a square in Fq
    assert_eq!((xi * xi.conjugate()).c0.legendre(), -1);
    // xi^((p^2 - 1)/3) is the norm of xi^((p - 1)/3)
    let gamma = params.frobenius_twist_x();
    assert_ne!(gamma * gamma.conjugate(), curve_params::Fq2::<C>::one());
}

#[test]
fn xi_is_neither_square_nor_cube() {
    check_xi_is_a_sextic_non_residue::<Bn254>();
    check_xi_is_a_sextic_non_residue::<Bls12_381>();
}

#[test]
fn tower_closure_on_both_curves() {
    let mut rng = DebugRng::new(7);
    for _ in 0..3 {
        let a = Fq12::<Bn254>::random(&mut rng);
        let b = Fq12::<Bn254>::random(&mut rng);
        assert_eq!(a * b * b.invert().unwrap(), a);
        assert_eq!((a + b) - b, a);

        let c = Fq12::<Bls12_381>::random(&mut rng);
        assert_eq!(c.invert().unwrap().invert().unwrap(), c);
        assert_eq!(c.frobenius_map(12), c);
    }
}

// =========================================================================
// Group tests
// =========================================================================

#[test]
fn generators_lie_in_prime_order_subgroup() {
    let bn = CurveParameters::<Bn254>::new().unwrap();
    assert!(Element::<_, G1>::generator(&bn).is_in_prime_order_subgroup());
    assert!(Element::<_, G2>::generator(&bn).is_in_prime_order_subgroup());

    let bls = CurveParameters::<Bls12_381>::new().unwrap();
    assert!(Element::<_, G1>::generator(&bls).is_in_prime_order_subgroup());
    assert!(Element::<_, G2>::generator(&bls).is_in_prime_order_subgroup());
}

fn check_frobenius_endomorphism<C: PairingCurve>(seed: u64) {
    let params = CurveParameters::<C>::new().unwrap();
    let mut rng = DebugRng::new(seed);
    let q = Element::<_, G2>::random_element(&params, &mut rng);
    let q_affine = q.to_affine().unwrap();
    let pi_q = q_affine.frobenius_endomorphism();
    assert!(pi_q.is_on_curve());
    assert_eq!(pi_q.to_projective(), q.scalar_mul(params.modulus().as_ref()));
}

#[test]
fn frobenius_endomorphism_is_multiplication_by_p_bn254() {
    check_frobenius_endomorphism::<Bn254>(11);
}

#[test]
fn frobenius_endomorphism_is_multiplication_by_p_bls12_381() {
    check_frobenius_endomorphism::<Bls12_381>(12);
}

#[test]
fn group_order_words_match_modulus_of_scalar_field() {
    let params = CurveParameters::<Bn254>::new().unwrap();
    assert_eq!(params.group_order().limbs(), Bn254FrParams::MODULUS);
    assert_eq!(params.cofactor().limbs(), [1, 0, 0, 0]);
}

#[test]
fn affine_and_projective_agree() {
    let params = CurveParameters::<Bls12_381>::new().unwrap();
    let mut rng = DebugRng::new(13);
    let p = Element::<_, G1>::random_element(&params, &mut rng);
    let p_affine = p.to_affine().unwrap();
    assert!(p_affine.is_on_curve());
    assert_eq!(p_affine.to_projective(), p);
    assert_eq!(p.mixed_add(&p_affine).unwrap(), p.double());
    assert_eq!(
        AffineElement::<_, G1>::new(&params, p_affine.x, p_affine.y).unwrap(),
        p_affine
    );
}

// =========================================================================
// Pairing tests
// =========================================================================

fn check_bilinearity<C: PairingCurve>(seed: u64) {
    let params = CurveParameters::<C>::new().unwrap();
    let mut rng = DebugRng::new(seed);
    let a = ScalarField::<C>::random(&mut rng);
    let b = ScalarField::<C>::random(&mut rng);
    let p = Element::<_, G1>::generator(&params);
    let q = Element::<_, G2>::generator(&params);

    let base = pairing(&p, &q).unwrap();
    let lhs = pairing(&p.mul(&a), &q.mul(&b)).unwrap();
    let ab = (a * b).to_canonical_limbs();
    assert_eq!(lhs, base.pow(ab.as_ref()));
}

#[test]
fn pairing_is_bilinear_bn254() {
    check_bilinearity::<Bn254>(21);
}

#[test]
fn pairing_is_bilinear_bls12_381() {
    check_bilinearity::<Bls12_381>(22);
}

fn check_additivity<C: PairingCurve>(seed: u64) {
    let params = CurveParameters::<C>::new().unwrap();
    let mut rng = DebugRng::new(seed);
    let p1 = Element::<_, G1>::random_element(&params, &mut rng);
    let p2 = Element::<_, G1>::random_element(&params, &mut rng);
    let q1 = Element::<_, G2>::random_element(&params, &mut rng);
    let q2 = Element::<_, G2>::random_element(&params, &mut rng);
    let e11 = pairing(&p1, &q1).unwrap();

    // e(P1 + P2, Q1) == e(P1, Q1) * e(P2, Q1)
    let lhs = pairing(&p1.add(&p2).unwrap(), &q1).unwrap();
    assert_eq!(lhs, e11.mul(&pairing(&p2, &q1).unwrap()).unwrap());

    // e(P1, Q1 + Q2) == e(P1, Q1) * e(P1, Q2)
    let lhs = pairing(&p1, &q1.add(&q2).unwrap()).unwrap();
    assert_eq!(lhs, e11.mul(&pairing(&p1, &q2).unwrap()).unwrap());
}

#[test]
fn pairing_is_additive_bn254() {
    check_additivity::<Bn254>(23);
}

#[test]
fn pairing_is_additive_bls12_381() {
    check_additivity::<Bls12_381>(24);
}

#[test]
fn pairing_is_non_degenerate() {
    let bn = CurveParameters::<Bn254>::new().unwrap();
    let e = pairing(&Element::generator(&bn), &Element::generator(&bn)).unwrap();
    assert!(!e.is_one());

    let bls = CurveParameters::<Bls12_381>::new().unwrap();
    let e = pairing(&Element::generator(&bls), &Element::generator(&bls)).unwrap();
    assert!(!e.is_one());
}

#[test]
fn pairing_with_identity_is_one() {
    let params = CurveParameters::<Bn254>::new().unwrap();
    let p = Element::<_, G1>::generator(&params);
    let q = Element::<_, G2>::generator(&params);
    assert_eq!(pairing(&Element::infinity(&params), &q).unwrap(), GtElement::one(&params));
    assert_eq!(pairing(&p, &Element::infinity(&params)).unwrap(), GtElement::one(&params));
}

#[test]
fn pairing_lands_in_order_r_subgroup() {
    for seed in [31, 32] {
        let params = CurveParameters::<Bls12_381>::new().unwrap();
        let mut rng = DebugRng::new(seed);
        let p = Element::<_, G1>::random_element(&params, &mut rng);
        let q = Element::<_, G2>::random_element(&params, &mut rng);
        let e = pairing(&p, &q).unwrap();
        assert!(e.pow(params.group_order().as_words()).is_one());
    }

    let params = CurveParameters::<Bn254>::new().unwrap();
    let e = pairing(&Element::generator(&params), &Element::generator(&params)).unwrap();
    assert!(e.pow(params.group_order().as_words()).is_one());
}

#[test]
fn bn254_doubling_moves_across_the_pairing() {
    let params = CurveParameters::<Bn254>::new().unwrap();
    let p = Element::<_, G1>::generator(&params);
    let q = Element::<_, G2>::generator(&params);

    let e = pairing(&p, &q).unwrap();
    let e_2p_q = pairing(&p.double(), &q).unwrap();
    let e_p_2q = pairing(&p, &q.double()).unwrap();

    assert!(!e.is_one());
    assert_eq!(e_2p_q, e_p_2q);
    assert_eq!(e_2p_q, e.sqr());
    assert_eq!(e_2p_q, e.mul(&e).unwrap());
}

#[test]
fn final_exponent_literal_widths() {
    let bn = CurveParameters::<Bn254>::new().unwrap();
    assert_eq!(significant_words(bn.final_exponent()), 47);
    let bls = CurveParameters::<Bls12_381>::new().unwrap();
    assert_eq!(significant_words(bls.final_exponent()), 68);
}

#[test]
fn final_exponentiation_of_a_miller_loop_matches_the_literal() {
    let params = CurveParameters::<Bn254>::new().unwrap();
    let mut rng = DebugRng::new(41);
    let q = Element::<_, G2>::random_element(&params, &mut rng);
    let p = Element::<_, G1>::random_element(&params, &mut rng);
    let f = miller_loop(&precompute_g2(&q).unwrap(), &p).unwrap();
    let gt = final_exponentiation(&params, &f).unwrap();
    assert_eq!(*gt.value(), f.pow(params.final_exponent()));
    assert_eq!(gt, pairing(&p, &q).unwrap());
}

#[test]
fn cyclotomic_squaring_on_easy_part_outputs() {
    let params = CurveParameters::<Bls12_381>::new().unwrap();
    let mut rng = DebugRng::new(42);
    let q = Element::<_, G2>::random_element(&params, &mut rng);
    let p = Element::<_, G1>::random_element(&params, &mut rng);
    let f = miller_loop(&precompute_g2(&q).unwrap(), &p).unwrap();
    let g = final_exponentiation_easy_part(&f).unwrap();
    assert!(g.is_cyclotomic());
    assert_eq!(g.cyclotomic_squared(), g.sqr());
    assert_eq!(g.unitary_inverse(), g.invert().unwrap());
}

#[test]
fn precomputed_lines_are_reusable() {
    let params = CurveParameters::<Bls12_381>::new().unwrap();
    let mut rng = DebugRng::new(51);
    let q = Element::<_, G2>::random_element(&params, &mut rng);
    let coeffs = precompute_g2(&q).unwrap();
    for _ in 0..2 {
        let p = Element::<_, G1>::random_element(&params, &mut rng);
        let f = miller_loop(&coeffs, &p).unwrap();
        assert_eq!(final_exponentiation(&params, &f).unwrap(), pairing(&p, &q).unwrap());
    }
}

#[test]
fn multi_miller_loop_matches_product_of_pairings() {
    let params = CurveParameters::<Bn254>::new().unwrap();
    let mut rng = DebugRng::new(52);
    let p1 = Element::<_, G1>::random_element(&params, &mut rng);
    let p2 = Element::<_, G1>::random_element(&params, &mut rng);
    let q1 = Element::<_, G2>::random_element(&params, &mut rng);
    let q2 = Element::<_, G2>::random_element(&params, &mut rng);
    let c1 = precompute_g2(&q1).unwrap();
    let c2 = precompute_g2(&q2).unwrap();

    let f = multi_miller_loop(&params, &[(&c1, &p1), (&c2, &p2)]).unwrap();
    let combined = final_exponentiation(&params, &f).unwrap();
    let expected = pairing(&p1, &q1).unwrap().mul(&pairing(&p2, &q2).unwrap()).unwrap();
    assert_eq!(combined, expected);
    assert_eq!(pairing_product(&params, &[(p1, q1), (p2, q2)]).unwrap(), expected);
}

#[test]
fn pairing_check_on_cancelling_pairs() {
    let params = CurveParameters::<Bn254>::new().unwrap();
    let mut rng = DebugRng::new(53);
    let a = Fr::random(&mut rng);
    let p = Element::<_, G1>::random_element(&params, &mut rng);
    let q = Element::<_, G2>::random_element(&params, &mut rng);

    assert!(pairing_check(&params, &[(p.mul(&a), q), (-p, q.mul(&a))]).unwrap());
    assert!(!pairing_check(&params, &[(p.mul(&a), q), (p, q)]).unwrap());
    assert!(pairing_check(&params, &[]).unwrap());
}

#[test]
fn gt_inverse_and_pow() {
    let params = CurveParameters::<Bls12_381>::new().unwrap();
    let e = pairing(&Element::generator(&params), &Element::generator(&params)).unwrap();
    assert!(e.mul(&e.inverse()).unwrap().is_one());
    assert_eq!(e.pow(&[3]), e.sqr().mul(&e).unwrap());
    assert_eq!(e.pow(&[]), GtElement::one(&params));
}

#[test]
fn operands_from_two_instances_are_rejected() {
    let a = CurveParameters::<Bls12_381>::new().unwrap();
    let b = CurveParameters::<Bls12_381>::new().unwrap();

    let pa = Element::<_, G1>::generator(&a);
    let pb = Element::<_, G1>::generator(&b);
    let qa = Element::<_, G2>::generator(&a);
    let qb = Element::<_, G2>::generator(&b);

    assert_eq!(pa.add(&pb).unwrap_err(), EccError::CurveMismatch);
    assert_eq!(qa.sub(&qb).unwrap_err(), EccError::CurveMismatch);
    assert_eq!(pairing(&pa, &qb).unwrap_err(), EccError::FieldMismatch);
    assert_eq!(
        miller_loop(&precompute_g2(&qa).unwrap(), &pb).unwrap_err(),
        EccError::FieldMismatch
    );

    let ea = pairing(&pa, &qa).unwrap();
    let eb = pairing(&pb, &qb).unwrap();
    assert_eq!(ea.mul(&eb).unwrap_err(), EccError::FieldMismatch);
    assert_ne!(ea, eb);
    assert_eq!(ea.value(), eb.value());
}

#[test]
fn batch_pairing_agrees_with_sequential() {
    let params = CurveParameters::<Bls12_381>::new().unwrap();
    let mut rng = DebugRng::new(61);
    let pairs: Vec<_> = (0..3)
        .map(|_| {
            (
                Element::<_, G1>::random_element(&params, &mut rng),
                Element::<_, G2>::random_element(&params, &mut rng),
            )
        })
        .collect();
    let batch = batch_pairing(&pairs).unwrap();
    let sequential: Vec<_> = pairs.iter().map(|(p, q)| pairing(p, q).unwrap()).collect();
    assert_eq!(batch, sequential);
    assert!(batch_pairing::<Bls12_381>(&[]).unwrap().is_empty());
}
