//! Property-based tests for the pairing engine.
//!
//! Usage: cargo test -p zkpair_ecc --test pairing_properties
//! Set RUST_LOG=zkpair_ecc=debug to see the pairing spans.

use std::sync::Once;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use zkpair_ecc::curves::curve_params::{Fq12, PairingCurve, ScalarField};
use zkpair_ecc::curves::{Bls12_381, Bn254, CurveParameters};
use zkpair_ecc::fields::field_element::FieldElement;
use zkpair_ecc::groups::{Element, G1, G2};
use zkpair_ecc::pairing::{
    final_exponentiation, miller_loop, pairing, pairing_check, precompute_g2,
};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();
        let _ = Registry::default()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

prop_compose! {
    fn any_seed_pair()(seed_a in any::<u64>(), seed_b in any::<u64>()) -> (u64, u64) {
        (seed_a, seed_b)
    }
}

fn scalar<C: PairingCurve>(seed: u64) -> ScalarField<C> {
    let mut rng = StdRng::seed_from_u64(seed);
    ScalarField::<C>::random(&mut rng)
}

fn bilinear<C: PairingCurve>(seed_a: u64, seed_b: u64) -> Result<(), TestCaseError> {
    let params = CurveParameters::<C>::new().unwrap();
    let a = scalar::<C>(seed_a);
    let b = scalar::<C>(seed_b);
    let p = Element::<_, G1>::generator(&params);
    let q = Element::<_, G2>::generator(&params);

    // e(aP, bQ) == e(abP, Q) == e(P, abQ)
    let ab = a * b;
    let lhs = pairing(&p.mul(&a), &q.mul(&b)).unwrap();
    prop_assert_eq!(lhs, pairing(&p.mul(&ab), &q).unwrap());
    prop_assert_eq!(lhs, pairing(&p, &q.mul(&ab)).unwrap());
    Ok(())
}

fn final_exponent_literal<C: PairingCurve>(seed: u64) -> Result<(), TestCaseError> {
    let params = CurveParameters::<C>::new().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let f = Fq12::<C>::random(&mut rng);
    prop_assume!(!f.is_zero());
    let gt = final_exponentiation(&params, &f).unwrap();
    prop_assert_eq!(*gt.value(), f.pow(params.final_exponent()));
    prop_assert!(gt.pow(params.group_order().as_words()).is_one());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn bn254_pairing_is_bilinear((a, b) in any_seed_pair()) {
        init_tracing();
        bilinear::<Bn254>(a, b)?;
    }

    #[test]
    fn bls12_381_pairing_is_bilinear((a, b) in any_seed_pair()) {
        init_tracing();
        bilinear::<Bls12_381>(a, b)?;
    }

    #[test]
    fn bn254_final_exponent_literal(seed in any::<u64>()) {
        final_exponent_literal::<Bn254>(seed)?;
    }

    #[test]
    fn bls12_381_final_exponent_literal(seed in any::<u64>()) {
        final_exponent_literal::<Bls12_381>(seed)?;
    }

    #[test]
    fn bn254_precomputed_lines_match_direct_pairing((seed_p, seed_q) in any_seed_pair()) {
        let params = CurveParameters::<Bn254>::new().unwrap();
        let p = Element::<_, G1>::random_element(&params, &mut StdRng::seed_from_u64(seed_p));
        let q = Element::<_, G2>::random_element(&params, &mut StdRng::seed_from_u64(seed_q));
        let coeffs = precompute_g2(&q).unwrap();
        let f = miller_loop(&coeffs, &p).unwrap();
        prop_assert_eq!(final_exponentiation(&params, &f).unwrap(), pairing(&p, &q).unwrap());
    }

    #[test]
    fn bls12_381_check_accepts_moved_scalars(seed in any::<u64>()) {
        let params = CurveParameters::<Bls12_381>::new().unwrap();
        let a = scalar::<Bls12_381>(seed);
        let p = Element::<_, G1>::generator(&params);
        let q = Element::<_, G2>::generator(&params);
        prop_assert!(pairing_check(&params, &[(p.mul(&a), q), (-p, q.mul(&a))]).unwrap());
    }
}
