use zkpair_numeric::{U256, U3072};

use crate::curves::curve_params::{CurveConstants, CurveFamily, PairingCurve, TwistType};
use crate::fields::field::Field;
use crate::fields::field12::Field12Params;
use crate::fields::field2::{Field2, Field2Params};
use crate::fields::field4::Field4Params;
use crate::fields::field6::Field6Params;
use crate::fields::field_params::FieldParams;

// ---------------------------------------------------------------------------
// BN254 Base Field (Fq)
// ---------------------------------------------------------------------------

pub struct Bn254FqParams;

impl FieldParams for Bn254FqParams {
    type Limbs = [u64; 4];

    const MODULUS: [u64; 4] = [
        0x3C208C16D87CFD47,
        0x97816a916871ca8d,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ];
    const R_SQUARED: [u64; 4] = [
        0xF32CFC5B538AFA89,
        0xB5E71911D44501FB,
        0x47AB1EFF0A417FF6,
        0x06D89F71CAB8351F,
    ];
    const R_INV: u64 = 0x87d20782e4866389;
    const MODULUS_BITS: u32 = 254;
}

pub type Fq = Field<Bn254FqParams>;
pub type Fq2 = Field2<Bn254FqParams>;

// Montgomery forms of 0, 1 and -1
const ZERO: Fq = Fq::from_raw([0; 4]);
const ONE: Fq = Fq::from_raw([
    0xd35d438dc58f0d9d,
    0x0a78eb28f5c70b3d,
    0x666ea36f7879462c,
    0x0e0a77c19a07df2f,
]);
const NEG_ONE: Fq = Fq::from_raw([
    0x68c3488912edefaa,
    0x8d087f6872aabf4f,
    0x51e1a24709081231,
    0x2259d6b14729c0fa,
]);

impl Field2Params for Bn254FqParams {
    const QUADRATIC_NON_RESIDUE: Fq = NEG_ONE;
    const FP2_FROBENIUS_COEFFS: [Fq; 2] = [ONE, NEG_ONE];

    #[inline]
    fn mul_fp_by_non_residue(a: &Fq) -> Fq {
        -*a
    }
}

impl Field6Params for Bn254FqParams {
    // 9 + u
    const CUBIC_NON_RESIDUE: Fq2 = Fq2::new(
        Fq::from_raw([0xf60647ce410d7ff7, 0x2f3d6f4dd31bd011, 0x2943337e3940c6d1, 0x1d9598e8a7e39857]),
        ONE,
    );

    const FP6_FROBENIUS_COEFFS_C1: [Fq2; 6] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(
            Fq::from_raw([0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec]),
            Fq::from_raw([0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3]),
        ),
        Fq2::new(
            Fq::from_raw([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0xc9af22f716ad6bad, 0xb311782a4aa662b2, 0x19eeaf64e248c7f4, 0x20273e77e3439f82]),
            Fq::from_raw([0xacc02860f7ce93ac, 0x3933d5817ba76b4c, 0x69e6188b446c8467, 0x0a46036d4417cc55]),
        ),
        Fq2::new(
            Fq::from_raw([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0xf91aba2654e8e3b1, 0x4771cb2fdc92ce12, 0xdcb16ae0fc8bdf35, 0x274aa195cd9d8be4]),
            Fq::from_raw([0x5cfc50ae18811f8b, 0x4bb28433cb43988c, 0x4fd35f13c3b56219, 0x301949bd2fc8883a]),
        ),
    ];

    const FP6_FROBENIUS_COEFFS_C2: [Fq2; 6] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(
            Fq::from_raw([0x7361d77f843abe92, 0xa5bb2bd3273411fb, 0x9c941f314b3e2399, 0x15df9cddbb9fd3ec]),
            Fq::from_raw([0x5dddfd154bd8c949, 0x62cb29a5a4445b60, 0x37bc870a0c7dd2b9, 0x24830a9d3171f0fd]),
        ),
        Fq2::new(
            Fq::from_raw([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0x448a93a57b6762df, 0xbfd62df528fdeadf, 0xd858f5d00e9bd47a, 0x06b03d4d3476ec58]),
            Fq::from_raw([0x2b19daf4bcc936d1, 0xa1a54e7a56f4299f, 0xb533eee05adeaef1, 0x170c812b84dda0b2]),
        ),
        Fq2::new(
            Fq::from_raw([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0x843420f1d8dadbd6, 0x31f010c9183fcdb2, 0x436330b527a76049, 0x13d47447f11adfe4]),
            Fq::from_raw([0xef494023a857fa74, 0x2a925d02d5ab101a, 0x83b015829ba62f10, 0x2539111d0c13aea3]),
        ),
    ];

    /// (9 + u)(a0 + a1*u) = (9*a0 - a1) + (9*a1 + a0)*u
    #[inline]
    fn mul_by_non_residue(a: &Fq2) -> Fq2 {
        let mut t0 = a.c0 + a.c0;
        t0 += t0;
        t0 += t0;
        t0 += a.c0;
        let mut t1 = a.c1 + a.c1;
        t1 += t1;
        t1 += t1;
        t1 += a.c1;
        Fq2::new(t0 - a.c1, t1 + a.c0)
    }
}

impl Field4Params for Bn254FqParams {
    const FP4_FROBENIUS_COEFFS: [Fq2; 4] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(
            Fq::from_raw([0xe4bbdd0c2936b629, 0xbb30f162e133bacb, 0x31a9d1b6f9645366, 0x253570bea500f8dd]),
            Fq::from_raw([0xa1d77ce45ffe77c7, 0x07affd117826d1db, 0x6d16bd27bb7edc6b, 0x2c87200285defecc]),
        ),
        Fq2::new(NEG_ONE, ZERO),
        Fq2::new(
            Fq::from_raw([0x5764af0aaf46471e, 0xdc50792e873e0fc1, 0x86a673ff881d04f6, 0x0b2eddb43c30a74c]),
            Fq::from_raw([0x9a490f32787e8580, 0x8fd16d7ff04af8b1, 0x4b39888ec6027bf2, 0x03dd2e705b52a15d]),
        ),
    ];
}

impl Field12Params for Bn254FqParams {
    const FP12_FROBENIUS_COEFFS: [Fq2; 12] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(
            Fq::from_raw([0xaf9ba69633144907, 0xca6b1d7387afb78a, 0x11bded5ef08a2087, 0x02f34d751a1f3a7c]),
            Fq::from_raw([0xa222ae234c492d72, 0xd00f02a4565de15b, 0xdc2ff3a253dfc926, 0x10a75716b3899551]),
        ),
        Fq2::new(
            Fq::from_raw([0xca8d800500fa1bf2, 0xf0c5d61468b39769, 0x0e201271ad0d4418, 0x04290f65bad856e6]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0x365316184e46d97d, 0x0af7129ed4c96d9f, 0x659da72fca1009b5, 0x08116d8983a20d23]),
            Fq::from_raw([0xb1df4af7c39c1939, 0x3d9f02878a73bf7f, 0x9b2220928caf0ae0, 0x26684515eff054a6]),
        ),
        Fq2::new(
            Fq::from_raw([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0x86b76f821b329076, 0x408bf52b4d19b614, 0x53dfb9d0d985e92d, 0x051e20146982d2a7]),
            Fq::from_raw([0x0fbc9cd47752ebc7, 0x6d8fffe33415de24, 0xbef22cf038cf41b9, 0x15c0edff3c66bf54]),
        ),
        Fq2::new(NEG_ONE, ZERO),
        Fq2::new(
            Fq::from_raw([0x8c84e580a568b440, 0xcd164d1de0c21302, 0xa692585790f737d5, 0x2d7100fdc71265ad]),
            Fq::from_raw([0x99fdddf38c33cfd5, 0xc77267ed1213e931, 0xdc2052142da18f36, 0x1fbcf75c2da80ad7]),
        ),
        Fq2::new(
            Fq::from_raw([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0x05cd75fe8a3623ca, 0x8c8a57f293a85cee, 0x52b29e86b7714ea8, 0x2852e0e95d8f9306]),
            Fq::from_raw([0x8a41411f14e0e40e, 0x59e26809ddfe0b0d, 0x1d2e2523f4d24d7d, 0x09fc095cf1414b83]),
        ),
        Fq2::new(
            Fq::from_raw([0x08cfc388c494f1ab, 0x19b315148d1373d4, 0x584e90fdcb6c0213, 0x09e1685bdf2f8849]),
            ZERO,
        ),
        Fq2::new(
            Fq::from_raw([0xb5691c94bd4a6cd1, 0x56f575661b581478, 0x64708be5a7fb6f30, 0x2b462e5e77aecd82]),
            Fq::from_raw([0x2c63ef42612a1180, 0x29f16aae345bec69, 0xf95e18c648b216a4, 0x1aa36073a4cae0d4]),
        ),
    ];
}

// ---------------------------------------------------------------------------
// BN254 Scalar Field (Fr)
// ---------------------------------------------------------------------------

pub struct Bn254FrParams;

impl FieldParams for Bn254FrParams {
    type Limbs = [u64; 4];

    const MODULUS: [u64; 4] = [
        0x43E1F593F0000001,
        0x2833E84879B97091,
        0xB85045B68181585D,
        0x30644E72E131A029,
    ];
    const R_SQUARED: [u64; 4] = [
        0x1BB8E645AE216DA7,
        0x53FE3AB1E35C59E3,
        0x8C49833D53BB8085,
        0x0216D0B17F4E44A5,
    ];
    const R_INV: u64 = 0xc2e1f593efffffff;
    const MODULUS_BITS: u32 = 254;
}

pub type Fr = Field<Bn254FrParams>;

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// 6u + 2 as signed digits, least significant first.
static ATE_LOOP_TABLE: [i8; 65] = [
    0, 0, 0, 1, 0, 1, 0, -1, 0, 0, -1, 0, 0, 0, 1, 0, 0, -1, 0, -1, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0,
    -1, 0, 0, 1, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, -1, 0, 1, 0, -1, 0, 0, 0, -1, 0, -1, 0,
    0, 0, 1, 0, 1, 1,
];

/// lambda * (p^12 - 1) / r, the multiple of the canonical exponent that the
/// hard-part addition chain computes.
static FINAL_EXPONENT: U3072 = U3072::from_be_hex(concat!(
    "00000000000000000000000b12091dc4bd9ad132bcd28278a0eb11404cc45385",
    "60bfc996f315f361b5866c6aec784a2694465792b4c3f8c1b59337ff61628bb6",
    "a263cc1785a63aeb9491aafcb243b9cf9a04cf66b6070c717cfc246d4988280b",
    "4b66ec5d2d7e4493fa58f710fda4be6100a5b65c435164e22073bb80bbab9c22",
    "32fe62aef859bdb094534abcb4cb59bb519574a861926412565d8cd0db6fb15f",
    "d484877cd01d3197dab4ae0cde0ad0bd7a43d444e031e1aad4a8c292bf4cfb4f",
    "dcb8cd82b389badcd5eae5572ad394def10c145c5643815e0fe344123f46a377",
    "89e86168f2dc3b6245b0b16ce2fa52a61a3c5ccff0633ccfadca37ccfc4370e2",
    "bb3ba45c2a11d52979a938e4250828f8526944ab5c6420efcc60d3b2451ca64c",
    "fe01315e736b15a5ed26ef2edfa24c279f1b01890f1d793979cb73667e677008",
    "5cd89edadc7f6a24fb015e91736fc12d82caf72c53ce75a1e4ec10ae4fd7bd41",
    "0cf22f374fe50166ada04fd6195b1c8473245a17663153ca05213f41abb31280",
));

/// BN254 (alt_bn128): y^2 = x^3 + 3 over Fq, D-type sextic twist with
/// xi = 9 + u.
pub struct Bn254;

impl PairingCurve for Bn254 {
    type BaseFieldParams = Bn254FqParams;
    type ScalarFieldParams = Bn254FrParams;

    const NAME: &'static str = "bn254";

    fn constants() -> CurveConstants<Self> {
        CurveConstants {
            a: ZERO,
            b: Fq::from_raw([0x7a17caa950ad28d7, 0x1f6ac17ae15521b9, 0x334bea4e696bd284, 0x2a1f6744ce179d8e]),
            group_order: U256::from_be_hex(
                "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
            ),
            cofactor: U256::ONE,
            twist_type: TwistType::D,
            family: CurveFamily::Bn,
            ate_loop_count: 29793968203157093288,
            ate_loop_count_is_negative: false,
            ate_loop_table: &ATE_LOOP_TABLE,
            final_exponent_z: 4965661367192848881,
            final_exponent_z_is_negative: false,
            final_exponent: FINAL_EXPONENT.as_words(),
            frobenius_twist_x: Bn254FqParams::FP6_FROBENIUS_COEFFS_C1[1],
            frobenius_twist_y: Bn254FqParams::FP4_FROBENIUS_COEFFS[1],
            g1_generator: (
                ONE,
                Fq::from_raw([0xa6ba871b8b1e1b3a, 0x14f1d651eb8e167b, 0xccdd46def0f28c58, 0x1c14ef83340fbe5e]),
            ),
            g2_generator: (
                Fq2::new(
                    Fq::from_raw([0x8e83b5d102bc2026, 0xdceb1935497b0172, 0xfbb8264797811adf, 0x19573841af96503b]),
                    Fq::from_raw([0xafb4737da84c6140, 0x6043dd5a5802d8c4, 0x09e950fc52a02f86, 0x14fef0833aea7b6b]),
                ),
                Fq2::new(
                    Fq::from_raw([0x619dfa9d886be9f6, 0xfe7fd297f59e9b78, 0xff9e1a62231b7dfe, 0x28fd7eebae9e4206]),
                    Fq::from_raw([0x64095b56c71856ee, 0xdc57f922327d3cbb, 0x55f935be33351076, 0x0da4a0e693fd6482]),
                ),
            ),
        }
    }
}
