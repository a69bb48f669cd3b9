use zkpair_numeric::{U256, U4352};

use crate::curves::curve_params::{CurveConstants, CurveFamily, PairingCurve, TwistType};
use crate::fields::field::Field;
use crate::fields::field12::Field12Params;
use crate::fields::field2::{Field2, Field2Params};
use crate::fields::field4::Field4Params;
use crate::fields::field6::Field6Params;
use crate::fields::field_params::FieldParams;

// ---------------------------------------------------------------------------
// BLS12-381 Base Field (Fq)
// ---------------------------------------------------------------------------

pub struct Bls12_381FqParams;

impl FieldParams for Bls12_381FqParams {
    type Limbs = [u64; 6];

    const MODULUS: [u64; 6] = [
        0xb9feffffffffaaab,
        0x1eabfffeb153ffff,
        0x6730d2a0f6b0f624,
        0x64774b84f38512bf,
        0x4b1ba7b6434bacd7,
        0x1a0111ea397fe69a,
    ];
    const R_SQUARED: [u64; 6] = [
        0xf4df1f341c341746,
        0x0a76e6a609d104f1,
        0x8de5476c4c95b6d5,
        0x67eb88a9939d83c0,
        0x9a793e85b519952d,
        0x11988fe592cae3aa,
    ];
    const R_INV: u64 = 0x89f3fffcfffcfffd;
    const MODULUS_BITS: u32 = 381;
}

pub type Fq = Field<Bls12_381FqParams>;
pub type Fq2 = Field2<Bls12_381FqParams>;

const ZERO: Fq = Fq::from_raw([0; 6]);
const ONE: Fq = Fq::from_raw([
    0x760900000002fffd,
    0xebf4000bc40c0002,
    0x5f48985753c758ba,
    0x77ce585370525745,
    0x5c071a97a256ec6d,
    0x15f65ec3fa80e493,
]);
const NEG_ONE: Fq = Fq::from_raw([
    0x43f5fffffffcaaae,
    0x32b7fff2ed47fffd,
    0x07e83a49a2e99d69,
    0xeca8f3318332bb7a,
    0xef148d1ea0f4c069,
    0x040ab3263eff0206,
]);

// Recurring Frobenius coefficients. Each of these lies in Fq.
const CUBE_ROOT_OF_UNITY: Fq = Fq::from_raw([
    0xcd03c9e48671f071,
    0x5dab22461fcda5d2,
    0x587042afd3851b95,
    0x8eb60ebe01bacb9e,
    0x03f97d6e83d050d2,
    0x18f0206554638741,
]);
const CUBE_ROOT_OF_UNITY_SQ: Fq = Fq::from_raw([
    0x30f1361b798a64e8,
    0xf3b8ddab7ece5a2a,
    0x16a8ca3ac61577f7,
    0xc26a2ff874fd029b,
    0x3636b76660701c6e,
    0x051ba4ab241b6160,
]);
const SIXTH_ROOT_OF_UNITY: Fq = Fq::from_raw([
    0x890dc9e4867545c3,
    0x2af322533285a5d5,
    0x50880866309b7e2c,
    0xa20d1b8c7e881024,
    0x14e4f04fe2db9068,
    0x14e56d3f1564853a,
]);
const SIXTH_ROOT_OF_UNITY_INV: Fq = Fq::from_raw([
    0xecfb361b798dba3a,
    0xc100ddb891865a2c,
    0x0ec08ff1232bda8e,
    0xd5c13cc6f1ca4721,
    0x47222a47bf7b5c04,
    0x0110f184e51c5f59,
]);
const FP4_C1: Fq = Fq::from_raw([
    0x7bcfa7a25aa30fda,
    0xdc17dec12a927e7c,
    0x2f088dd86b4ebef1,
    0xd1ca2087da74d4a7,
    0x2da2596696cebc1d,
    0x0e2b7eedbbfd87d2,
]);
const FP4_C3: Fq = Fq::from_raw([
    0x3e2f585da55c9ad1,
    0x4294213d86c18183,
    0x382844c88b623732,
    0x92ad2afd19103e18,
    0x1d794e4fac7cf0b9,
    0x0bd592fc7d825ec8,
]);
const FP12_A: Fq = Fq::from_raw([
    0x07089552b319d465,
    0xc6695f92b50a8313,
    0x97e83cccd117228f,
    0xa35baecab2dc29ee,
    0x1ce393ea5daace4d,
    0x08f2220fb0fb66eb,
]);
const FP12_B: Fq = Fq::from_raw([
    0xb2f66aad4ce5d646,
    0x5842a06bfc497cec,
    0xcf4895d42599d394,
    0xc11b9cba40a8e8d0,
    0x2e3813cbe5a0de89,
    0x110eefda88847faf,
]);
const FP12_C: Fq = Fq::from_raw([
    0x3726c30af242c66c,
    0x7c2ac1aad1b6fe70,
    0xa04007fbba4b14a2,
    0xef517c3266341429,
    0x0095ba654ed2226b,
    0x02e370eccc86f7dd,
]);
const FP12_D: Fq = Fq::from_raw([
    0x82d83cf50dbce43f,
    0xa2813e53df9d018f,
    0xc6f0caa53c65e181,
    0x7525cf528d50fe95,
    0x4a85ed50f4798a6b,
    0x171da0fd6cf8eebd,
]);

impl Field2Params for Bls12_381FqParams {
    const QUADRATIC_NON_RESIDUE: Fq = NEG_ONE;
    const FP2_FROBENIUS_COEFFS: [Fq; 2] = [ONE, NEG_ONE];

    #[inline]
    fn mul_fp_by_non_residue(a: &Fq) -> Fq {
        -*a
    }
}

impl Field6Params for Bls12_381FqParams {
    // 1 + u
    const CUBIC_NON_RESIDUE: Fq2 = Fq2::new(ONE, ONE);

    const FP6_FROBENIUS_COEFFS_C1: [Fq2; 6] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(ZERO, CUBE_ROOT_OF_UNITY),
        Fq2::new(CUBE_ROOT_OF_UNITY_SQ, ZERO),
        Fq2::new(ZERO, ONE),
        Fq2::new(CUBE_ROOT_OF_UNITY, ZERO),
        Fq2::new(ZERO, CUBE_ROOT_OF_UNITY_SQ),
    ];

    const FP6_FROBENIUS_COEFFS_C2: [Fq2; 6] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(SIXTH_ROOT_OF_UNITY, ZERO),
        Fq2::new(CUBE_ROOT_OF_UNITY, ZERO),
        Fq2::new(NEG_ONE, ZERO),
        Fq2::new(CUBE_ROOT_OF_UNITY_SQ, ZERO),
        Fq2::new(SIXTH_ROOT_OF_UNITY_INV, ZERO),
    ];

    /// (1 + u)(a0 + a1*u) = (a0 - a1) + (a0 + a1)*u
    #[inline]
    fn mul_by_non_residue(a: &Fq2) -> Fq2 {
        Fq2::new(a.c0 - a.c1, a.c0 + a.c1)
    }
}

impl Field4Params for Bls12_381FqParams {
    const FP4_FROBENIUS_COEFFS: [Fq2; 4] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(FP4_C1, FP4_C1),
        Fq2::new(NEG_ONE, ZERO),
        Fq2::new(FP4_C3, FP4_C3),
    ];
}

impl Field12Params for Bls12_381FqParams {
    const FP12_FROBENIUS_COEFFS: [Fq2; 12] = [
        Fq2::new(ONE, ZERO),
        Fq2::new(FP12_A, FP12_B),
        Fq2::new(SIXTH_ROOT_OF_UNITY_INV, ZERO),
        Fq2::new(FP4_C3, FP4_C1),
        Fq2::new(CUBE_ROOT_OF_UNITY_SQ, ZERO),
        Fq2::new(FP12_C, FP12_D),
        Fq2::new(NEG_ONE, ZERO),
        Fq2::new(FP12_B, FP12_A),
        Fq2::new(CUBE_ROOT_OF_UNITY, ZERO),
        Fq2::new(FP4_C1, FP4_C3),
        Fq2::new(SIXTH_ROOT_OF_UNITY, ZERO),
        Fq2::new(FP12_D, FP12_C),
    ];
}

// ---------------------------------------------------------------------------
// BLS12-381 Scalar Field (Fr)
// ---------------------------------------------------------------------------

pub struct Bls12_381FrParams;

impl FieldParams for Bls12_381FrParams {
    type Limbs = [u64; 4];

    const MODULUS: [u64; 4] = [
        0xffffffff00000001,
        0x53bda402fffe5bfe,
        0x3339d80809a1d805,
        0x73eda753299d7d48,
    ];
    const R_SQUARED: [u64; 4] = [
        0xc999e990f3f29c6d,
        0x2b6cedcb87925c23,
        0x05d314967254398f,
        0x0748d9d99f59ff11,
    ];
    const R_INV: u64 = 0xfffffffeffffffff;
    const MODULUS_BITS: u32 = 255;
}

pub type Fr = Field<Bls12_381FrParams>;

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// |x| = 0xd201000000010000 as binary digits, least significant first.
static ATE_LOOP_TABLE: [i8; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1,
];

/// 3 * (p^12 - 1) / r
static FINAL_EXPONENT: U4352 = U4352::from_be_hex(concat!(
    "0000000008ca592196587127a538fd40dc3e541f9dca04bb7dc671be77cf1771",
    "5a2b2fe3bea73dfb468d8f473094aecb7315a664019fbd84913caba6579c08fd",
    "42009fe1bd6fcbce15eacb2cf3218a165958cb8bfdae2d2d54207282314fc0de",
    "a9d6ff3a07dbd34efb77b732ba5f994816e296a72928cfee133bdc3ca9412b98",
    "4b9783d9c6aa81297ab1cd294a502304773528bbae8706979f28efa0d355b022",
    "4e2513d6e4a5d3bb4dde0523678105d9167ff1323d6e99ac312d8a7d76233637",
    "0c4347bb5a7e405d6f3496b2dd38e722d4c1f3ac25e3167ec2cb543d69430c37",
    "c2f98fcdd0dd36caa9f5aa7994cec31b24ed5e515911037b376e521070d29c9d",
    "56cfa8c3574363efb20f28c19e4105ab99edd44084bd23725017931d6740bda7",
    "1e5f07600ce6b407e543c4bc40bcd4c0b600e6c98003bf8548986b14d9098746",
    "dc89d154af91ad54f337b31c79222145dd3ed254fdeda0300c49ebcd2352765f",
    "533883a3513435f3ee452496f5166c25bf503bd6ec0a0679efda3b46ebf86211",
    "d458de749460d4a2a19abe6ea2accb451ab9a096b98465d044dc2a7f86c253a4",
    "ee57b6df108eff598a8dbc483bf8b74c2789939db85ffd7e0fd55b32bc26877f",
    "5be26fa7d750500ce2fab93c0cbe7336b126a5693d0c16484f37addccc764259",
    "0dbe98538990b88637e374d545d9b34b67448d0357e60280bbd8542f1f4e813c",
    "aa8e8db57364b4e0cc14f35af381dd9b71ec9292b3a3f16e42362d2019e05f30",
));

/// BLS12-381: y^2 = x^3 + 4 over Fq, M-type sextic twist with xi = 1 + u
/// and curve parameter x = -0xd201000000010000.
pub struct Bls12_381;

impl PairingCurve for Bls12_381 {
    type BaseFieldParams = Bls12_381FqParams;
    type ScalarFieldParams = Bls12_381FrParams;

    const NAME: &'static str = "bls12_381";

    fn constants() -> CurveConstants<Self> {
        CurveConstants {
            a: ZERO,
            b: Fq::from_raw([
                0xaa270000000cfff3,
                0x53cc0032fc34000a,
                0x478fe97a6b0a807f,
                0xb1d37ebee6ba24d7,
                0x8ec9733bbf78ab2f,
                0x09d645513d83de7e,
            ]),
            group_order: U256::from_be_hex(
                "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
            ),
            cofactor: U256::from_be_hex(
                "00000000000000000000000000000000396c8c005555e1568c00aaab0000aaab",
            ),
            twist_type: TwistType::M,
            family: CurveFamily::Bls12,
            ate_loop_count: 0xd201000000010000,
            ate_loop_count_is_negative: true,
            ate_loop_table: &ATE_LOOP_TABLE,
            final_exponent_z: 0xd201000000010000,
            final_exponent_z_is_negative: true,
            final_exponent: FINAL_EXPONENT.as_words(),
            // xi^-((p-1)/3) and xi^-((p-1)/2): the M-type untwist divides by w
            frobenius_twist_x: Fq2::new(ZERO, SIXTH_ROOT_OF_UNITY),
            frobenius_twist_y: Fq2::new(FP4_C3, FP4_C1),
            g1_generator: (
                Fq::from_raw([
                    0x5cb38790fd530c16,
                    0x7817fc679976fff5,
                    0x154f95c7143ba1c1,
                    0xf0ae6acdf3d0e747,
                    0xedce6ecc21dbf440,
                    0x120177419e0bfb75,
                ]),
                Fq::from_raw([
                    0xbaac93d50ce72271,
                    0x8c22631a7918fd8e,
                    0xdd595f13570725ce,
                    0x51ac582950405194,
                    0x0e1c8c3fad0059c0,
                    0x0bbc3efc5008a26a,
                ]),
            ),
            g2_generator: (
                Fq2::new(
                    Fq::from_raw([
                        0xf5f28fa202940a10,
                        0xb3f5fb2687b4961a,
                        0xa1a893b53e2ae580,
                        0x9894999d1a3caee9,
                        0x6f67b7631863366b,
                        0x058191924350bcd7,
                    ]),
                    Fq::from_raw([
                        0xa5a9c0759e23f606,
                        0xaaa0c59dbccd60c3,
                        0x3bb17e18e2867806,
                        0x1b1ab6cc8541b367,
                        0xc2b6ed0ef2158547,
                        0x11922a097360edf3,
                    ]),
                ),
                Fq2::new(
                    Fq::from_raw([
                        0x4c730af860494c4a,
                        0x597cfa1f5e369c5a,
                        0xe7e6856caa0a635a,
                        0xbbefb5e96e0d495f,
                        0x07d3a975f0ef25a2,
                        0x0083fd8e7e80dae5,
                    ]),
                    Fq::from_raw([
                        0xadc0fc92df64b05d,
                        0x18aa270a2b1461dc,
                        0x86adac6a3be4eba0,
                        0x79495c4ec93da33a,
                        0xe7175850a43ccaed,
                        0x0b2bc2a163de1bf2,
                    ]),
                ),
            ),
        }
    }
}
