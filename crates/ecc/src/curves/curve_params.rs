use std::fmt;

use tracing::debug;
use zkpair_numeric::bitop::signed_digits_value;
use zkpair_numeric::U256;

use crate::error::EccError;
use crate::fields::field::Field;
use crate::fields::field12::{Field12, Field12Params};
use crate::fields::field2::Field2;
use crate::fields::field6::Field6Params;
use crate::fields::field_params::FieldParams;

/// Which side of the sextic twist the G2 curve sits on.
///
/// D-type: E'(Fp2): y^2 = x^3 + b/xi. M-type: E'(Fp2): y^2 = x^3 + b*xi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwistType {
    D,
    M,
}

/// Pairing-friendly family, selects the hard part of the final exponentiation
/// and whether the Miller loop appends the two Frobenius lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFamily {
    Bn,
    Bls12,
}

/// A pairing-friendly curve: the type-level field parameters plus the
/// value-level constants that `CurveParameters` validates once.
pub trait PairingCurve: 'static + Send + Sync + Sized {
    type BaseFieldParams: Field12Params;
    type ScalarFieldParams: FieldParams;

    const NAME: &'static str;

    fn constants() -> CurveConstants<Self>;
}

// Convenience type aliases
pub type BaseField<C> = Field<<C as PairingCurve>::BaseFieldParams>;
pub type ScalarField<C> = Field<<C as PairingCurve>::ScalarFieldParams>;
pub type Fq2<C> = Field2<<C as PairingCurve>::BaseFieldParams>;
pub type Fq12<C> = Field12<<C as PairingCurve>::BaseFieldParams>;

/// Raw curve data as shipped with a curve. Nothing here has been checked;
/// `CurveParameters::from_constants` does that.
pub struct CurveConstants<C: PairingCurve> {
    pub a: BaseField<C>,
    pub b: BaseField<C>,
    pub group_order: U256,
    /// G1 cofactor.
    pub cofactor: U256,
    pub twist_type: TwistType,
    pub family: CurveFamily,
    /// |6u+2| for BN, |x| for BLS12.
    pub ate_loop_count: u128,
    pub ate_loop_count_is_negative: bool,
    /// Signed digits of `ate_loop_count`, least significant first.
    pub ate_loop_table: &'static [i8],
    /// |u| for BN, |x| for BLS12.
    pub final_exponent_z: u64,
    pub final_exponent_z_is_negative: bool,
    /// Little-endian words of the exponent the final exponentiation realizes.
    pub final_exponent: &'static [u64],
    /// xi^((p-1)/3), multiplies the conjugated x-coordinate in the G2 Frobenius.
    pub frobenius_twist_x: Fq2<C>,
    /// xi^((p-1)/2), multiplies the conjugated y-coordinate in the G2 Frobenius.
    pub frobenius_twist_y: Fq2<C>,
    pub g1_generator: (BaseField<C>, BaseField<C>),
    pub g2_generator: (Fq2<C>, Fq2<C>),
}

// Manual Clone/Copy because C is a marker type without derives
impl<C: PairingCurve> Clone for CurveConstants<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PairingCurve> Copy for CurveConstants<C> {}

/// Validated, immutable parameters of one curve. Points and Miller loop
/// coefficients borrow a `CurveParameters`; operands built from two
/// different instances are never combined.
pub struct CurveParameters<C: PairingCurve> {
    constants: CurveConstants<C>,
    twist_b: Fq2<C>,
    two_inv: BaseField<C>,
}

impl<C: PairingCurve> fmt::Debug for CurveParameters<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveParameters")
            .field("curve", &C::NAME)
            .field("twist_type", &self.constants.twist_type)
            .field("family", &self.constants.family)
            .field("ate_loop_count", &self.constants.ate_loop_count)
            .finish()
    }
}

impl<C: PairingCurve> CurveParameters<C> {
    /// Parameters of the shipped curve `C`.
    pub fn new() -> Result<Self, EccError> {
        Self::from_constants(C::constants())
    }

    /// Validate `constants` and precompute the twisted coefficient.
    pub fn from_constants(constants: CurveConstants<C>) -> Result<Self, EccError> {
        validate_loop_table(
            constants.ate_loop_table,
            constants.ate_loop_count,
        )?;

        let xi = C::BaseFieldParams::CUBIC_NON_RESIDUE;
        let b2 = Fq2::<C>::new(constants.b, Field::zero());
        let twist_b = match constants.twist_type {
            TwistType::D => b2 * xi.invert()?,
            TwistType::M => b2 * xi,
        };
        let two_inv = BaseField::<C>::from(2).invert()?;

        let (gx, gy) = constants.g1_generator;
        if gy.sqr() != gx.sqr() * gx + constants.a * gx + constants.b {
            return Err(EccError::PointNotOnCurve);
        }
        let (hx, hy) = constants.g2_generator;
        if hy.sqr() != hx.sqr() * hx + twist_b {
            return Err(EccError::PointNotOnCurve);
        }

        debug!(
            curve = C::NAME,
            twist = ?constants.twist_type,
            family = ?constants.family,
            loop_digits = constants.ate_loop_table.len(),
            "curve parameters validated"
        );

        Ok(Self {
            constants,
            twist_b,
            two_inv,
        })
    }

    pub fn name(&self) -> &'static str {
        C::NAME
    }

    /// Base field modulus p, little-endian limbs.
    pub fn modulus(&self) -> <C::BaseFieldParams as FieldParams>::Limbs {
        C::BaseFieldParams::MODULUS
    }

    pub fn a(&self) -> BaseField<C> {
        self.constants.a
    }

    pub fn b(&self) -> BaseField<C> {
        self.constants.b
    }

    /// b on the twist: b/xi (D-type) or b*xi (M-type).
    pub fn twist_b(&self) -> Fq2<C> {
        self.twist_b
    }

    /// The sextic non-residue xi.
    pub fn xi(&self) -> Fq2<C> {
        C::BaseFieldParams::CUBIC_NON_RESIDUE
    }

    pub fn two_inv(&self) -> BaseField<C> {
        self.two_inv
    }

    pub fn group_order(&self) -> &U256 {
        &self.constants.group_order
    }

    pub fn cofactor(&self) -> &U256 {
        &self.constants.cofactor
    }

    pub fn twist_type(&self) -> TwistType {
        self.constants.twist_type
    }

    pub fn family(&self) -> CurveFamily {
        self.constants.family
    }

    pub fn ate_loop_count(&self) -> u128 {
        self.constants.ate_loop_count
    }

    pub fn ate_loop_count_is_negative(&self) -> bool {
        self.constants.ate_loop_count_is_negative
    }

    pub fn ate_loop_table(&self) -> &'static [i8] {
        self.constants.ate_loop_table
    }

    pub fn final_exponent_z(&self) -> u64 {
        self.constants.final_exponent_z
    }

    pub fn final_exponent_z_is_negative(&self) -> bool {
        self.constants.final_exponent_z_is_negative
    }

    pub fn final_exponent(&self) -> &'static [u64] {
        self.constants.final_exponent
    }

    pub fn frobenius_twist_x(&self) -> Fq2<C> {
        self.constants.frobenius_twist_x
    }

    pub fn frobenius_twist_y(&self) -> Fq2<C> {
        self.constants.frobenius_twist_y
    }

    pub fn g1_generator(&self) -> (BaseField<C>, BaseField<C>) {
        self.constants.g1_generator
    }

    pub fn g2_generator(&self) -> (Fq2<C>, Fq2<C>) {
        self.constants.g2_generator
    }

    /// Identity of two parameter instances.
    #[inline]
    pub fn same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

fn validate_loop_table(table: &[i8], ate_loop_count: u128) -> Result<(), EccError> {
    let Some(&top) = table.last() else {
        return Err(EccError::InvalidLoopTable("empty table"));
    };
    if table.iter().any(|d| !(-1..=1).contains(d)) {
        return Err(EccError::InvalidLoopTable("digit outside {-1, 0, 1}"));
    }
    if top == 0 {
        return Err(EccError::InvalidLoopTable("most significant digit is zero"));
    }
    let value = signed_digits_value(table)
        .ok_or(EccError::InvalidLoopTable("table value overflows"))?;
    if value != ate_loop_count as i128 {
        return Err(EccError::InvalidLoopTable(
            "table does not decode to the ate loop count",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::bls12_381::Bls12_381;
    use crate::curves::bn254::Bn254;

    #[test]
    fn shipped_curves_validate() {
        let bn = CurveParameters::<Bn254>::new().unwrap();
        assert_eq!(bn.twist_type(), TwistType::D);
        assert_eq!(bn.family(), CurveFamily::Bn);
        assert!(!bn.ate_loop_count_is_negative());
        assert_eq!(bn.twist_b() * bn.xi(), Fq2::<Bn254>::new(bn.b(), Field::zero()));

        let bls = CurveParameters::<Bls12_381>::new().unwrap();
        assert_eq!(bls.twist_type(), TwistType::M);
        assert_eq!(bls.family(), CurveFamily::Bls12);
        assert!(bls.ate_loop_count_is_negative());
        assert_eq!(bls.twist_b(), Fq2::<Bls12_381>::new(bls.b(), Field::zero()) * bls.xi());
        assert_eq!(bls.two_inv().double(), BaseField::<Bls12_381>::one());
    }

    #[test]
    fn loop_table_round_trip() {
        for (table, count) in [
            (Bn254::constants().ate_loop_table, Bn254::constants().ate_loop_count),
            (Bls12_381::constants().ate_loop_table, Bls12_381::constants().ate_loop_count),
        ] {
            assert_eq!(signed_digits_value(table), Some(count as i128));
        }
    }

    #[test]
    fn corrupted_loop_tables_are_rejected() {
        static BAD_DIGIT: [i8; 3] = [1, 2, 1];
        static ZERO_TOP: [i8; 3] = [1, 1, 0];
        static WRONG_VALUE: [i8; 3] = [1, 0, 1];

        let cases: [(&'static [i8], &str); 4] = [
            (&[], "empty table"),
            (&BAD_DIGIT, "digit outside {-1, 0, 1}"),
            (&ZERO_TOP, "most significant digit is zero"),
            (&WRONG_VALUE, "table does not decode to the ate loop count"),
        ];
        for (table, reason) in cases {
            let mut constants = Bn254::constants();
            constants.ate_loop_table = table;
            assert_eq!(
                CurveParameters::from_constants(constants).unwrap_err(),
                EccError::InvalidLoopTable(reason)
            );
        }
    }

    #[test]
    fn off_curve_generator_is_rejected() {
        let mut constants = Bls12_381::constants();
        constants.g1_generator.1 += BaseField::<Bls12_381>::one();
        assert_eq!(
            CurveParameters::from_constants(constants).unwrap_err(),
            EccError::PointNotOnCurve
        );

        let mut constants = Bn254::constants();
        constants.g2_generator.0 = constants.g2_generator.0.double();
        assert_eq!(
            CurveParameters::from_constants(constants).unwrap_err(),
            EccError::PointNotOnCurve
        );
    }

    #[test]
    fn instances_are_distinct() {
        let a = CurveParameters::<Bn254>::new().unwrap();
        let b = CurveParameters::<Bn254>::new().unwrap();
        assert!(a.same_instance(&a));
        assert!(!a.same_instance(&b));
    }
}
