// Sextic extension field Fq6 = Fq2[v] / (v^3 - xi)
//
// Elements are triples (c0, c1, c2) of Field2 elements.
// xi is a non-residue in Fq2, provided by the Field6Params trait.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use super::field2::{Field2, Field2Params};
use super::field_element::FieldElement;
use crate::error::EccError;

/// Cubic-over-quadratic constants. Extends Field2Params with the sextic
/// non-residue xi and the Fp6 Frobenius tables.
pub trait Field6Params: Field2Params {
    /// xi, with v^3 = xi.
    const CUBIC_NON_RESIDUE: Field2<Self>;

    /// xi^((p^i - 1) / 3) for i = 0..6, applied to c1.
    const FP6_FROBENIUS_COEFFS_C1: [Field2<Self>; 6];

    /// xi^(2(p^i - 1) / 3) for i = 0..6, applied to c2.
    const FP6_FROBENIUS_COEFFS_C2: [Field2<Self>; 6];

    /// Multiply an Fq2 element by xi. Curves override this with an
    /// addition chain for their small xi.
    #[inline]
    fn mul_by_non_residue(a: &Field2<Self>) -> Field2<Self> {
        *a * Self::CUBIC_NON_RESIDUE
    }
}

pub struct Field6<P: Field6Params> {
    pub c0: Field2<P>,
    pub c1: Field2<P>,
    pub c2: Field2<P>,
}

impl<P: Field6Params> Clone for Field6<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Field6Params> Copy for Field6<P> {}

impl<P: Field6Params> std::fmt::Debug for Field6<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field6({:?}, {:?}, {:?})", self.c0, self.c1, self.c2)
    }
}

impl<P: Field6Params> Field6<P> {
    #[inline]
    pub const fn new(c0: Field2<P>, c1: Field2<P>, c2: Field2<P>) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            c0: Field2::zero(),
            c1: Field2::zero(),
            c2: Field2::zero(),
        }
    }

    #[inline]
    pub fn one() -> Self {
        Self {
            c0: Field2::one(),
            c1: Field2::zero(),
            c2: Field2::zero(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    /// Multiply by v: (c0, c1, c2) -> (xi*c2, c0, c1).
    #[inline]
    pub fn mul_by_non_residue(&self) -> Self {
        Self {
            c0: self.c2.mul_by_non_residue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Multiply each Fq2 component by an Fq2 scalar.
    #[inline]
    pub fn mul_by_fp2(&self, other: &Field2<P>) -> Self {
        Self {
            c0: *other * self.c0,
            c1: *other * self.c1,
            c2: *other * self.c2,
        }
    }

    /// Multiply by the sparse element b0 + b1*v.
    pub fn mul_by_01(&self, b0: &Field2<P>, b1: &Field2<P>) -> Self {
        let a_a = self.c0 * *b0;
        let b_b = self.c1 * *b1;

        let t1 = (self.c2 * *b1).mul_by_non_residue() + a_a;
        let t2 = (*b0 + *b1) * (self.c0 + self.c1) - a_a - b_b;
        let t3 = (self.c0 + self.c2) * *b0 - a_a + b_b;

        Self {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    /// Multiply by the sparse element b1*v.
    pub fn mul_by_1(&self, b1: &Field2<P>) -> Self {
        Self {
            c0: (self.c2 * *b1).mul_by_non_residue(),
            c1: self.c0 * *b1,
            c2: self.c1 * *b1,
        }
    }

    #[inline]
    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
            c2: self.c2.double(),
        }
    }

    /// Squaring via CH-SQR2 (Devegili et al.).
    pub fn sqr(&self) -> Self {
        let s0 = self.c0.sqr();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 + self.c2 - self.c1).sqr();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.sqr();
        Self {
            c0: s3.mul_by_non_residue() + s0,
            c1: s4.mul_by_non_residue() + s1,
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    /// Inversion via Algorithm 17 from "High-Speed Software Implementation of
    /// the Optimal Ate Pairing over Barreto-Naehrig Curves".
    pub fn invert(&self) -> Result<Self, EccError> {
        let c0_sq = self.c0.sqr();
        let c1_c2 = self.c1 * self.c2;
        let cap_c0 = c0_sq - c1_c2.mul_by_non_residue();

        let c2_sq = self.c2.sqr();
        let c0_c1 = self.c0 * self.c1;
        let cap_c1 = c2_sq.mul_by_non_residue() - c0_c1;

        let c1_sq = self.c1.sqr();
        let c0_c2 = self.c0 * self.c2;
        let cap_c2 = c1_sq - c0_c2;

        let t0 = (self.c0 * cap_c0
            + (self.c2 * cap_c1 + self.c1 * cap_c2).mul_by_non_residue())
        .invert()?;

        Ok(Self {
            c0: t0 * cap_c0,
            c1: t0 * cap_c1,
            c2: t0 * cap_c2,
        })
    }

    /// `self^(p^power)`.
    pub fn frobenius_map(&self, power: usize) -> Self {
        Self {
            c0: self.c0.frobenius_map(power),
            c1: P::FP6_FROBENIUS_COEFFS_C1[power % 6] * self.c1.frobenius_map(power),
            c2: P::FP6_FROBENIUS_COEFFS_C2[power % 6] * self.c2.frobenius_map(power),
        }
    }

    #[inline]
    pub fn to_montgomery_form(&self) -> Self {
        Self {
            c0: self.c0.to_montgomery_form(),
            c1: self.c1.to_montgomery_form(),
            c2: self.c2.to_montgomery_form(),
        }
    }

    #[inline]
    pub fn from_montgomery_form(&self) -> Self {
        Self {
            c0: self.c0.from_montgomery_form(),
            c1: self.c1.from_montgomery_form(),
            c2: self.c2.from_montgomery_form(),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            c0: Field2::random(rng),
            c1: Field2::random(rng),
            c2: Field2::random(rng),
        }
    }

    /// Generate a random Field6 element.
    pub fn random_element() -> Self {
        Self::random(&mut rand::rng())
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<P: Field6Params> Add for Field6<P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }
}

impl<P: Field6Params> AddAssign for Field6<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: Field6Params> Sub for Field6<P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }
}

impl<P: Field6Params> SubAssign for Field6<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: Field6Params> Mul for Field6<P> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Karatsuba (Devegili et al., Section 4)
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = self.c2 * rhs.c2;

        let t3 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2);
        let t4 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);
        let t5 = (self.c1 + self.c2) * (rhs.c1 + rhs.c2);

        Self {
            c0: t0 + (t5 - (t1 + t2)).mul_by_non_residue(),
            c1: t4 - (t0 + t1) + t2.mul_by_non_residue(),
            c2: t3 + t1 - (t0 + t2),
        }
    }
}

impl<P: Field6Params> MulAssign for Field6<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: Field6Params> Neg for Field6<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }
}

impl<P: Field6Params> PartialEq for Field6<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1 && self.c2 == other.c2
    }
}

impl<P: Field6Params> Eq for Field6<P> {}

impl<P: Field6Params> FieldElement for Field6<P> {
    const DEGREE: usize = 6;

    fn zero() -> Self {
        Field6::zero()
    }
    fn one() -> Self {
        Field6::one()
    }
    fn is_zero(&self) -> bool {
        Field6::is_zero(self)
    }
    fn sqr(&self) -> Self {
        Field6::sqr(self)
    }
    fn double(&self) -> Self {
        Field6::double(self)
    }
    fn invert(&self) -> Result<Self, EccError> {
        Field6::invert(self)
    }
    fn frobenius_map(&self, power: usize) -> Self {
        Field6::frobenius_map(self, power)
    }
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Field6::random(rng)
    }
}
