// Quadratic extension field F_{p^2} = F_p[u] / (u^2 - beta)
//
// Elements are pairs (c0, c1) representing c0 + c1*u. beta is a quadratic
// non-residue supplied by Field2Params; both shipped curves use beta = -1.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use super::field::Field;
use super::field6::Field6Params;
use super::field_element::FieldElement;
use super::field_params::FieldParams;
use crate::error::EccError;

/// Constants of the quadratic extension over a prime field.
pub trait Field2Params: FieldParams {
    /// beta, with u^2 = beta.
    const QUADRATIC_NON_RESIDUE: Field<Self>;

    /// beta^((p^i - 1) / 2) for i = 0, 1.
    const FP2_FROBENIUS_COEFFS: [Field<Self>; 2];

    /// Multiply a base field element by beta.
    #[inline]
    fn mul_fp_by_non_residue(a: &Field<Self>) -> Field<Self> {
        *a * Self::QUADRATIC_NON_RESIDUE
    }
}

pub struct Field2<P: Field2Params> {
    pub c0: Field<P>,
    pub c1: Field<P>,
}

impl<P: Field2Params> Clone for Field2<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Field2Params> Copy for Field2<P> {}

impl<P: Field2Params> std::fmt::Debug for Field2<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field2({:?}, {:?})", self.c0, self.c1)
    }
}

impl<P: Field2Params> Field2<P> {
    #[inline]
    pub const fn new(c0: Field<P>, c1: Field<P>) -> Self {
        Self { c0, c1 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            c0: Field::zero(),
            c1: Field::zero(),
        }
    }

    #[inline]
    pub fn one() -> Self {
        Self {
            c0: Field::one(),
            c1: Field::zero(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// Multiply each component by a base field element.
    #[inline]
    pub fn mul_by_fp(&self, a: &Field<P>) -> Self {
        Self {
            c0: *a * self.c0,
            c1: *a * self.c1,
        }
    }

    #[inline]
    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Squaring: (c0 + c1*u)^2 = (c0 + c1)(c0 + beta*c1) - (1 + beta)*c0*c1 + 2*c0*c1*u
    #[inline]
    pub fn sqr(&self) -> Self {
        let t1 = self.c0 * self.c1;
        let t2 = self.c0 + P::mul_fp_by_non_residue(&self.c1);
        Self {
            c0: (self.c0 + self.c1) * t2 - t1 - P::mul_fp_by_non_residue(&t1),
            c1: t1.double(),
        }
    }

    /// Inversion: 1/(c0 + c1*u) = (c0 - c1*u) / (c0^2 - beta*c1^2)
    pub fn invert(&self) -> Result<Self, EccError> {
        let norm = self.c0.sqr() - P::mul_fp_by_non_residue(&self.c1.sqr());
        let t3 = norm.invert()?;
        Ok(Self {
            c0: self.c0 * t3,
            c1: -(self.c1 * t3),
        })
    }

    /// Conjugation (c0, -c1).
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// `self^(p^power)`: conjugation for odd powers, identity for even ones.
    #[inline]
    pub fn frobenius_map(&self, power: usize) -> Self {
        Self {
            c0: self.c0,
            c1: self.c1 * P::FP2_FROBENIUS_COEFFS[power % 2],
        }
    }

    #[inline]
    pub fn to_montgomery_form(&self) -> Self {
        Self {
            c0: self.c0.to_montgomery_form(),
            c1: self.c1.to_montgomery_form(),
        }
    }

    #[inline]
    pub fn from_montgomery_form(&self) -> Self {
        Self {
            c0: self.c0.from_montgomery_form(),
            c1: self.c1.from_montgomery_form(),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            c0: Field::random(rng),
            c1: Field::random(rng),
        }
    }

    pub fn random_element() -> Self {
        Self::random(&mut rand::rng())
    }
}

impl<P: Field6Params> Field2<P> {
    /// Multiply by the sextic non-residue xi (v^3 = xi in Fp6).
    #[inline]
    pub fn mul_by_non_residue(&self) -> Self {
        P::mul_by_non_residue(self)
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<P: Field2Params> Add for Field2<P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl<P: Field2Params> AddAssign for Field2<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: Field2Params> Sub for Field2<P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl<P: Field2Params> SubAssign for Field2<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: Field2Params> Mul for Field2<P> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // Karatsuba: (c0 + c1*u)(d0 + d1*u)
        // = (c0*d0 + beta*c1*d1) + ((c0+c1)*(d0+d1) - c0*d0 - c1*d1)*u
        let t1 = self.c0 * rhs.c0;
        let t2 = self.c1 * rhs.c1;
        let t3 = self.c0 + self.c1;
        let t4 = rhs.c0 + rhs.c1;
        Self {
            c0: t1 + P::mul_fp_by_non_residue(&t2),
            c1: t3 * t4 - (t1 + t2),
        }
    }
}

impl<P: Field2Params> MulAssign for Field2<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: Field2Params> Neg for Field2<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl<P: Field2Params> PartialEq for Field2<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<P: Field2Params> Eq for Field2<P> {}

impl<P: Field2Params> FieldElement for Field2<P> {
    const DEGREE: usize = 2;

    fn zero() -> Self {
        Field2::zero()
    }
    fn one() -> Self {
        Field2::one()
    }
    fn is_zero(&self) -> bool {
        Field2::is_zero(self)
    }
    fn sqr(&self) -> Self {
        Field2::sqr(self)
    }
    fn double(&self) -> Self {
        Field2::double(self)
    }
    fn invert(&self) -> Result<Self, EccError> {
        Field2::invert(self)
    }
    fn frobenius_map(&self, power: usize) -> Self {
        Field2::frobenius_map(self, power)
    }
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Field2::random(rng)
    }
}
