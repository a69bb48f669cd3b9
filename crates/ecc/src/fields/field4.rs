// Quartic extension Fq4 = Fq2[y] / (y^2 - xi)
//
// Not part of the Fq12 tower used by the pairing; it is the intermediate
// field in which Granger-Scott cyclotomic squaring works. Elements are pairs
// (c0, c1) representing c0 + c1*y.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use super::field2::Field2;
use super::field6::Field6Params;
use super::field_element::FieldElement;
use crate::error::EccError;

pub trait Field4Params: Field6Params {
    /// xi^((p^i - 1) / 2) for i = 0..4, applied to c1.
    const FP4_FROBENIUS_COEFFS: [Field2<Self>; 4];
}

pub struct Field4<P: Field4Params> {
    pub c0: Field2<P>,
    pub c1: Field2<P>,
}

impl<P: Field4Params> Clone for Field4<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Field4Params> Copy for Field4<P> {}

impl<P: Field4Params> std::fmt::Debug for Field4<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field4({:?}, {:?})", self.c0, self.c1)
    }
}

impl<P: Field4Params> Field4<P> {
    #[inline]
    pub const fn new(c0: Field2<P>, c1: Field2<P>) -> Self {
        Self { c0, c1 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(Field2::zero(), Field2::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::new(Field2::one(), Field2::zero())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    pub fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// (a0 + a1*y)^2 = (a0 + a1)(a0 + xi*a1) - (1 + xi)*a0*a1 + 2*a0*a1*y
    #[inline]
    pub fn sqr(&self) -> Self {
        let tmp = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c1.mul_by_non_residue() + self.c0)
            - tmp
            - tmp.mul_by_non_residue();
        Self::new(c0, tmp.double())
    }

    /// 1/(a0 + a1*y) = (a0 - a1*y) / (a0^2 - xi*a1^2)
    pub fn invert(&self) -> Result<Self, EccError> {
        let norm = self.c0.sqr() - self.c1.sqr().mul_by_non_residue();
        let t = norm.invert()?;
        Ok(Self::new(self.c0 * t, -(self.c1 * t)))
    }

    /// Conjugation over Fq2: (c0, -c1). Equals `frobenius_map(2)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    pub fn frobenius_map(&self, power: usize) -> Self {
        Self::new(
            self.c0.frobenius_map(power),
            self.c1.frobenius_map(power) * P::FP4_FROBENIUS_COEFFS[power % 4],
        )
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Field2::random(rng), Field2::random(rng))
    }

    pub fn random_element() -> Self {
        Self::random(&mut rand::rng())
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<P: Field4Params> Add for Field4<P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl<P: Field4Params> AddAssign for Field4<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: Field4Params> Sub for Field4<P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl<P: Field4Params> SubAssign for Field4<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: Field4Params> Mul for Field4<P> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        Self::new(
            t0 + t1.mul_by_non_residue(),
            (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - (t0 + t1),
        )
    }
}

impl<P: Field4Params> MulAssign for Field4<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: Field4Params> Neg for Field4<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl<P: Field4Params> PartialEq for Field4<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<P: Field4Params> Eq for Field4<P> {}

impl<P: Field4Params> FieldElement for Field4<P> {
    const DEGREE: usize = 4;

    fn zero() -> Self {
        Field4::zero()
    }
    fn one() -> Self {
        Field4::one()
    }
    fn is_zero(&self) -> bool {
        Field4::is_zero(self)
    }
    fn sqr(&self) -> Self {
        Field4::sqr(self)
    }
    fn double(&self) -> Self {
        Field4::double(self)
    }
    fn invert(&self) -> Result<Self, EccError> {
        Field4::invert(self)
    }
    fn frobenius_map(&self, power: usize) -> Self {
        Field4::frobenius_map(self, power)
    }
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Field4::random(rng)
    }
}
