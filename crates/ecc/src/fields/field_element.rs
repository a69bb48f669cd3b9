// Arithmetic shared by every level of the tower.
//
// Group code is written once against this trait and instantiated with the
// base field for G1 and Fp2 for G2.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use zkpair_numeric::bitop::{get_bit_words, get_msb_words};

use crate::error::EccError;

pub trait FieldElement:
    Copy
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Degree over the prime field.
    const DEGREE: usize;

    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn sqr(&self) -> Self;

    fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse, `DivisionByZero` on zero.
    fn invert(&self) -> Result<Self, EccError>;

    /// `self^(p^power)`.
    fn frobenius_map(&self, power: usize) -> Self;

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Square-and-multiply over a little-endian exponent. `x^0 = 1`.
    fn pow(&self, exp: &[u64]) -> Self {
        let Some(msb) = get_msb_words(exp) else {
            return Self::one();
        };
        let mut accumulator = *self;
        for i in (0..msb).rev() {
            accumulator = accumulator.sqr();
            if get_bit_words(exp, i) {
                accumulator *= *self;
            }
        }
        accumulator
    }
}
