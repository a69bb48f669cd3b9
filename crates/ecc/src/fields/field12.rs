// Dodecic extension field Fq12 = Fq6[w] / (w^2 - v)
//
// Elements are pairs (c0, c1) of Field6 elements. The pairing target group
// GT is the order-r subgroup of its multiplicative group.
//
// Sparse products name their non-zero Fq2 slots by the flattened index
// (c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2) = (0, 1, 2, 3, 4, 5).

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use zkpair_numeric::bitop::{get_bit_words, get_msb_words};

use super::field2::Field2;
use super::field4::{Field4, Field4Params};
use super::field6::Field6;
use super::field_element::FieldElement;
use crate::error::EccError;

pub trait Field12Params: Field4Params {
    /// xi^((p^i - 1) / 6) for i = 0..12, applied to c1.
    const FP12_FROBENIUS_COEFFS: [Field2<Self>; 12];
}

pub struct Field12<P: Field12Params> {
    pub c0: Field6<P>,
    pub c1: Field6<P>,
}

impl<P: Field12Params> Clone for Field12<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Field12Params> Copy for Field12<P> {}

impl<P: Field12Params> std::fmt::Debug for Field12<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field12({:?}, {:?})", self.c0, self.c1)
    }
}

impl<P: Field12Params> Field12<P> {
    #[inline]
    pub const fn new(c0: Field6<P>, c1: Field6<P>) -> Self {
        Self { c0, c1 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            c0: Field6::zero(),
            c1: Field6::zero(),
        }
    }

    #[inline]
    pub fn one() -> Self {
        Self {
            c0: Field6::one(),
            c1: Field6::zero(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    pub fn double(&self) -> Self {
        Self {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Squaring in Fq12 = Fq6[w] / (w^2 - v).
    pub fn sqr(&self) -> Self {
        let t0 = self.c0 + self.c1;
        let t1 = self.c1.mul_by_non_residue() + self.c0;

        let t0 = t0 * t1;
        let t1 = self.c0 * self.c1;

        Self {
            c0: t0 - (t1 + t1.mul_by_non_residue()),
            c1: t1.double(),
        }
    }

    /// Inversion via Algorithm 8 from "High-Speed Software Implementation of
    /// the Optimal Ate Pairing over Barreto-Naehrig Curves".
    pub fn invert(&self) -> Result<Self, EccError> {
        let t0 = (self.c0.sqr() - self.c1.sqr().mul_by_non_residue()).invert()?;
        Ok(Self {
            c0: self.c0 * t0,
            c1: -(self.c1 * t0),
        })
    }

    /// `self^(p^6)`: negates the w-coefficient. Valid for any element.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Inverse of a norm-1 element, computed as its conjugate.
    ///
    /// Only meaningful inside the cyclotomic subgroup; debug builds assert
    /// `self * conj(self) == 1`.
    #[inline]
    pub fn unitary_inverse(&self) -> Self {
        debug_assert!(
            *self * self.conjugate() == Self::one(),
            "unitary_inverse on an element without norm 1"
        );
        self.conjugate()
    }

    /// `self^(p^power)`.
    pub fn frobenius_map(&self, power: usize) -> Self {
        Self {
            c0: self.c0.frobenius_map(power),
            c1: self
                .c1
                .frobenius_map(power)
                .mul_by_fp2(&P::FP12_FROBENIUS_COEFFS[power % 12]),
        }
    }

    /// Membership in the cyclotomic subgroup: `f^(p^4) * f == f^(p^2)`.
    pub fn is_cyclotomic(&self) -> bool {
        self.frobenius_map(4) * *self == self.frobenius_map(2)
    }

    /// Granger-Scott squaring for elements of the cyclotomic subgroup.
    ///
    /// Fq12 is viewed as Fq4^3 with the pairs (z0, z1), (z2, z3), (z4, z5)
    /// each squared in Fq4. The result is wrong for elements outside the
    /// subgroup; debug builds check membership first.
    pub fn cyclotomic_squared(&self) -> Self {
        debug_assert!(
            self.is_cyclotomic(),
            "cyclotomic_squared on an element outside the cyclotomic subgroup"
        );
        let z0 = self.c0.c0;
        let z4 = self.c0.c1;
        let z3 = self.c0.c2;
        let z2 = self.c1.c0;
        let z1 = self.c1.c1;
        let z5 = self.c1.c2;

        let a = Field4::new(z0, z1).sqr();
        let b = Field4::new(z2, z3).sqr();
        let c = Field4::new(z4, z5).sqr();

        // 3t - 2z and 3t + 2z
        let minus = |t: Field2<P>, z: Field2<P>| (t - z).double() + t;
        let plus = |t: Field2<P>, z: Field2<P>| (t + z).double() + t;

        let n0 = minus(a.c0, z0);
        let n1 = plus(a.c1, z1);
        let n2 = plus(c.c1.mul_by_non_residue(), z2);
        let n3 = minus(c.c0, z3);
        let n4 = minus(b.c0, z4);
        let n5 = plus(b.c1, z5);

        Self {
            c0: Field6::new(n0, n4, n3),
            c1: Field6::new(n2, n1, n5),
        }
    }

    /// Square-and-multiply with cyclotomic squaring.
    pub fn cyclotomic_exp(&self, exp: &[u64]) -> Self {
        let Some(msb) = get_msb_words(exp) else {
            return Self::one();
        };
        let mut accumulator = *self;
        for i in (0..msb).rev() {
            accumulator = accumulator.cyclotomic_squared();
            if get_bit_words(exp, i) {
                accumulator *= *self;
            }
        }
        accumulator
    }

    /// Product with the sparse element `(o, 0, vv) + w*(0, vw, 0)`, slots 0, 2
    /// and 4. This is the shape of a D-type twist line.
    pub fn mul_by_024(&self, o: &Field2<P>, vv: &Field2<P>, vw: &Field2<P>) -> Self {
        let mut r = *self;
        let d0 = r.c0.c0 * *o;
        let d2 = r.c0.c2 * *vv;
        let d4 = r.c1.c1 * *vw;
        let t2 = r.c0.c0 + r.c1.c1;
        let t1 = r.c0.c0 + r.c0.c2;
        let s0 = r.c0.c1 + r.c1.c0 + r.c1.c2;

        let mut s1 = r.c0.c1 * *vv;
        let mut t3 = s1 + d4;
        let t4 = t3.mul_by_non_residue();
        r.c0.c0 = t4 + d0;

        t3 = r.c1.c2 * *vw;
        s1 += t3;
        t3 += d2;
        let t4 = t3.mul_by_non_residue();
        t3 = r.c0.c1 * *o;
        s1 += t3;
        r.c0.c1 = t4 + t3;

        let t0 = *o + *vv;
        t3 = t1 * t0 - d0 - d2;
        let t4 = r.c1.c0 * *vw;
        s1 += t4;

        let t0 = r.c0.c2 + r.c1.c1;
        r.c0.c2 = t3 + t4;

        let t1 = *vv + *vw;
        t3 = t0 * t1 - d2 - d4;
        let t4 = t3.mul_by_non_residue();
        t3 = r.c1.c0 * *o;
        s1 += t3;
        r.c1.c0 = t3 + t4;

        t3 = r.c1.c2 * *vv;
        s1 += t3;
        let t4 = t3.mul_by_non_residue();
        let t0 = *o + *vw;
        t3 = t0 * t2 - d0 - d4;
        r.c1.c1 = t3 + t4;

        let t0 = *o + *vv + *vw;
        r.c1.c2 = s0 * t0 - s1;
        r
    }

    /// Product with the sparse element `(o, vv, 0) + w*(0, vw, 0)`, slots 0, 1
    /// and 4. This is the shape of an M-type twist line.
    pub fn mul_by_014(&self, o: &Field2<P>, vv: &Field2<P>, vw: &Field2<P>) -> Self {
        let aa = self.c0.mul_by_01(o, vv);
        let bb = self.c1.mul_by_1(vw);
        let c1 = (self.c0 + self.c1).mul_by_01(o, &(*vv + *vw)) - aa - bb;
        Self {
            c0: bb.mul_by_non_residue() + aa,
            c1,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            c0: Field6::random(rng),
            c1: Field6::random(rng),
        }
    }

    /// Generate a random Field12 element.
    pub fn random_element() -> Self {
        Self::random(&mut rand::rng())
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
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<P: Field12Params> Add for Field12<P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }
}

impl<P: Field12Params> AddAssign for Field12<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: Field12Params> Sub for Field12<P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }
}

impl<P: Field12Params> SubAssign for Field12<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: Field12Params> Mul for Field12<P> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = self.c0 + self.c1;
        let t3 = rhs.c0 + rhs.c1;
        Self {
            c0: t1.mul_by_non_residue() + t0,
            c1: t2 * t3 - (t0 + t1),
        }
    }
}

impl<P: Field12Params> MulAssign for Field12<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: Field12Params> Neg for Field12<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl<P: Field12Params> PartialEq for Field12<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<P: Field12Params> Eq for Field12<P> {}

impl<P: Field12Params> FieldElement for Field12<P> {
    const DEGREE: usize = 12;

    fn zero() -> Self {
        Field12::zero()
    }
    fn one() -> Self {
        Field12::one()
    }
    fn is_zero(&self) -> bool {
        Field12::is_zero(self)
    }
    fn sqr(&self) -> Self {
        Field12::sqr(self)
    }
    fn double(&self) -> Self {
        Field12::double(self)
    }
    fn invert(&self) -> Result<Self, EccError> {
        Field12::invert(self)
    }
    fn frobenius_map(&self, power: usize) -> Self {
        Field12::frobenius_map(self, power)
    }
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Field12::random(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::bls12_381::Bls12_381FqParams;
    use crate::curves::bn254::Bn254FqParams;
    use crate::fields::field::Field;
    use crate::fields::field_params::FieldParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type BnFq12 = Field12<Bn254FqParams>;
    type BnFq6 = Field6<Bn254FqParams>;
    type BnFq2 = Field2<Bn254FqParams>;
    type Fq = Field<Bn254FqParams>;
    type BlsFq12 = Field12<Bls12_381FqParams>;

    /// Map a random element into the cyclotomic subgroup with the easy part
    /// of the final exponentiation.
    fn cyclotomic_element<P: Field12Params>(rng: &mut StdRng) -> Field12<P> {
        let f = Field12::<P>::random(rng);
        let t = f.conjugate() * f.invert().unwrap();
        t.frobenius_map(2) * t
    }

    #[test]
    fn fq12_sqr_check_against_constants() {
        let a = BnFq12::new(
            BnFq6::new(
                BnFq2::new(Fq::from(1u64), Fq::from(2u64)),
                BnFq2::new(Fq::from(3u64), Fq::from(4u64)),
                BnFq2::new(Fq::from(5u64), Fq::from(6u64)),
            ),
            BnFq6::new(
                BnFq2::new(Fq::from(7u64), Fq::from(8u64)),
                BnFq2::new(Fq::from(9u64), Fq::from(10u64)),
                BnFq2::new(Fq::from(11u64), Fq::from(12u64)),
            ),
        );
        assert_eq!(a.sqr(), a * a);
        let c = BnFq12::one() + BnFq12::one();
        assert_eq!(c.c0.c0.c0, Fq::from(2u64));
        assert!(c.c1.is_zero());
    }

    #[test]
    fn fq12_ring_laws() {
        let mut rng = StdRng::seed_from_u64(120);
        for _ in 0..5 {
            let a = BnFq12::random(&mut rng);
            let b = BnFq12::random(&mut rng);
            let c = BnFq12::random(&mut rng);
            assert_eq!(a * a, a.sqr(), "a*a should equal a.sqr()");
            assert_eq!((a + b) * c, a * c + b * c, "(a+b)*c should equal a*c + b*c");
            assert_eq!((a - b) * c, a * c - b * c, "(a-b)*c should equal a*c - b*c");

            let d = BlsFq12::random(&mut rng);
            let e = BlsFq12::random(&mut rng);
            assert_eq!(d.sqr(), d * d);
            assert_eq!((d * e) * d, d * (e * d));
        }
    }

    #[test]
    fn fq12_invert() {
        let mut rng = StdRng::seed_from_u64(121);
        for _ in 0..5 {
            let a = BnFq12::random(&mut rng);
            assert_eq!(a * a.invert().unwrap(), BnFq12::one(), "a * a^-1 should be one");
            let b = BlsFq12::random(&mut rng);
            assert_eq!(b * b.invert().unwrap(), BlsFq12::one());
        }
        assert_eq!(BlsFq12::zero().invert(), Err(EccError::DivisionByZero));
    }

    #[test]
    fn w_squared_is_v() {
        let w = BnFq12::new(BnFq6::zero(), BnFq6::one());
        let v = BnFq12::new(BnFq6::new(BnFq2::zero(), BnFq2::one(), BnFq2::zero()), BnFq6::zero());
        assert_eq!(w.sqr(), v);
    }

    #[test]
    fn frobenius_matches_pow() {
        let a = BnFq12::random_element();
        let p = Bn254FqParams::MODULUS;
        assert_eq!(a.frobenius_map(1), a.pow(p.as_ref()));
        assert_eq!(a.frobenius_map(2), a.frobenius_map(1).frobenius_map(1));
        assert_eq!(a.frobenius_map(6), a.conjugate());
        assert_eq!(a.frobenius_map(12), a);

        let b = BlsFq12::random_element();
        assert_eq!(b.frobenius_map(1), b.pow(Bls12_381FqParams::MODULUS.as_ref()));
        assert_eq!(b.frobenius_map(3), b.frobenius_map(2).frobenius_map(1));
        assert_eq!(b.frobenius_map(6), b.conjugate());
    }

    #[test]
    fn sparse_products_match_dense() {
        let mut rng = StdRng::seed_from_u64(122);
        for _ in 0..5 {
            let f = BnFq12::random(&mut rng);
            let o = BnFq2::random(&mut rng);
            let vv = BnFq2::random(&mut rng);
            let vw = BnFq2::random(&mut rng);
            let d_line = BnFq12::new(
                BnFq6::new(o, BnFq2::zero(), vv),
                BnFq6::new(BnFq2::zero(), vw, BnFq2::zero()),
            );
            assert_eq!(f.mul_by_024(&o, &vv, &vw), f * d_line);

            let g = BlsFq12::random(&mut rng);
            let o = Field2::random(&mut rng);
            let vv = Field2::random(&mut rng);
            let vw = Field2::random(&mut rng);
            let m_line = BlsFq12::new(
                Field6::new(o, vv, Field2::zero()),
                Field6::new(Field2::zero(), vw, Field2::zero()),
            );
            assert_eq!(g.mul_by_014(&o, &vv, &vw), g * m_line);
        }
    }

    #[test]
    fn cyclotomic_squaring_matches_generic() {
        let mut rng = StdRng::seed_from_u64(123);
        for _ in 0..5 {
            let f = cyclotomic_element::<Bn254FqParams>(&mut rng);
            assert!(f.is_cyclotomic());
            assert_eq!(f.cyclotomic_squared(), f.sqr());
            let g = cyclotomic_element::<Bls12_381FqParams>(&mut rng);
            assert_eq!(g.cyclotomic_squared(), g.sqr());
            assert_eq!(g.cyclotomic_exp(&[0x1234_5678_9abc, 7]), g.pow(&[0x1234_5678_9abc, 7]));
        }
    }

    #[test]
    fn unitary_inverse_matches_invert_on_norm_one() {
        let mut rng = StdRng::seed_from_u64(124);
        let f = cyclotomic_element::<Bn254FqParams>(&mut rng);
        assert_eq!(f.unitary_inverse(), f.invert().unwrap());
        let g = cyclotomic_element::<Bls12_381FqParams>(&mut rng);
        assert_eq!(g.unitary_inverse() * g, BlsFq12::one());
        assert_eq!(g.cyclotomic_exp(&[]), BlsFq12::one());
    }

    #[test]
    fn fq12_montgomery_round_trip() {
        let a = BnFq12::random_element();
        assert_eq!(a.from_montgomery_form().to_montgomery_form(), a);
    }
}
