use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use zkpair_numeric::bitop::{get_bit_words, get_msb_words};

use super::field_element::FieldElement;
use super::field_params::FieldParams;
use crate::error::EccError;

/// Widest limb count of any modulus in this crate (381-bit BLS12 base field).
const MAX_LIMBS: usize = 6;

// ---------------------------------------------------------------------------
// Limb helpers
// ---------------------------------------------------------------------------

/// Multiply-accumulate: a + b*c + carry_in -> (result, carry_out).
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry_in: u64) -> (u64, u64) {
    let res = a as u128 + (b as u128 * c as u128) + carry_in as u128;
    (res as u64, (res >> 64) as u64)
}

/// Multiply-accumulate, discard low 64 bits: returns only high word of a + b*c.
#[inline(always)]
const fn mac_discard_lo(a: u64, b: u64, c: u64) -> u64 {
    let res = a as u128 + (b as u128 * c as u128);
    (res >> 64) as u64
}

/// Add with carry: a + b + carry_in -> (result, carry_out).
#[inline(always)]
const fn addc(a: u64, b: u64, carry_in: u64) -> (u64, u64) {
    let res = a as u128 + b as u128 + carry_in as u128;
    (res as u64, (res >> 64) as u64)
}

/// Subtract with borrow: a - b - (borrow_in >> 63) -> (result, borrow_out).
/// borrow_out is all-ones on underflow, zero otherwise.
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow_in: u64) -> (u64, u64) {
    let res = (a as u128).wrapping_sub(b as u128 + (borrow_in >> 63) as u128);
    (res as u64, (res >> 64) as u64)
}

/// out = a + b, returns the carry out of the top limb.
#[inline]
fn add_limbs(out: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    let mut carry = 0;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        let (v, c) = addc(x, y, carry);
        *o = v;
        carry = c;
    }
    carry
}

/// out = a - b, returns all-ones on underflow.
#[inline]
fn sub_limbs(out: &mut [u64], a: &[u64], b: &[u64]) -> u64 {
    let mut borrow = 0;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        let (v, br) = sbb(x, y, borrow);
        *o = v;
        borrow = br;
    }
    borrow
}

/// a >= b, comparing from the most significant limb.
#[inline]
fn limbs_ge(a: &[u64], b: &[u64]) -> bool {
    for (&x, &y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x > y;
        }
    }
    true
}

/// In-place right shift of a little-endian limb slice.
fn shr_limbs(val: &mut [u64], shift: u32) {
    let n = val.len();
    let limb_shift = (shift / 64) as usize;
    let bit_shift = shift % 64;
    for i in 0..n {
        let src = i + limb_shift;
        let mut word = if src < n { val[src] >> bit_shift } else { 0 };
        if bit_shift > 0 && src + 1 < n {
            word |= val[src + 1] << (64 - bit_shift);
        }
        val[i] = word;
    }
}

/// In-place `val += k`, ignoring the final carry.
fn add_small(val: &mut [u64], k: u64) {
    let mut carry = k;
    for w in val.iter_mut() {
        let (v, c) = addc(*w, carry, 0);
        *w = v;
        carry = c;
        if carry == 0 {
            break;
        }
    }
}

/// In-place `val -= k`, ignoring the final borrow.
fn sub_small(val: &mut [u64], k: u64) {
    let mut borrow = k;
    for w in val.iter_mut() {
        let (v, under) = w.overflowing_sub(borrow);
        *w = v;
        borrow = under as u64;
        if borrow == 0 {
            break;
        }
    }
}

// ---------------------------------------------------------------------------
// Field<P> struct
// ---------------------------------------------------------------------------

/// A prime field element in Montgomery form, generic over parameters `P`.
///
/// Limbs are little-endian and always fully reduced to `[0, p)`, so equality
/// is plain limb equality.
pub struct Field<P: FieldParams> {
    pub data: P::Limbs,
    _phantom: PhantomData<P>,
}

// Manual Clone/Copy because PhantomData<P> doesn't require P: Copy
impl<P: FieldParams> Clone for Field<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams> Copy for Field<P> {}

impl<P: FieldParams> std::fmt::Debug for Field<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = self.from_montgomery_form();
        write!(f, "Field(0x")?;
        for limb in r.data.as_ref().iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        write!(f, ")")
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl<P: FieldParams> Field<P> {
    /// Zero element (additive identity). 0*R = 0, so no conversion is needed.
    #[inline]
    pub fn zero() -> Self {
        Self::from_raw(P::Limbs::default())
    }

    /// One element (multiplicative identity) in Montgomery form.
    #[inline]
    pub fn one() -> Self {
        Self::from(1u64)
    }

    /// Construct from a u64, converting to Montgomery form.
    #[inline]
    pub fn from(val: u64) -> Self {
        let mut data = P::Limbs::default();
        data.as_mut()[0] = val;
        Self::from_limbs(data)
    }

    /// Construct from raw limbs already in Montgomery form.
    #[inline]
    pub const fn from_raw(data: P::Limbs) -> Self {
        Self {
            data,
            _phantom: PhantomData,
        }
    }

    /// Construct from non-Montgomery limbs (standard integer representation),
    /// reducing mod p first, and convert to Montgomery form.
    pub fn from_limbs(mut data: P::Limbs) -> Self {
        let modulus = P::MODULUS;
        while limbs_ge(data.as_ref(), modulus.as_ref()) {
            let mut tmp = P::Limbs::default();
            sub_limbs(tmp.as_mut(), data.as_ref(), modulus.as_ref());
            data = tmp;
        }
        Self::from_raw(data).to_montgomery_form()
    }

    /// Reduce a big-endian byte string of any length modulo p.
    pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        let base = Self::from(256);
        bytes
            .iter()
            .fold(Self::zero(), |acc, &b| acc * base + Self::from(b as u64))
    }

    /// Serialize the canonical integer value as big-endian bytes,
    /// `8 * LIMBS` bytes long.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let reduced = self.from_montgomery_form();
        reduced
            .data
            .as_ref()
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .collect()
    }

    /// Canonical (non-Montgomery) limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> P::Limbs {
        self.from_montgomery_form().data
    }

    /// Uniform sample in `[0, p)` by rejection: draw `MODULUS_BITS` bits and
    /// retry while the draw is `>= p`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let modulus = P::MODULUS;
        let top_bits = P::MODULUS_BITS % 64;
        loop {
            let mut data = P::Limbs::default();
            for limb in data.as_mut().iter_mut() {
                *limb = rng.next_u64();
            }
            if top_bits != 0 {
                if let Some(last) = data.as_mut().last_mut() {
                    *last &= (1u64 << top_bits) - 1;
                }
            }
            if !limbs_ge(data.as_ref(), modulus.as_ref()) {
                // A uniform value is also uniform in Montgomery form.
                return Self::from_raw(data);
            }
        }
    }

    /// Uniform sample from the thread-local OS-seeded generator.
    pub fn random_element() -> Self {
        Self::random(&mut rand::rng())
    }
}

// ---------------------------------------------------------------------------
// Core arithmetic
// ---------------------------------------------------------------------------

impl<P: FieldParams> Field<P> {
    /// Subtract p once if `value (+ overflow * 2^(64n)) >= p`.
    #[inline]
    fn reduce_once(value: &[u64], overflow: u64) -> Self {
        let modulus = P::MODULUS;
        let mut data = P::Limbs::default();
        if overflow != 0 || limbs_ge(value, modulus.as_ref()) {
            sub_limbs(data.as_mut(), value, modulus.as_ref());
        } else {
            data.as_mut().copy_from_slice(value);
        }
        Self::from_raw(data)
    }

    /// Modular addition.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = P::Limbs::default();
        let carry = add_limbs(sum.as_mut(), self.data.as_ref(), other.data.as_ref());
        Self::reduce_once(sum.as_ref(), carry)
    }

    /// Modular subtraction.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        let modulus = P::MODULUS;
        let mut diff = P::Limbs::default();
        let borrow = sub_limbs(diff.as_mut(), self.data.as_ref(), other.data.as_ref());
        if borrow != 0 {
            let mut fixed = P::Limbs::default();
            add_limbs(fixed.as_mut(), diff.as_ref(), modulus.as_ref());
            return Self::from_raw(fixed);
        }
        Self::from_raw(diff)
    }

    /// Negate: returns -self mod p.
    #[inline]
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        Self::from_raw(P::MODULUS).subtract(self)
    }

    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Montgomery multiplication, coarsely integrated operand scanning.
    /// Each round adds `a * b[i]`, then folds one word of `k * p` in.
    pub fn montgomery_mul(&self, other: &Self) -> Self {
        let modulus = P::MODULUS;
        let p = modulus.as_ref();
        let a = self.data.as_ref();
        let b = other.data.as_ref();
        let n = p.len();
        let r_inv = P::R_INV;

        let mut t = [0u64; MAX_LIMBS + 2];
        for &b_i in b {
            let mut c = 0u64;
            for j in 0..n {
                let (v, co) = mac(t[j], a[j], b_i, c);
                t[j] = v;
                c = co;
            }
            let (v, co) = addc(t[n], c, 0);
            t[n] = v;
            t[n + 1] = co;

            let k = t[0].wrapping_mul(r_inv);
            let mut c = mac_discard_lo(t[0], k, p[0]);
            for j in 1..n {
                let (v, co) = mac(t[j], k, p[j], c);
                t[j - 1] = v;
                c = co;
            }
            let (v, co) = addc(t[n], c, 0);
            t[n - 1] = v;
            t[n] = t[n + 1] + co;
        }
        Self::reduce_once(&t[..n], t[n])
    }

    #[inline]
    pub fn sqr(&self) -> Self {
        self.montgomery_mul(self)
    }

    /// Convert from standard form to Montgomery form: self * R^2 mod p.
    #[inline]
    pub fn to_montgomery_form(&self) -> Self {
        self.montgomery_mul(&Self::from_raw(P::R_SQUARED))
    }

    /// Convert from Montgomery form to standard form: self * 1 mod p.
    #[inline]
    pub fn from_montgomery_form(&self) -> Self {
        let mut one_raw = P::Limbs::default();
        one_raw.as_mut()[0] = 1;
        self.montgomery_mul(&Self::from_raw(one_raw))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.as_ref().iter().all(|&limb| limb == 0)
    }

    /// Exponentiation via square-and-multiply over a little-endian exponent.
    pub fn pow(&self, exp: &[u64]) -> Self {
        let Some(msb) = get_msb_words(exp) else {
            return Self::one();
        };
        if self.is_zero() {
            return Self::zero();
        }

        let mut accumulator = *self;
        for i in (0..msb).rev() {
            accumulator = accumulator.sqr();
            if get_bit_words(exp, i) {
                accumulator = accumulator.montgomery_mul(self);
            }
        }
        accumulator
    }

    /// Modular inverse via Fermat's little theorem: self^(p-2) mod p.
    pub fn invert(&self) -> Result<Self, EccError> {
        if self.is_zero() {
            return Err(EccError::DivisionByZero);
        }
        let mut exp = P::MODULUS;
        sub_small(exp.as_mut(), 2);
        Ok(self.pow(exp.as_ref()))
    }

    /// Euler's criterion: 1 for a non-zero square, -1 for a non-square, 0 for zero.
    pub fn legendre(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        let mut exp = P::MODULUS;
        sub_small(exp.as_mut(), 1);
        shr_limbs(exp.as_mut(), 1);
        if self.pow(exp.as_ref()) == Self::one() {
            1
        } else {
            -1
        }
    }

    /// Square root, or `None` for a non-residue.
    /// Uses (p+1)/4 exponentiation when p ≡ 3 (mod 4).
    pub fn sqrt(&self) -> Option<Self> {
        let modulus = P::MODULUS;
        if modulus.as_ref()[0] & 0x3 == 0x3 {
            let mut exp = modulus;
            add_small(exp.as_mut(), 1);
            shr_limbs(exp.as_mut(), 2);
            let root = self.pow(exp.as_ref());
            (root.sqr() == *self).then_some(root)
        } else {
            self.tonelli_shanks_sqrt()
        }
    }

    fn tonelli_shanks_sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }
        if self.legendre() != 1 {
            return None;
        }

        // p - 1 = q * 2^s
        let mut q = P::MODULUS;
        sub_small(q.as_mut(), 1);
        let mut s = 0u32;
        while !get_bit_words(q.as_ref(), s) {
            s += 1;
        }
        shr_limbs(q.as_mut(), s);

        let mut z_val = 2u64;
        let z = loop {
            let candidate = Self::from(z_val);
            if candidate.legendre() == -1 {
                break candidate;
            }
            z_val += 1;
        };

        let mut q_plus_1_over_2 = q;
        add_small(q_plus_1_over_2.as_mut(), 1);
        shr_limbs(q_plus_1_over_2.as_mut(), 1);

        let one = Self::one();
        let mut m_val = s;
        let mut c = z.pow(q.as_ref());
        let mut t = self.pow(q.as_ref());
        let mut r = self.pow(q_plus_1_over_2.as_ref());

        while t != one {
            // least i with t^(2^i) = 1
            let mut i = 1u32;
            let mut tmp = t.sqr();
            while tmp != one {
                tmp = tmp.sqr();
                i += 1;
                if i >= m_val {
                    return None;
                }
            }
            let mut b = c;
            for _ in 0..(m_val - i - 1) {
                b = b.sqr();
            }
            m_val = i;
            c = b.sqr();
            t *= c;
            r *= b;
        }
        Some(r)
    }

    /// True if the canonical value is odd. Used as the sign of a y-coordinate.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.from_montgomery_form().data.as_ref()[0] & 1 == 1
    }

    /// Conditional negate.
    #[inline]
    pub fn conditional_negate(&self, predicate: bool) -> Self {
        if predicate {
            self.negate()
        } else {
            *self
        }
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<P: FieldParams> Add for Field<P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Field::add(&self, &rhs)
    }
}

impl<P: FieldParams> AddAssign for Field<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Field::add(self, &rhs);
    }
}

impl<P: FieldParams> Sub for Field<P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Field::subtract(&self, &rhs)
    }
}

impl<P: FieldParams> SubAssign for Field<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Field::subtract(self, &rhs);
    }
}

impl<P: FieldParams> Mul for Field<P> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Field::montgomery_mul(&self, &rhs)
    }
}

impl<P: FieldParams> MulAssign for Field<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Field::montgomery_mul(self, &rhs);
    }
}

impl<P: FieldParams> Neg for Field<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Field::negate(&self)
    }
}

impl<P: FieldParams> PartialEq for Field<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<P: FieldParams> Eq for Field<P> {}

impl<P: FieldParams> FieldElement for Field<P> {
    const DEGREE: usize = 1;

    #[inline]
    fn zero() -> Self {
        Field::zero()
    }
    #[inline]
    fn one() -> Self {
        Field::one()
    }
    #[inline]
    fn is_zero(&self) -> bool {
        Field::is_zero(self)
    }
    #[inline]
    fn sqr(&self) -> Self {
        Field::sqr(self)
    }
    #[inline]
    fn double(&self) -> Self {
        Field::double(self)
    }
    fn invert(&self) -> Result<Self, EccError> {
        Field::invert(self)
    }
    /// The prime field is fixed by Frobenius.
    #[inline]
    fn frobenius_map(&self, _power: usize) -> Self {
        *self
    }
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Field::random(rng)
    }
    fn pow(&self, exp: &[u64]) -> Self {
        Field::pow(self, exp)
    }
}
