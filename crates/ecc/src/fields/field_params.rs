use std::fmt::Debug;

/// Trait defining the parameters for a prime field in Montgomery form.
///
/// All limb constants are little-endian (`[0]` is least significant).
/// Montgomery form: elements are stored as `a * R mod p` where
/// `R = 2^(64 * LIMBS)`.
pub trait FieldParams: 'static + Send + Sync + Sized {
    /// Limb storage: `[u64; 4]` for 254/255-bit moduli, `[u64; 6]` for 381-bit.
    type Limbs: 'static
        + Copy
        + Default
        + Eq
        + Debug
        + Send
        + Sync
        + AsRef<[u64]>
        + AsMut<[u64]>;

    /// The prime modulus p.
    const MODULUS: Self::Limbs;

    /// R^2 mod p, used to convert into Montgomery form.
    const R_SQUARED: Self::Limbs;

    /// -(p^{-1}) mod 2^64, used in Montgomery reduction.
    const R_INV: u64;

    /// Bit length of the modulus.
    const MODULUS_BITS: u32;
}
