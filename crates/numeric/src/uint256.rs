// 256-bit unsigned integer type.
//
// Wraps `crypto_bigint::U256`. Limbs are little-endian (data[0] is least
// significant), which is the same internal layout crypto-bigint uses.

use crypto_bigint::Uint;

/// 256-bit unsigned integer, backed by `crypto_bigint::U256`.
pub type U256 = Uint<4>;

/// Limb access in the layout the field and scalar-multiplication code expects.
pub trait U256Ext {
    /// The raw u64 limbs in little-endian limb order.
    fn limbs(&self) -> [u64; 4];
}

impl U256Ext for U256 {
    fn limbs(&self) -> [u64; 4] {
        *self.as_words()
    }
}
