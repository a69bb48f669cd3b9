// Extended-width unsigned integer types.
//
// The final exponentiation exponents of the shipped curves are far wider
// than any field element: (p^12 - 1)/r times a small cofactor is ~2980 bits
// for BN254 and ~4316 bits for BLS12-381. They are carried as crypto-bigint
// `Uint<N>` literals built with `from_be_hex` and handed to `pow` as little
// endian words.

use crypto_bigint::Uint;

/// 3072-bit unsigned integer (BN254 final exponent).
pub type U3072 = Uint<48>;

/// 4352-bit unsigned integer (BLS12-381 final exponent).
pub type U4352 = Uint<68>;

/// Number of significant 64-bit words in a little-endian word slice.
pub fn significant_words(words: &[u64]) -> usize {
    words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}
