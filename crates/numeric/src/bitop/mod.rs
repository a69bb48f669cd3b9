// Bit manipulation utilities.
//
// Most bit operations map directly to Rust built-ins on primitive types.
// The standalone helpers here are shared by the field exponentiation and
// Miller loop code; signed-digit (NAF) helpers live in `naf`.

mod naf;

pub use naf::{non_adjacent_form, signed_digits_value};

/// Position of the most significant set bit (0-indexed).
/// Returns 0 for input 0.
#[inline]
pub fn get_msb64(val: u64) -> u32 {
    if val == 0 { 0 } else { 63 - val.leading_zeros() }
}

/// Position of the most significant set bit of a little-endian word slice,
/// or `None` if every word is zero.
#[inline]
pub fn get_msb_words(words: &[u64]) -> Option<u32> {
    let top = words.iter().rposition(|&w| w != 0)?;
    Some(top as u32 * 64 + get_msb64(words[top]))
}

/// Bit `index` of a little-endian word slice. Out-of-range bits read as zero.
#[inline]
pub fn get_bit_words(words: &[u64], index: u32) -> bool {
    let limb = (index / 64) as usize;
    limb < words.len() && (words[limb] >> (index % 64)) & 1 == 1
}
