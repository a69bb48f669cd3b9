// Numeric types and operations.
//
// - uint256: Backed by crypto-bigint U256 (group orders, cofactors, scalars)
// - uintx: Extended-width literals (final-exponent widths)
// - bitop: Bit manipulation and signed-digit utilities
// - random: RNG wrappers

pub mod bitop;
pub mod random;
pub mod uint256;
pub mod uintx;

pub use uint256::{U256, U256Ext};
pub use uintx::{significant_words, U3072, U4352};
