//! The reduced optimal ate pairing over the curves in [`crate::curves`].
//!
//! `precompute_g2` turns a G2 point into Miller lines, `miller_loop`
//! evaluates them at a G1 point and `final_exponentiation` maps the result
//! into GT. `pairing` chains the three.

pub mod engine;
pub mod final_exponentiation;
pub mod gt;
pub mod lines;
pub mod miller_loop;

pub use engine::{batch_pairing, pairing, pairing_check, pairing_product};
pub use final_exponentiation::{final_exponentiation, final_exponentiation_easy_part};
pub use gt::GtElement;
pub use lines::{EllCoeffs, Line};
pub use miller_loop::{line_count, miller_loop, multi_miller_loop, precompute_g2, MillerLoopCoefficients};
