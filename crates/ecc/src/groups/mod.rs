pub mod affine_element;
pub mod curve_group;
pub mod element;

pub use affine_element::AffineElement;
pub use curve_group::{CurveGroup, G1, G2};
pub use element::Element;
