pub mod bls12_381;
pub mod bn254;
pub mod curve_params;

pub use bls12_381::Bls12_381;
pub use bn254::Bn254;
pub use curve_params::{CurveConstants, CurveFamily, CurveParameters, PairingCurve, TwistType};
