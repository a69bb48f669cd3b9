pub mod curves;
pub mod error;
pub mod fields;
pub mod groups;
pub mod pairing;

pub use error::EccError;

#[cfg(test)]
mod tests;
