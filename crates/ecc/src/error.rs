use thiserror::Error;

/// Failures surfaced by field, group and pairing operations.
///
/// All of these are caused by inputs, never by transient state, so none of
/// them are worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EccError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("point at infinity has no affine representation")]
    PointAtInfinity,

    #[error("point is not on the curve")]
    PointNotOnCurve,

    #[error("operands were built from different field parameter instances")]
    FieldMismatch,

    #[error("operands were built from different curve parameter instances")]
    CurveMismatch,

    #[error("encoding is {actual} bytes, expected {expected}")]
    InvalidEncodingLength { expected: usize, actual: usize },

    #[error("invalid ate loop table: {0}")]
    InvalidLoopTable(&'static str),
}
