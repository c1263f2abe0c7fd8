//! The errors returned by the fallible operations of this crate.

use thiserror::Error;

/// The reasons [`whole_pow`](crate::math::whole_pow) can reject its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PowError {
    /// The exponent was negative, so the result would not be a whole number.
    #[error("exponent must not be negative")]
    NegativeExponent,
    /// The base was negative.
    #[error("base must not be negative")]
    NegativeBase,
    /// Both base and exponent were zero.
    #[error("zero to the power of zero is indeterminate")]
    Indeterminate,
    /// The result does not fit in the integer type.
    #[error("result overflows the integer type")]
    Overflow,
}
