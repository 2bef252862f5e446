use thiserror::Error;

/// Error returned by the sequence algebra.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Two sequences (or a sequence and a string) don't line up: the string
    /// fed to [`apply`](crate::Sequence::apply) or
    /// [`invert`](crate::Sequence::invert) doesn't have exactly `base_len`
    /// codepoints, the output length of the first operand of
    /// [`compose`](crate::Sequence::compose) doesn't match the input length
    /// of the second, or the two operands of
    /// [`transform`](crate::Sequence::transform) don't share a base length.
    #[error("incompatible lengths")]
    IncompatibleLengths,
}
