//! Error types shared by the parsing helpers

/// Result alias wrapping the error variant into an `error_stack::Report`,
/// so callers can attach context as the error travels up.
///
/// Equivalent to `Result<T, error_stack::Report<E>>`.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing errors surfaced while turning a payload into a typed value
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// Failed to parse the given type from the payload
    #[error("Failed to parse {0}")]
    StructParseFailure(&'static str),
}
