use thiserror::Error;

/// Validation failure for a `/fizzbuzz` query.
///
/// The `Display` output is returned verbatim as the body of the
/// `400 Bad Request` response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// One of `int1`, `int2` or `limit` is missing or not an integer.
    #[error("int1, int2 and limit parameters must be integers")]
    InvalidParameter,

    /// An integer is zero or negative, or a string is empty.
    #[error("all parameters are required and must be valid")]
    MissingOrNonPositiveParameter,

    /// `limit` is above the configured maximum.
    #[error("limit must not be greater than {max}")]
    LimitTooLarge { max: u64 },
}
