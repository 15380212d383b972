use thiserror::Error;

/// Errors surfaced by the checked entry points.
///
/// The unchecked distance functions are infallible: slices are always finite,
/// indexable sequences, so there is nothing left to validate at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The arguments violate a caller-stated contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An input sequence exceeds the caller-imposed length cap.
    #[error("sequence of length {len} exceeds the limit of {max}")]
    SequenceTooLong { len: usize, max: usize },
}

impl Error {
    /// Creates an `InvalidInput` error from anything string-like.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid_input("expected pairs");
        assert_eq!(err.to_string(), "invalid input: expected pairs");

        let err = Error::SequenceTooLong { len: 10, max: 4 };
        assert_eq!(
            err.to_string(),
            "sequence of length 10 exceeds the limit of 4"
        );
    }
}
