//! Error types for interest calculation and holdings loading

use thiserror::Error;

/// Result type alias for interest calculator operations
pub type InterestResult<T> = Result<T, InterestError>;

/// Main error type for interest calculator operations
#[derive(Error, Debug)]
pub enum InterestError {
    /// A card was required but none was supplied
    #[error("missing card: a card reference is required")]
    MissingCard,

    /// A wallet was required but none was supplied
    #[error("missing wallet: a wallet reference is required")]
    MissingWallet,

    /// A person was required but none was supplied
    #[error("missing person: a person reference is required")]
    MissingPerson,

    /// Interest total does not fit in a decimal
    #[error("arithmetic overflow while computing interest")]
    Overflow,

    /// Card kind in holdings data is not recognised
    #[error("unknown card kind '{kind}' on row {row}")]
    UnknownCardKind { kind: String, row: usize },

    /// Balance in holdings data is not a decimal number
    #[error("invalid balance '{value}' on row {row}")]
    InvalidBalance { value: String, row: usize },

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reference_messages() {
        assert_eq!(
            InterestError::MissingWallet.to_string(),
            "missing wallet: a wallet reference is required"
        );
        assert_eq!(
            InterestError::MissingPerson.to_string(),
            "missing person: a person reference is required"
        );
    }

    #[test]
    fn test_loader_error_names_row() {
        let err = InterestError::UnknownCardKind {
            kind: "Amex".to_string(),
            row: 3,
        };
        assert_eq!(err.to_string(), "unknown card kind 'Amex' on row 3");

        let err = InterestError::InvalidBalance {
            value: "ten".to_string(),
            row: 7,
        };
        assert!(err.to_string().contains("row 7"));
    }

    #[test]
    fn test_overflow_message() {
        assert_eq!(
            InterestError::Overflow.to_string(),
            "arithmetic overflow while computing interest"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: InterestError = io.into();
        assert!(matches!(err, InterestError::Io(_)));
    }
}
