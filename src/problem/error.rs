//! Errors raised while building or loading a problem instance.

use std::fmt;

/// The error type for problem construction and loading.
///
/// Every variant that originates in the text format carries the 1-based
/// line number of the offending line.
#[derive(Debug)]
pub enum ProblemError {
    /// The problem file could not be opened or read.
    Io(std::io::Error),

    /// The input ended before all expected lines were read.
    UnexpectedEof {
        /// Line number at which more input was expected.
        line: usize,
    },

    /// A line holds the wrong number of whitespace-separated tokens.
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A token could not be parsed as a non-negative integer.
    InvalidToken {
        line: usize,
        /// Name of the field being read (e.g. `"salary"`).
        field: &'static str,
        token: String,
    },

    /// A need flag other than `0` or `1`.
    InvalidFlag {
        line: usize,
        /// 1-based column (piece) of the flag.
        column: usize,
        token: String,
    },

    /// A vector or matrix does not match the declared dimensions.
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A salary or piece length that is negative, NaN or infinite.
    InvalidValue {
        what: &'static str,
        /// 0-based position in its vector.
        index: usize,
        value: f64,
    },

    /// The instance declares zero pieces or zero solists.
    EmptyInstance,

    /// Non-blank content follows the piece duration line.
    TrailingContent { line: usize },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read problem file: {e}"),
            Self::UnexpectedEof { line } => {
                write!(f, "line {line}: unexpected end of input")
            }
            Self::TokenCount {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} values, found {found}"),
            Self::InvalidToken { line, field, token } => {
                write!(f, "line {line}: invalid {field} '{token}'")
            }
            Self::InvalidFlag {
                line,
                column,
                token,
            } => write!(
                f,
                "line {line}: need flag in column {column} must be 0 or 1, found '{token}'"
            ),
            Self::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(f, "{what}: expected {expected} entries, found {found}"),
            Self::InvalidValue { what, index, value } => write!(
                f,
                "{what} {index} must be a finite non-negative number, found {value}"
            ),
            Self::EmptyInstance => {
                write!(f, "number of pieces and number of solists must be positive")
            }
            Self::TrailingContent { line } => {
                write!(f, "line {line}: unexpected content after piece durations")
            }
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProblemError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_line() {
        let err = ProblemError::TokenCount {
            line: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "line 3: expected 5 values, found 4");
    }

    #[test]
    fn test_io_error_has_source() {
        let err: ProblemError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
