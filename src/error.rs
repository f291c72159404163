use strum::IntoStaticStr;
use thiserror::Error;

/// Reasons a single candidate line could not be decomposed into an ESR code.
///
/// Every variant is fatal to one parse attempt only. Callers are expected to retry with
/// different OCR preprocessing or to prompt the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParseError {
    #[error("the primary delimiter '>' was not found")]
    DelimiterNotFound,
    #[error("the reference number needs {length} characters from position {start}, only {available} are available")]
    ReferenceSectionTooShort {
        start: usize,
        length: usize,
        available: usize,
    },
    /// Non-digit content, or more than 39 digits, which no longer fit a `u128` of Rappen.
    #[error("the amount section is not a number of Rappen")]
    InvalidAmount,
    #[error("the reference number does not end with a check digit")]
    InvalidReferenceCheckDigit,
    #[error("the account number section is too short")]
    AccountSectionTooShort,
}

impl ParseError {
    /// Stable identifier of the variant, used as a metric label.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("character {found:?} at position {position} is not a decimal digit")]
    NotADigit { position: usize, found: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum line length {min_length} exceeds maximum {max_length}")]
    InvalidLengthBounds { min_length: usize, max_length: usize },
    #[error("type code {0:?} is not two decimal digits")]
    InvalidTypeCode(String),
}

/// Failure of a whole recognition attempt over OCR text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("no line of the text looks like an ESR code")]
    NoCandidate,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transmission failed: {reason}")]
pub struct TransmitError {
    pub reason: String,
}

impl TransmitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
