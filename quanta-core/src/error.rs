//! Error types for Quanta

use thiserror::Error;

/// Reasons a quantity string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuantityError {
    /// Input string has zero length
    #[error("quantity is empty")]
    EmptyInput,

    /// No digits, a dangling decimal point, or more than one decimal point
    #[error("malformed number in quantity {input:?}")]
    MalformedNumeral {
        /// Rejected input
        input: String,
    },

    /// Trailing text is not a known suffix
    #[error("unrecognized suffix {suffix:?} in quantity {input:?}")]
    UnrecognizedSuffix {
        /// Rejected input
        input: String,
        /// Trailing text that failed to match
        suffix: String,
    },

    /// Scaled value has a fractional part
    #[error("quantity {input:?} is not a whole number of units")]
    NonIntegralResult {
        /// Rejected input
        input: String,
    },

    /// Scaled value does not fit in a 64-bit signed integer
    #[error("quantity {input:?} overflows a 64-bit integer")]
    Overflow {
        /// Rejected input
        input: String,
    },
}

/// Fieldless discriminant of [`QuantityError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityErrorKind {
    /// See [`QuantityError::EmptyInput`]
    EmptyInput,
    /// See [`QuantityError::MalformedNumeral`]
    MalformedNumeral,
    /// See [`QuantityError::UnrecognizedSuffix`]
    UnrecognizedSuffix,
    /// See [`QuantityError::NonIntegralResult`]
    NonIntegralResult,
    /// See [`QuantityError::Overflow`]
    Overflow,
}

impl QuantityError {
    /// Which taxonomy entry this error belongs to
    #[must_use]
    pub const fn kind(&self) -> QuantityErrorKind {
        match self {
            Self::EmptyInput => QuantityErrorKind::EmptyInput,
            Self::MalformedNumeral { .. } => QuantityErrorKind::MalformedNumeral,
            Self::UnrecognizedSuffix { .. } => QuantityErrorKind::UnrecognizedSuffix,
            Self::NonIntegralResult { .. } => QuantityErrorKind::NonIntegralResult,
            Self::Overflow { .. } => QuantityErrorKind::Overflow,
        }
    }

    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedNumeral {
            input: input.to_string(),
        }
    }

    pub(crate) fn non_integral(input: &str) -> Self {
        Self::NonIntegralResult {
            input: input.to_string(),
        }
    }

    pub(crate) fn overflow(input: &str) -> Self {
        Self::Overflow {
            input: input.to_string(),
        }
    }
}

/// Quanta error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Quantity string rejected by the parser
    #[error("Invalid quantity: {0}")]
    Quantity(#[from] QuantityError),

    /// Required environment variable is missing
    #[error("environment variable {key} is required but not set")]
    EnvNotSet {
        /// Variable name
        key: String,
    },

    /// Environment variable is set but cannot be read as the requested type
    #[error("environment variable {key} is not {expected}: {value:?}")]
    EnvInvalid {
        /// Variable name
        key: String,
        /// Human-readable name of the expected type
        expected: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Environment variable holds JSON that does not match the target type
    #[error("failed to unmarshal environment variable {key}: {source}")]
    EnvUnmarshal {
        /// Variable name
        key: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Environment variable holds an invalid quantity
    #[error("environment variable {key} is not a valid quantity: {source}")]
    EnvQuantity {
        /// Variable name
        key: String,
        /// Underlying parse error
        #[source]
        source: QuantityError,
    },

    /// Logger could not be installed
    #[error("Logging error: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

/// Result type alias for Quanta operations
pub type Result<T> = std::result::Result<T, Error>;
