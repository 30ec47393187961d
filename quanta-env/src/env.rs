//! Typed accessors over a [`VarSource`]

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use quanta_core::{Error, Result, parse_quantity};

use crate::source::{ProcessEnv, VarSource};

/// Typed view over a variable source
///
/// Every getter takes `(key, required, fallback)`:
/// - unset and not required: `fallback` is returned
/// - unset and required: [`Error::EnvNotSet`]
/// - set: the value is parsed, and a value that does not parse is an error
///   even when a fallback was given
#[derive(Debug, Clone, Default)]
pub struct Env<S: VarSource = ProcessEnv> {
    source: S,
}

impl Env<ProcessEnv> {
    /// Accessors over the process environment
    #[must_use]
    pub const fn process() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<S: VarSource> Env<S> {
    /// Accessors over `source`
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Underlying source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Raw value of `key`, or `None` when the fallback applies
    fn lookup(&self, key: &str, required: bool) -> Result<Option<String>> {
        match self.source.lookup(key) {
            Some(value) => Ok(Some(value)),
            None if required => Err(Error::EnvNotSet {
                key: key.to_string(),
            }),
            None => {
                debug!(key, "Environment variable not set, using fallback");
                Ok(None)
            }
        }
    }

    fn get_parsed<T>(
        &self,
        key: &str,
        required: bool,
        fallback: T,
        expected: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T> {
        let Some(value) = self.lookup(key, required)? else {
            return Ok(fallback);
        };

        parse(&value).ok_or_else(|| {
            warn!(key, expected, "Environment variable has wrong type");
            Error::EnvInvalid {
                key: key.to_string(),
                expected,
                value,
            }
        })
    }

    /// Value as a string; a variable set to `""` yields `""`
    ///
    /// # Errors
    /// Returns [`Error::EnvNotSet`] if required and unset
    pub fn get_as_string(
        &self,
        key: &str,
        required: bool,
        fallback: impl Into<String>,
    ) -> Result<String> {
        Ok(self
            .lookup(key, required)?
            .unwrap_or_else(|| fallback.into()))
    }

    /// Value as a signed decimal integer
    ///
    /// # Errors
    /// Returns error if required and unset, or not an integer
    pub fn get_as_int(&self, key: &str, required: bool, fallback: i64) -> Result<i64> {
        self.get_parsed(key, required, fallback, "an integer", |v| v.parse().ok())
    }

    /// Value as an unsigned decimal integer
    ///
    /// # Errors
    /// Returns error if required and unset, or not an unsigned integer
    pub fn get_as_uint64(&self, key: &str, required: bool, fallback: u64) -> Result<u64> {
        self.get_parsed(key, required, fallback, "an unsigned integer", |v| {
            v.parse().ok()
        })
    }

    /// Value as a float
    ///
    /// # Errors
    /// Returns error if required and unset, or not a float
    pub fn get_as_float64(&self, key: &str, required: bool, fallback: f64) -> Result<f64> {
        self.get_parsed(key, required, fallback, "a float", |v| v.parse().ok())
    }

    /// Value as a boolean, see [`parse_bool`] for the accepted spellings
    ///
    /// # Errors
    /// Returns error if required and unset, or not a boolean
    pub fn get_as_bool(&self, key: &str, required: bool, fallback: bool) -> Result<bool> {
        self.get_parsed(key, required, fallback, "a boolean", parse_bool)
    }

    /// Value as a resource quantity such as `512Mi`, in base units
    ///
    /// # Errors
    /// Returns error if required and unset, or [`Error::EnvQuantity`] when
    /// the quantity parser rejects the value
    pub fn get_as_quantity(&self, key: &str, required: bool, fallback: i64) -> Result<i64> {
        let Some(value) = self.lookup(key, required)? else {
            return Ok(fallback);
        };

        parse_quantity(&value).map_err(|source| {
            warn!(key, error = %source, "Environment variable is not a valid quantity");
            Error::EnvQuantity {
                key: key.to_string(),
                source,
            }
        })
    }

    /// Value decoded from JSON into `T`
    ///
    /// # Errors
    /// Returns error if required and unset, or [`Error::EnvUnmarshal`] when
    /// the value is not JSON for `T` (an empty value never is)
    pub fn get_as_type<T: DeserializeOwned>(
        &self,
        key: &str,
        required: bool,
        fallback: T,
    ) -> Result<T> {
        let Some(value) = self.lookup(key, required)? else {
            return Ok(fallback);
        };

        serde_json::from_str(&value).map_err(|source| {
            warn!(key, error = %source, "Failed to unmarshal environment variable");
            Error::EnvUnmarshal {
                key: key.to_string(),
                source,
            }
        })
    }
}

/// Boolean spellings: `1 t T TRUE true True` and `0 f F FALSE false False`
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
