//! Typed environment variable accessors
//!
//! Each getter takes a key, whether the variable is required, and a
//! fallback used when it is unset and optional. The free functions read the
//! process environment; [`Env`] works over any [`VarSource`].

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod env;
pub mod source;

pub use env::{Env, parse_bool};
pub use source::{MapSource, ProcessEnv, VarSource};

use quanta_core::Result;
use serde::de::DeserializeOwned;

/// See [`Env::get_as_string`]
///
/// # Errors
/// Returns error if required and unset
pub fn get_as_string(key: &str, required: bool, fallback: impl Into<String>) -> Result<String> {
    Env::process().get_as_string(key, required, fallback)
}

/// See [`Env::get_as_int`]
///
/// # Errors
/// Returns error if required and unset, or not an integer
pub fn get_as_int(key: &str, required: bool, fallback: i64) -> Result<i64> {
    Env::process().get_as_int(key, required, fallback)
}

/// See [`Env::get_as_uint64`]
///
/// # Errors
/// Returns error if required and unset, or not an unsigned integer
pub fn get_as_uint64(key: &str, required: bool, fallback: u64) -> Result<u64> {
    Env::process().get_as_uint64(key, required, fallback)
}

/// See [`Env::get_as_float64`]
///
/// # Errors
/// Returns error if required and unset, or not a float
pub fn get_as_float64(key: &str, required: bool, fallback: f64) -> Result<f64> {
    Env::process().get_as_float64(key, required, fallback)
}

/// See [`Env::get_as_bool`]
///
/// # Errors
/// Returns error if required and unset, or not a boolean
pub fn get_as_bool(key: &str, required: bool, fallback: bool) -> Result<bool> {
    Env::process().get_as_bool(key, required, fallback)
}

/// See [`Env::get_as_quantity`]
///
/// # Errors
/// Returns error if required and unset, or not a valid quantity
pub fn get_as_quantity(key: &str, required: bool, fallback: i64) -> Result<i64> {
    Env::process().get_as_quantity(key, required, fallback)
}

/// See [`Env::get_as_type`]
///
/// # Errors
/// Returns error if required and unset, or not JSON for `T`
pub fn get_as_type<T: DeserializeOwned>(key: &str, required: bool, fallback: T) -> Result<T> {
    Env::process().get_as_type(key, required, fallback)
}
