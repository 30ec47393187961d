//! Quanta Core - exact resource quantity parsing
//!
//! This crate turns quantity strings such as `10Mi`, `1.1M` or `-1` into an
//! exact count of base units, and provides the error types shared by the
//! rest of the workspace.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod numeral;
pub mod quantity;
pub mod suffix;

pub use error::{Error, QuantityError, QuantityErrorKind, Result};
pub use quantity::{Quantity, parse_quantity};
pub use suffix::{Multiplier, Suffix};
