//! Structured logging for Quanta services
//!
//! [`Logger`] owns a `tracing` dispatcher that writes one ECS-style JSON
//! object per event. Nothing is installed globally unless the caller asks
//! for it with [`Logger::install_global`].

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod ecs;
pub mod logger;

pub use ecs::{ECS_VERSION, EcsFormat};
pub use logger::{LogProfile, Logger};
