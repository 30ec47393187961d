//! Logger construction

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::{Dispatch, Level};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use quanta_core::{Error, Result};

use crate::EcsFormat;

/// Verbosity profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogProfile {
    /// Debug and above
    Development,
    /// Info and above
    #[default]
    Production,
}

impl LogProfile {
    /// Most verbose level this profile lets through
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Development => Level::DEBUG,
            Self::Production => Level::INFO,
        }
    }

    const fn directive(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "info",
        }
    }
}

impl FromStr for LogProfile {
    type Err = Infallible;

    /// `DEVELOPMENT` selects [`LogProfile::Development`]; every other value
    /// falls back to [`LogProfile::Production`]
    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(match s {
            "DEVELOPMENT" => Self::Development,
            _ => Self::Production,
        })
    }
}

impl fmt::Display for LogProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("DEVELOPMENT"),
            Self::Production => f.write_str("PRODUCTION"),
        }
    }
}

/// An explicitly owned logger
///
/// Cloning is cheap and every clone writes to the same sink.
///
/// # Example
/// ```
/// use quanta_log::{LogProfile, Logger};
///
/// let logger = Logger::new(LogProfile::Production);
/// logger.in_scope(|| tracing::info!(limit = "512Mi", "Applying memory limit"));
/// ```
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    profile: LogProfile,
}

impl Logger {
    /// Logger writing to stdout
    #[must_use]
    pub fn new(profile: LogProfile) -> Self {
        Self::with_writer(profile, std::io::stdout)
    }

    /// Logger for a level name as found in configuration, e.g. `DEVELOPMENT`
    #[must_use]
    pub fn from_level_name(name: &str) -> Self {
        let profile: LogProfile = name.parse().unwrap_or_default();
        Self::new(profile)
    }

    /// Logger writing to `make_writer`
    #[must_use]
    pub fn with_writer<W>(profile: LogProfile, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(profile.directive()))
            .event_format(EcsFormat::default())
            .with_writer(make_writer)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
            profile,
        }
    }

    /// Profile this logger was built with
    #[must_use]
    pub const fn profile(&self) -> LogProfile {
        self.profile
    }

    /// Underlying dispatcher, for handing to other `tracing` consumers
    #[must_use]
    pub const fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Run `f` with this logger as the current thread's default
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this logger the process-wide default
    ///
    /// Meant for binaries; libraries should take a `Logger` instead.
    pub fn install_global(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone()).map_err(|e| {
            Error::Logging {
                message: e.to_string(),
            }
        })
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
