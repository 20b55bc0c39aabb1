//! Structured logging infrastructure for sitelingo
//!
//! Two concerns live here: installing a process-wide subscriber for binaries
//! that embed sitelingo ([`init_logging`]), and [`DiagnosticLogger`], the
//! handle library components receive at construction time and emit their
//! diagnostics through.

use crate::error::{Result, SitelingoError};
use std::fmt;
use tracing::{Dispatch, Subscriber};
use tracing_subscriber::{
    fmt::{self as tracing_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human friendly output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON records
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "sitelingo_i18n=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to include thread ids
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            include_spans: false,
            include_targets: true,
            include_thread_ids: false,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration
///
/// Fails if the filter directive cannot be parsed or a global subscriber
/// has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .map_err(|e| SitelingoError::config_with_source("Invalid log filter directive", e))?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                tracing_fmt::layer()
                    .json()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_thread_ids(config.include_thread_ids),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_fmt::layer()
                    .pretty()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_thread_ids(config.include_thread_ids),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                tracing_fmt::layer()
                    .compact()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_thread_ids(config.include_thread_ids),
            )
            .try_init(),
    };

    installed.map_err(|e| SitelingoError::with_source("Failed to install tracing subscriber", e))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

/// Initialize logging for development (pretty, debug level for sitelingo crates)
pub fn init_dev_logging() -> Result<()> {
    init_logging(&LoggingConfig {
        level: "info,sitelingo_i18n=debug,sitelingo_config=debug".to_string(),
        format: LogFormat::Pretty,
        include_spans: true,
        ..LoggingConfig::default()
    })
}

/// Injectable diagnostic sink.
///
/// Components hold one of these instead of logging to whatever subscriber
/// happens to be installed. Events emitted inside [`DiagnosticLogger::in_scope`]
/// reach the bound dispatcher; the global logger forwards to the ambient one.
#[derive(Clone, Default)]
pub struct DiagnosticLogger {
    dispatch: Option<Dispatch>,
}

impl fmt::Debug for DiagnosticLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match &self.dispatch {
            None => "global",
            Some(_) => "scoped",
        };
        f.debug_struct("DiagnosticLogger")
            .field("dispatch", &target)
            .finish()
    }
}

impl DiagnosticLogger {
    /// Forward diagnostics to the current default subscriber
    pub const fn global() -> Self {
        Self { dispatch: None }
    }

    /// Discard all diagnostics
    pub fn silent() -> Self {
        Self::from_dispatch(Dispatch::none())
    }

    /// Send diagnostics to an explicit dispatcher
    pub const fn from_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    /// Send diagnostics to an explicit subscriber
    pub fn from_subscriber<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self::from_dispatch(Dispatch::new(subscriber))
    }

    /// Run `f` with this logger's dispatcher as the default for the current thread
    pub fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CapturedLogs;
    use tracing::Level;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = LoggingConfig {
            level: "sitelingo=notalevel".to_string(),
            ..LoggingConfig::default()
        };

        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, SitelingoError::Config { .. }));
    }

    #[test]
    fn test_scoped_logger_captures_events() {
        let logs = CapturedLogs::new();
        let logger = DiagnosticLogger::from_dispatch(logs.dispatch(Level::DEBUG));

        let value = logger.in_scope(|| {
            tracing::debug!(identifier = %"hello", "captured");
            42
        });

        assert_eq!(value, 42);
        assert!(logs.contents().contains("captured"));
        assert!(logs.contents().contains("identifier=hello"));
    }

    #[test]
    fn test_silent_logger_discards_events() {
        let logs = CapturedLogs::new();
        let outer = DiagnosticLogger::from_dispatch(logs.dispatch(Level::TRACE));

        outer.in_scope(|| {
            DiagnosticLogger::silent().in_scope(|| tracing::warn!("dropped"));
        });

        assert!(logs.is_empty());
    }
}
