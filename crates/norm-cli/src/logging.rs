//! Log settings for the CLI.
//!
//! Settings come from the `logging` section of the cleaner config, with the
//! command-line flags taking precedence. Output always goes to stderr so the
//! normalized text on stdout can be piped.

use clap::ValueEnum;
use norm_core::{LoggingConfig, NormError, NormResult};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(NormError::config(format!("unknown log format: {other}"))),
        }
    }
}

/// Resolved log settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive, e.g. `info` or `text_normalizer=trace`.
    pub level: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Merge the config file section with command-line overrides.
    pub fn resolve(
        config: &LoggingConfig,
        level: Option<&str>,
        format: Option<LogFormat>,
    ) -> NormResult<Self> {
        let level = level.unwrap_or(&config.level).trim().to_string();
        EnvFilter::try_new(&level)
            .map_err(|e| NormError::config(format!("invalid log level {level:?}: {e}")))?;

        let format = match format {
            Some(format) => format,
            None => config.format.parse()?,
        };

        Ok(Self { level, format })
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the resolved level.
pub fn init_logging(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match settings.format {
        LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init();
}
