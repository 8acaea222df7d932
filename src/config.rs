//! Runtime configuration for the command line tool.
//!
//! Configuration is resolved once at startup (flags first, then environment, then defaults) and
//! passed down explicitly. Nothing below `main` reads the environment.

use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format.
pub const OUTPUT_ENV: &str = "UUID58_OUTPUT";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "UUID58_LOG";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "uuid58=info,uuid58_cli=info";

/// How results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One bare value per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RunConfig {
    output: OutputFormat,
    log_filter: String,
}

impl RunConfig {
    /// Create a new `RunConfig`.
    ///
    /// The log filter is parsed here so that a bad directive fails at startup rather than being
    /// silently ignored by the subscriber.
    pub fn new(output: OutputFormat, log_filter: String) -> anyhow::Result<Self> {
        if log_filter.trim().is_empty() {
            bail!("{LOG_ENV} cannot be empty");
        }
        EnvFilter::try_new(&log_filter)
            .with_context(|| format!("invalid log filter '{log_filter}'"))?;

        Ok(Self { output, log_filter })
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Builds the tracing filter for this configuration.
    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("invalid log filter '{}'", self.log_filter))
    }
}
