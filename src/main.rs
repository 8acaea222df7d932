use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod report;

use config::{DEFAULT_LOG_FILTER, LOG_ENV, OUTPUT_ENV, OutputFormat, RunConfig};
use report::{Record, Reporter};

#[derive(Parser)]
#[command(name = "uuid58")]
#[command(about = "Convert UUIDs to and from 22-character Base58")]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, env = OUTPUT_ENV, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log filter directive (written to stderr)
    #[arg(long, global = true, env = LOG_ENV, default_value = DEFAULT_LOG_FILTER)]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode UUIDs (hyphens optional, any case) as Base58
    Encode {
        #[arg(required = true)]
        uuids: Vec<String>,
    },
    /// Decode Base58 strings to hyphenated UUIDs
    Decode {
        #[arg(required = true)]
        encoded: Vec<String>,
    },
    /// Check whether strings are valid UUID58 values
    Check {
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Generate random version 4 UUIDs in Base58 form
    Generate {
        /// Number of identifiers to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: u32,
    },
}

/// Entry point for the `uuid58` command line tool.
///
/// Every input is processed even if an earlier one fails. The exit status is non-zero if any
/// input failed to convert or was reported invalid by `check`.
///
/// # Environment Variables
/// - `UUID58_OUTPUT`: `text` or `json` (default: `text`)
/// - `UUID58_LOG`: tracing filter directive (default: `uuid58=info,uuid58_cli=info`)
fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RunConfig::new(cli.output, cli.log)?;

    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!(command = ?cli.command, output = ?config.output(), "starting");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut reporter = Reporter::new(config.output(), stdout.lock(), stderr.lock());

    run(cli.command, &mut reporter)?;
    reporter.flush()?;

    let failures = reporter.failures();
    if failures > 0 {
        tracing::debug!(failures, "finished with failures");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run<O: Write, E: Write>(command: Command, reporter: &mut Reporter<O, E>) -> io::Result<()> {
    match command {
        Command::Encode { uuids } => {
            for input in &uuids {
                let record = match uuid58::encode(input) {
                    Ok(output) => Record::Converted { input, output },
                    Err(e) => Record::Failed {
                        input,
                        error: e.to_string(),
                    },
                };
                reporter.record(&record)?;
            }
        }
        Command::Decode { encoded } => {
            for input in &encoded {
                let record = match uuid58::decode(input) {
                    Ok(output) => Record::Converted { input, output },
                    Err(e) => Record::Failed {
                        input,
                        error: e.to_string(),
                    },
                };
                reporter.record(&record)?;
            }
        }
        Command::Check { candidates } => {
            for input in &candidates {
                let valid = uuid58::is_uuid58(input);
                reporter.record(&Record::Checked { input, valid })?;
            }
        }
        Command::Generate { count } => {
            for _ in 0..count {
                reporter.record(&Record::Generated {
                    output: uuid58::generate(),
                })?;
            }
            tracing::debug!(count, "generated identifiers");
        }
    }
    Ok(())
}
