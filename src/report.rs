//! Writes per-input results in the configured output format.

use crate::config::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

/// The outcome for a single input.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Record<'a> {
    Converted { input: &'a str, output: String },
    Checked { input: &'a str, valid: bool },
    Generated { output: String },
    Failed { input: &'a str, error: String },
}

/// Writes records and counts the ones that should fail the run.
///
/// In text mode values go to `out` and errors to `err`. In JSON mode every record is a line on
/// `out`, so the stream stays machine-readable.
pub struct Reporter<O: Write, E: Write> {
    format: OutputFormat,
    out: O,
    err: E,
    failures: usize,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(format: OutputFormat, out: O, err: E) -> Self {
        Self {
            format,
            out,
            err,
            failures: 0,
        }
    }

    /// Number of failed or invalid inputs reported so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn record(&mut self, record: &Record<'_>) -> io::Result<()> {
        if matches!(
            record,
            Record::Failed { .. } | Record::Checked { valid: false, .. }
        ) {
            self.failures += 1;
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)
            }
            OutputFormat::Text => match record {
                Record::Converted { output, .. } | Record::Generated { output } => {
                    writeln!(self.out, "{output}")
                }
                Record::Checked { valid, .. } => writeln!(self.out, "{valid}"),
                Record::Failed { error, .. } => writeln!(self.err, "error: {error}"),
            },
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
