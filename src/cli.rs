//! CLI argument parsing

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Print the 25 most frequent words of a text file, skipping stop words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct WordFreqCli {
    /// Text file to analyse
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Comma-separated stop word file (overrides the configured one)
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Configuration file (defaults to config.yaml in the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8
}

/// How the ranked result is printed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Ranked table
    Text,
    /// JSON array of entries
    Json
}

impl WordFreqCli {
    /// Log filter implied by `-v` flags, if any were given
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace")
        }
    }
}
