//! # Word Frequency CLI
//!
//! Prints the 25 most frequent words of a text file, skipping stop words.
//!
//! ## Usage
//!
//! ```bash
//! # Stop words from ./stop_words.txt or the configured path
//! wordfreq pride-and-prejudice.txt
//!
//! # Explicit stop words, JSON output, debug logging
//! wordfreq --stop-words stop_words.txt --format json -vv pride-and-prejudice.txt
//! ```
//!
//! Logs go to stderr. `RUST_LOG` takes precedence over `-v` and the configured level.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordfreq::{PipelineConfig, WordFreqCli, WordFrequencyPipeline, load_settings, ui::display};

fn main() -> Result<()> {
    let cli = WordFreqCli::parse();
    let settings = load_settings(cli.config.as_deref())?.with_stop_words(cli.stop_words.clone());

    init_tracing(cli.verbosity_filter().unwrap_or(settings.log_level.as_str()));

    let config = PipelineConfig::new(&cli.input, &settings.stop_words);
    let result = WordFrequencyPipeline::from_files()
        .run(&config)
        .with_context(|| format!("Failed to count words in {}", cli.input.display()))?;

    println!("{}", display::render(&result, cli.format)?);
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
