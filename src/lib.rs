//! # Actor Word Frequency
//!
//! Computes the 25 most frequent words of a text file, excluding a stop-word list,
//! with a pipeline of actors that share nothing but their mailboxes.
//!
//! This crate provides:
//! - A minimal runtime giving each actor its own OS thread, an unbounded FIFO
//!   mailbox and a single-threaded dispatch loop
//! - Four pipeline actors: DataStorage, StopWordFilter, FrequencyAggregator and Controller
//! - A driver that wires the actors, starts the run and joins every thread
//!
//! ```no_run
//! use std::path::Path;
//!
//! let top = wordfreq::count_words(Path::new("pride.txt"), Path::new("stop_words.txt"))?;
//! for (word, count) in &top {
//!     println!("{word} - {count}");
//! }
//! # Ok::<(), wordfreq::WordFreqError>(())
//! ```

pub mod actor;
pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod pipeline;
pub mod port;
pub mod runtime;
pub mod ui;

// Re-export commonly used types
pub use cli::{OutputFormat, WordFreqCli};
pub use config::{Settings, load_settings};
pub use domain::{
    error::WordFreqError,
    frequency::{TOP_N, WordFrequencies}
};
pub use pipeline::{PipelineConfig, WordFrequencyPipeline, count_words};
