//! Display utilities for formatted output

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::{
    cli::OutputFormat,
    domain::{error::WordFreqError, frequency::WordFrequencies}
};

/// One line of the ranked output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct RankedWord {
    #[tabled(rename = "Rank")]
    pub rank:  usize,
    #[tabled(rename = "Word")]
    pub word:  String,
    #[tabled(rename = "Count")]
    pub count: u64
}

/// Number the result in its ranking order, starting at 1
pub fn ranked(result: &WordFrequencies) -> Vec<RankedWord> {
    result
        .iter()
        .enumerate()
        .map(|(index, (word, count))| RankedWord { rank: index + 1, word: word.clone(), count: *count })
        .collect()
}

/// Render the result as a table
pub fn render_text(result: &WordFrequencies) -> String {
    if result.is_empty() {
        return "No words counted.".to_string();
    }
    Table::new(ranked(result)).with(Style::sharp()).to_string()
}

/// Render the result as a JSON array
pub fn render_json(result: &WordFrequencies) -> Result<String, WordFreqError> {
    Ok(serde_json::to_string_pretty(&ranked(result))?)
}

/// Render the result in the requested format
pub fn render(result: &WordFrequencies, format: OutputFormat) -> Result<String, WordFreqError> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result)
    }
}
