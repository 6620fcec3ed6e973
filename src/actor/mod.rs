//! The word frequency pipeline, one actor per stage
//!
//! DataStorage -> StopWordFilter -> FrequencyAggregator -> Controller, with the
//! Controller triggering the run and collecting the ranked result.

pub mod controller;
pub mod data_storage;
pub mod frequency_aggregator;
pub mod message;
pub mod stop_word_filter;

pub use controller::*;
pub use data_storage::*;
pub use frequency_aggregator::*;
pub use message::*;
pub use stop_word_filter::*;
