//! StopWordFilter Actor - drops stop words, passes everything else downstream

use std::{collections::HashSet, path::Path, sync::Arc};

use tracing::{Level, event};

use crate::{
    actor::message::{FrequencyAggregatorMessage, StopWordFilterMessage},
    domain::{constant::stop_word_filter, frequency::parse_stop_words},
    port::source::LineSource,
    runtime::{Actor, ActorError, ActorRef}
};

/// StopWordFilter Actor State
#[derive(Debug, Default)]
pub struct StopWordFilterState {
    /// Words never counted, case-sensitive as loaded
    stop_words: HashSet<String>,
    /// Next pipeline stage
    aggregator: Option<ActorRef<FrequencyAggregatorMessage>>
}

/// StopWordFilter Actor - second stage of the pipeline
pub struct StopWordFilter {
    source: Arc<dyn LineSource>
}

impl StopWordFilter {
    pub fn new(source: Arc<dyn LineSource>) -> Self {
        Self { source }
    }
}

impl Actor for StopWordFilter {
    type Msg = StopWordFilterMessage;
    type State = StopWordFilterState;

    fn name(&self) -> &'static str {
        "StopWordFilter"
    }

    fn pre_start(&self, _myself: &ActorRef<Self::Msg>) -> Self::State {
        StopWordFilterState::default()
    }

    fn dispatch(
        &self,
        _myself: &ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State
    ) -> Result<(), ActorError> {
        match message {
            StopWordFilterMessage::Init { stop_words_filename, aggregator } => {
                self.handle_init(&stop_words_filename, aggregator, state)
            }
            StopWordFilterMessage::Filter { word } => self.handle_filter(word, state),
            // Pass-through: exactly these two variants are relayed to the aggregator
            StopWordFilterMessage::Top25 { receiver } => {
                self.forward(FrequencyAggregatorMessage::Top25 { receiver }, state)
            }
            StopWordFilterMessage::Die => {
                if state.aggregator.is_some() {
                    self.forward(FrequencyAggregatorMessage::Die, state)?;
                }
                Ok(())
            }
        }
    }
}

impl StopWordFilter {
    fn handle_init(
        &self,
        filename: &Path,
        aggregator: ActorRef<FrequencyAggregatorMessage>,
        state: &mut StopWordFilterState
    ) -> Result<(), ActorError> {
        let lines = self.source.read_lines(filename).map_err(|e| ActorError::io(self.name(), e.to_string()))?;
        state.stop_words = parse_stop_words(lines);
        state.aggregator = Some(aggregator);

        event!(Level::DEBUG, event = stop_word_filter::STOP_WORDS_LOADED,
               file = %filename.display(), stop_words = state.stop_words.len());
        Ok(())
    }

    fn handle_filter(&self, word: String, state: &StopWordFilterState) -> Result<(), ActorError> {
        let aggregator = self.aggregator(state, "Filter")?;
        if !state.stop_words.contains(&word) {
            aggregator.send(FrequencyAggregatorMessage::Word { word });
        }
        Ok(())
    }

    fn forward(&self, message: FrequencyAggregatorMessage, state: &StopWordFilterState) -> Result<(), ActorError> {
        let aggregator = self.aggregator(state, "forwarded message")?;
        event!(Level::TRACE, event = stop_word_filter::MESSAGE_FORWARDED, message = ?message);
        aggregator.send(message);
        Ok(())
    }

    fn aggregator<'a>(
        &self,
        state: &'a StopWordFilterState,
        received: &str
    ) -> Result<&'a ActorRef<FrequencyAggregatorMessage>, ActorError> {
        state
            .aggregator
            .as_ref()
            .ok_or_else(|| ActorError::protocol(self.name(), format!("{} received before Init", received)))
    }
}
