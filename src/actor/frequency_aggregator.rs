//! FrequencyAggregator Actor - counts words and ranks them on request

use tracing::{Level, event};

use crate::{
    actor::message::{ControllerMessage, FrequencyAggregatorMessage},
    domain::{
        constant::frequency_aggregator,
        frequency::{TOP_N, WordCounts, record, top}
    },
    runtime::{Actor, ActorError, ActorRef}
};

/// FrequencyAggregator Actor State
#[derive(Debug, Default)]
pub struct FrequencyAggregatorState {
    /// Running counts in first-seen order
    counts: WordCounts
}

impl FrequencyAggregatorState {
    pub fn counts(&self) -> &WordCounts {
        &self.counts
    }
}

/// FrequencyAggregator Actor - last stage of the pipeline
pub struct FrequencyAggregator;

impl Actor for FrequencyAggregator {
    type Msg = FrequencyAggregatorMessage;
    type State = FrequencyAggregatorState;

    fn name(&self) -> &'static str {
        "FrequencyAggregator"
    }

    fn pre_start(&self, _myself: &ActorRef<Self::Msg>) -> Self::State {
        FrequencyAggregatorState::default()
    }

    fn dispatch(
        &self,
        _myself: &ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State
    ) -> Result<(), ActorError> {
        match message {
            FrequencyAggregatorMessage::Word { word } => record(&mut state.counts, word),
            FrequencyAggregatorMessage::Top25 { receiver } => self.handle_top25(receiver, state),
            FrequencyAggregatorMessage::Die => {}
        }
        Ok(())
    }
}

impl FrequencyAggregator {
    fn handle_top25(&self, receiver: ActorRef<ControllerMessage>, state: &FrequencyAggregatorState) {
        let frequencies = top(&state.counts, TOP_N);

        event!(Level::DEBUG, event = frequency_aggregator::TOP_WORDS_COMPUTED,
               distinct = state.counts.len(), reported = frequencies.len());

        receiver.send(ControllerMessage::Result { frequencies });
    }
}
