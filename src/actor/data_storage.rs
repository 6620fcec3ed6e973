//! DataStorage Actor - owns the input lines and feeds words into the pipeline

use std::{path::Path, sync::Arc};

use tracing::{Level, event};

use crate::{
    actor::message::{ControllerMessage, DataStorageMessage, StopWordFilterMessage},
    domain::{constant::data_storage, frequency::tokenize},
    port::source::LineSource,
    runtime::{Actor, ActorError, ActorRef}
};

/// DataStorage Actor State - empty until `Init` arrives
#[derive(Debug, Default)]
pub struct DataStorageState {
    /// Lines of the input file
    lines:  Vec<String>,
    /// Next pipeline stage
    filter: Option<ActorRef<StopWordFilterMessage>>
}

/// DataStorage Actor - reads the input file and tokenizes it on request
pub struct DataStorage {
    source: Arc<dyn LineSource>
}

impl DataStorage {
    pub fn new(source: Arc<dyn LineSource>) -> Self {
        Self { source }
    }
}

impl Actor for DataStorage {
    type Msg = DataStorageMessage;
    type State = DataStorageState;

    fn name(&self) -> &'static str {
        "DataStorage"
    }

    fn pre_start(&self, _myself: &ActorRef<Self::Msg>) -> Self::State {
        DataStorageState::default()
    }

    fn dispatch(
        &self,
        _myself: &ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State
    ) -> Result<(), ActorError> {
        match message {
            DataStorageMessage::Init { filename, filter } => self.handle_init(&filename, filter, state),
            DataStorageMessage::SendWordFrequencies { receiver } => self.handle_send_word_frequencies(receiver, state),
            // Pass-through: only `Die` travels downstream from here
            DataStorageMessage::Die => {
                if let Some(filter) = &state.filter {
                    filter.send(StopWordFilterMessage::Die);
                    event!(Level::DEBUG, event = data_storage::DIE_FORWARDED, to = filter.name());
                }
                Ok(())
            }
        }
    }
}

impl DataStorage {
    fn handle_init(
        &self,
        filename: &Path,
        filter: ActorRef<StopWordFilterMessage>,
        state: &mut DataStorageState
    ) -> Result<(), ActorError> {
        state.lines = self.source.read_lines(filename).map_err(|e| ActorError::io(self.name(), e.to_string()))?;
        state.filter = Some(filter);

        event!(Level::DEBUG, event = data_storage::LINES_LOADED,
               file = %filename.display(), lines = state.lines.len());
        Ok(())
    }

    fn handle_send_word_frequencies(
        &self,
        receiver: ActorRef<ControllerMessage>,
        state: &mut DataStorageState
    ) -> Result<(), ActorError> {
        let filter = state
            .filter
            .as_ref()
            .ok_or_else(|| ActorError::protocol(self.name(), "SendWordFrequencies received before Init"))?;

        let mut emitted = 0usize;
        for word in state.lines.iter().flat_map(|line| tokenize(line)) {
            filter.send(StopWordFilterMessage::Filter { word });
            emitted += 1;
        }
        filter.send(StopWordFilterMessage::Top25 { receiver });

        event!(Level::DEBUG, event = data_storage::WORDS_EMITTED, words = emitted);
        Ok(())
    }
}
