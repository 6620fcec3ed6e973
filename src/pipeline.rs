//! Pipeline driver
//!
//! Spawns the four actors, wires them, sends the initial messages and blocks
//! until every actor thread has been joined. The Controller's result is read
//! only after its thread was joined.

use std::{
    path::{Path, PathBuf},
    sync::Arc
};

use tracing::{Level, event};

use crate::{
    actor::{
        Controller, ControllerMessage, DataStorage, DataStorageMessage, FrequencyAggregator, StopWordFilter,
        StopWordFilterMessage
    },
    adapter::source::FileLineSource,
    domain::{constant::pipeline, error::WordFreqError, frequency::WordFrequencies},
    port::source::LineSource,
    runtime::{Actor, ActorError, ActorHandle, ActorSystem}
};

/// The two files a run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Text to analyse
    pub input:      PathBuf,
    /// Comma-separated stop words
    pub stop_words: PathBuf
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, stop_words: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), stop_words: stop_words.into() }
    }
}

/// Handles of every stage of one run
struct Stages {
    data_storage: ActorHandle<DataStorage>,
    filter:       ActorHandle<StopWordFilter>,
    aggregator:   ActorHandle<FrequencyAggregator>,
    controller:   ActorHandle<Controller>
}

/// Runs the actor pipeline against a line source
pub struct WordFrequencyPipeline {
    source: Arc<dyn LineSource>
}

impl WordFrequencyPipeline {
    pub fn new(source: Arc<dyn LineSource>) -> Self {
        Self { source }
    }

    /// Pipeline reading from the local file system
    pub fn from_files() -> Self {
        Self::new(Arc::new(FileLineSource::new()))
    }

    /// Compute the top words of `config.input`, excluding `config.stop_words`.
    ///
    /// Both files are validated before any actor is spawned.
    pub fn run(&self, config: &PipelineConfig) -> Result<WordFrequencies, WordFreqError> {
        self.source.validate(&config.input)?;
        self.source.validate(&config.stop_words)?;
        event!(Level::DEBUG, event = pipeline::INPUTS_VALIDATED,
               input = %config.input.display(), stop_words = %config.stop_words.display());

        let system = ActorSystem::new();
        let stages = self.spawn_stages(&system)?;
        event!(Level::DEBUG, event = pipeline::ACTORS_SPAWNED);

        // The filter's Init is enqueued before Run, and every Filter message is
        // causally after Run, so the filter always sees Init first.
        stages.data_storage.send(DataStorageMessage::Init {
            filename: config.input.clone(),
            filter:   stages.filter.actor_ref().clone()
        });
        stages.filter.send(StopWordFilterMessage::Init {
            stop_words_filename: config.stop_words.clone(),
            aggregator:          stages.aggregator.actor_ref().clone()
        });
        stages.controller.send(ControllerMessage::Run { data_storage: stages.data_storage.actor_ref().clone() });
        event!(Level::INFO, event = pipeline::PIPELINE_STARTED, input = %config.input.display());

        let controller = stages.controller.join();
        let others = [
            stages.data_storage.join().map(|_| ()),
            stages.filter.join().map(|_| ()),
            stages.aggregator.join().map(|_| ())
        ];

        if let Some(failure) = system.take_failure() {
            event!(Level::ERROR, event = pipeline::PIPELINE_FAILED, error = %failure);
            return Err(failure.into());
        }
        let controller = controller?;
        others.into_iter().collect::<Result<(), ActorError>>()?;

        let result = controller
            .into_result()
            .ok_or_else(|| WordFreqError::Protocol("Controller stopped without a result".to_string()))?;

        event!(Level::INFO, event = pipeline::PIPELINE_COMPLETED, entries = result.len());
        Ok(result)
    }

    /// Spawn every stage; if one fails to start, the stages already running are joined
    fn spawn_stages(&self, system: &ActorSystem) -> Result<Stages, ActorError> {
        let aggregator = system.spawn(FrequencyAggregator)?;

        let filter = match system.spawn(StopWordFilter::new(Arc::clone(&self.source))) {
            Ok(filter) => filter,
            Err(error) => {
                let _ = abandon(system, aggregator);
                return Err(error);
            }
        };

        let data_storage = match system.spawn(DataStorage::new(Arc::clone(&self.source))) {
            Ok(data_storage) => data_storage,
            Err(error) => {
                let _ = abandon(system, aggregator);
                let _ = abandon(system, filter);
                return Err(error);
            }
        };

        match system.spawn(Controller) {
            Ok(controller) => Ok(Stages { data_storage, filter, aggregator, controller }),
            Err(error) => {
                let _ = abandon(system, aggregator);
                let _ = abandon(system, filter);
                let _ = abandon(system, data_storage);
                Err(error)
            }
        }
    }
}

/// Cancel the system and join a stage that will never be wired
fn abandon<A: Actor>(system: &ActorSystem, handle: ActorHandle<A>) -> Result<A::State, ActorError> {
    system.cancel();
    event!(Level::DEBUG, event = pipeline::STAGE_ABANDONED, actor = handle.actor_ref().name());
    handle.join()
}

/// Count the top words of `input` from disk, excluding the words in `stop_words`
pub fn count_words(input: &Path, stop_words: &Path) -> Result<WordFrequencies, WordFreqError> {
    WordFrequencyPipeline::from_files().run(&PipelineConfig::new(input, stop_words))
}
