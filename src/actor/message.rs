//! Typed messages for actor communication

use std::path::PathBuf;

use crate::runtime::{ActorRef, Message};

/// Messages for the DataStorage actor
#[derive(Debug)]
pub enum DataStorageMessage {
    /// Load the input file and remember the filter stage
    Init { filename: PathBuf, filter: ActorRef<StopWordFilterMessage> },
    /// Emit every word of the input, then ask for the top words on behalf of `receiver`
    SendWordFrequencies { receiver: ActorRef<ControllerMessage> },
    /// Stop, forwarding downstream first
    Die
}

/// Messages for the StopWordFilter actor
#[derive(Debug)]
pub enum StopWordFilterMessage {
    /// Load the stop words and remember the aggregator
    Init { stop_words_filename: PathBuf, aggregator: ActorRef<FrequencyAggregatorMessage> },
    /// A candidate word from the input
    Filter { word: String },
    /// No more words; relayed to the aggregator
    Top25 { receiver: ActorRef<ControllerMessage> },
    /// Stop, forwarding downstream first
    Die
}

/// Messages for the FrequencyAggregator actor
#[derive(Debug)]
pub enum FrequencyAggregatorMessage {
    /// Count one occurrence
    Word { word: String },
    /// Send the ranked top words to `receiver`
    Top25 { receiver: ActorRef<ControllerMessage> },
    Die
}

/// Messages for the Controller actor
#[derive(Debug)]
pub enum ControllerMessage {
    /// Start the pipeline
    Run { data_storage: ActorRef<DataStorageMessage> },
    /// Ranked (word, count) pairs, most frequent first
    Result { frequencies: Vec<(String, u64)> },
    Die
}

macro_rules! impl_message {
    ($($message:ident),* $(,)?) => {
        $(
            impl Message for $message {
                fn die() -> Self {
                    $message::Die
                }

                fn is_die(&self) -> bool {
                    matches!(self, $message::Die)
                }
            }
        )*
    };
}

impl_message!(DataStorageMessage, StopWordFilterMessage, FrequencyAggregatorMessage, ControllerMessage);
