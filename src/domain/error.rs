use thiserror::Error;

use crate::runtime::ActorError;

/// Common error types for the word frequency pipeline
#[derive(Error, Debug, Clone)]
pub enum WordFreqError {
    /// File system related errors
    #[error("{0}")]
    FileSystem(String),

    /// An actor received a message it cannot handle in its current state
    #[error("{0}")]
    Protocol(String),

    /// An actor stopped with a failure
    #[error("actor '{actor}' failed: {reason}")]
    Actor { actor: String, reason: String },

    /// Spawn errors
    #[error("{0}")]
    Spawn(String),

    /// Serialization/deserialization errors
    #[error("{0}")]
    Serialization(String)
}

/// Convert from serde_json::Error
impl From<serde_json::Error> for WordFreqError {
    fn from(err: serde_json::Error) -> Self {
        WordFreqError::Serialization(err.to_string())
    }
}

/// Convert from the runtime's actor failures
impl From<ActorError> for WordFreqError {
    fn from(err: ActorError) -> Self {
        match err {
            ActorError::Protocol { actor, reason } => WordFreqError::Protocol(format!("{}: {}", actor, reason)),
            ActorError::Io { actor, reason } => WordFreqError::FileSystem(format!("{}: {}", actor, reason)),
            ActorError::Spawn { actor, reason } => WordFreqError::Spawn(format!("{}: {}", actor, reason)),
            ActorError::Panicked { actor, reason } | ActorError::Cancelled { actor, reason } => {
                WordFreqError::Actor { actor, reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_failure_maps_to_protocol_error() {
        let err: WordFreqError =
            ActorError::protocol("StopWordFilter", "filter received before init").into();

        assert!(matches!(err, WordFreqError::Protocol(_)));
        assert_eq!(err.to_string(), "StopWordFilter: filter received before init");
    }

    #[test]
    fn test_panic_maps_to_actor_error() {
        let err: WordFreqError =
            ActorError::Panicked { actor: "Controller".to_string(), reason: "boom".to_string() }.into();

        assert_eq!(err.to_string(), "actor 'Controller' failed: boom");
    }

    #[test]
    fn test_read_failure_inside_an_actor_maps_to_file_system_error() {
        let err: WordFreqError = ActorError::io("DataStorage", "Failed to read input.txt").into();

        assert!(matches!(err, WordFreqError::FileSystem(_)));
        assert_eq!(err.to_string(), "DataStorage: Failed to read input.txt");
    }
}
