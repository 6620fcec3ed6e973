use thiserror::Error;

/// Reasons an actor stops without processing `Die`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActorError {
    /// A message arrived that the actor cannot handle in its current state
    #[error("{actor}: protocol violation: {reason}")]
    Protocol { actor: String, reason: String },

    /// An external collaborator failed while the actor was handling a message
    #[error("{actor}: i/o failure: {reason}")]
    Io { actor: String, reason: String },

    /// The actor's thread could not be started
    #[error("{actor}: failed to spawn thread: {reason}")]
    Spawn { actor: String, reason: String },

    /// Dispatch panicked
    #[error("{actor}: panicked: {reason}")]
    Panicked { actor: String, reason: String },

    /// Another actor failed and the system was cancelled
    #[error("{actor}: cancelled: {reason}")]
    Cancelled { actor: String, reason: String }
}

impl ActorError {
    pub fn protocol(actor: &str, reason: impl Into<String>) -> Self {
        ActorError::Protocol { actor: actor.to_string(), reason: reason.into() }
    }

    pub fn io(actor: &str, reason: impl Into<String>) -> Self {
        ActorError::Io { actor: actor.to_string(), reason: reason.into() }
    }

    /// Name of the actor that reported the error
    pub fn actor(&self) -> &str {
        match self {
            ActorError::Protocol { actor, .. }
            | ActorError::Io { actor, .. }
            | ActorError::Spawn { actor, .. }
            | ActorError::Panicked { actor, .. }
            | ActorError::Cancelled { actor, .. } => actor
        }
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, ActorError::Cancelled { .. })
    }
}
