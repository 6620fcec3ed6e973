//! Domain Events - Structured events for internal monitoring and debugging

/// Actor runtime events, emitted by every actor's dispatch loop
pub mod runtime {
    pub const ACTOR_STARTING: &str = "actor.starting";
    pub const ACTOR_IDLE: &str = "actor.idle";
    pub const ACTOR_DISPATCHING: &str = "actor.dispatching";
    pub const ACTOR_STOPPING: &str = "actor.stopping";
    pub const ACTOR_FAILED: &str = "actor.failed";
    pub const ACTOR_CANCELLED: &str = "actor.cancelled";
    pub const MAILBOX_CLOSED: &str = "mailbox.closed";
    pub const MESSAGE_DROPPED: &str = "message.dropped";
    pub const SYSTEM_CANCELLED: &str = "system.cancelled";
}

/// DataStorage Actor Events
pub mod data_storage {
    pub const LINES_LOADED: &str = "lines.loaded";
    pub const WORDS_EMITTED: &str = "words.emitted";
    pub const DIE_FORWARDED: &str = "die.forwarded";
}

/// StopWordFilter Actor Events
pub mod stop_word_filter {
    pub const STOP_WORDS_LOADED: &str = "stop_words.loaded";
    pub const MESSAGE_FORWARDED: &str = "message.forwarded";
}

/// FrequencyAggregator Actor Events
pub mod frequency_aggregator {
    pub const TOP_WORDS_COMPUTED: &str = "top_words.computed";
}

/// Controller Actor Events
pub mod controller {
    pub const PIPELINE_TRIGGERED: &str = "pipeline.triggered";
    pub const RESULT_RECEIVED: &str = "result.received";
}

/// Driver Events
pub mod pipeline {
    pub const INPUTS_VALIDATED: &str = "inputs.validated";
    pub const ACTORS_SPAWNED: &str = "actors.spawned";
    pub const STAGE_ABANDONED: &str = "stage.abandoned";
    pub const PIPELINE_STARTED: &str = "pipeline.started";
    pub const PIPELINE_COMPLETED: &str = "pipeline.completed";
    pub const PIPELINE_FAILED: &str = "pipeline.failed";
}
