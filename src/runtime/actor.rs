//! The actor abstraction driven by the runtime.

use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering}
};

use crate::runtime::{error::ActorError, mailbox::ActorRef, message::Message};

/// One thread of control with private state and a mailbox.
///
/// The runtime calls [`Actor::pre_start`] once on the actor's own thread to build
/// its state, then [`Actor::dispatch`] once per dequeued message on that same
/// thread. State is never reachable from any other thread while the actor runs;
/// it is handed back to whoever joins the actor once the loop exits.
pub trait Actor: Send + 'static {
    /// Messages this actor understands
    type Msg: Message;

    /// Private mutable state, owned by the actor's thread
    type State: Send + 'static;

    /// Thread name and identity in logs
    fn name(&self) -> &'static str;

    /// Create initial state
    fn pre_start(&self, myself: &ActorRef<Self::Msg>) -> Self::State;

    /// Handle one message. Returning an error stops the actor and cancels the system.
    fn dispatch(
        &self,
        myself: &ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State
    ) -> Result<(), ActorError>;
}

/// Lifecycle of an actor's dispatch loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorStatus {
    Starting,
    Running,
    Stopped
}

/// Status shared between the actor's thread and its handle
#[derive(Debug, Clone)]
pub(crate) struct StatusCell(Arc<AtomicU8>);

impl StatusCell {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicU8::new(ActorStatus::Starting as u8)))
    }

    pub(crate) fn set(&self, status: ActorStatus) {
        self.0.store(status as u8, Ordering::Release);
    }

    pub(crate) fn get(&self) -> ActorStatus {
        match self.0.load(Ordering::Acquire) {
            0 => ActorStatus::Starting,
            1 => ActorStatus::Running,
            _ => ActorStatus::Stopped
        }
    }
}
