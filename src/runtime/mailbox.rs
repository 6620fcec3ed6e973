//! Unbounded FIFO mailbox and the handle used to enqueue into it.
//!
//! The sending half is an [`ActorRef`], cloneable and usable from any thread.
//! The receiving half is a [`Mailbox`], moved into the owning actor's thread and
//! read nowhere else.

use std::{fmt, sync::Arc, time::Duration};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use tracing::{Level, event};

use crate::{domain::constant::runtime, runtime::message::Message};

/// Opaque handle for sending messages to an actor
pub struct ActorRef<M> {
    name: Arc<str>,
    tx:   Sender<M>
}

impl<M: Message> ActorRef<M> {
    /// Name of the actor behind this reference
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enqueue a message. Fire-and-forget: never blocks and never fails.
    ///
    /// Once the actor has stopped its mailbox is gone and the message is dropped.
    pub fn send(&self, message: M) {
        if let Err(err) = self.tx.send(message) {
            event!(Level::TRACE, event = runtime::MESSAGE_DROPPED, actor = %self.name, message = ?err.0);
        }
    }

    /// Enqueue the terminal `Die` message
    pub fn stop(&self) {
        self.send(M::die());
    }
}

impl<M> Clone for ActorRef<M> {
    fn clone(&self) -> Self {
        Self { name: Arc::clone(&self.name), tx: self.tx.clone() }
    }
}

impl<M> fmt::Debug for ActorRef<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorRef({})", self.name)
    }
}

/// Outcome of waiting on an empty mailbox
#[derive(Debug)]
pub enum Wait<M> {
    Message(M),
    Timeout,
    Closed
}

/// Receiving half of an actor's message queue
pub struct Mailbox<M> {
    rx: Receiver<M>
}

impl<M> Mailbox<M> {
    /// Oldest pending message, or `None` if the queue is empty. Never blocks.
    pub fn try_dequeue(&self) -> Option<M> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None
        }
    }

    /// Block until a message arrives or `timeout` elapses
    pub fn wait(&self, timeout: Duration) -> Wait<M> {
        match self.rx.recv_timeout(timeout) {
            Ok(message) => Wait::Message(message),
            Err(RecvTimeoutError::Timeout) => Wait::Timeout,
            Err(RecvTimeoutError::Disconnected) => Wait::Closed
        }
    }

    /// Number of messages still queued
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

/// Create a connected reference/mailbox pair for the actor called `name`
pub fn create_mailbox<M>(name: &str) -> (ActorRef<M>, Mailbox<M>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (ActorRef { name: Arc::from(name), tx }, Mailbox { rx })
}
