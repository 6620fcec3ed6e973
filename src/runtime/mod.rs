//! Minimal thread-per-actor runtime
//!
//! Every actor gets its own OS thread, a private unbounded mailbox and a
//! single-threaded dispatch loop. State lives on that thread only, so actors
//! mutate it without locks and share nothing but their mailboxes.

pub mod actor;
pub mod error;
pub mod mailbox;
pub mod message;
pub mod system;

pub use actor::{Actor, ActorStatus};
pub use error::ActorError;
pub use mailbox::{ActorRef, Mailbox, create_mailbox};
pub use message::Message;
pub use system::{ActorHandle, ActorSystem, CancellationToken, IDLE_INTERVAL};
