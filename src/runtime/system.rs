//! Thread-per-actor scheduler.
//!
//! Each actor runs on its own dedicated OS thread. The loop polls the mailbox,
//! emits an idle tick when it is empty, then blocks on the channel for at most
//! [`IDLE_INTERVAL`] before checking cancellation again.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering}
    },
    thread::{self, JoinHandle},
    time::Duration
};

use parking_lot::Mutex;
use tracing::{Level, event};

use crate::{
    domain::constant::runtime,
    runtime::{
        actor::{Actor, ActorStatus, StatusCell},
        error::ActorError,
        mailbox::{ActorRef, Mailbox, Wait, create_mailbox},
        message::Message
    }
};

/// Longest a dispatch loop blocks on an empty mailbox before re-checking cancellation
pub const IDLE_INTERVAL: Duration = Duration::from_millis(10);

/// A cancellation token for signaling shutdown.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Shared context for a group of actors: cancellation plus the first recorded failure
#[derive(Debug, Clone, Default)]
pub struct ActorSystem {
    cancel:  CancellationToken,
    failure: Arc<Mutex<Option<ActorError>>>
}

impl ActorSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `actor` on a new thread named after it and start its dispatch loop
    pub fn spawn<A: Actor>(&self, actor: A) -> Result<ActorHandle<A>, ActorError> {
        let name = actor.name();
        let (actor_ref, mailbox) = create_mailbox::<A::Msg>(name);
        let status = StatusCell::new();

        let myself = actor_ref.clone();
        let system = self.clone();
        let thread_status = status.clone();

        let join_handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || run_actor_loop(actor, myself, mailbox, system, thread_status))
            .map_err(|e| ActorError::Spawn { actor: name.to_string(), reason: e.to_string() })?;

        Ok(ActorHandle { actor_ref, status, join_handle })
    }

    /// Ask every actor in the system to stop at its next poll
    pub fn cancel(&self) {
        if !self.cancel.is_cancelled() {
            event!(Level::DEBUG, event = runtime::SYSTEM_CANCELLED);
        }
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Record a failure (the first one wins) and cancel the system
    pub fn fail(&self, error: ActorError) {
        {
            let mut slot = self.failure.lock();
            if slot.is_none() {
                *slot = Some(error);
            }
        }
        self.cancel();
    }

    /// The first failure recorded by any actor, if one occurred
    pub fn take_failure(&self) -> Option<ActorError> {
        self.failure.lock().take()
    }
}

/// Handle to an actor running on a dedicated thread
pub struct ActorHandle<A: Actor> {
    actor_ref:   ActorRef<A::Msg>,
    status:      StatusCell,
    join_handle: JoinHandle<Result<A::State, ActorError>>
}

impl<A: Actor> ActorHandle<A> {
    /// Reference for sending messages to this actor
    pub fn actor_ref(&self) -> &ActorRef<A::Msg> {
        &self.actor_ref
    }

    pub fn send(&self, message: A::Msg) {
        self.actor_ref.send(message);
    }

    pub fn status(&self) -> ActorStatus {
        self.status.get()
    }

    /// Wait for the actor's thread to exit and take back its final state.
    ///
    /// Joining is what makes the state safe to read from the calling thread.
    pub fn join(self) -> Result<A::State, ActorError> {
        let name = self.actor_ref.name().to_string();
        match self.join_handle.join() {
            Ok(outcome) => outcome,
            Err(payload) => Err(ActorError::Panicked { actor: name, reason: panic_reason(&*payload) })
        }
    }
}

/// Run the actor's message loop on its dedicated thread
fn run_actor_loop<A: Actor>(
    actor: A,
    myself: ActorRef<A::Msg>,
    mailbox: Mailbox<A::Msg>,
    system: ActorSystem,
    status: StatusCell
) -> Result<A::State, ActorError> {
    let name = actor.name();
    event!(Level::DEBUG, event = runtime::ACTOR_STARTING, actor = name);

    let mut state = actor.pre_start(&myself);
    status.set(ActorStatus::Running);

    let outcome = loop {
        if system.is_cancelled() {
            event!(Level::DEBUG, event = runtime::ACTOR_CANCELLED, actor = name);
            break Err(ActorError::Cancelled { actor: name.to_string(), reason: "actor system cancelled".to_string() });
        }

        let message = match mailbox.try_dequeue() {
            Some(message) => message,
            None => {
                event!(Level::TRACE, event = runtime::ACTOR_IDLE, actor = name);
                match mailbox.wait(IDLE_INTERVAL) {
                    Wait::Message(message) => message,
                    Wait::Timeout => continue,
                    Wait::Closed => {
                        event!(Level::DEBUG, event = runtime::MAILBOX_CLOSED, actor = name);
                        break Ok(());
                    }
                }
            }
        };

        let is_die = message.is_die();
        event!(Level::TRACE, event = runtime::ACTOR_DISPATCHING, actor = name, message = ?message);

        let dispatched = panic::catch_unwind(AssertUnwindSafe(|| actor.dispatch(&myself, message, &mut state)))
            .unwrap_or_else(|payload| {
                Err(ActorError::Panicked { actor: name.to_string(), reason: panic_reason(&*payload) })
            });

        if let Err(error) = dispatched {
            event!(Level::ERROR, event = runtime::ACTOR_FAILED, actor = name, error = %error);
            system.fail(error.clone());
            break Err(error);
        }

        if is_die {
            break Ok(());
        }
    };

    status.set(ActorStatus::Stopped);
    event!(Level::DEBUG, event = runtime::ACTOR_STOPPING, actor = name, discarded = mailbox.len());

    outcome.map(|()| state)
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        reason.to_string()
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[derive(Debug)]
    enum CounterMessage {
        Add(u64),
        Fail,
        Panic,
        Die
    }

    impl Message for CounterMessage {
        fn die() -> Self {
            CounterMessage::Die
        }

        fn is_die(&self) -> bool {
            matches!(self, CounterMessage::Die)
        }
    }

    struct Counter;

    #[derive(Debug, Default)]
    struct CounterState {
        total:      u64,
        dispatched: usize,
        thread:     Option<String>
    }

    impl Actor for Counter {
        type Msg = CounterMessage;
        type State = CounterState;

        fn name(&self) -> &'static str {
            "Counter"
        }

        fn pre_start(&self, _myself: &ActorRef<Self::Msg>) -> Self::State {
            CounterState::default()
        }

        fn dispatch(
            &self,
            _myself: &ActorRef<Self::Msg>,
            message: Self::Msg,
            state: &mut Self::State
        ) -> Result<(), ActorError> {
            state.dispatched += 1;
            state.thread = thread::current().name().map(str::to_string);
            match message {
                CounterMessage::Add(n) => state.total += n,
                CounterMessage::Fail => return Err(ActorError::protocol(self.name(), "asked to fail")),
                CounterMessage::Panic => panic!("asked to panic"),
                CounterMessage::Die => {}
            }
            Ok(())
        }
    }

    /// Stops as soon as it sees the cancellation flag; never gets a `Die`
    struct Sleeper;

    impl Actor for Sleeper {
        type Msg = CounterMessage;
        type State = ();

        fn name(&self) -> &'static str {
            "Sleeper"
        }

        fn pre_start(&self, _myself: &ActorRef<Self::Msg>) -> Self::State {}

        fn dispatch(
            &self,
            _myself: &ActorRef<Self::Msg>,
            _message: Self::Msg,
            _state: &mut Self::State
        ) -> Result<(), ActorError> {
            Ok(())
        }
    }

    #[test]
    fn test_messages_are_dispatched_on_the_actor_thread() {
        let system = ActorSystem::new();
        let counter = system.spawn(Counter).unwrap();

        counter.send(CounterMessage::Add(2));
        counter.send(CounterMessage::Add(3));
        counter.actor_ref().stop();

        let state = counter.join().unwrap();
        assert_eq!(state.total, 5);
        assert_eq!(state.dispatched, 3);
        assert_eq!(state.thread.as_deref(), Some("Counter"));
    }

    #[test]
    fn test_messages_after_die_are_never_dispatched() {
        let system = ActorSystem::new();
        let counter = system.spawn(Counter).unwrap();
        let actor_ref = counter.actor_ref().clone();

        actor_ref.send(CounterMessage::Add(1));
        actor_ref.stop();
        actor_ref.send(CounterMessage::Add(100));

        let state = counter.join().unwrap();
        assert_eq!(state.total, 1);
        assert_eq!(state.dispatched, 2);

        actor_ref.send(CounterMessage::Add(1000));
    }

    #[test]
    fn test_status_reaches_stopped_after_die() {
        let system = ActorSystem::new();
        let counter = system.spawn(Counter).unwrap();
        counter.actor_ref().stop();

        let deadline = Instant::now() + Duration::from_secs(5);
        while counter.status() != ActorStatus::Stopped {
            assert!(Instant::now() < deadline, "actor did not stop in time");
            thread::sleep(Duration::from_millis(1));
        }

        assert!(counter.join().is_ok());
    }

    #[test]
    fn test_dispatch_error_fails_fast_and_cancels_the_system() {
        let system = ActorSystem::new();
        let counter = system.spawn(Counter).unwrap();
        let sleeper = system.spawn(Sleeper).unwrap();

        counter.send(CounterMessage::Fail);

        let error = counter.join().unwrap_err();
        assert_eq!(error, ActorError::protocol("Counter", "asked to fail"));

        let sleeper_error = sleeper.join().unwrap_err();
        assert!(sleeper_error.is_cancellation());
        assert_eq!(sleeper_error.actor(), "Sleeper");

        assert_eq!(system.take_failure(), Some(ActorError::protocol("Counter", "asked to fail")));
        assert_eq!(system.take_failure(), None);
    }

    #[test]
    fn test_panicking_dispatch_is_reported_as_failure() {
        let system = ActorSystem::new();
        let counter = system.spawn(Counter).unwrap();

        counter.send(CounterMessage::Panic);

        match counter.join() {
            Err(ActorError::Panicked { actor, reason }) => {
                assert_eq!(actor, "Counter");
                assert_eq!(reason, "asked to panic");
            }
            other => panic!("Expected a panic failure, got {:?}", other.map(|s| s.total))
        }
        assert!(system.is_cancelled());
    }

    #[test]
    fn test_first_failure_wins() {
        let system = ActorSystem::new();
        system.fail(ActorError::io("A", "first"));
        system.fail(ActorError::io("B", "second"));

        assert_eq!(system.take_failure(), Some(ActorError::io("A", "first")));
    }
}
