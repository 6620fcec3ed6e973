use std::fmt::Debug;

/// A closed set of message shapes one actor understands.
///
/// Every message type carries a terminal `Die` variant. The runtime checks for it
/// after dispatch and stops the actor's loop once it has been handled.
pub trait Message: Debug + Send + 'static {
    /// Build the terminal variant
    fn die() -> Self;

    /// Whether this is the terminal variant
    fn is_die(&self) -> bool;
}
