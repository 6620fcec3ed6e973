//! Implementations of the ports

pub mod source;
