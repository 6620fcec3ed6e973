//! Interfaces to the outside world used by the pipeline

pub mod source;
