//! Domain types shared across the pipeline

pub mod constant;
pub mod error;
pub mod frequency;
