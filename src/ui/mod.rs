//! Terminal output

pub mod display;
