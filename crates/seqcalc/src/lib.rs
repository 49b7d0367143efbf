//! SeqCalc library: application logic for the sequence calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
