//! Glimmer Core
//!
//! Logging and profiling utilities shared by the Glimmer crates.

pub mod logging;
pub mod profiling;
