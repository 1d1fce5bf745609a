//! cflow-carver CLI library.
//!
//! Command implementations live in [`commands`] so integration tests can
//! call them directly without spawning the binary.

pub mod commands;
