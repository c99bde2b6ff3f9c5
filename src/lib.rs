//! Frametris (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces the
//! terminal runner needs on top of them: environment configuration and the
//! JSON-lines event log.

pub mod config;
pub mod event_log;

pub use frametris_core as core;
pub use frametris_input as input;
pub use frametris_term as term;
pub use frametris_types as types;

pub use config::RunConfig;
pub use event_log::{EventLog, EventRecord};
