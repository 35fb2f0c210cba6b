//! Service implementations
//!
//! Real implementations of the injected traits plus the I/O-facing helpers:
//! instance loading and replay.

pub mod export_sink;
pub mod loader;
pub mod notifier;
pub mod replay;

#[cfg(test)]
mod tests;

pub use export_sink::RealExportSink;
pub use loader::{load_instance, parse_dimacs, parse_instance_json, InstanceDefinition};
pub use notifier::{join_observer, spawn_notice_logger, BroadcastNotifier, LogNotifier};
pub use replay::{replay, CandidateCodec, ReplaySummary};
