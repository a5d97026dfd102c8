//! Sink implementations

pub mod console;
pub mod database;
pub mod file;
pub mod queue;

pub use console::{ConsoleSink, ConsoleWriter};
pub use database::DatabaseSink;
pub use file::{FileDelivery, FileSink};
pub use queue::QueueSink;

// Re-export traits for convenience
pub use crate::core::{Sink, SinkDelivery};
