//! # Invocation Logger
//!
//! A policy-driven dispatcher that renders intercepted method-call records
//! into structured log blocks and routes them to pluggable sinks.
//!
//! ## Features
//!
//! - **Policy-Driven Dispatch**: sink and verbosity selected per call site
//! - **Fixed Block Shape**: banners and seven standard fields, identical
//!   across every sink
//! - **Pluggable Sinks**: console, file, database, and queue, each with its
//!   own pre/post field hooks and delivery handle
//! - **Thread Safe**: per-call state is never shared; writers and deliveries
//!   are internally synchronized

pub mod core;
pub mod dispatcher;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        BufferWriter, DispatchContext, DispatchError, FieldValue, InvocationRecord, LineWriter,
        LoggingPolicy, NullDelivery, RenderedEntry, Result, Sink, SinkDelivery, SinkMode,
        Verbosity,
    };
    pub use crate::dispatcher::{Dispatcher, DispatcherBuilder};
    pub use crate::sinks::{ConsoleSink, ConsoleWriter, DatabaseSink, FileDelivery, FileSink, QueueSink};
}

pub use crate::core::{
    BufferWriter, DispatchContext, DispatchError, FieldValue, InvocationRecord, LineWriter,
    LoggingPolicy, NullDelivery, RenderedEntry, Result, Sink, SinkDelivery, SinkMode, Verbosity,
};
pub use crate::dispatcher::{Dispatcher, DispatcherBuilder};
pub use crate::sinks::{ConsoleSink, ConsoleWriter, DatabaseSink, FileDelivery, FileSink, QueueSink};
