//! Core dispatch types and traits

pub mod context;
pub mod delivery;
pub mod error;
pub mod field_value;
pub mod pipeline;
pub mod policy;
pub mod record;
pub mod renderer;
pub mod sink;
pub mod verbosity;
pub mod writer;

pub use context::DispatchContext;
pub use delivery::{NullDelivery, SinkDelivery};
pub use error::{DispatchError, Result};
pub use field_value::FieldValue;
pub use pipeline::{render_block, RenderedEntry};
pub use policy::{LoggingPolicy, SinkMode};
pub use record::InvocationRecord;
pub use renderer::render_field;
pub use sink::Sink;
pub use verbosity::Verbosity;
pub use writer::{BufferWriter, LineWriter};
