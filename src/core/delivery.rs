//! Delivery trait for sink backing stores
//!
//! File, database, and queue sinks hand the rendered block to an external
//! handle (file writer, DAO, queue producer) through this seam. The crate
//! ships a file-backed implementation; database and queue handles are
//! supplied by the embedding application.

use super::{error::Result, pipeline::RenderedEntry};

pub trait SinkDelivery: Send + Sync {
    fn deliver(&self, entry: &RenderedEntry) -> Result<()>;

    fn name(&self) -> &str;
}

/// Delivery that discards every entry.
///
/// Default handle for sinks the embedding application never configured.
#[derive(Debug, Default)]
pub struct NullDelivery;

impl SinkDelivery for NullDelivery {
    fn deliver(&self, _entry: &RenderedEntry) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
