//! Database sink implementation

use crate::core::{DispatchContext, RenderedEntry, Result, Sink, SinkDelivery, SinkMode};
use std::sync::Arc;

/// Database sink: the DAO handle is supplied by the embedding application;
/// this sink only renders and forwards. `RenderedEntry` is `Serialize`, so a
/// DAO can persist the block as JSON or as joined text.
pub struct DatabaseSink {
    handle: Arc<dyn SinkDelivery>,
}

impl DatabaseSink {
    pub fn new(handle: Arc<dyn SinkDelivery>) -> Self {
        Self { handle }
    }
}

impl Sink for DatabaseSink {
    fn mode(&self) -> SinkMode {
        SinkMode::Database
    }

    fn deliver(&self, _ctx: &DispatchContext<'_>, entry: &RenderedEntry) -> Result<()> {
        self.handle.deliver(entry)
    }
}
