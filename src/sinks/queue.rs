//! Queue sink implementation

use crate::core::{
    DispatchContext, FieldValue, RenderedEntry, Result, Sink, SinkDelivery, SinkMode,
};
use std::sync::Arc;

pub const DEFAULT_TOPIC: &str = "invocation-log";

/// Queue sink: renders through the shared pipeline and publishes the block to
/// a producer handle. Stamps its topic into the block as a pre-extra field so
/// consumers can tell queue-routed blocks apart.
pub struct QueueSink {
    topic: String,
    handle: Arc<dyn SinkDelivery>,
}

impl QueueSink {
    pub fn new(topic: impl Into<String>, handle: Arc<dyn SinkDelivery>) -> Self {
        Self {
            topic: topic.into(),
            handle,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl Sink for QueueSink {
    fn mode(&self) -> SinkMode {
        SinkMode::Queue
    }

    fn pre_extra_fields(&self, _ctx: &DispatchContext<'_>) -> Vec<(String, FieldValue)> {
        vec![(
            "queue topic".to_string(),
            FieldValue::String(self.topic.clone()),
        )]
    }

    fn deliver(&self, _ctx: &DispatchContext<'_>, entry: &RenderedEntry) -> Result<()> {
        self.handle.deliver(entry)
    }
}
