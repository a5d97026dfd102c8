//! Dispatcher: entry point of the logging pipeline

use crate::core::{
    DispatchContext, InvocationRecord, LineWriter, LoggingPolicy, NullDelivery, Result, Sink,
    SinkDelivery, SinkMode,
};
use crate::sinks::{queue::DEFAULT_TOPIC, ConsoleSink, ConsoleWriter, DatabaseSink, FileSink, QueueSink};
use std::sync::Arc;

/// Routes one invocation record to the sink its policy selects.
///
/// Holds the process-wide default line writer and one instance of each sink,
/// all configured at construction. `handle` is synchronous and safe to call
/// from multiple threads at once; per-call state lives in a `DispatchContext`
/// that is never shared.
///
/// # Example
///
/// ```
/// use invocation_logger::prelude::*;
/// use std::sync::Arc;
///
/// let captured = Arc::new(BufferWriter::new());
/// let dispatcher = Dispatcher::builder()
///     .default_writer(captured.clone())
///     .build();
///
/// let record = InvocationRecord::new("UserService", "findById")
///     .with_parameters(vec!["long"], vec![42])
///     .with_return("User", "User{id=42}")
///     .with_execution_time(12);
/// let policy = LoggingPolicy::new(Verbosity::Standard, SinkMode::Console);
///
/// dispatcher.handle(&record, &policy).unwrap();
/// assert!(captured.lines().iter().any(|l| l == "execution time: 12ms"));
/// ```
pub struct Dispatcher {
    default_writer: Arc<dyn LineWriter>,
    console: ConsoleSink,
    file: FileSink,
    database: DatabaseSink,
    queue: QueueSink,
}

impl Dispatcher {
    /// Dispatcher with stdout as default writer and discarding deliveries
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Render `record` under `policy` and route it to the selected sink.
    ///
    /// Delivery and writer failures propagate unchanged; nothing is retried
    /// or buffered at this layer.
    pub fn handle(&self, record: &InvocationRecord, policy: &LoggingPolicy) -> Result<()> {
        let ctx = DispatchContext::new(record, policy, &self.default_writer);
        let sink: &dyn Sink = match policy.mode {
            SinkMode::Console => &self.console,
            SinkMode::File => &self.file,
            SinkMode::Database => &self.database,
            SinkMode::Queue => &self.queue,
        };
        sink.execute(&ctx)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder assembling a `Dispatcher` from its writer and delivery handles.
///
/// Deliveries left unset fall back to `NullDelivery`; the queue topic falls
/// back to `invocation-log`.
#[derive(Default)]
pub struct DispatcherBuilder {
    default_writer: Option<Arc<dyn LineWriter>>,
    file_delivery: Option<Arc<dyn SinkDelivery>>,
    database_delivery: Option<Arc<dyn SinkDelivery>>,
    queue_topic: Option<String>,
    queue_delivery: Option<Arc<dyn SinkDelivery>>,
}

impl DispatcherBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_writer(mut self, writer: Arc<dyn LineWriter>) -> Self {
        self.default_writer = Some(writer);
        self
    }

    #[must_use]
    pub fn file_delivery(mut self, handle: Arc<dyn SinkDelivery>) -> Self {
        self.file_delivery = Some(handle);
        self
    }

    #[must_use]
    pub fn database_delivery(mut self, handle: Arc<dyn SinkDelivery>) -> Self {
        self.database_delivery = Some(handle);
        self
    }

    #[must_use]
    pub fn queue_delivery(mut self, topic: impl Into<String>, handle: Arc<dyn SinkDelivery>) -> Self {
        self.queue_topic = Some(topic.into());
        self.queue_delivery = Some(handle);
        self
    }

    #[must_use]
    pub fn build(self) -> Dispatcher {
        let default_writer = self
            .default_writer
            .unwrap_or_else(|| Arc::new(ConsoleWriter::new()));
        let null = || -> Arc<dyn SinkDelivery> { Arc::new(NullDelivery) };

        Dispatcher {
            default_writer,
            console: ConsoleSink::new(),
            file: FileSink::new(self.file_delivery.unwrap_or_else(null)),
            database: DatabaseSink::new(self.database_delivery.unwrap_or_else(null)),
            queue: QueueSink::new(
                self.queue_topic.unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
                self.queue_delivery.unwrap_or_else(null),
            ),
        }
    }
}
