//! Per-invocation dispatch state

use super::{
    policy::LoggingPolicy, record::InvocationRecord, verbosity::Verbosity, writer::LineWriter,
};
use std::sync::Arc;

/// Transient state assembled at the start of `Dispatcher::handle` and dropped
/// when it returns. Resolves the level and output writer once so every stage
/// of the pipeline sees the same destination.
pub struct DispatchContext<'a> {
    pub record: &'a InvocationRecord,
    pub policy: &'a LoggingPolicy,
    pub level: Verbosity,
    pub writer: Arc<dyn LineWriter>,
}

impl<'a> DispatchContext<'a> {
    pub fn new(
        record: &'a InvocationRecord,
        policy: &'a LoggingPolicy,
        default_writer: &Arc<dyn LineWriter>,
    ) -> Self {
        // Policy override wins for the whole invocation.
        let writer = policy
            .target
            .clone()
            .unwrap_or_else(|| Arc::clone(default_writer));
        Self {
            record,
            policy,
            level: policy.level,
            writer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{policy::SinkMode, writer::BufferWriter};

    #[test]
    fn test_target_override_wins() {
        let record = InvocationRecord::new("A", "b");
        let default: Arc<dyn LineWriter> = Arc::new(BufferWriter::new());
        let override_writer = Arc::new(BufferWriter::new());

        let policy = LoggingPolicy::new(Verbosity::Standard, SinkMode::Console)
            .with_target(override_writer.clone());
        let ctx = DispatchContext::new(&record, &policy, &default);

        ctx.writer.write_line(ctx.level, "probe").unwrap();
        assert_eq!(override_writer.lines(), vec!["probe"]);
    }
}
