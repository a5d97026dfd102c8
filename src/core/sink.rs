//! Sink trait for rendered-block destinations

use super::{
    context::DispatchContext,
    error::Result,
    field_value::FieldValue,
    pipeline::{render_block, RenderedEntry},
    policy::SinkMode,
};

/// One output strategy: console, file, database, or queue.
///
/// `execute` is the shared skeleton: render the block through the template
/// pipeline (with this sink's extra fields injected) and then hand the result
/// to the sink's backing store. Sinks customize the hooks, not the sequence.
pub trait Sink: Send + Sync {
    fn mode(&self) -> SinkMode;

    /// Extra fields emitted right after the opening banner
    fn pre_extra_fields(&self, _ctx: &DispatchContext<'_>) -> Vec<(String, FieldValue)> {
        Vec::new()
    }

    /// Extra fields emitted right before the closing banner
    fn post_extra_fields(&self, _ctx: &DispatchContext<'_>) -> Vec<(String, FieldValue)> {
        Vec::new()
    }

    /// Hand the rendered block to the sink's backing store.
    ///
    /// The console sink has nothing beyond the line writer, so the default is
    /// a no-op.
    fn deliver(&self, _ctx: &DispatchContext<'_>, _entry: &RenderedEntry) -> Result<()> {
        Ok(())
    }

    fn execute(&self, ctx: &DispatchContext<'_>) -> Result<()> {
        let entry = render_block(
            ctx,
            &self.pre_extra_fields(ctx),
            &self.post_extra_fields(ctx),
        )?;
        self.deliver(ctx, &entry)
    }
}
