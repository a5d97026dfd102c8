//! Template pipeline: the fixed shape of a rendered invocation block
//!
//! Every sink relies on the same sequence: blank separator, opening banner,
//! sink pre-extras, the seven standard fields, sink post-extras, closing
//! banner, trailing separator. Sinks differ only in destination and in what
//! they inject around the standard fields.

use super::{
    context::DispatchContext,
    error::Result,
    field_value::FieldValue,
    renderer::render_field,
    verbosity::Verbosity,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Width of the `=` rule on each side of a banner marker
const BANNER_RULE_WIDTH: usize = 46;
const OPEN_MARKER: &str = "start_logger";
const CLOSE_MARKER: &str = "end_logger";

/// One fully rendered invocation block, line by line.
///
/// Lines are already written to the context's writer by the time this exists;
/// deliveries get it so file/database/queue handles can persist the same
/// block (or its JSON form) without re-rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedEntry {
    pub lines: Vec<String>,
    pub level: Verbosity,
    pub timestamp: DateTime<Utc>,
}

impl RenderedEntry {
    /// Block as a single newline-joined string
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

fn banner(marker: &str) -> String {
    let rule = "=".repeat(BANNER_RULE_WIDTH);
    format!("{}   {}:invocation log:{}   {}", rule, marker, marker, rule)
}

/// Render one block through the context's writer, collecting the lines.
///
/// `pre_extra` pairs land right after the opening banner, `post_extra` pairs
/// right before the closing banner. Field order within each group is
/// preserved as given.
pub fn render_block(
    ctx: &DispatchContext<'_>,
    pre_extra: &[(String, FieldValue)],
    post_extra: &[(String, FieldValue)],
) -> Result<RenderedEntry> {
    let record = ctx.record;
    let mut lines: Vec<String> =
        Vec::with_capacity(pre_extra.len() + post_extra.len() + 11);

    let mut emit = |line: String| -> Result<()> {
        ctx.writer.write_line(ctx.level, &line)?;
        lines.push(line);
        Ok(())
    };

    emit(String::new())?;
    emit(banner(OPEN_MARKER))?;

    for (title, value) in pre_extra {
        emit(render_field(ctx.level, title, value))?;
    }

    emit(render_field(
        ctx.level,
        "target class",
        &FieldValue::String(record.target_class.clone()),
    ))?;
    emit(render_field(
        ctx.level,
        "target method",
        &FieldValue::String(record.target_method.clone()),
    ))?;
    emit(render_field(
        ctx.level,
        "parameter types",
        &record.parameter_types_value(),
    ))?;
    emit(render_field(
        ctx.level,
        "parameter values",
        &record.parameter_values_value(),
    ))?;
    emit(render_field(
        ctx.level,
        "return type",
        &FieldValue::String(record.return_type.clone()),
    ))?;
    emit(render_field(
        ctx.level,
        "return value",
        &record.return_value_or_null(),
    ))?;
    emit(render_field(
        ctx.level,
        "execution time",
        &FieldValue::String(format!("{}ms", record.execution_time_millis)),
    ))?;

    for (title, value) in post_extra {
        emit(render_field(ctx.level, title, value))?;
    }

    emit(banner(CLOSE_MARKER))?;
    emit(String::new())?;

    Ok(RenderedEntry {
        lines,
        level: ctx.level,
        timestamp: Utc::now(),
    })
}
