//! Console sink implementation

use crate::core::{LineWriter, Result, Sink, SinkMode, Verbosity};
use colored::Colorize;

/// Line writer that prints to stdout, optionally tinted by verbosity
pub struct ConsoleWriter {
    use_colors: bool,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineWriter for ConsoleWriter {
    fn write_line(&self, level: Verbosity, text: &str) -> Result<()> {
        if self.use_colors && !text.is_empty() {
            println!("{}", text.color(level.color_code()));
        } else {
            println!("{}", text);
        }
        Ok(())
    }
}

/// Console sink: the block already reached the resolved line writer through
/// the template pipeline, so there is no separate delivery step.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn mode(&self) -> SinkMode {
        SinkMode::Console
    }
}
