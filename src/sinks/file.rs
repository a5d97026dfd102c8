//! File sink implementation

use crate::core::{
    DispatchContext, RenderedEntry, Result, Sink, SinkDelivery, SinkMode,
};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Append-mode file handle for rendered blocks.
///
/// Each delivered block is written whole and flushed, so readers tailing the
/// file never see a half-written block.
pub struct FileDelivery {
    writer: Mutex<BufWriter<File>>,
}

impl FileDelivery {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl SinkDelivery for FileDelivery {
    fn deliver(&self, entry: &RenderedEntry) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(entry.to_text().as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileDelivery {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

/// File sink: renders through the shared pipeline, then appends the block to
/// its file handle.
pub struct FileSink {
    handle: Arc<dyn SinkDelivery>,
}

impl FileSink {
    pub fn new(handle: Arc<dyn SinkDelivery>) -> Self {
        Self { handle }
    }
}

impl Sink for FileSink {
    fn mode(&self) -> SinkMode {
        SinkMode::File
    }

    fn deliver(&self, _ctx: &DispatchContext<'_>, entry: &RenderedEntry) -> Result<()> {
        self.handle.deliver(entry)
    }
}
