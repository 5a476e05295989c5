use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::AliveTurtles;

use super::FeedSink;

/// Write one serializable item as a single JSON line.
fn write_jsonl_line<W: Write, T: Serialize>(writer: &mut W, item: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, item)?;
    writer.write_all(b"\n")
}

/// Appends each snapshot to a JSONL file, one `AliveTurtles` object per line.
///
/// The file is truncated on creation and flushed after every line, so a
/// reader tailing it sees snapshots as they are published.
pub struct JsonlFeed {
    writer: BufWriter<File>,
}

impl JsonlFeed {
    /// Create the file (and any missing parent directories).
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }
}

impl FeedSink for JsonlFeed {
    fn publish(&mut self, snapshot: &AliveTurtles) -> io::Result<()> {
        write_jsonl_line(&mut self.writer, snapshot)?;
        self.writer.flush()
    }
}
