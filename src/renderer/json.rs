//! Streams frame snapshots as JSON lines
//!
//! Lets an external process (or a test) do the actual drawing.

use std::io::{self, Write};

use super::{FrameSnapshot, Renderer};

/// Writes one JSON object per frame
#[derive(Debug)]
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    written: u64,
    failed: bool,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            failed: false,
        }
    }

    /// Frames written successfully
    pub fn written(&self) -> u64 {
        self.written
    }

    fn write_frame(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot) {
        if self.failed {
            return;
        }
        match self.write_frame(frame) {
            Ok(()) => self.written += 1,
            Err(e) => {
                // Stop writing after the first failure (closed pipe etc.)
                log::error!("Snapshot output failed after {} frames: {}", self.written, e);
                self.failed = true;
            }
        }
    }
}
