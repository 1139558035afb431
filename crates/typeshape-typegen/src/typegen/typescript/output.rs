//! Indentation-aware line writer.

use std::io::{self, Write};

const INDENT: &str = "  ";

pub(super) struct Output<W> {
    sink: W,
    depth: usize,
}

impl<W: Write> Output<W> {
    pub(super) fn new(sink: W) -> Self {
        Self { sink, depth: 0 }
    }

    /// Write one full line at the current depth.
    pub(super) fn line(&mut self, text: &str) -> io::Result<()> {
        for _ in 0..self.depth {
            self.sink.write_all(INDENT.as_bytes())?;
        }
        self.sink.write_all(text.as_bytes())?;
        self.sink.write_all(b"\n")
    }

    /// Write an empty line, without indentation.
    pub(super) fn blank(&mut self) -> io::Result<()> {
        self.sink.write_all(b"\n")
    }

    pub(super) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(super) fn dedent(&mut self) {
        debug_assert!(self.depth > 0, "dedent without a matching indent");
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn finish(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
