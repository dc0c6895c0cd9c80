//! Writer-backed report surface.

use std::io::Write;

use tessera_core::reports::{ReportError, ReportSurface};
use tracing::debug;

/// Report surface writing to stdout or a file.
pub struct WriterSurface<W: Write> {
    writer: W,
    target: String,
}

impl<W: Write> WriterSurface<W> {
    /// Wraps a writer; `target` names it in logs and errors.
    pub fn new(writer: W, target: impl Into<String>) -> Self {
        Self {
            writer,
            target: target.into(),
        }
    }
}

impl<W: Write> ReportSurface for WriterSurface<W> {
    fn write_content(&mut self, content: &str) -> Result<(), ReportError> {
        self.writer
            .write_all(content.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|err| ReportError::SurfaceUnavailable(format!("{}: {err}", self.target)))
    }

    fn hide_placeholder(&mut self) -> Result<(), ReportError> {
        debug!(target_name = %self.target, "Report content in place");
        Ok(())
    }
}
