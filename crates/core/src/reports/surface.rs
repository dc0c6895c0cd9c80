//! Output surface for rendered reports.

use super::error::ReportError;

/// Destination of a rendered report.
///
/// Content is written first; the "no report yet" placeholder is hidden
/// only once real content is in place.
pub trait ReportSurface {
    /// Replaces the surface content with the rendered report.
    fn write_content(&mut self, content: &str) -> Result<(), ReportError>;

    /// Hides the placeholder shown before any report was generated.
    fn hide_placeholder(&mut self) -> Result<(), ReportError>;
}

/// In-memory report surface.
#[derive(Debug, Clone)]
pub struct BufferSurface {
    content: String,
    placeholder_visible: bool,
}

impl Default for BufferSurface {
    fn default() -> Self {
        Self {
            content: String::new(),
            placeholder_visible: true,
        }
    }
}

impl BufferSurface {
    /// Creates an empty surface with the placeholder visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true while the placeholder is still shown.
    #[must_use]
    pub const fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }
}

impl ReportSurface for BufferSurface {
    fn write_content(&mut self, content: &str) -> Result<(), ReportError> {
        content.clone_into(&mut self.content);
        Ok(())
    }

    fn hide_placeholder(&mut self) -> Result<(), ReportError> {
        self.placeholder_visible = false;
        Ok(())
    }
}
