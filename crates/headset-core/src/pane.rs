//! The single shared output pane.

/// Text buffer showing the most recent result. Every render replaces the
/// previous contents; nothing is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPane {
    text: String,
}

impl OutputPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pane contents.
    pub fn render(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
