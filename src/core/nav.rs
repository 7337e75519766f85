//! Jump-to-section navigation state
//!
//! Selecting a menu entry records a pending target. Sections consume it while
//! they render; whatever is left at the end of the frame had no matching
//! section and is dropped.

use tracing::debug;

/// Text shown by the selector at rest
pub const NAV_PLACEHOLDER: &str = "Jump to section...";

#[derive(Debug, Default)]
pub struct Navigator {
    pending: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a selector change; the empty placeholder value is ignored
    pub fn select(&mut self, anchor: &str) {
        if anchor.is_empty() {
            return;
        }
        debug!(anchor, "Section selected");
        self.pending = Some(anchor.to_string());
    }

    /// Value the selector displays; always the placeholder so that picking the
    /// same entry again still fires
    pub fn displayed_value(&self) -> &'static str {
        NAV_PLACEHOLDER
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Returns true (and consumes the target) if the section with `anchor`
    /// should be scrolled into view
    pub fn take_if_target(&mut self, anchor: Option<&str>) -> bool {
        match (anchor, self.pending.as_deref()) {
            (Some(a), Some(p)) if a == p => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Drop a target no section claimed this frame
    pub fn end_frame(&mut self) -> Option<String> {
        let missed = self.pending.take();
        if let Some(anchor) = &missed {
            debug!(anchor = %anchor, "No section for selected anchor, ignoring");
        }
        missed
    }
}
