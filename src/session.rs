//! Highlight state for a host editor session.
//!
//! Hosts keep one [`HighlightSession`] and hand it to whatever draws the
//! decorations. Nothing here is global.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::highlights::Highlight;

/// Highlights computed for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileHighlights {
    pub file: PathBuf,
    pub total_complexity: f64,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default)]
pub struct HighlightSession {
    enabled: bool,
    current: Option<FileHighlights>,
}

impl HighlightSession {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            current: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable highlighting and drop whatever is displayed.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.current = None;
    }

    /// Flip the enabled state, returning the new state.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
        self.enabled
    }

    /// Replace the displayed highlights.
    ///
    /// Ignored while disabled; returns whether the result was stored.
    pub fn publish(&mut self, result: FileHighlights) -> bool {
        if !self.enabled {
            log::debug!(
                "Highlighting disabled, discarding result for {}",
                result.file.display()
            );
            return false;
        }
        self.current = Some(result);
        true
    }

    /// Drop results for `file` if they are the ones displayed, e.g. when a
    /// newer analysis of another document superseded them.
    pub fn discard_for(&mut self, file: &Path) {
        if self.current.as_ref().is_some_and(|c| c.file == file) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&FileHighlights> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(file: &str) -> FileHighlights {
        FileHighlights {
            file: PathBuf::from(file),
            total_complexity: 4.2,
            highlights: Vec::new(),
        }
    }

    #[test]
    fn test_publish_ignored_while_disabled() {
        let mut session = HighlightSession::default();
        assert!(!session.publish(result("a.rs")));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_toggle_clears_on_disable() {
        let mut session = HighlightSession::new(true);
        assert!(session.publish(result("a.rs")));
        assert!(!session.toggle());
        assert!(session.current().is_none());
        assert!(session.toggle());
    }

    #[test]
    fn test_discard_only_matching_file() {
        let mut session = HighlightSession::new(true);
        session.publish(result("a.rs"));

        session.discard_for(Path::new("b.rs"));
        assert!(session.current().is_some());

        session.discard_for(Path::new("a.rs"));
        assert!(session.current().is_none());
    }
}
