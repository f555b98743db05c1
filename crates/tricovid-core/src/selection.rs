//! Tracking which region selection is current.
//!
//! A new selection does not abort requests already in flight; their results
//! are recognised as stale here and dropped by the caller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket identifying one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection(u64);

impl Selection {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Generation counter shared between the UI and its fetch tasks.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    generation: Arc<AtomicU64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new selection, superseding every earlier one.
    pub fn begin(&self) -> Selection {
        Selection(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether no selection has begun since `selection`.
    pub fn is_current(&self, selection: &Selection) -> bool {
        self.generation.load(Ordering::Acquire) == selection.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_current() {
        let tracker = SelectionTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(&first));

        let second = tracker.begin();
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_clones_share_generation() {
        let tracker = SelectionTracker::new();
        let handle = tracker.clone();
        let first = tracker.begin();
        handle.begin();
        assert!(!tracker.is_current(&first));
    }
}
