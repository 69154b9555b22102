//! Link Port
//!
//! The URL query channel a published snapshot is mirrored into. The
//! frontend adapter swaps the `data` query parameter via
//! `history.replaceState`; tests use [`MemoryLink`].

use std::cell::RefCell;

/// A single-slot channel carrying the encoded snapshot alongside the page
pub trait SnapshotLink {
    /// Current payload carried by the link, if any
    fn read(&self) -> Option<String>;

    /// Silently replace the payload in place. Must not create a history
    /// entry or trigger a navigation.
    fn replace(&self, payload: &str);
}

/// In-memory link for tests
#[derive(Debug, Default)]
pub struct MemoryLink {
    payload: RefCell<Option<String>>,
}

impl MemoryLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A link that already carries a payload, as if the page was opened
    /// through a shared URL
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }
}

impl SnapshotLink for MemoryLink {
    fn read(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    fn replace(&self, payload: &str) {
        *self.payload.borrow_mut() = Some(payload.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites_payload() {
        let link = MemoryLink::with_payload("old");
        link.replace("new");
        assert_eq!(link.read().as_deref(), Some("new"));
    }

    #[test]
    fn test_empty_link_reads_none() {
        assert!(MemoryLink::new().read().is_none());
    }
}
