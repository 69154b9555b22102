//! Application Context
//!
//! Shared state provided via Leptos Context API: the navigation signals,
//! the notice banner, and handles to the core stores. The core stores are
//! single-threaded (`Rc`/`RefCell` inside), so they live in local storage
//! slots; the `StoredValue` handles themselves are plain `Copy` keys that
//! can travel into any view closure.

use catalog_store::{CatalogStore, StudioDirectory};
use leptos::prelude::*;

/// Top-level pages reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Orders,
    Revenue,
    Studios,
    Services,
    Payments,
    Ratings,
    Users,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Orders,
        Page::Revenue,
        Page::Studios,
        Page::Services,
        Page::Payments,
        Page::Ratings,
        Page::Users,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Orders => "Orders",
            Page::Revenue => "Revenue",
            Page::Studios => "Studios",
            Page::Services => "Services",
            Page::Payments => "Payments",
            Page::Ratings => "Ratings",
            Page::Users => "Users",
        }
    }
}

/// Banner severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient banner message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Copyable handle to the catalog store
pub type CatalogHandle = StoredValue<CatalogStore, LocalStorage>;

/// Copyable handle to the studio directory
pub type DirectoryHandle = StoredValue<StudioDirectory, LocalStorage>;

/// Get the catalog store from context
pub fn use_catalog() -> CatalogHandle {
    expect_context::<CatalogHandle>()
}

/// Get the studio directory from context
pub fn use_directory() -> DirectoryHandle {
    expect_context::<DirectoryHandle>()
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// Studio whose services are being edited (None = list view) - read
    pub selected_studio: ReadSignal<Option<String>>,
    set_selected_studio: WriteSignal<Option<String>>,
    /// Current banner notice - read
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        selected_studio: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            selected_studio: selected_studio.0,
            set_selected_studio: selected_studio.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Switch pages; leaving the studio editor clears the selection
    pub fn navigate(&self, page: Page) {
        self.set_selected_studio.set(None);
        self.set_page.set(page);
    }

    /// Open (Some) or close (None) the studio services editor
    pub fn select_studio(&self, id: Option<String>) {
        self.set_selected_studio.set(id);
    }

    /// Show a banner notice
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        self.set_notice.set(Some(Notice {
            kind,
            text: text.into(),
        }));
    }

    /// Clear the banner if it still shows `notice`
    pub fn dismiss(&self, notice: &Notice) {
        self.set_notice.update(|current| {
            if current.as_ref() == Some(notice) {
                *current = None;
            }
        });
    }

    /// Clear the banner unconditionally
    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}
