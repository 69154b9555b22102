//! Browser Adapters
//!
//! Implementations of the core storage and link ports over the browser
//! APIs: `window.localStorage` for blobs, the `data` query parameter (via
//! `history.replaceState`, so the back button stays clean) for the link.

use catalog_store::link::SnapshotLink;
use catalog_store::storage::{StorageBackend, StorageError};

/// Query parameter carrying the encoded catalog snapshot
const DATA_PARAM: &str = "data";

/// `window.localStorage` behind the storage port
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StorageError("local storage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }
}

/// The page URL's `data` parameter behind the link port
pub struct BrowserLink;

impl SnapshotLink for BrowserLink {
    fn read(&self) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        if search.is_empty() {
            return None;
        }
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get(DATA_PARAM)
    }

    fn replace(&self, payload: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let Ok(pathname) = location.pathname() else {
            return;
        };
        let Ok(params) = web_sys::UrlSearchParams::new() else {
            return;
        };
        params.set(DATA_PARAM, payload);
        let query: js_sys::JsString = params.to_string();
        let url = format!("{}?{}", pathname, String::from(query));
        if let Ok(history) = window.history() {
            // Replace, not push: publishing must not pollute history.
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
        }
    }
}
