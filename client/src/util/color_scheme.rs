//! Color scheme initialization and toggle.
//!
//! Reads the user's preference from a [`PreferenceStore`] (browser
//! `localStorage` in the app) and applies a `data-theme` attribute to the
//! `<html>` element. Toggle writes back to the store and updates that
//! attribute.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures are ignored and the
//! in-memory scheme still flips. Native builds have no browser storage, so
//! [`BrowserStorage`] reads nothing and writes nowhere.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// `localStorage` key holding the chosen scheme name.
pub const STORAGE_KEY: &str = "mw-color-scheme";

/// The two visual modes the app supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Persisted name, also used as the `data-theme` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the toggle button: a moon offers dark, a sun offers light.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Tooltip for the toggle button, naming the scheme a click switches to.
    #[must_use]
    pub fn toggle_title(self) -> String {
        format!("Switch to {}", self.toggled().as_str())
    }
}

/// String key/value storage that survives a page reload.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-process store, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Read the stored scheme. Missing or unrecognized values yield the default.
pub fn read_preference(store: &impl PreferenceStore) -> ColorScheme {
    store
        .get(STORAGE_KEY)
        .and_then(|raw| ColorScheme::parse(&raw))
        .unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(scheme: ColorScheme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", scheme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = scheme;
    }
}

/// Flip the scheme, apply it, and persist the new value.
pub fn toggle(store: &impl PreferenceStore, current: ColorScheme) -> ColorScheme {
    let next = current.toggled();
    apply(next);
    store.set(STORAGE_KEY, next.as_str());
    next
}
