//! `localStorage` / `sessionStorage` backed key/value stores.
//!
//! The browser API is synchronous, so these adapters implement [`KeyValueStore`] directly.

use platform_host::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which browser storage area a [`WebStorageStore`] addresses.
pub enum WebStorageScope {
    /// `window.localStorage`: survives across browser sessions.
    Local,
    /// `window.sessionStorage`: cleared when the browser session ends.
    Session,
}

impl WebStorageScope {
    fn label(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Browser key/value store backed by one of the Web Storage areas.
pub struct WebStorageStore {
    scope: WebStorageScope,
}

impl WebStorageStore {
    /// Store backed by `window.localStorage`.
    pub const fn local() -> Self {
        Self {
            scope: WebStorageScope::Local,
        }
    }

    /// Store backed by `window.sessionStorage`.
    pub const fn session() -> Self {
        Self {
            scope: WebStorageScope::Session,
        }
    }

    /// Storage area this store addresses.
    pub const fn scope(self) -> WebStorageScope {
        self.scope
    }

    #[cfg(target_arch = "wasm32")]
    fn storage(self) -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let storage = match self.scope {
            WebStorageScope::Local => window.local_storage(),
            WebStorageScope::Session => window.session_storage(),
        };
        storage
            .ok()
            .flatten()
            .ok_or_else(|| format!("{} unavailable", self.scope.label()))
    }
}

impl KeyValueStore for WebStorageStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.storage()?
                .get_item(key)
                .map_err(|e| format!("{} get_item failed: {e:?}", self.scope.label()))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.storage()?
                .set_item(key, raw)
                .map_err(|e| format!("{} set_item failed: {e:?}", self.scope.label()))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Err(format!("{} requires a browser", self.scope.label()))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_fallback_reads_nothing_and_rejects_writes() {
        let store = WebStorageStore::local();
        assert_eq!(store.scope(), WebStorageScope::Local);
        assert_eq!(store.load_raw("devpure_sarees").expect("load"), None);
        let err = store.save_raw("devpure_sarees", "[]").expect_err("native save");
        assert!(err.contains("localStorage"));
        assert_eq!(WebStorageStore::session().scope(), WebStorageScope::Session);
    }
}
