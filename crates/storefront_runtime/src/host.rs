//! Host service bundle handed to the storefront at startup.

use std::rc::Rc;

use platform_host::{
    ConfirmPrompt, DownloadService, KeyValueStore, MemoryDownloadService, MemoryKeyValueStore,
    ScriptedConfirmPrompt,
};
use platform_host_web::{WebConfirmPrompt, WebDownloadService, WebStorageStore};

#[derive(Clone)]
/// Host services the storefront depends on.
pub struct StorefrontHost {
    /// Survives across browser sessions.
    pub persistent: Rc<dyn KeyValueStore>,
    /// Cleared when the browser session ends.
    pub session: Rc<dyn KeyValueStore>,
    /// Offers exported files to the user.
    pub downloads: Rc<dyn DownloadService>,
    /// Asks for confirmation before destructive actions.
    pub confirm: Rc<dyn ConfirmPrompt>,
}

impl StorefrontHost {
    /// Browser storage areas, Blob downloads and `window.confirm`.
    pub fn browser() -> Self {
        Self {
            persistent: Rc::new(WebStorageStore::local()),
            session: Rc::new(WebStorageStore::session()),
            downloads: Rc::new(WebDownloadService),
            confirm: Rc::new(WebConfirmPrompt),
        }
    }

    /// Throwaway in-memory host. `confirm_answer` is returned from every prompt.
    pub fn in_memory(confirm_answer: bool) -> Self {
        Self {
            persistent: Rc::new(MemoryKeyValueStore::default()),
            session: Rc::new(MemoryKeyValueStore::default()),
            downloads: Rc::new(MemoryDownloadService::default()),
            confirm: Rc::new(ScriptedConfirmPrompt::answering(confirm_answer)),
        }
    }

    /// The browser host on `wasm32`, the in-memory host elsewhere.
    pub fn for_target() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::browser()
        } else {
            Self::in_memory(false)
        }
    }
}
