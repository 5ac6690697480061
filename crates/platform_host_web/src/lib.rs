//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! On native targets every adapter compiles to an inert fallback: storage reads are empty,
//! writes, file reads and downloads fail with a descriptive error, and confirmation prompts
//! decline.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialog;
pub mod files;
pub mod storage;

pub use dialog::WebConfirmPrompt;
pub use files::{WebDownloadService, WebSelectedFile};
pub use storage::web_storage::{WebStorageScope, WebStorageStore};
