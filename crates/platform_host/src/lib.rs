//! Typed host-service contracts shared by the storefront domain and browser adapters.
//!
//! This crate is the API boundary for everything the storefront needs from its host: string
//! key/value storage (persistent and session scoped), reading user-selected files, offering
//! downloads, and confirmation prompts. Concrete browser adapters live in
//! `platform_host_web`; the in-memory adapters here back unit tests and non-browser builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialog;
pub mod files;
pub mod storage;

pub use dialog::{ConfirmPrompt, ScriptedConfirmPrompt};
pub use files::{
    DownloadService, DownloadedFile, FileReadFuture, MemoryDownloadService, MemoryFile,
    SelectedFile,
};
pub use storage::kv::{
    load_json_with, save_json_with, KeyValueStore, MemoryKeyValueStore,
};
