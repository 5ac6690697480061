//! User-selected file contracts and in-memory adapters.

mod download;
mod selected;

pub use download::{DownloadService, DownloadedFile, MemoryDownloadService};
pub use selected::{FileReadFuture, MemoryFile, SelectedFile};
