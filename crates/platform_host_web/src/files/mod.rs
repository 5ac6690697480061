//! Browser file adapters: reading picked files and offering downloads.

mod download;
mod selected;

pub use download::WebDownloadService;
pub use selected::WebSelectedFile;
