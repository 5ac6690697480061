use std::{cell::RefCell, rc::Rc};

/// Host service that hands generated text to the user as a downloadable file.
pub trait DownloadService {
    /// Offers `contents` for download under `file_name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot create or trigger the download.
    fn download_text(&self, file_name: &str, mime_type: &str, contents: &str)
        -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A download captured by [`MemoryDownloadService`].
pub struct DownloadedFile {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: String,
    /// File contents.
    pub contents: String,
}

#[derive(Debug, Clone, Default)]
/// Download service that records files in memory.
pub struct MemoryDownloadService {
    files: Rc<RefCell<Vec<DownloadedFile>>>,
}

impl MemoryDownloadService {
    /// Returns every download recorded so far, oldest first.
    pub fn downloads(&self) -> Vec<DownloadedFile> {
        self.files.borrow().clone()
    }
}

impl DownloadService for MemoryDownloadService {
    fn download_text(
        &self,
        file_name: &str,
        mime_type: &str,
        contents: &str,
    ) -> Result<(), String> {
        self.files.borrow_mut().push(DownloadedFile {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}
