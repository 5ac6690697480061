use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`SelectedFile`] read methods.
pub type FileReadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A file the user picked through a file input.
///
/// Reads are asynchronous because the browser `FileReader` and `Blob.text()` APIs are.
pub trait SelectedFile {
    /// File name as reported by the picker.
    fn name(&self) -> String;

    /// Reads the file as a self-contained `data:` URL.
    fn read_data_url(&self) -> FileReadFuture<'_, Result<String, String>>;

    /// Reads the file contents as UTF-8 text.
    fn read_text(&self) -> FileReadFuture<'_, Result<String, String>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-memory file with pre-rendered contents, used by tests and non-browser targets.
pub struct MemoryFile {
    /// File name.
    pub name: String,
    /// MIME type used when rendering the data URL.
    pub mime_type: String,
    /// File contents.
    pub contents: String,
    /// When set, every read fails with this message.
    pub read_error: Option<String>,
}

impl MemoryFile {
    /// Creates a readable in-memory file.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            contents: contents.into(),
            read_error: None,
        }
    }

    /// Creates a file whose reads always fail.
    pub fn unreadable(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: String::new(),
            contents: String::new(),
            read_error: Some(error.into()),
        }
    }
}

impl SelectedFile for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_data_url(&self) -> FileReadFuture<'_, Result<String, String>> {
        Box::pin(async move {
            if let Some(err) = &self.read_error {
                return Err(err.clone());
            }
            // Contents are embedded verbatim; callers treat the URL as opaque.
            Ok(format!("data:{},{}", self.mime_type, self.contents))
        })
    }

    fn read_text(&self) -> FileReadFuture<'_, Result<String, String>> {
        Box::pin(async move {
            match &self.read_error {
                Some(err) => Err(err.clone()),
                None => Ok(self.contents.clone()),
            }
        })
    }
}
