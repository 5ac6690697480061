//! Error types for storefront operations.
//!
//! The `Display` text of every variant is the short message shown to the user in a toast.
//! Diagnostic detail, when there is any, rides along in the variant fields.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not save changes")]
/// A storage write was rejected by the host (for example, quota exhausted).
pub struct StoreError {
    /// Host-reported reason.
    pub detail: String,
}

impl StoreError {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Admin PIN set/login failures.
pub enum PinError {
    /// The candidate PIN is shorter or longer than allowed.
    #[error("PIN must be 4–8 characters")]
    LengthOutOfRange,
    /// Login was attempted before any PIN was stored.
    #[error("No PIN set. Please set a PIN first.")]
    NotSet,
    /// The entered PIN does not match the stored one.
    #[error("Invalid PIN")]
    Mismatch,
    /// Persisting the PIN or session flag failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Stock upload failures. None of these leave a partial record behind.
pub enum UploadError {
    /// Another upload is still converting its image.
    #[error("Upload already in progress")]
    Busy,
    /// No image file was selected.
    #[error("Please select an image")]
    MissingImage,
    /// Color was empty after trimming.
    #[error("Color is required")]
    MissingColor,
    /// Price was empty, not a number, or negative.
    #[error("Price must be a number")]
    InvalidPrice,
    /// The selected image could not be read.
    #[error("Could not read image")]
    ImageRead(String),
    /// Appending the record failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Catalog import failures. The catalog is left untouched in every case.
pub enum ImportError {
    /// The file could not be read.
    #[error("Import failed")]
    Read(String),
    /// The file is not valid JSON.
    #[error("Import failed")]
    Parse(String),
    /// The top-level JSON value is not a list.
    #[error("Import failed")]
    NotAList,
    /// Writing the replacement catalog failed.
    #[error("Import failed")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Catalog export failures.
pub enum ExportError {
    /// The catalog could not be serialized.
    #[error("Export failed")]
    Serialize(String),
    /// The host could not offer the download.
    #[error("Export failed")]
    Download(String),
}
