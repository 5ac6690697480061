//! Admin operations reduced to the toast they produce.
//!
//! Each action runs one storefront operation and reports the user-facing outcome as an
//! [`AdminNotice`]. The view only has to show the message and, when storage changed, bump the
//! storefront revision.

use std::fmt::Display;

use platform_host::{ConfirmPrompt, DownloadService, SelectedFile};
use storefront_core::{AdminAuth, ProductId, StockManager, UploadForm};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of an admin action.
pub struct AdminNotice {
    /// Toast text.
    pub message: String,
    /// Whether storage was modified.
    pub changed: bool,
}

impl AdminNotice {
    fn from_result<T, E: Display>(result: Result<T, E>, success: &str, mutates: bool) -> Self {
        match result {
            Ok(_) => Self {
                message: success.to_string(),
                changed: mutates,
            },
            Err(err) => Self {
                message: err.to_string(),
                changed: false,
            },
        }
    }
}

/// Stores a new admin PIN.
pub fn set_pin(auth: &AdminAuth, candidate: &str) -> AdminNotice {
    AdminNotice::from_result(auth.set_pin(candidate), "PIN set", true)
}

/// Attempts a login with `entered`.
pub fn login(auth: &AdminAuth, entered: &str) -> AdminNotice {
    AdminNotice::from_result(auth.login(entered), "Logged in", true)
}

/// Adds a product from the upload form.
pub async fn upload(stock: &StockManager, form: UploadForm<'_>) -> AdminNotice {
    AdminNotice::from_result(stock.upload(form).await, "Saree added to stock", true)
}

/// Deletes one product.
pub fn delete(stock: &StockManager, id: &ProductId) -> AdminNotice {
    AdminNotice::from_result(stock.delete(id), "Deleted", true)
}

/// Offers the catalog as a JSON download.
pub fn export(stock: &StockManager, downloads: &dyn DownloadService) -> AdminNotice {
    AdminNotice::from_result(stock.export(downloads), "Exported JSON", false)
}

/// Replaces the catalog with the contents of `file`.
pub async fn import(stock: &StockManager, file: &dyn SelectedFile) -> AdminNotice {
    AdminNotice::from_result(stock.import(file).await, "Imported JSON", true)
}

/// Clears the catalog after confirmation. `None` when the user declined.
pub fn clear(stock: &StockManager, prompt: &dyn ConfirmPrompt) -> Option<AdminNotice> {
    match stock.clear_with_confirmation(prompt) {
        Ok(false) => None,
        result => Some(AdminNotice::from_result(result, "Stock cleared", true)),
    }
}
