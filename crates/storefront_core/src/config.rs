//! Storage keys, file names and limits shared by the shop and admin views.

use std::{ops::RangeInclusive, time::Duration};

/// `localStorage` key holding the catalog list.
pub const CATALOG_KEY: &str = "devpure_sarees";
/// `localStorage` key holding the cart line items.
pub const CART_KEY: &str = "devpure_cart";
/// `localStorage` key holding the admin PIN as plain text.
pub const ADMIN_PIN_KEY: &str = "devpure_admin_pin";
/// `sessionStorage` key whose presence marks the admin as logged in.
pub const ADMIN_SESSION_FLAG_KEY: &str = "devpure_authed";
/// File name offered when exporting the catalog.
pub const EXPORT_FILE_NAME: &str = "devpure_sarees.json";
/// MIME type of the exported catalog.
pub const EXPORT_MIME_TYPE: &str = "application/json";
/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(1800);
/// Smallest accepted PIN length, in characters.
pub const MIN_PIN_LEN: usize = 4;
/// Largest accepted PIN length, in characters.
pub const MAX_PIN_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Runtime configuration for a storefront instance.
///
/// [`Default`] yields the production keys; tests substitute their own.
pub struct StorefrontConfig {
    /// Persistent key for the catalog.
    pub catalog_key: String,
    /// Persistent key for the cart.
    pub cart_key: String,
    /// Persistent key for the admin PIN.
    pub pin_key: String,
    /// Session key for the admin login flag.
    pub session_flag_key: String,
    /// Export download file name.
    pub export_file_name: String,
    /// Export download MIME type.
    pub export_mime_type: String,
    /// Toast auto-dismiss delay.
    pub toast_duration: Duration,
    /// Accepted PIN lengths (characters, after trimming).
    pub pin_length: RangeInclusive<usize>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_key: CATALOG_KEY.to_string(),
            cart_key: CART_KEY.to_string(),
            pin_key: ADMIN_PIN_KEY.to_string(),
            session_flag_key: ADMIN_SESSION_FLAG_KEY.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            export_mime_type: EXPORT_MIME_TYPE.to_string(),
            toast_duration: TOAST_DURATION,
            pin_length: MIN_PIN_LEN..=MAX_PIN_LEN,
        }
    }
}
