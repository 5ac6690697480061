//! Runtime wiring for the storefront views: host services, the shared context, and toasts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod runtime_context;

pub use host::StorefrontHost;
pub use runtime_context::{use_storefront, StorefrontContext, StorefrontProvider};
