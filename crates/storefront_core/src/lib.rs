//! Storefront domain: catalog and cart repositories over browser storage, the admin PIN gate,
//! stock operations, shop filtering, and toast state.
//!
//! Everything here is UI-free and runs against any [`platform_host::KeyValueStore`], so the
//! whole domain is exercised with in-memory host adapters.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod error;
pub mod model;
pub mod persistence;
pub mod query;
pub mod stock;
pub mod storefront;
pub mod toast;

pub use auth::{verify_pin, AdminAuth, AuthState};
pub use cart::{CartRepository, CartSummary};
pub use catalog::{demo_catalog, CatalogRepository};
pub use config::StorefrontConfig;
pub use currency::format_inr;
pub use error::{ExportError, ImportError, PinError, StoreError, UploadError};
pub use model::{CartLine, Product, ProductDraft, ProductId, DEFAULT_PRODUCT_TITLE};
pub use persistence::JsonStore;
pub use query::{color_options, visible_products, ShopQuery, SortMode, ALL_COLORS};
pub use stock::{validate_upload, StockManager, UploadForm, UploadGate, ValidatedUpload};
pub use storefront::Storefront;
pub use toast::{Toast, ToastState};
