//! Shared UI primitives for the storefront shop and admin views.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed
//! by the storefront stylesheet. Views compose these instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonType, ButtonVariant, Drawer, EmptyState, FieldGroup, ProductCard,
    SelectField, ToastBanner,
};

/// Convenience imports for view crates.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonType, ButtonVariant, Drawer, EmptyState, FieldGroup, ProductCard,
        SelectField, ToastBanner,
    };
}
