//! Control, display and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod data_display;
mod overlays;

pub use controls::{Button, FieldGroup, SelectField};
pub use data_display::{Badge, EmptyState, ProductCard};
pub use overlays::{Drawer, ToastBanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action, such as "Add to cart".
    Primary,
    /// Low-emphasis control, such as quantity steppers.
    Quiet,
    /// Destructive action, such as delete or clear.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }

    pub(crate) fn legacy_class(self) -> Option<&'static str> {
        match self {
            Self::Primary => Some("primary"),
            Self::Danger => Some("delete-btn"),
            Self::Standard | Self::Quiet => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// HTML `type` of a button element.
pub enum ButtonType {
    /// Plain button; never submits a form.
    #[default]
    Button,
    /// Submits its enclosing form.
    Submit,
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
        }
    }
}

pub(crate) fn merge_layout_class(base: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
