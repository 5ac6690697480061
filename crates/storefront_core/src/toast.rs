//! Transient notification state.
//!
//! At most one toast is visible. Showing a new one replaces the current one immediately, and a
//! dismissal timer only clears the toast it was started for.

#[derive(Debug, Clone, PartialEq, Eq)]
/// A visible notification.
pub struct Toast {
    /// Identifies this showing; later toasts get larger ids.
    pub id: u64,
    /// Message text.
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The single toast slot.
pub struct ToastState {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Shows `message`, replacing whatever is visible. Returns the id to dismiss it with.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some(Toast {
            id: self.next_id,
            message: message.into(),
        });
        self.next_id
    }

    /// Hides the toast if `id` is still the visible one. Returns whether it hid anything.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// The visible toast, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
