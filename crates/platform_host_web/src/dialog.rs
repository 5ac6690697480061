//! `window.confirm` prompt adapter.

use platform_host::ConfirmPrompt;

#[derive(Debug, Clone, Copy, Default)]
/// Confirmation prompt backed by the blocking `window.confirm` dialog.
pub struct WebConfirmPrompt;

impl ConfirmPrompt for WebConfirmPrompt {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            false
        }
    }
}
