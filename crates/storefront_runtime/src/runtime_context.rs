//! Provider and context wiring shared by the shop and admin views.
//!
//! Views keep no copy of catalog or cart data. After any mutation they call
//! [`StorefrontContext::mark_changed`], and every derived view re-reads storage on the next
//! render.

use leptos::*;
use storefront_core::{Storefront, StorefrontConfig, ToastState};
use storefront_ui::ToastBanner;

use crate::host::StorefrontHost;

#[derive(Clone, Copy)]
/// Leptos context for the storefront domain, host services and toast slot.
pub struct StorefrontContext {
    /// Repositories and stock operations.
    pub storefront: StoredValue<Storefront>,
    /// Host services.
    pub host: StoredValue<StorefrontHost>,
    /// The single toast slot.
    pub toasts: RwSignal<ToastState>,
    /// Bumped after each storage mutation.
    pub revision: RwSignal<u64>,
}

impl StorefrontContext {
    /// Builds the storefront over `host` and seeds the demo catalog when storage holds none.
    pub fn new(host: StorefrontHost, config: StorefrontConfig) -> Self {
        let storefront = Storefront::new(config, host.persistent.clone(), host.session.clone());
        if let Err(err) = storefront.catalog.seed_if_empty() {
            logging::warn!("demo catalog seed failed: {}", err.detail);
        }
        Self {
            storefront: store_value(storefront),
            host: store_value(host),
            toasts: create_rw_signal(ToastState::default()),
            revision: create_rw_signal(0),
        }
    }

    /// Clone of the storefront handle. Cheap: the parts share their stores.
    pub fn storefront(&self) -> Storefront {
        self.storefront.get_value()
    }

    /// Clone of the host bundle.
    pub fn host(&self) -> StorefrontHost {
        self.host.get_value()
    }

    /// Shows `message`, replacing any visible toast, and hides it after the configured delay.
    pub fn notify(&self, message: impl Into<String>) {
        let id = self.show_toast(message);
        let context = *self;
        let delay = self.storefront.with_value(|s| s.config.toast_duration);
        set_timeout(move || context.expire_toast(id), delay);
    }

    /// Puts `message` in the toast slot and returns its generation id.
    pub fn show_toast(&self, message: impl Into<String>) -> u64 {
        let mut id = 0;
        self.toasts.update(|state| id = state.show(message));
        id
    }

    /// Hides toast `id` if it is still the visible one.
    pub fn expire_toast(&self, id: u64) {
        self.toasts.update(|state| {
            state.dismiss(id);
        });
    }

    /// Invalidates every view derived from storage.
    pub fn mark_changed(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }

    /// Subscribes the calling reactive scope to storage changes.
    pub fn track_changes(&self) {
        let _ = self.revision.get();
    }

    /// Text of the visible toast, if any.
    pub fn toast_message(&self) -> Signal<Option<String>> {
        let toasts = self.toasts;
        Signal::derive(move || toasts.with(|state| state.current().map(|t| t.message.clone())))
    }
}

#[component]
/// Builds the storefront over `host`, seeds an empty catalog, and provides
/// [`StorefrontContext`] to descendants.
pub fn StorefrontProvider(
    /// Host services; defaults to [`StorefrontHost::for_target`].
    #[prop(optional)]
    host: Option<StorefrontHost>,
    /// Storage keys and limits; defaults to the production configuration.
    #[prop(optional)]
    config: Option<StorefrontConfig>,
    children: Children,
) -> impl IntoView {
    let context = StorefrontContext::new(
        host.unwrap_or_else(StorefrontHost::for_target),
        config.unwrap_or_default(),
    );
    provide_context(context);

    view! {
        {children()}
        <ToastBanner message=context.toast_message() />
    }
}

/// Returns the current [`StorefrontContext`].
///
/// # Panics
///
/// Panics if called outside [`StorefrontProvider`].
pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext not provided")
}

#[cfg(test)]
mod tests {
    use platform_host::KeyValueStore;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    #[test]
    fn context_mutations_bump_revision_and_share_storage() {
        let runtime = create_runtime();
        let context =
            StorefrontContext::new(StorefrontHost::in_memory(true), StorefrontConfig::default());

        let first = context.storefront().catalog.list_all().remove(0);
        context
            .storefront()
            .cart
            .add_or_increment(&first)
            .expect("add");
        context.mark_changed();

        assert_eq!(context.revision.get_untracked(), 1);
        assert_eq!(context.storefront().cart.item_count(), 1);
        runtime.dispose();
    }

    #[test]
    fn startup_seeds_empty_storage() {
        let runtime = create_runtime();
        let context =
            StorefrontContext::new(StorefrontHost::in_memory(true), StorefrontConfig::default());

        assert_eq!(context.storefront().catalog.records().len(), 4);
        runtime.dispose();
    }

    #[test]
    fn startup_keeps_catalog_with_undisplayable_record() {
        let runtime = create_runtime();
        let host = StorefrontHost::in_memory(true);
        let config = StorefrontConfig::default();
        let stored = r#"[{"id":"u1","color":"Red","price":100},{"id":"u2","price":{"amount":5}}]"#;
        host.persistent
            .save_raw(&config.catalog_key, stored)
            .expect("save");

        let context = StorefrontContext::new(host.clone(), config.clone());

        let raw = host
            .persistent
            .load_raw(&config.catalog_key)
            .expect("load")
            .expect("stored catalog");
        assert_eq!(
            serde_json::from_str::<Value>(&raw).expect("json"),
            serde_json::from_str::<Value>(stored).expect("json")
        );
        let ids: Vec<String> = context
            .storefront()
            .catalog
            .list_all()
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["u1".to_string()]);
        runtime.dispose();
    }

    #[test]
    fn stale_toast_timer_leaves_newer_toast_visible() {
        let runtime = create_runtime();
        let context =
            StorefrontContext::new(StorefrontHost::in_memory(true), StorefrontConfig::default());
        let message = context.toast_message();

        let first = context.show_toast("Item added to cart");
        let second = context.show_toast("Cart cleared");
        assert_ne!(first, second);

        context.expire_toast(first);
        assert_eq!(message.get_untracked(), Some("Cart cleared".to_string()));

        context.expire_toast(second);
        assert_eq!(message.get_untracked(), None);
        runtime.dispose();
    }
}
