//! Wiring of repositories and stock operations over a pair of host stores.

use std::rc::Rc;

use platform_host::KeyValueStore;

use crate::{
    auth::AdminAuth, cart::CartRepository, catalog::CatalogRepository, config::StorefrontConfig,
    persistence::JsonStore, stock::StockManager,
};

#[derive(Clone)]
/// Everything the shop and admin views operate on.
///
/// Nothing is cached: every accessor call on the repositories reads storage again.
pub struct Storefront {
    /// Configuration the parts were built from.
    pub config: Rc<StorefrontConfig>,
    /// Product list.
    pub catalog: CatalogRepository,
    /// Cart line items.
    pub cart: CartRepository,
    /// Admin PIN and login flag.
    pub auth: AdminAuth,
    /// Admin stock operations over [`Storefront::catalog`].
    pub stock: StockManager,
}

impl Storefront {
    /// Builds the storefront over a persistent store and a session-scoped store.
    pub fn new(
        config: StorefrontConfig,
        persistent: Rc<dyn KeyValueStore>,
        session: Rc<dyn KeyValueStore>,
    ) -> Self {
        let persistent = JsonStore::new(persistent);
        let session = JsonStore::new(session);
        let catalog = CatalogRepository::new(persistent.clone(), config.catalog_key.clone());
        let cart = CartRepository::new(persistent.clone(), config.cart_key.clone());
        let auth = AdminAuth::new(
            persistent,
            session,
            config.pin_key.clone(),
            config.session_flag_key.clone(),
            config.pin_length.clone(),
        );
        let stock = StockManager::new(
            catalog.clone(),
            config.export_file_name.clone(),
            config.export_mime_type.clone(),
        );
        Self {
            config: Rc::new(config),
            catalog,
            cart,
            auth,
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{KeyValueStore, MemoryKeyValueStore};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parts_share_the_configured_keys() {
        let local = MemoryKeyValueStore::default();
        let session = MemoryKeyValueStore::default();
        let shop = Storefront::new(
            StorefrontConfig::default(),
            Rc::new(local.clone()),
            Rc::new(session.clone()),
        );

        shop.catalog.seed_if_empty().expect("seed");
        let first = shop.stock.catalog().list_all().remove(0);
        shop.cart.add_or_increment(&first).expect("add");
        shop.auth.set_pin("1234").expect("pin");
        shop.auth.login("1234").expect("login");

        assert!(local.load_raw("devpure_sarees").expect("load").is_some());
        assert!(local.load_raw("devpure_cart").expect("load").is_some());
        assert_eq!(
            local.load_raw("devpure_admin_pin").expect("load"),
            Some("1234".to_string())
        );
        assert_eq!(
            session.load_raw("devpure_authed").expect("load"),
            Some("1".to_string())
        );
    }
}
