use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use storefront_app_admin::AdminApp;
use storefront_app_shop::ShopApp;
use storefront_runtime::StorefrontProvider;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="DevPure Sarees" />
        <Meta name="description" content="Handpicked silk and handloom sarees." />

        <StorefrontProvider>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=ShopRoute />
                        <Route path="/admin" view=AdminRoute />
                        <Route path="/*any" view=NotFoundRoute />
                    </Routes>
                </main>
            </Router>
        </StorefrontProvider>
    }
}

#[component]
pub fn ShopRoute() -> impl IntoView {
    view! { <ShopApp /> }
}

#[component]
pub fn AdminRoute() -> impl IntoView {
    view! { <AdminApp /> }
}

#[component]
fn NotFoundRoute() -> impl IntoView {
    view! {
        <section class="canonical-content not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to the shop"</A>
        </section>
    }
}

#[cfg(test)]
mod tests {
    // Routed views render inside the shell's `<main>`, so they must not open another one.
    const ROUTED_VIEWS: [(&str, &str); 2] = [
        ("shop", include_str!("../../apps/shop/src/lib.rs")),
        ("admin", include_str!("../../apps/admin/src/lib.rs")),
    ];

    #[test]
    fn shell_owns_the_only_main_landmark() {
        for (name, source) in ROUTED_VIEWS {
            assert!(!source.contains("<main"), "{name} view opens a nested <main>");
        }
        assert!(ROUTED_VIEWS[0].1.contains("<section id=\"product-grid\""));
    }
}
