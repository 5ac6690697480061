//! Shop view: filterable catalog grid and the cart drawer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod actions;

pub use actions::{apply_cart_action, line_price_text, CartAction, ProductCardView, CHECKOUT_NOTICE};

use leptos::*;
use storefront_core::{
    color_options, format_inr, visible_products, CartLine, Product, ShopQuery, SortMode,
    ALL_COLORS,
};
use storefront_runtime::use_storefront;
use storefront_ui::prelude::*;

#[component]
/// Public storefront page.
///
/// Catalog and cart are re-read from storage whenever the storefront revision changes, so the
/// grid, badge and drawer never show a stale copy.
pub fn ShopApp() -> impl IntoView {
    let context = use_storefront();
    let query = create_rw_signal(ShopQuery::default());
    let cart_open = create_rw_signal(false);

    let catalog = Signal::derive(move || {
        context.track_changes();
        context.storefront().catalog.list_all()
    });
    let colors = Signal::derive(move || catalog.with(|products| color_options(products)));
    let visible = Signal::derive(move || query.with(|q| visible_products(catalog.get(), q)));
    let cart = Signal::derive(move || {
        context.track_changes();
        context.storefront().cart.summary()
    });

    let on_cart = Callback::new(move |action: CartAction| {
        match apply_cart_action(&context.storefront().cart, action) {
            Ok(notice) => {
                context.mark_changed();
                if let Some(notice) = notice {
                    context.notify(notice);
                }
            }
            Err(err) => {
                logging::warn!("cart update failed: {}", err.detail);
                context.notify(err.to_string());
            }
        }
    });

    view! {
        <div class="shop-app" data-app="shop">
            <header class="site-header">
                <h1 class="brand">"DevPure Sarees"</h1>
                <nav class="site-nav">
                    <a href="/admin">"Admin"</a>
                    <Button
                        id="cart-toggle"
                        layout_class="cart-toggle"
                        aria_label="Open cart"
                        aria_expanded=Signal::derive(move || cart_open.get())
                        on_click=Callback::new(move |_| {
                            context.mark_changed();
                            cart_open.set(true);
                        })
                    >
                        "Cart "
                        <Badge id="cart-count">{move || cart.with(|c| c.item_count)}</Badge>
                    </Button>
                </nav>
            </header>

            <section class="controls" aria-label="Filters">
                <SelectField
                    id="sort-price"
                    aria_label="Sort by price"
                    value=Signal::derive(move || query.with(|q| q.sort.token().to_string()))
                    on_change=Callback::new(move |ev| {
                        let token = event_target_value(&ev);
                        query.update(|q| q.sort = SortMode::from_token(&token));
                    })
                >
                    <option value={SortMode::None.token()}>"Sort: featured"</option>
                    <option value={SortMode::PriceAscending.token()}>"Price: low to high"</option>
                    <option value={SortMode::PriceDescending.token()}>"Price: high to low"</option>
                </SelectField>
                <SelectField
                    id="filter-color"
                    aria_label="Filter by color"
                    value=Signal::derive(move || query.with(|q| q.color_token().to_string()))
                    on_change=Callback::new(move |ev| {
                        let token = event_target_value(&ev);
                        query.update(|q| q.set_color_token(&token));
                    })
                >
                    <option value=ALL_COLORS>"All colors"</option>
                    {move || {
                        colors
                            .get()
                            .into_iter()
                            .map(|color| view! { <option value=color.clone()>{color}</option> })
                            .collect_view()
                    }}
                </SelectField>
                <input
                    type="search"
                    id="search-text"
                    class="ui-field"
                    placeholder="Search color or notes"
                    aria-label="Search"
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        query.update(|q| q.search = text);
                    }
                />
                <Button
                    id="reset-filters"
                    on_click=Callback::new(move |_| query.update(ShopQuery::reset))
                >
                    "Reset"
                </Button>
            </section>

            <section id="product-grid" class="grid" aria-label="Sarees">
                {move || {
                    let products = visible.get();
                    if products.is_empty() {
                        view! { <EmptyState>"No sarees match these filters."</EmptyState> }
                            .into_view()
                    } else {
                        products
                            .into_iter()
                            .map(|product| shop_card(product, on_cart))
                            .collect_view()
                    }
                }}
            </section>

            <Drawer
                id="cart-panel"
                title="Your cart"
                open=cart_open
                on_close=Callback::new(move |_| cart_open.set(false))
            >
                <div id="cart-items" class="cart-items">
                    {move || {
                        let lines = cart.with(|c| c.lines.clone());
                        if lines.is_empty() {
                            view! { <EmptyState>"Your cart is empty."</EmptyState> }.into_view()
                        } else {
                            lines
                                .into_iter()
                                .map(|line| cart_row(line, on_cart))
                                .collect_view()
                        }
                    }}
                </div>
                <div class="cart-total">
                    "Total: "
                    <strong id="cart-total">{move || cart.with(|c| format_inr(c.total))}</strong>
                </div>
                <Button
                    id="checkout-button"
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| context.notify(CHECKOUT_NOTICE))
                >
                    "Checkout"
                </Button>
            </Drawer>
        </div>
    }
}

fn shop_card(product: Product, on_cart: Callback<CartAction>) -> impl IntoView {
    let card = ProductCardView::from(&product);
    view! {
        <ProductCard
            image=card.image
            image_alt=card.image_alt
            title=card.title
            color=card.color
            price_label=card.price_label
        >
            <Button
                variant=ButtonVariant::Primary
                on_click=Callback::new(move |_| on_cart.call(CartAction::Add(product.clone())))
            >
                "Add to cart"
            </Button>
        </ProductCard>
    }
}

fn cart_row(line: CartLine, on_cart: Callback<CartAction>) -> impl IntoView {
    let price_text = line_price_text(&line);
    let title = line.title();
    let alt = line.color.clone();
    let image = line.image.clone();
    let increment_id = line.id.clone();
    let decrement_id = line.id.clone();
    let remove_id = line.id;
    view! {
        <div class="cart-item">
            {image.map(|src| view! { <img src=src alt=alt /> })}
            <div class="cart-item-info">
                <div class="cart-item-title">{title}</div>
                <div class="cart-item-price">{price_text}</div>
                <div class="cart-item-controls">
                    <Button
                        variant=ButtonVariant::Quiet
                        aria_label="Increase quantity"
                        on_click=Callback::new(move |_| {
                            on_cart.call(CartAction::Increment(increment_id.clone()))
                        })
                    >
                        "+"
                    </Button>
                    <Button
                        variant=ButtonVariant::Quiet
                        aria_label="Decrease quantity"
                        on_click=Callback::new(move |_| {
                            on_cart.call(CartAction::Decrement(decrement_id.clone()))
                        })
                    >
                        "−"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| {
                            on_cart.call(CartAction::Remove(remove_id.clone()))
                        })
                    >
                        "Remove"
                    </Button>
                </div>
            </div>
        </div>
    }
}
