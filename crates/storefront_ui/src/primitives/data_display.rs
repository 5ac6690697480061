use super::*;

#[component]
/// Small count or status pill, used for the cart item count.
pub fn Badge(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="badge"
        >
            {children()}
        </span>
    }
}

#[component]
/// Catalog card: image, title, color and price, with actions passed as children.
pub fn ProductCard(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Image URL (remote or `data:`); omitted when `None`.
    #[prop(into)]
    image: Option<String>,
    #[prop(into)] image_alt: String,
    #[prop(into)] title: String,
    #[prop(into)] color: String,
    /// Already formatted price, for example `₹3,899`.
    #[prop(into)]
    price_label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="product-card"
        >
            {image.map(move |src| view! { <img src=src alt=image_alt loading="lazy" /> })}
            <div class="card-body" data-ui-slot="body">
                <h4 class="card-title">{title}</h4>
                <div class="meta">
                    <span>{color}</span>
                    <span class="price">{price_label}</span>
                </div>
            </div>
            <div class="actions" data-ui-slot="actions">{children()}</div>
        </article>
    }
}

#[component]
/// Placeholder shown when a list has nothing to render.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}
