//! Admin view: PIN gate, stock upload, and catalog export/import/clear.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod actions;

pub use actions::AdminNotice;

use leptos::*;
use platform_host::SelectedFile;
use platform_host_web::WebSelectedFile;
use storefront_core::{format_inr, AuthState, Product, UploadForm};
use storefront_runtime::{use_storefront, StorefrontContext};
use storefront_ui::prelude::*;

#[component]
/// Admin page. Shows the PIN form while [`AuthState::Unauthenticated`], then the stock panel.
pub fn AdminApp() -> impl IntoView {
    let context = use_storefront();
    // Memoized so storage changes inside the panel do not remount it.
    let auth_state = create_memo(move |_| {
        context.track_changes();
        context.storefront().auth.state()
    });

    view! {
        <div class="admin-app" data-app="admin">
            <header class="site-header">
                <h1 class="brand">"DevPure Sarees · Admin"</h1>
                <nav class="site-nav">
                    <a href="/">"Shop"</a>
                </nav>
            </header>
            {move || match auth_state.get() {
                AuthState::Unauthenticated => view! { <AdminAuthForm /> }.into_view(),
                AuthState::Authenticated => view! { <StockPanel /> }.into_view(),
            }}
        </div>
    }
}

fn report(context: StorefrontContext, notice: AdminNotice) {
    if notice.changed {
        context.mark_changed();
    }
    context.notify(notice.message);
}

#[component]
fn AdminAuthForm() -> impl IntoView {
    let context = use_storefront();
    let entered = create_rw_signal(String::new());
    let candidate = create_rw_signal(String::new());

    view! {
        <section id="admin-auth" class="admin-auth" aria-label="Admin login">
            <FieldGroup title="Admin PIN">
                <input
                    id="admin-pin"
                    type="password"
                    class="ui-field"
                    autocomplete="current-password"
                    prop:value=move || entered.get()
                    on:input=move |ev| entered.set(event_target_value(&ev))
                />
            </FieldGroup>
            <Button
                id="login-btn"
                variant=ButtonVariant::Primary
                on_click=Callback::new(move |_| {
                    let notice = actions::login(&context.storefront().auth, &entered.get_untracked());
                    report(context, notice);
                })
            >
                "Login"
            </Button>

            <FieldGroup title="Set PIN" description="4–8 characters">
                <input
                    id="admin-pin-set"
                    type="password"
                    class="ui-field"
                    autocomplete="new-password"
                    prop:value=move || candidate.get()
                    on:input=move |ev| candidate.set(event_target_value(&ev))
                />
            </FieldGroup>
            <Button
                id="set-pin-btn"
                on_click=Callback::new(move |_| {
                    let notice = actions::set_pin(&context.storefront().auth, &candidate.get_untracked());
                    if notice.changed {
                        candidate.set(String::new());
                    }
                    report(context, notice);
                })
            >
                "Set PIN"
            </Button>
        </section>
    }
}

#[component]
fn StockPanel() -> impl IntoView {
    let context = use_storefront();
    let products = Signal::derive(move || {
        context.track_changes();
        context.storefront().catalog.list_all()
    });

    let busy = create_rw_signal(false);
    let color = create_rw_signal(String::new());
    let price = create_rw_signal(String::new());
    let notes = create_rw_signal(String::new());
    let image_input = create_node_ref::<html::Input>();
    let import_input = create_node_ref::<html::Input>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let storefront = context.storefront();
        let image = image_input
            .get_untracked()
            .and_then(|input| WebSelectedFile::first_from_input(&input));
        let color_text = color.get_untracked();
        let price_text = price.get_untracked();
        let notes_text = notes.get_untracked();
        busy.set(true);
        spawn_local(async move {
            let form = UploadForm {
                image: image.as_ref().map(|file| file as &dyn SelectedFile),
                color: &color_text,
                price: &price_text,
                notes: &notes_text,
            };
            let notice = actions::upload(&storefront.stock, form).await;
            // Stays busy while an earlier upload still holds the gate.
            busy.set(storefront.stock.upload_gate().is_busy());
            if notice.changed {
                color.set(String::new());
                price.set(String::new());
                notes.set(String::new());
                if let Some(input) = image_input.get_untracked() {
                    input.set_value("");
                }
            }
            report(context, notice);
        });
    };

    let on_import_selected = move |_: ev::Event| {
        let Some(input) = import_input.get_untracked() else {
            return;
        };
        let Some(file) = WebSelectedFile::first_from_input(&input) else {
            return;
        };
        let storefront = context.storefront();
        spawn_local(async move {
            let notice = actions::import(&storefront.stock, &file).await;
            input.set_value("");
            report(context, notice);
        });
    };

    view! {
        <section id="admin-panel" class="admin-panel">
            <form id="upload-form" class="upload-form" on:submit=on_submit>
                <FieldGroup title="Image">
                    <input id="saree-image" type="file" accept="image/*" node_ref=image_input />
                </FieldGroup>
                <FieldGroup title="Color">
                    <input
                        id="saree-color"
                        type="text"
                        class="ui-field"
                        prop:value=move || color.get()
                        on:input=move |ev| color.set(event_target_value(&ev))
                    />
                </FieldGroup>
                <FieldGroup title="Price (₹)">
                    <input
                        id="saree-price"
                        type="number"
                        min="0"
                        step="1"
                        class="ui-field"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </FieldGroup>
                <FieldGroup title="Notes" description="Optional">
                    <input
                        id="saree-notes"
                        type="text"
                        class="ui-field"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    />
                </FieldGroup>
                <Button
                    button_type=ButtonType::Submit
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || busy.get())
                >
                    {move || if busy.get() { "Adding…" } else { "Add to stock" }}
                </Button>
            </form>

            <div class="admin-tools">
                <Button
                    id="export-data"
                    on_click=Callback::new(move |_| {
                        let host = context.host();
                        let notice = actions::export(&context.storefront().stock, &*host.downloads);
                        report(context, notice);
                    })
                >
                    "Export JSON"
                </Button>
                <Button
                    id="import-data"
                    on_click=Callback::new(move |_| {
                        if let Some(input) = import_input.get_untracked() {
                            input.click();
                        }
                    })
                >
                    "Import JSON"
                </Button>
                <input
                    id="import-file"
                    type="file"
                    accept="application/json,.json"
                    hidden=true
                    node_ref=import_input
                    on:change=on_import_selected
                />
                <Button
                    id="clear-stock"
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| {
                        let host = context.host();
                        if let Some(notice) = actions::clear(&context.storefront().stock, &*host.confirm) {
                            report(context, notice);
                        }
                    })
                >
                    "Clear stock"
                </Button>
            </div>

            <div id="admin-stock" class="grid">
                {move || {
                    let products = products.get();
                    if products.is_empty() {
                        view! { <EmptyState>"No stock yet."</EmptyState> }.into_view()
                    } else {
                        products
                            .into_iter()
                            .map(|product| stock_card(product, context))
                            .collect_view()
                    }
                }}
            </div>
        </section>
    }
}

fn stock_card(product: Product, context: StorefrontContext) -> impl IntoView {
    let image = product.display_image().map(str::to_string);
    let title = product.title().to_string();
    let price_label = format_inr(product.price);
    let id = product.id.clone();
    view! {
        <ProductCard
            image=image
            image_alt=product.color.clone()
            title=title
            color=product.color
            price_label=price_label
        >
            <Button
                variant=ButtonVariant::Danger
                on_click=Callback::new(move |_| {
                    let notice = actions::delete(&context.storefront().stock, &id);
                    report(context, notice);
                })
            >
                "Delete"
            </Button>
        </ProductCard>
    }
}
