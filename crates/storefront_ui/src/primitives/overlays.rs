use super::*;

#[component]
/// Slide-out side panel. Children stay mounted; `open` only toggles visibility.
pub fn Drawer(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-drawer", layout_class);
    let label = title.clone();
    view! {
        <aside
            class=move || if open.get() { format!("{class} open") } else { class.clone() }
            id=id
            role="dialog"
            aria-label=label
            aria-hidden=move || bool_token(!open.get())
            data-ui-primitive="true"
            data-ui-kind="drawer"
            data-ui-open=move || bool_token(open.get())
        >
            <header data-ui-slot="header">
                <h3>{title}</h3>
                <button
                    type="button"
                    class="ui-button"
                    aria-label="Close"
                    data-ui-primitive="true"
                    data-ui-kind="button"
                    data-ui-variant="quiet"
                    on:click=move |ev| on_close.call(ev)
                >
                    "×"
                </button>
            </header>
            <div data-ui-slot="body">{children()}</div>
        </aside>
    }
}

#[component]
/// Single-slot transient notification. Hidden while `message` is `None`.
pub fn ToastBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div
            class=move || if message.with(Option::is_some) { "ui-toast toast show" } else { "ui-toast toast" }
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast"
        >
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
