use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Dialog overlay with header, close button and Escape handling
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-lg)
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop"
                } else {
                    "modal-backdrop opacity-0 pointer-events-none"
                }
            }
            role="dialog"
            aria-modal="true"
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                        && element.class_list().contains("modal-backdrop")
                    {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("w-full {} card", max_width)>
                // Header
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">{title}</h3>
                        {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
                    </div>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                // Content
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
