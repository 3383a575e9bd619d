//! Not found states
//!
//! [`NotFoundPage`] is the router fallback; [`MissingEntry`] is rendered in
//! place when a category or product id does not resolve.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Recoverable "nothing here" view with a link back into the catalog
#[component]
pub fn MissingEntry(
    /// Heading, e.g. "Category not found"
    title: &'static str,
    /// Where the link leads
    #[prop(into, default = "/products".to_string())]
    back_href: String,
    /// Link text
    #[prop(default = "Back to products")]
    back_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="missing-entry">
            <h1 class="missing-entry-title">{title}</h1>
            <A href=back_href attr:class="btn-secondary">
                <Icon name=icons::CHEVRON_LEFT class="icon-text"/>
                {back_label}
            </A>
        </div>
    }
}

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="text-center">
                <h1 class="not-found-code">"404"</h1>

                <h2 class="not-found-title">"Page Not Found"</h2>

                <p class="not-found-text">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="not-found-actions">
                    <A href="/" attr:class="btn-primary">
                        "Go Home"
                    </A>
                    <A href="/products" attr:class="btn-secondary">
                        "Browse Products"
                    </A>
                </div>
            </div>
        </div>
    }
}
