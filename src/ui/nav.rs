//! Site header and footer shared by every page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

pub const SITE_NAME: &str = "Loomhouse Textiles";

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/products", "Products"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

/// Fixed top navigation with a collapsible mobile menu
#[component]
pub fn SiteHeader() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <A
                        href=*href
                        attr:class=class
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <A href="/" attr:class="site-logo">
                    {SITE_NAME}
                </A>

                <nav class="site-nav">
                    {links("site-nav-link")}
                </nav>

                <button
                    class="site-menu-toggle"
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6"/> }
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6"/> }
                        }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="site-nav-mobile">
                    {links("site-nav-mobile-link")}
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <p>{format!("© 2025 {SITE_NAME}. All rights reserved.")}</p>
                <nav class="site-footer-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
