use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{
    AboutPage, CategoryPage, ContactPage, HomePage, NotFoundPage, ProductDetailPage, ProductsPage,
};
use crate::ui::{SiteFooter, SiteHeader};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/textile-showroom.css"/>

        // Default title; pages override it
        <Title text="Loomhouse Textiles"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/category/:categoryId") view=CategoryPage/>
                    <Route
                        path=path!("/category/:categoryId/product/:productId")
                        view=ProductDetailPage
                    />
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
