use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::nav::SITE_NAME;
use crate::ui::sections::{CategoryGrid, ContactSection};

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <Title text=format!("Products | {SITE_NAME}")/>
        <CategoryGrid heading="Product Categories"/>
        <ContactSection/>
    }
}
