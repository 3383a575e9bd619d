//! Product detail: rotating gallery, description and inquiry

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::{CategoryRecord, ProductRecord, catalog};
use crate::ui::contact_form::ContactFormModal;
use crate::ui::gallery::ProductGallery;
use crate::ui::icon::{Icon, icons};
use crate::ui::nav::SITE_NAME;
use crate::ui::pages::MissingEntry;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let ids = Memo::new(move |_| {
        let params = params.get();
        (
            params.get("categoryId").unwrap_or_default(),
            params.get("productId").unwrap_or_default(),
        )
    });

    let entry = Memo::new(move |_| {
        ids.with(|(category_id, product_id)| {
            let category = catalog().category(category_id)?;
            Some((category, category.product(product_id)?))
        })
    });

    // Kept mounted across product changes so the gallery resets instead of remounting
    let product_id = Signal::derive(move || entry.get().map(|(_, p)| p.id.clone()).unwrap_or_default());
    let images = Signal::derive(move || {
        entry
            .get()
            .map(|(_, p)| p.gallery_images.clone())
            .unwrap_or_default()
    });
    let title = Signal::derive(move || entry.get().map(|(_, p)| p.title.clone()).unwrap_or_default());
    let inquiry = Signal::derive(move || entry.get().map(|(_, p)| p.title.clone()));

    view! {
        <Show
            when=move || entry.with(Option::is_some)
            fallback=move || {
                let category_known = ids.with(|(c, _)| catalog().category(c).is_some());
                if category_known {
                    let back = ids.with(|(c, _)| format!("/category/{c}"));
                    view! {
                        <MissingEntry
                            title="Product not found"
                            back_href=back
                            back_label="Back to category"
                        />
                    }
                    .into_any()
                } else {
                    view! { <MissingEntry title="Category not found"/> }.into_any()
                }
            }
        >
            <section class="section">
                <div class="section-inner">
                    {move || entry.get().map(|(category, _)| view! { <BackLink category=category/> })}

                    <div class="product-detail">
                        <ProductGallery product_id=product_id images=images title=title/>

                        {move || entry.get().map(|(_, product)| view! {
                            <ProductSummary product=product/>
                        })}

                        <div class="product-actions">
                            <ContactFormModal label="Inquire about this product" product=inquiry/>
                        </div>
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[component]
fn BackLink(category: &'static CategoryRecord) -> impl IntoView {
    view! {
        <A href=format!("/category/{}", category.id) attr:class="back-link">
            <Icon name=icons::CHEVRON_LEFT class="icon-text"/>
            {format!("Back to {}", category.name)}
        </A>
    }
}

#[component]
fn ProductSummary(product: &'static ProductRecord) -> impl IntoView {
    view! {
        <Title text=format!("{} | {SITE_NAME}", product.title)/>
        <div class="product-summary">
            <h1 class="section-title">{product.title.clone()}</h1>
            <p class="product-description">{product.description.clone()}</p>
            <div class="tag-list">
                {product
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
