//! Category browser: filtered product grid for one category

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::{CategoryRecord, ProductRecord, catalog, filter_products};
use crate::ui::icon::{Icon, icons};
use crate::ui::nav::SITE_NAME;
use crate::ui::pages::MissingEntry;

fn result_label(shown: usize, total: usize) -> String {
    match (shown, total) {
        (1, _) => "1 product".to_string(),
        (shown, total) if shown == total => format!("{shown} products"),
        (shown, total) => format!("{shown} of {total} products"),
    }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category_id = Memo::new(move |_| params.get().get("categoryId").unwrap_or_default());

    move || match catalog().category(&category_id.get()) {
        Some(category) => view! { <CategoryBrowser category=category/> }.into_any(),
        None => view! { <MissingEntry title="Category not found"/> }.into_any(),
    }
}

#[component]
fn CategoryBrowser(category: &'static CategoryRecord) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    // Recomputed on every keystroke
    let visible = Memo::new(move |_| {
        query.with(|q| {
            filter_products(category, q)
                .into_iter()
                .map(|product| product.id.clone())
                .collect::<Vec<_>>()
        })
    });
    let total = category.products.len();

    view! {
        <Title text=format!("{} | {SITE_NAME}", category.name)/>

        <section class="section">
            <div class="section-inner">
                <A href="/products" attr:class="back-link">
                    <Icon name=icons::CHEVRON_LEFT class="icon-text"/>
                    "All products"
                </A>

                <div class="category-header">
                    <h1 class="section-title">{category.name.clone()}</h1>
                    <p class="category-count">{move || result_label(visible.with(Vec::len), total)}</p>
                </div>

                <label class="search-box">
                    <Icon name=icons::SEARCH class="icon-text"/>
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search products..."
                        aria-label="Search products"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </label>

                <Show
                    when=move || visible.with(|ids| !ids.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No products match your search."</p>
                            <button
                                type="button"
                                class="btn-secondary"
                                on:click=move |_| set_query.set(String::new())
                            >
                                "Clear search"
                            </button>
                        </div>
                    }
                >
                    <div class="product-grid">
                        <For
                            each=move || visible.get()
                            key=|id| id.clone()
                            let:product_id
                        >
                            {category
                                .product(&product_id)
                                .map(|product| view! { <ProductCard category_id=category.id.as_str() product=product/> })}
                        </For>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(category_id: &'static str, product: &'static ProductRecord) -> impl IntoView {
    let href = format!("/category/{category_id}/product/{}", product.id);

    view! {
        <A href=href attr:class="product-card">
            <div class="product-card-image">
                <img src=product.primary_image.to_string() alt=product.title.clone() loading="lazy"/>
            </div>
            <div class="product-card-body">
                <h3 class="product-card-title">{product.title.clone()}</h3>
                <p class="product-card-description">{product.description.clone()}</p>
                <div class="tag-list">
                    {product
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </A>
    }
}
