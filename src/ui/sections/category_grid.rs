use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::catalog;

/// Eight-tile category overview linking into the browser
#[component]
pub fn CategoryGrid(
    /// Section heading
    #[prop(default = "Our Products")]
    heading: &'static str,
) -> impl IntoView {
    let tiles = catalog()
        .summaries()
        .iter()
        .map(|summary| {
            let href = format!("/category/{}", summary.id);
            view! {
                <A href=href attr:class="category-tile">
                    <div class="category-tile-image">
                        <img src=summary.cover.to_string() alt=summary.name.clone() loading="lazy"/>
                    </div>
                    <div class="category-tile-body">
                        <h3 class="category-tile-title">{summary.name.clone()}</h3>
                        <p class="category-tile-blurb">{summary.blurb.clone()}</p>
                    </div>
                </A>
            }
        })
        .collect_view();

    view! {
        <section id="products" class="section section-muted">
            <div class="section-inner">
                <div class="section-intro">
                    <h2 class="section-title">{heading}</h2>
                    <p class="section-lead">
                        "Explore our collection of handcrafted textiles, primarily natural fibers with limited polyester"
                    </p>
                </div>
                <div class="category-grid">{tiles}</div>
            </div>
        </section>
    }
}
