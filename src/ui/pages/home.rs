use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::nav::SITE_NAME;
use crate::ui::sections::{AboutSection, CategoryGrid, ContactSection, QualitySection};

/// Landing page: hero, category overview, company story, quality and contact
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("{SITE_NAME} | Handcrafted Home Textiles")/>
        <Meta
            name="description"
            content="Manufacturer and exporter of handwoven rugs, table linen, cushions, throws and bedding for global retailers."
        />

        <section class="hero">
            <div class="hero-inner">
                <h1 class="hero-title fade-in-up">"Handcrafted Home Textiles"</h1>
                <p class="hero-lead fade-in-up delay-200">
                    "Natural fibers, export-grade finishing and dependable timelines for retailers worldwide."
                </p>
                <div class="hero-actions fade-in-up delay-400">
                    <A href="/products" attr:class="btn-primary">"Explore Products"</A>
                    <A href="/contact" attr:class="btn-secondary">"Request a Quote"</A>
                </div>
            </div>
        </section>

        <CategoryGrid/>
        <AboutSection/>
        <QualitySection/>
        <ContactSection/>
    }
}
