use leptos::prelude::*;

use crate::core::reveal::{ABOUT, stagger};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal;

const HIGHLIGHTS: &[&str] = &[
    "Export-focused",
    "Natural fiber-based products",
    "US & international markets",
    "B2B partnerships",
];

/// Company introduction, revealed as it scrolls into view
#[component]
pub fn AboutSection() -> impl IntoView {
    let reveal = use_reveal(&ABOUT);

    let highlights = HIGHLIGHTS
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let delay = format!("transition-delay: {}ms", stagger(index, 100).as_millis());
            view! {
                <div
                    class=reveal.class("grid", "about-highlight reveal-slide")
                    style=move || if reveal.is_revealed("grid") { delay.clone() } else { String::new() }
                >
                    <Icon name=icons::CHECK class="icon-text"/>
                    <p>{*text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section">
            <div class="section-inner section-narrow">
                <div node_ref=reveal.node("heading") class=reveal.class("heading", "")>
                    <h1 class="section-title">"About"</h1>
                </div>
                <div node_ref=reveal.node("description") class=reveal.class("description", "")>
                    <p class="section-lead">
                        "Manufacturing-led home textile company serving global retailers with export-grade quality and consistent delivery."
                    </p>
                </div>
                <div node_ref=reveal.node("grid") class="about-grid">
                    {highlights}
                </div>
            </div>
        </section>
    }
}
