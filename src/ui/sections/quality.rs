use leptos::prelude::*;

use crate::core::reveal::{QUALITY, stagger};
use crate::ui::reveal::{RevealScope, use_reveal};

const FEATURES: &[(&str, &str)] = &[
    ("Inspection", "Every stage"),
    ("Timelines", "Consistent delivery"),
    ("Standards", "Export-grade"),
];

const TOP_CERTIFICATIONS: &[&str] = &["SEDEX 4 Pillar SMETA", "OEKO-TEX Standard 100"];

const ISO_CERTIFICATIONS: &[&str] = &["ISO 9001:2015", "ISO 14001:2015", "ISO 45001:2018"];

fn delay_style(reveal: RevealScope, key: &'static str, index: usize, step_ms: u64) -> impl Fn() -> String {
    let delay = format!("transition-delay: {}ms", stagger(index, step_ms).as_millis());
    move || {
        if reveal.is_revealed(key) {
            delay.clone()
        } else {
            String::new()
        }
    }
}

fn certification_row(reveal: RevealScope, key: &'static str, titles: &'static [&'static str], step_ms: u64) -> impl IntoView {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            view! {
                <div
                    class=reveal.class(key, "certification")
                    style=delay_style(reveal, key, index, step_ms)
                    title=format!("{title} certificate")
                >
                    <span class="certification-badge">{*title}</span>
                </div>
            }
        })
        .collect_view()
}

/// Quality management and certifications
#[component]
pub fn QualitySection() -> impl IntoView {
    let reveal = use_reveal(&QUALITY);

    let features = FEATURES
        .iter()
        .enumerate()
        .map(|(index, (title, description))| {
            view! {
                <div
                    class=reveal.class("features", "quality-feature")
                    style=delay_style(reveal, "features", index, 150)
                >
                    <h3>{*title}</h3>
                    <p>{*description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="certifications" class="section">
            <div class="section-inner section-narrow">
                <div node_ref=reveal.node("heading") class=reveal.class("heading", "")>
                    <h2 class="section-title">"Quality Management System"</h2>
                </div>
                <div node_ref=reveal.node("description") class=reveal.class("description", "")>
                    <p class="section-lead">
                        "Clear quality checks and control measures from sampling to dispatch."
                    </p>
                </div>
                <div node_ref=reveal.node("features") class="quality-features">
                    {features}
                </div>

                <div
                    node_ref=reveal.node("certifications")
                    class=reveal.class("certifications", "certifications reveal-scale")
                >
                    <h3 class="certifications-title">"Certifications"</h3>
                    <div class="certification-row">
                        {certification_row(reveal, "top-certs", TOP_CERTIFICATIONS, 200)}
                    </div>
                    <div class="certification-row">
                        {certification_row(reveal, "iso-certs", ISO_CERTIFICATIONS, 150)}
                    </div>
                </div>
            </div>
        </section>
    }
}
