use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::nav::SITE_NAME;
use crate::ui::sections::{AboutSection, QualitySection};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=format!("About | {SITE_NAME}")/>
        <AboutSection/>
        <QualitySection/>
    }
}
