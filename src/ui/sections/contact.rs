use leptos::prelude::*;

use crate::core::contact_form::FormVariant;
use crate::core::reveal::CONTACT;
use crate::ui::contact_form::ContactForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal;

pub const SALES_EMAIL: &str = "sales@loomhouse-textiles.com";
pub const SALES_PHONE: &str = "+91 180 400 2200";
pub const LOCATION: &str = "Panipat, Haryana, India";

/// Contact details with icon, as a link when `href` is given
#[component]
pub fn ContactDetail(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    #[prop(optional)] href: Option<String>,
) -> impl IntoView {
    let body = view! {
        <span class="contact-detail-icon"><Icon name=icon class="icon-text"/></span>
        <span>
            <span class="contact-detail-label">{label}</span>
            <span class="contact-detail-value">{value}</span>
        </span>
    };

    match href {
        Some(href) => view! { <a href=href class="contact-detail">{body}</a> }.into_any(),
        None => view! { <div class="contact-detail">{body}</div> }.into_any(),
    }
}

/// Dark footer section with the compact lead form and contact details
#[component]
pub fn ContactSection() -> impl IntoView {
    let reveal = use_reveal(&CONTACT);

    view! {
        <section id="contact" class="section section-dark">
            <div class="section-inner contact-grid">
                <div node_ref=reveal.node("form") class=reveal.class("form", "reveal-from-left")>
                    <h2 class="section-title">"Let's Connect"</h2>
                    <p class="section-lead">
                        "Have a project in mind? We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                    </p>
                    <ContactForm variant=FormVariant::Modal/>
                </div>

                <div node_ref=reveal.node("info") class=reveal.class("info", "contact-info reveal-from-right")>
                    <h3 class="contact-info-title">"Get in Touch"</h3>
                    <p class="contact-info-name">"Export Sales Desk"</p>
                    <ContactDetail
                        icon=icons::PHONE
                        label="Phone"
                        value=SALES_PHONE
                        href=format!("tel:{}", SALES_PHONE.replace(' ', ""))
                    />
                    <ContactDetail
                        icon=icons::MAIL
                        label="Email"
                        value=SALES_EMAIL
                        href=format!("mailto:{SALES_EMAIL}")
                    />
                    <ContactDetail icon=icons::MAP_PIN label="Location" value=LOCATION/>
                </div>
            </div>
        </section>
    }
}
