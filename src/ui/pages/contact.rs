use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::contact_form::FormVariant;
use crate::ui::contact_form::ContactForm;
use crate::ui::icons;
use crate::ui::nav::SITE_NAME;
use crate::ui::sections::{ContactDetail, LOCATION, SALES_EMAIL, SALES_PHONE};

/// Full inquiry form with all optional fields
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text=format!("Contact | {SITE_NAME}")/>

        <section class="section">
            <div class="section-inner contact-grid">
                <div>
                    <h1 class="section-title">"Contact Us"</h1>
                    <p class="section-lead">
                        "Tell us about your range, quantities and timelines. Our export team replies within one business day."
                    </p>
                    <ContactForm variant=FormVariant::Inline/>
                </div>

                <div class="contact-info">
                    <h3 class="contact-info-title">"Reach us directly"</h3>
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
