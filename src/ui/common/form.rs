use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Input name and id
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class="input-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="field-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// Textarea name and id
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                class="input-base resize-none"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="field-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
