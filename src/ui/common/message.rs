//! Inline status banners

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message component
/// Displays a success message with a check icon
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message" role="status">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
