use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const SEARCH: &str = "search";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const ARROW_UP_RIGHT: &str = "arrow-up-right";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const SEND: &str = "send";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const IMAGE: &str = "image";
    pub const MENU: &str = "menu";
}
