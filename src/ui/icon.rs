use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BRAIN: &str = "brain";
    pub const BRIEFCASE: &str = "briefcase";
    pub const CHECK: &str = "check";
    pub const HASH: &str = "hash";
    pub const MENU: &str = "menu";
    pub const ROCKET: &str = "rocket";
    pub const SEND: &str = "send";
    pub const STAR: &str = "star";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
