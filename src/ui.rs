use crate::config::ChatConfig;
use crate::theme::Theme;
use crate::views::ChatPage;
use dioxus::prelude::*;

const CHAT_CSS: Asset = asset!("/assets/chat.css");

/// Root component. Expects a [`ChatConfig`] in context, falling back to defaults.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        try_consume_context::<ChatConfig>().unwrap_or_else(|| provide_context(ChatConfig::default()))
    });
    let theme = Theme::for_mode(config.theme);

    rsx! {
        ThemeStyles { theme }
        ChatPage {}
    }
}

#[component]
fn ThemeStyles(theme: Theme) -> Element {
    let palette = theme.css();
    rsx! {
        document::Link { rel: "stylesheet", href: CHAT_CSS }
        style { dangerous_inner_html: "{palette}" }
    }
}
