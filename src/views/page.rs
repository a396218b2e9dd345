use crate::views::ChatPanel;
use dioxus::prelude::*;

/// Full-height page hosting a standalone chat panel.
#[component]
pub fn ChatPage() -> Element {
    rsx! {
        div { class: "page-layout",
            div { class: "page-main",
                ChatPanel { is_page: true }
            }
        }
    }
}
