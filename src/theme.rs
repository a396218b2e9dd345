use std::fmt::Write;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Named palette for the chat panel. The stylesheet only refers to the
/// custom properties emitted by [`Theme::css`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_hover: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub user_bubble: &'static str,
    pub assistant_bubble: &'static str,
}

const DARK: Theme = Theme {
    background: "#1E1E1E",
    surface: "#2D2D2D",
    surface_hover: "#3E3E3E",
    text: "#CCCCCC",
    text_muted: "#858585",
    accent: "#CD5C5C",
    user_bubble: "#2D2D2D",
    assistant_bubble: "#2D2D2D",
};

const LIGHT: Theme = Theme {
    background: "#FFFFFF",
    surface: "#F3F3F3",
    surface_hover: "#E4E4E4",
    text: "#1F1F1F",
    text_muted: "#6E6E6E",
    accent: "#CD5C5C",
    user_bubble: "#F3F3F3",
    assistant_bubble: "#F3F3F3",
};

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }

    pub fn css(&self) -> String {
        let vars = [
            ("--chat-bg", self.background),
            ("--chat-surface", self.surface),
            ("--chat-surface-hover", self.surface_hover),
            ("--chat-text", self.text),
            ("--chat-text-muted", self.text_muted),
            ("--chat-accent", self.accent),
            ("--chat-user-bubble", self.user_bubble),
            ("--chat-assistant-bubble", self.assistant_bubble),
        ];
        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            let _ = writeln!(css, "    {name}: {value};");
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_matches_panel_colours() {
        let theme = Theme::for_mode(ThemeMode::Dark);
        assert_eq!(theme.background, "#1E1E1E");
        assert_eq!(theme.user_bubble, theme.assistant_bubble);
    }

    #[test]
    fn css_declares_every_variable() {
        let css = Theme::for_mode(ThemeMode::Light).css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--chat-bg: #FFFFFF;"));
        assert!(css.contains("--chat-accent: #CD5C5C;"));
        assert_eq!(css.matches("--chat-").count(), 8);
    }
}
