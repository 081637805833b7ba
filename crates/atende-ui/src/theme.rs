//! Theme system for Atende shells.
//!
//! Provides 2 themes: Brand and Midnight. Themes vary the host-page tokens;
//! the launcher keeps its brand fill in every theme.

use dioxus::prelude::*;

/// Available themes for the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Brand,
    Midnight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Brand => "brand",
            Theme::Midnight => "midnight",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Brand => "Brand",
            Theme::Midnight => "Midnight",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Brand, Theme::Midnight]
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
