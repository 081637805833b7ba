//! Shared UI for the Atende support launcher.
//!
//! Provides the floating action button, its chat glyph, and the theme layer
//! shared by shells that embed the widget.

pub mod fab;
pub mod icons;
pub mod theme;

pub use fab::FloatingActionButton;
pub use icons::ChatBubbleIcon;
pub use theme::{Theme, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and widget styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_pins_widget_placement() {
        assert!(SHARED_CSS.contains(".fab"));
        assert!(SHARED_CSS.contains("position: fixed"));
        assert!(SHARED_CSS.contains("bottom: var(--fab-offset)"));
        assert!(SHARED_CSS.contains("right: var(--fab-offset)"));
        assert!(SHARED_CSS.contains("z-index"));
        assert!(SHARED_CSS.contains("@keyframes fab-pulse"));
    }

    #[test]
    fn stylesheet_defines_referenced_tokens() {
        for token in ["--fab-bg:", "--fab-bg-hover:", "--page-bg:", "--page-fg:"] {
            assert!(SHARED_CSS.contains(token), "missing token {token}");
        }
    }

    #[test]
    fn stylesheet_covers_both_themes() {
        assert!(SHARED_CSS.contains(r#"[data-theme="brand"]"#));
        assert!(SHARED_CSS.contains(r#"[data-theme="midnight"]"#));
    }
}
