//! Inline SVG glyphs used by the launcher.

use dioxus::prelude::*;

/// Chat-bubble glyph, stroke-based and sized by the stylesheet.
///
/// Inherits its color from the surrounding control via `currentColor` and is
/// hidden from assistive technology; the control carries its own label.
#[component]
pub fn ChatBubbleIcon() -> Element {
    rsx! {
        svg {
            class: "fab-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            aria_hidden: "true",
            path {
                d: "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z",
            }
        }
    }
}
