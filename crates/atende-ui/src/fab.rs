//! Floating action button anchoring the support channel entry point.

use dioxus::prelude::*;

use crate::icons::ChatBubbleIcon;

/// Circular launcher fixed to the bottom-right corner of the viewport.
///
/// Renders above all other layers with a brand fill, drop shadow, and a
/// continuous pulsing glow. The only content is the chat glyph plus a
/// visually-hidden label for assistive technology. Without `on_press` the
/// control is inert; the embedding shell decides what pressing it does.
#[component]
pub fn FloatingActionButton(
    #[props(optional)]
    on_press: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        button {
            class: "fab",
            onclick: move |_| {
                if let Some(handler) = &on_press {
                    handler.call(());
                }
            },
            ChatBubbleIcon {}
            span { class: "sr-only", "Atendimento" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_fab() -> String {
        let mut dom = VirtualDom::new(|| rsx! { FloatingActionButton {} });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_exactly_one_control() {
        let html = render_fab();
        assert_eq!(html.matches("<button").count(), 1);
    }

    #[test]
    fn control_carries_placement_class() {
        let html = render_fab();
        assert!(html.contains(r#"class="fab""#));
    }

    #[test]
    fn contains_one_glyph_and_one_hidden_label() {
        let html = render_fab();
        assert_eq!(html.matches("<svg").count(), 1);
        assert_eq!(html.matches("Atendimento").count(), 1);
        assert!(html.contains(r#"<span class="sr-only">Atendimento</span>"#));
    }

    #[test]
    fn rerender_is_idempotent() {
        assert_eq!(render_fab(), render_fab());
    }
}
