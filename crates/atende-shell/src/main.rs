//! Atende shell - desktop host for the support launcher widget.
//!
//! Mounts a placeholder host page with the floating action button overlaid,
//! the way an embedding application would.
//!
//! Usage:
//!   atende-shell
//!   atende-shell --theme midnight

use clap::Parser;
use dioxus::prelude::*;

use atende_ui::{FloatingActionButton, Theme, ThemedRoot, CURRENT_THEME, SHARED_CSS};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "atende-shell")]
#[command(about = "Host shell for the Atende support launcher widget")]
struct Args {
    /// Initial theme (brand or midnight)
    #[arg(short, long, default_value = "brand")]
    theme: String,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    // Set initial theme
    if args.theme == "midnight" {
        *CURRENT_THEME.write() = Theme::Midnight;
    }

    // Launch the desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("Atende")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1024, 768))
                        .with_resizable(true),
                )
                .with_custom_head(format!(r#"<style>{}</style>"#, SHARED_CSS)),
        )
        .launch(RootApp);
}

/// Root component: placeholder host page with the launcher overlaid.
///
/// The press handler only logs; wiring the launcher to an actual support
/// channel is the embedding application's call.
fn RootApp() -> Element {
    rsx! {
        ThemedRoot {
            div { class: "host-page",
                h1 { class: "host-title", "Atende" }
                p { class: "host-copy",
                    "Fale com a nossa equipe pelo botão no canto da tela."
                }
            }
            FloatingActionButton {
                on_press: move |_| tracing::info!("support launcher pressed"),
            }
        }
    }
}
