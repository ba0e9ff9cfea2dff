#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::{LocaleSwitcher, Navbar};
use ui::theme::THEME_CSS_INLINE;
use ui::views::{Landing, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/", Landing)]
    Home {},
    #[route("/wtf", Landing)]
    Wtf {},
    #[route("/log", Landing)]
    Log {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    let resource_dir = resolve_resource_dir();
    info!(version = env!("CARGO_PKG_VERSION"), ?resource_dir, "starting desktop shell");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Error Code Manager – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    info!(version = env!("CARGO_PKG_VERSION"), "starting server shell");
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // LocaleSwitcher updates this; the keyed wrapper below remounts the tree on change.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Theme is always inlined; packaged builds ship no separate stylesheet.
        document::Style { "{THEME_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Page chrome around the routed view, bound to the desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        div { class: "app-shell",
            header { class: "app-shell__header",
                Navbar {}
                LocaleSwitcher {}
            }
            main { class: "app-shell__main",
                Outlet::<Route> {}
            }
        }
    }
}
