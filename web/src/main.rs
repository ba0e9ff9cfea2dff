use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::{LocaleSwitcher, Navbar};
use ui::theme::THEME_CSS;
use ui::views::{Landing, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/", Landing)]
    Home {},
    #[route("/wtf", Landing)]
    Wtf {},
    #[route("/log", Landing)]
    Log {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    info!(version = env!("CARGO_PKG_VERSION"), "starting web shell");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Language code shared with LocaleSwitcher and the localized views.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}

/// Page chrome around the routed view; lives here because it needs the
/// web-specific `Route` enum for the outlet.
#[component]
fn WebShell() -> Element {
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
