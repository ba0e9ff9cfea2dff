use dioxus::prelude::*;

use super::icons::{BalloonIcon, SealQuestionIcon, TimelineIcon};
use super::nav_element::NavElement;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// The fixed navbar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Wtf,
    Log,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Home, NavTarget::Wtf, NavTarget::Log];

    pub fn link(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Wtf => "/wtf",
            NavTarget::Log => "/log",
        }
    }

    /// Localized label.
    pub fn label(self) -> String {
        match self {
            NavTarget::Home => t!("nav-home"),
            NavTarget::Wtf => t!("nav-wtf"),
            NavTarget::Log => t!("nav-log"),
        }
    }

    pub fn icon(self) -> Element {
        match self {
            NavTarget::Home => rsx! { BalloonIcon {} },
            NavTarget::Wtf => rsx! { SealQuestionIcon {} },
            NavTarget::Log => rsx! { TimelineIcon {} },
        }
    }
}

/// Top-level navigation: Home, "What the Error?!" and Log.
///
/// Must be rendered inside a `Router`. Extra attributes are forwarded to the
/// `<nav>` element.
#[component]
pub fn Navbar(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    crate::i18n::init();

    // Re-render labels when the shell publishes a new language code.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|c| c()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { class: "navbar", ..attributes,
            for target in NavTarget::ALL {
                NavElement {
                    key: "{target.link()}",
                    text: target.label(),
                    link: target.link().to_string(),
                    {target.icon()}
                }
            }
        }
    }
}
