use dioxus::prelude::*;

use crate::t;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");
const LANDING_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/landing.css"
));
const WARNING_IMG: Asset = asset!("/assets/img/warning.svg");

/// Fallback / error screen. Extra attributes land on the outer container and
/// any children render below the image.
#[component]
pub fn Landing(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    crate::i18n::init();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|c| c()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{LANDING_CSS_INLINE}" }
        }

        div { class: "landing", ..attributes,
            h1 { class: "landing__title", {t!("landing-title")} }
            h5 { class: "landing__subtitle", {t!("landing-subtitle")} }
            img {
                class: "landing__img",
                src: WARNING_IMG,
                alt: t!("landing-image-alt"),
            }
            {children}
        }
    }
}
