use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Language picker. Renders nothing when only one locale is embedded.
///
/// If the shell provides a `Signal<String>` context holding the language code,
/// it is updated on change so the rest of the tree re-renders.
#[component]
pub fn LocaleSwitcher() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Seeded from the shell's code so a remount keeps showing the active locale.
    let mut current_lang = use_signal(|| {
        lang_code_ctx
            .map(|code| code.peek().clone())
            .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string())
    });
    let langs = use_signal(i18n::available_languages);

    if langs().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        div { class: "locale-switcher",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("nav-language-label")}
            }
            select {
                id: "locale-select",
                value: "{current_lang()}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
