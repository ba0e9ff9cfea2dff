#![cfg(test)]
//! Selector lint for the stylesheets the desktop build embeds.
//!
//! The desktop shell inlines `ui/assets/theme/main.css`, and release builds
//! inline the component sheets too. A renamed or dropped selector would only
//! show up as broken styling at runtime, so the hooks the components emit are
//! checked here by plain substring search.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));
const LANDING_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/landing.css"
));

fn missing<'a>(css: &str, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_defines_shell_and_tokens() {
    let gaps = missing(
        THEME_CSS,
        &[
            ":root",
            "--color-bg",
            "--green",
            "--color-routed",
            "body {",
            ".app-shell__header",
            ".app-shell__main",
            ".prevent-select",
            ".visually-hidden",
            ".locale-switcher",
            "@media (max-width: 720px)",
        ],
    );
    assert!(gaps.is_empty(), "theme is missing: {gaps:?}");
}

#[test]
fn navbar_styles_every_status() {
    let mut required = vec![".navbar", ".nav-element", ".nav-element__icon", ".nav-element__text"];
    let hooks: Vec<String> = ["none", "selected", "routed"]
        .iter()
        .map(|status| format!(".nav-element[data-status=\"{status}\"]"))
        .collect();
    required.extend(hooks.iter().map(String::as_str));

    let gaps = missing(NAVBAR_CSS, &required);
    assert!(gaps.is_empty(), "navbar.css is missing: {gaps:?}");
}

#[test]
fn landing_styles_present() {
    let gaps = missing(
        LANDING_CSS,
        &[".landing {", ".landing__title", ".landing__subtitle", ".landing__img", ".landing__path"],
    );
    assert!(gaps.is_empty(), "landing.css is missing: {gaps:?}");
}

#[test]
fn embedded_theme_not_blank() {
    let non_ws = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(non_ws > 1_000, "embedded theme looks truncated ({non_ws} chars)");
}
