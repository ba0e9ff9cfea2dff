//! Shared theme stylesheet, for shells that link it as an asset or inline it.

use dioxus::prelude::*;

pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
