//! Shared UI crate for the error code manager: navigation, pages and
//! localization. Platform crates own the `Route` enum and launch the app.

pub mod components;
pub mod core;
pub mod i18n;
pub mod theme;
pub mod views;
