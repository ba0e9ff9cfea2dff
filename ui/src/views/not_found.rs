use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::Landing;
use crate::t;

/// Catch-all page: the landing screen plus the path that failed to resolve.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = attempted_path(&segments);
    debug!(%path, "no route matched");

    rsx! {
        Landing {
            p { class: "landing__path", {t!("landing-attempted-path", path = path.clone())} }
        }
    }
}

/// Rebuild the requested path from catch-all segments.
pub fn attempted_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_under_root() {
        let segments = vec!["wtf".to_string(), "nope".to_string()];
        assert_eq!(attempted_path(&segments), "/wtf/nope");
    }

    #[test]
    fn empty_segments_are_root() {
        assert_eq!(attempted_path(&[]), "/");
    }
}
