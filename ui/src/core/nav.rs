//! Route-aware highlighting for navigation entries.
//!
//! A navigation entry is `selected` while the current location sits on (or
//! below) its link target. The root link `/` is the exception: it would match
//! every path as a prefix, so it is only selected on an exact match.
//!
//! Activating an entry flips it to `routed` straight away; the next location
//! notification re-derives the settled value and overwrites it.
//!
//! ```
//! use ui::core::nav::{derive_status, NavSelection, NavStatus};
//!
//! assert_eq!(derive_status("/wtf/123", "/wtf"), NavStatus::Selected);
//! assert_eq!(derive_status("/wtf", "/"), NavStatus::None);
//!
//! let mut log = NavSelection::new("/log", NavStatus::None);
//! assert_eq!(log.observe("/"), NavStatus::None);
//! assert_eq!(log.activate(), NavStatus::Routed);
//! assert_eq!(log.observe("/log"), NavStatus::Selected);
//! ```

use std::fmt;
use std::str::FromStr;

/// The root route; only matched exactly.
pub const ROOT_PATH: &str = "/";

/// Visual state of a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavStatus {
    /// Current location is elsewhere.
    #[default]
    None,
    /// Current location matches the entry's link.
    Selected,
    /// The user just activated the entry; navigation has not settled yet.
    Routed,
}

impl NavStatus {
    pub const ALL: [NavStatus; 3] = [NavStatus::None, NavStatus::Selected, NavStatus::Routed];

    /// Lowercase form used for the `data-status` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            NavStatus::None => "none",
            NavStatus::Selected => "selected",
            NavStatus::Routed => "routed",
        }
    }

    /// BEM modifier class, e.g. `nav-element--selected`.
    pub fn css_class(self) -> &'static str {
        match self {
            NavStatus::None => "nav-element--none",
            NavStatus::Selected => "nav-element--selected",
            NavStatus::Routed => "nav-element--routed",
        }
    }

    pub fn is_selected(self) -> bool {
        self == NavStatus::Selected
    }
}

impl fmt::Display for NavStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `none`, `selected` or `routed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNavStatus(pub String);

impl fmt::Display for UnknownNavStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown navigation status `{}`", self.0)
    }
}

impl std::error::Error for UnknownNavStatus {}

impl FromStr for NavStatus {
    type Err = UnknownNavStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        NavStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == raw)
            .ok_or_else(|| UnknownNavStatus(raw.to_string()))
    }
}

/// Strip any `?query` or `#fragment` from a full route string.
pub fn route_path(route: &str) -> &str {
    match route.find(['?', '#']) {
        Some(end) => &route[..end],
        None => route,
    }
}

/// Settled status of an entry pointing at `link` while the router sits on `current`.
///
/// `current` may be a full route string; only its path part is compared.
pub fn derive_status(current: &str, link: &str) -> NavStatus {
    let path = route_path(current);
    if path.starts_with(link) && (link != ROOT_PATH || path == link) {
        NavStatus::Selected
    } else {
        NavStatus::None
    }
}

/// Status holder owned by a single navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelection {
    link: String,
    status: NavStatus,
}

impl NavSelection {
    /// `initial` is shown until the first location check runs.
    pub fn new(link: impl Into<String>, initial: NavStatus) -> Self {
        Self {
            link: link.into(),
            status: initial,
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn status(&self) -> NavStatus {
        self.status
    }

    /// Re-derive from the current location, discarding any transient override.
    pub fn observe(&mut self, current: &str) -> NavStatus {
        self.status = derive_status(current, &self.link);
        self.status
    }

    /// Mark the entry as just activated.
    pub fn activate(&mut self) -> NavStatus {
        self.status = NavStatus::Routed;
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_link_selected_only_on_exact_root() {
        assert_eq!(derive_status("/", "/"), NavStatus::Selected);
        assert_eq!(derive_status("/wtf", "/"), NavStatus::None);
        assert_eq!(derive_status("/log/2024", "/"), NavStatus::None);
    }

    #[test]
    fn non_root_link_uses_prefix_match() {
        assert_eq!(derive_status("/wtf", "/wtf"), NavStatus::Selected);
        assert_eq!(derive_status("/wtf/123", "/wtf"), NavStatus::Selected);
        assert_eq!(derive_status("/", "/log"), NavStatus::None);
        assert_eq!(derive_status("/logs", "/log"), NavStatus::Selected);
        assert_eq!(derive_status("/lo", "/log"), NavStatus::None);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(derive_status("/wtf?code=12", "/wtf"), NavStatus::Selected);
        assert_eq!(derive_status("/?tab=1", "/"), NavStatus::Selected);
        assert_eq!(derive_status("/#top", "/"), NavStatus::Selected);
        assert_eq!(derive_status("/?next=/log", "/log"), NavStatus::None);
    }

    #[test]
    fn route_path_keeps_bare_paths() {
        assert_eq!(route_path("/wtf/123"), "/wtf/123");
        assert_eq!(route_path("/wtf#a?b"), "/wtf");
        assert_eq!(route_path(""), "");
    }

    #[test]
    fn derivation_is_idempotent() {
        let mut entry = NavSelection::new("/wtf", NavStatus::None);
        let first = entry.observe("/wtf/9");
        let second = entry.observe("/wtf/9");
        assert_eq!(first, second);
        assert_eq!(first, NavStatus::Selected);
    }

    #[test]
    fn initial_status_holds_until_first_observation() {
        let mut entry = NavSelection::new("/", NavStatus::Selected);
        assert_eq!(entry.status(), NavStatus::Selected);
        assert_eq!(entry.observe("/log"), NavStatus::None);
    }

    #[test]
    fn activation_is_overwritten_by_next_location() {
        let mut log = NavSelection::new("/log", NavStatus::default());
        assert_eq!(log.observe("/"), NavStatus::None);
        assert_eq!(log.activate(), NavStatus::Routed);
        assert_eq!(log.status(), NavStatus::Routed);
        assert_eq!(log.observe("/log"), NavStatus::Selected);
    }

    #[test]
    fn activation_on_current_entry_resettles_on_same_location() {
        let mut home = NavSelection::new("/", NavStatus::None);
        home.observe("/");
        home.activate();
        assert_eq!(home.observe("/"), NavStatus::Selected);
    }

    #[test]
    fn status_strings_parse_back() {
        for status in NavStatus::ALL {
            assert_eq!(status.as_str().parse::<NavStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!(
            "active".parse::<NavStatus>(),
            Err(UnknownNavStatus("active".into()))
        );
    }

    #[test]
    fn css_class_follows_status_string() {
        for status in NavStatus::ALL {
            assert_eq!(
                status.css_class(),
                format!("nav-element--{}", status.as_str())
            );
        }
    }
}
