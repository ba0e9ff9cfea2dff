use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::nav::{NavSelection, NavStatus};

/// One navigation entry: an icon plus a label, linking to `link`.
///
/// The entry watches the router and exposes its [`NavStatus`] as a
/// `data-status` attribute and a `nav-element--<status>` class. `status` is
/// only the value shown before the first location check.
#[component]
pub fn NavElement(
    text: String,
    link: String,
    #[props(default)] status: NavStatus,
    children: Element,
) -> Element {
    let mut selection = use_signal(|| NavSelection::new(link.clone(), status));

    let target = link.clone();
    // Runs at mount and again on every location notification from the router.
    use_effect(move || {
        let current = router().full_route_string();
        let settled = selection.with_mut(|entry| entry.observe(&current));
        debug!(
            link = %target,
            %current,
            status = %settled,
            "nav entry re-derived"
        );
    });

    let target = link.clone();
    let on_activate = move |_: MouseEvent| {
        let status = selection.with_mut(NavSelection::activate);
        debug!(link = %target, %status, "nav entry activated");
    };

    let current = selection.read().status();

    rsx! {
        Link {
            to: link.clone(),
            onclick: on_activate,
            div {
                class: "nav-element prevent-select {current.css_class()}",
                "data-status": current.as_str(),
                aria_current: current.is_selected().then_some("page"),
                div { class: "nav-element__icon", {children} }
                div { class: "nav-element__text",
                    p { "{text}" }
                }
            }
        }
    }
}
