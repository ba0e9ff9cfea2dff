//! Inline SVG icons for the navbar. All draw with `currentColor`.

use dioxus::prelude::*;

const DEFAULT_SIZE: &str = "2rem";

#[component]
pub fn BalloonIcon(#[props(default = DEFAULT_SIZE.to_string())] size: String) -> Element {
    rsx! {
        svg {
            class: "icon icon--balloon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 256 256",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: "M128 16c-48.6 0-88 39.4-88 88 0 55.2 47.5 103.7 75.6 111.3L108 240h40l-7.6-24.7C168.5 207.7 216 159.2 216 104c0-48.6-39.4-88-88-88Z" }
            path {
                d: "M92 84a40 40 0 0 1 30-30",
                fill: "none",
                stroke: "var(--color-bg)",
                stroke_width: "12",
                stroke_linecap: "round",
            }
        }
    }
}

#[component]
pub fn SealQuestionIcon(#[props(default = DEFAULT_SIZE.to_string())] size: String) -> Element {
    rsx! {
        svg {
            class: "icon icon--seal-question",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 256 256",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: "M128 12l28 20 34-3 11 33 31 15-6 34 17 30-25 24 2 34-33 10-15 31-34-6-30 17-24-25-34 2-10-33-31-15 6-34-17-30 25-24-2-34 33-10 15-31 34 6Z" }
            path {
                d: "M104 100a24 24 0 1 1 34 22c-6 3-10 8-10 15v7",
                fill: "none",
                stroke: "var(--color-bg)",
                stroke_width: "16",
                stroke_linecap: "round",
            }
            circle { cx: "128", cy: "176", r: "11", fill: "var(--color-bg)" }
        }
    }
}

#[component]
pub fn TimelineIcon(#[props(default = DEFAULT_SIZE.to_string())] size: String) -> Element {
    rsx! {
        svg {
            class: "icon icon--timeline",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 256 256",
            fill: "currentColor",
            "aria-hidden": "true",
            rect { x: "56", y: "24", width: "16", height: "208", rx: "8" }
            circle { cx: "64", cy: "64", r: "24" }
            circle { cx: "64", cy: "128", r: "24" }
            circle { cx: "64", cy: "192", r: "24" }
            rect { x: "104", y: "52", width: "112", height: "24", rx: "12" }
            rect { x: "104", y: "116", width: "88", height: "24", rx: "12" }
            rect { x: "104", y: "180", width: "120", height: "24", rx: "12" }
        }
    }
}
