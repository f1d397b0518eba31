use dioxus::prelude::*;

// Reusable Empty State Component (BEM: c-empty-state)
#[component]
pub fn EmptyState(
    #[props(into)] title: String,
    #[props(into)] description: String,
    /// Illustration shown above the title
    children: Element,
) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__illustration", {children} }
            h2 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__text", "{description}" }
        }
    }
}

/// Car parked next to a road sign, drawn inline so it follows the theme color
#[component]
pub fn TripsIllustration() -> Element {
    rsx! {
        svg {
            class: "c-illustration",
            view_box: "0 0 160 120",
            width: "160",
            height: "120",
            fill: "none",
            "aria-hidden": "true",
            // Road
            path { d: "M8 100 H152", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round" }
            // Body
            rect { x: "30", y: "60", width: "86", height: "26", rx: "8", fill: "currentColor", opacity: "0.25" }
            path { d: "M44 60 L56 44 H90 L102 60", stroke: "currentColor", stroke_width: "3", stroke_linejoin: "round" }
            // Wheels
            circle { cx: "50", cy: "88", r: "9", fill: "currentColor" }
            circle { cx: "96", cy: "88", r: "9", fill: "currentColor" }
            // Sign post
            path { d: "M132 100 V40", stroke: "currentColor", stroke_width: "3" }
            rect { x: "120", y: "24", width: "24", height: "18", rx: "3", stroke: "currentColor", stroke_width: "2" }
        }
    }
}
