use crate::domain::menu::{entry, submenu_label};
use crate::domain::models::{NavId, SubmenuId};
use crate::shared::constants::NOT_FOUND_TITLE;
use dioxus::prelude::*;

// Sections the dashboard links to but does not implement yet

#[component]
fn SectionPlaceholder(title: String, icon: &'static str) -> Element {
    rsx! {
        section { class: "c-section",
            header { class: "c-section__header",
                span { class: "c-section__icon", "{icon}" }
                h1 { class: "c-section__title", "{title}" }
            }
        }
    }
}

fn leaf_section(id: NavId) -> Element {
    let (title, icon) = entry(id)
        .map(|e| (e.label, e.icon.glyph()))
        .unwrap_or((id.as_str(), ""));

    rsx! {
        SectionPlaceholder { title: title.to_string(), icon }
    }
}

fn submenu_section(id: NavId, submenu: SubmenuId, page: &str) -> Element {
    let path = format!("/{}/{}", submenu.as_str(), page);
    let section = entry(id).map(|e| e.label).unwrap_or(submenu.as_str());
    let title = match submenu_label(submenu, &path) {
        Some(label) => format!("{section} · {label}"),
        None => format!("{section} · {page}"),
    };
    let icon = entry(id).map(|e| e.icon.glyph()).unwrap_or("");

    rsx! {
        SectionPlaceholder { title, icon }
    }
}

#[component]
pub fn Calendar() -> Element {
    leaf_section(NavId::Calendar)
}

#[component]
pub fn Inbox() -> Element {
    leaf_section(NavId::Inbox)
}

#[component]
pub fn Vehicles() -> Element {
    leaf_section(NavId::Vehicles)
}

#[component]
pub fn Business(page: String) -> Element {
    submenu_section(NavId::Business, SubmenuId::Business, &page)
}

#[component]
pub fn More(page: String) -> Element {
    submenu_section(NavId::More, SubmenuId::More, &page)
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "c-section c-section--not-found",
            h1 { class: "c-section__title", "{NOT_FOUND_TITLE}" }
            p { class: "c-section__text", "Nothing lives at {path}" }
        }
    }
}
