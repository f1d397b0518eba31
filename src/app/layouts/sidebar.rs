use crate::domain::menu::{sidebar_menu, submenu_items};
use crate::domain::models::{DropdownVisibility, NavEntry, NavId, SidebarEvent, SubmenuId};
use dioxus::prelude::*;

/// Sidebar with hover/click dropdowns.
///
/// While a dropdown is open a transparent backdrop covers the viewport
/// behind the sidebar and closes it on click. State lives with the caller
/// (see `use_sidebar`); every interaction is reported through `on_event`.
#[component]
pub fn Sidebar(
    #[props(!optional)] active: Option<NavId>,
    visibility: Signal<DropdownVisibility>,
    on_event: EventHandler<SidebarEvent>,
) -> Element {
    let visibility = visibility();

    rsx! {
        if visibility.is_open() {
            div {
                class: "c-sidebar__backdrop",
                onclick: move |_| on_event.call(SidebarEvent::ClickOutside),
            }
        }

        aside {
            class: "c-sidebar",
            onclick: move |_| on_event.call(SidebarEvent::BackgroundClick),

            nav { class: "c-sidebar__nav",
                for entry in sidebar_menu().iter().copied() {
                    SidebarEntry {
                        key: "{entry.id.as_str()}",
                        entry,
                        active: active == Some(entry.id),
                        open: entry.submenu().is_some_and(|s| visibility.is_open_for(s)),
                        on_event,
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarEntry(
    entry: NavEntry,
    active: bool,
    open: bool,
    on_event: EventHandler<SidebarEvent>,
) -> Element {
    let id = entry.id;
    let submenu = entry.submenu();

    let mut button_class = String::from("c-sidebar__button");
    if active {
        button_class.push_str(" c-sidebar__button--active");
    }
    if open {
        button_class.push_str(" c-sidebar__button--open");
    }

    rsx! {
        div {
            class: "c-sidebar__entry",
            onmouseenter: move |_| on_event.call(SidebarEvent::PointerEnter(id)),
            onmouseleave: move |_| {
                if let Some(submenu) = submenu {
                    on_event.call(SidebarEvent::PointerLeave(submenu));
                }
            },

            button {
                r#type: "button",
                class: "{button_class}",
                "aria-haspopup": if submenu.is_some() { "menu" } else { "false" },
                "aria-expanded": "{open}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_event.call(SidebarEvent::Click(id));
                },
                span { class: "c-sidebar__icon",
                    "{entry.icon.glyph()}"
                    if entry.has_notification {
                        span { class: "c-sidebar__badge", "aria-label": "New notifications" }
                    }
                }
                span { class: "c-sidebar__label", "{entry.label}" }
            }

            if open {
                if let Some(submenu) = submenu {
                    SubmenuPopover { submenu, on_event }
                }
            }
        }
    }
}

#[component]
fn SubmenuPopover(submenu: SubmenuId, on_event: EventHandler<SidebarEvent>) -> Element {
    rsx! {
        ul { class: "c-sidebar__popover", role: "menu",
            for (index, item) in submenu_items(submenu).iter().enumerate() {
                li { key: "{item.path}",
                    button {
                        r#type: "button",
                        class: "c-sidebar__popover-item",
                        role: "menuitem",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_event.call(SidebarEvent::SelectItem { submenu, index });
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}
