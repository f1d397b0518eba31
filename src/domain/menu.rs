//! Static sidebar menu.
//!
//! Declaration order is render order. Labels, icons, badges and submenu
//! contents are read from here and nowhere else.

use crate::domain::models::{EntryKind, Icon, NavEntry, NavId, SubmenuId, SubmenuItem};

const TRIPS_ITEMS: &[SubmenuItem] = &[
    SubmenuItem { label: "Booked", path: "/trips/booked" },
    SubmenuItem { label: "History", path: "/trips/history" },
];

const BUSINESS_ITEMS: &[SubmenuItem] = &[
    SubmenuItem { label: "Performance", path: "/business/performance" },
    SubmenuItem { label: "Earnings", path: "/business/earnings" },
    SubmenuItem { label: "Reviews", path: "/business/reviews" },
];

const MORE_ITEMS: &[SubmenuItem] = &[
    SubmenuItem { label: "Account", path: "/more/account" },
    SubmenuItem { label: "Help", path: "/more/help" },
    SubmenuItem { label: "Legal", path: "/more/legal" },
];

static SIDEBAR_MENU: [NavEntry; 6] = [
    NavEntry {
        id: NavId::Calendar,
        icon: Icon::Calendar,
        label: "Calendar",
        path: "/calendar",
        has_notification: false,
        kind: EntryKind::Leaf,
    },
    NavEntry {
        id: NavId::Trips,
        icon: Icon::Trips,
        label: "Trips",
        path: "/trips",
        has_notification: false,
        kind: EntryKind::Menu { submenu: SubmenuId::Trips, items: TRIPS_ITEMS },
    },
    NavEntry {
        id: NavId::Inbox,
        icon: Icon::Inbox,
        label: "Inbox",
        path: "/inbox",
        has_notification: false,
        kind: EntryKind::Leaf,
    },
    NavEntry {
        id: NavId::Vehicles,
        icon: Icon::Vehicles,
        label: "Vehicles",
        path: "/vehicles",
        has_notification: false,
        kind: EntryKind::Leaf,
    },
    NavEntry {
        id: NavId::Business,
        icon: Icon::Business,
        label: "Business",
        path: "/business",
        has_notification: false,
        kind: EntryKind::Menu { submenu: SubmenuId::Business, items: BUSINESS_ITEMS },
    },
    NavEntry {
        id: NavId::More,
        icon: Icon::More,
        label: "More",
        path: "/more",
        has_notification: true,
        kind: EntryKind::Menu { submenu: SubmenuId::More, items: MORE_ITEMS },
    },
];

/// All sidebar entries in render order
pub fn sidebar_menu() -> &'static [NavEntry] {
    &SIDEBAR_MENU
}

pub fn entry(id: NavId) -> Option<&'static NavEntry> {
    SIDEBAR_MENU.iter().find(|entry| entry.id == id)
}

/// The entry owning a given dropdown
pub fn menu_entry(submenu: SubmenuId) -> Option<&'static NavEntry> {
    SIDEBAR_MENU
        .iter()
        .find(|entry| entry.submenu() == Some(submenu))
}

pub fn submenu_items(submenu: SubmenuId) -> &'static [SubmenuItem] {
    menu_entry(submenu)
        .map(NavEntry::submenu_items)
        .unwrap_or(&[])
}

/// Label of the submenu item pointing at `path`
pub fn submenu_label(submenu: SubmenuId, path: &str) -> Option<&'static str> {
    submenu_items(submenu)
        .iter()
        .find(|item| item.path == path)
        .map(|item| item.label)
}

/// Every path the menu can navigate to, leaves first then submenu items.
pub fn navigable_paths() -> Vec<&'static str> {
    let leaves = SIDEBAR_MENU
        .iter()
        .filter(|entry| entry.navigates_on_select())
        .map(|entry| entry.path);
    let items = SIDEBAR_MENU
        .iter()
        .flat_map(|entry| entry.submenu_items().iter().map(|item| item.path));
    leaves.chain(items).collect()
}
