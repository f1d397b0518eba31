/// Stable identifier of a top-level sidebar entry.
///
/// Behavior dispatches on this, never on the display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavId {
    Calendar,
    Trips,
    Inbox,
    Vehicles,
    Business,
    More,
}

impl NavId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavId::Calendar => "calendar",
            NavId::Trips => "trips",
            NavId::Inbox => "inbox",
            NavId::Vehicles => "vehicles",
            NavId::Business => "business",
            NavId::More => "more",
        }
    }
}

/// Entries that own a dropdown. Adding a variant here is all it takes
/// to give the visibility state a new open state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmenuId {
    Trips,
    Business,
    More,
}

impl SubmenuId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmenuId::Trips => "trips",
            SubmenuId::Business => "business",
            SubmenuId::More => "more",
        }
    }
}

/// Glyph reference for a sidebar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Calendar,
    Trips,
    Inbox,
    Vehicles,
    Business,
    More,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Calendar => "📅",
            Icon::Trips => "🧭",
            Icon::Inbox => "💬",
            Icon::Vehicles => "🚗",
            Icon::Business => "📈",
            Icon::More => "☰",
        }
    }
}

/// One destination inside a submenu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// What clicking an entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Navigates to the entry's path.
    Leaf,
    /// Toggles a dropdown; only its items navigate.
    Menu {
        submenu: SubmenuId,
        items: &'static [SubmenuItem],
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: NavId,
    pub icon: Icon,
    pub label: &'static str,
    /// Navigation target for leaves, section root for menus.
    pub path: &'static str,
    pub has_notification: bool,
    pub kind: EntryKind,
}

impl NavEntry {
    pub fn submenu(&self) -> Option<SubmenuId> {
        match self.kind {
            EntryKind::Menu { submenu, .. } => Some(submenu),
            EntryKind::Leaf => None,
        }
    }

    pub fn submenu_items(&self) -> &'static [SubmenuItem] {
        match self.kind {
            EntryKind::Menu { items, .. } => items,
            EntryKind::Leaf => &[],
        }
    }

    pub fn has_submenu(&self) -> bool {
        self.submenu().is_some()
    }

    pub fn navigates_on_select(&self) -> bool {
        matches!(self.kind, EntryKind::Leaf)
    }
}
