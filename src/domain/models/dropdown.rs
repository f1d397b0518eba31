use crate::domain::menu;
use crate::domain::models::{EntryKind, NavId, SubmenuId};

/// Which sidebar dropdown, if any, is shown.
///
/// A single value, so at most one dropdown can ever be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownVisibility {
    #[default]
    Closed,
    Open(SubmenuId),
}

/// Pointer and click input reaching the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarEvent {
    PointerEnter(NavId),
    Click(NavId),
    /// Pointer left the popover of the given dropdown.
    PointerLeave(SubmenuId),
    SelectItem { submenu: SubmenuId, index: usize },
    /// Click on the full-viewport catcher rendered while a dropdown is open.
    ClickOutside,
    /// Click on the sidebar's own background.
    BackgroundClick,
}

impl SidebarEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarEvent::PointerEnter(_) => "pointer_enter",
            SidebarEvent::Click(_) => "click",
            SidebarEvent::PointerLeave(_) => "pointer_leave",
            SidebarEvent::SelectItem { .. } => "select_item",
            SidebarEvent::ClickOutside => "click_outside",
            SidebarEvent::BackgroundClick => "background_click",
        }
    }
}

/// Result of feeding one event to the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: DropdownVisibility,
    pub navigate_to: Option<&'static str>,
}

impl Transition {
    /// Move to `next` without navigating
    fn to(next: DropdownVisibility) -> Self {
        Self { next, navigate_to: None }
    }
}

impl DropdownVisibility {
    pub fn is_open(&self) -> bool {
        matches!(self, DropdownVisibility::Open(_))
    }

    pub fn is_open_for(&self, submenu: SubmenuId) -> bool {
        *self == DropdownVisibility::Open(submenu)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownVisibility::Closed => "closed",
            DropdownVisibility::Open(submenu) => submenu.as_str(),
        }
    }

    /// Next state plus the path to navigate to, if any.
    ///
    /// Total over every (state, event) pair: events that do not apply
    /// leave the state untouched and navigate nowhere.
    pub fn apply(self, event: &SidebarEvent) -> Transition {
        match *event {
            SidebarEvent::PointerEnter(id) => match menu::entry(id).and_then(|e| e.submenu()) {
                Some(submenu) => Transition::to(DropdownVisibility::Open(submenu)),
                None => Transition::to(self),
            },
            SidebarEvent::Click(id) => {
                let Some(entry) = menu::entry(id) else {
                    return Transition::to(self);
                };
                match entry.kind {
                    EntryKind::Menu { submenu, .. } if self.is_open_for(submenu) => {
                        Transition::to(DropdownVisibility::Closed)
                    }
                    EntryKind::Menu { submenu, .. } => {
                        Transition::to(DropdownVisibility::Open(submenu))
                    }
                    EntryKind::Leaf => Transition {
                        next: self,
                        navigate_to: Some(entry.path),
                    },
                }
            }
            SidebarEvent::PointerLeave(submenu) if self.is_open_for(submenu) => {
                Transition::to(DropdownVisibility::Closed)
            }
            SidebarEvent::PointerLeave(_) => Transition::to(self),
            SidebarEvent::SelectItem { submenu, index } if self.is_open_for(submenu) => {
                match menu::submenu_items(submenu).get(index) {
                    Some(item) => Transition {
                        next: DropdownVisibility::Closed,
                        navigate_to: Some(item.path),
                    },
                    None => Transition::to(self),
                }
            }
            SidebarEvent::SelectItem { .. } => Transition::to(self),
            SidebarEvent::ClickOutside | SidebarEvent::BackgroundClick => {
                Transition::to(DropdownVisibility::Closed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::sidebar_menu;

    const ALL_STATES: [DropdownVisibility; 4] = [
        DropdownVisibility::Closed,
        DropdownVisibility::Open(SubmenuId::Trips),
        DropdownVisibility::Open(SubmenuId::Business),
        DropdownVisibility::Open(SubmenuId::More),
    ];

    fn all_events() -> Vec<SidebarEvent> {
        let mut events = vec![SidebarEvent::ClickOutside, SidebarEvent::BackgroundClick];
        for entry in sidebar_menu() {
            events.push(SidebarEvent::PointerEnter(entry.id));
            events.push(SidebarEvent::Click(entry.id));
            if let Some(submenu) = entry.submenu() {
                events.push(SidebarEvent::PointerLeave(submenu));
                for index in 0..=entry.submenu_items().len() {
                    events.push(SidebarEvent::SelectItem { submenu, index });
                }
            }
        }
        events
    }

    /// Replays events, recording every navigation
    fn run(events: &[SidebarEvent]) -> (DropdownVisibility, Vec<&'static str>) {
        let mut state = DropdownVisibility::default();
        let mut navigations = Vec::new();
        for event in events {
            let transition = state.apply(event);
            state = transition.next;
            navigations.extend(transition.navigate_to);
        }
        (state, navigations)
    }

    #[test]
    fn test_initial_state_closed() {
        assert_eq!(DropdownVisibility::default(), DropdownVisibility::Closed);
        assert!(!DropdownVisibility::default().is_open());
    }

    #[test]
    fn test_every_transition_lands_in_a_valid_state() {
        // Exhaustive over pairs; the enum makes two open dropdowns unrepresentable,
        // so this checks the only submenus reachable are menu-owned ones.
        for state in ALL_STATES {
            for event in all_events() {
                let next = state.apply(&event).next;
                if let DropdownVisibility::Open(submenu) = next {
                    assert!(menu::menu_entry(submenu).is_some());
                }
            }
        }
    }

    #[test]
    fn test_click_toggles_back_to_closed() {
        for id in [NavId::Trips, NavId::Business, NavId::More] {
            let (state, navigations) = run(&[SidebarEvent::Click(id), SidebarEvent::Click(id)]);
            assert_eq!(state, DropdownVisibility::Closed);
            assert!(navigations.is_empty());
        }
    }

    #[test]
    fn test_click_switches_open_dropdown() {
        let (state, _) = run(&[
            SidebarEvent::Click(NavId::Trips),
            SidebarEvent::Click(NavId::Business),
        ]);
        assert_eq!(state, DropdownVisibility::Open(SubmenuId::Business));
    }

    #[test]
    fn test_hover_replaces_open_dropdown() {
        let (state, _) = run(&[
            SidebarEvent::PointerEnter(NavId::Business),
            SidebarEvent::PointerEnter(NavId::More),
        ]);
        assert_eq!(state, DropdownVisibility::Open(SubmenuId::More));
    }

    #[test]
    fn test_hover_on_leaf_keeps_state() {
        let (state, navigations) = run(&[
            SidebarEvent::PointerEnter(NavId::Trips),
            SidebarEvent::PointerEnter(NavId::Inbox),
        ]);
        assert_eq!(state, DropdownVisibility::Open(SubmenuId::Trips));
        assert!(navigations.is_empty());
    }

    #[test]
    fn test_hover_then_click_closes() {
        let (state, _) = run(&[
            SidebarEvent::PointerEnter(NavId::Trips),
            SidebarEvent::Click(NavId::Trips),
        ]);
        assert_eq!(state, DropdownVisibility::Closed);
    }

    #[test]
    fn test_outside_click_closes_without_navigation() {
        for state in ALL_STATES {
            for event in [SidebarEvent::ClickOutside, SidebarEvent::BackgroundClick] {
                let transition = state.apply(&event);
                assert_eq!(transition.next, DropdownVisibility::Closed);
                assert_eq!(transition.navigate_to, None);
            }
        }
    }

    #[test]
    fn test_select_trips_history() {
        let (state, navigations) = run(&[
            SidebarEvent::Click(NavId::Trips),
            SidebarEvent::SelectItem { submenu: SubmenuId::Trips, index: 1 },
        ]);
        assert_eq!(state, DropdownVisibility::Closed);
        assert_eq!(navigations, vec!["/trips/history"]);
    }

    #[test]
    fn test_select_item_of_closed_submenu_is_ignored() {
        let (state, navigations) = run(&[
            SidebarEvent::Click(NavId::Business),
            SidebarEvent::SelectItem { submenu: SubmenuId::Trips, index: 0 },
        ]);
        assert_eq!(state, DropdownVisibility::Open(SubmenuId::Business));
        assert!(navigations.is_empty());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let state = DropdownVisibility::Open(SubmenuId::Trips);
        let transition = state.apply(&SidebarEvent::SelectItem { submenu: SubmenuId::Trips, index: 9 });
        assert_eq!(transition, Transition::to(state));
    }

    #[test]
    fn test_business_and_more_never_navigate() {
        for state in ALL_STATES {
            for id in [NavId::Business, NavId::More] {
                assert_eq!(state.apply(&SidebarEvent::Click(id)).navigate_to, None);
            }
        }
    }

    #[test]
    fn test_leaf_click_navigates_and_keeps_state() {
        let state = DropdownVisibility::Open(SubmenuId::More);
        let transition = state.apply(&SidebarEvent::Click(NavId::Vehicles));
        assert_eq!(transition.next, state);
        assert_eq!(transition.navigate_to, Some("/vehicles"));
    }

    #[test]
    fn test_pointer_leave_only_closes_its_own_dropdown() {
        let state = DropdownVisibility::Open(SubmenuId::Trips);
        assert_eq!(
            state.apply(&SidebarEvent::PointerLeave(SubmenuId::More)).next,
            state
        );
        assert_eq!(
            state.apply(&SidebarEvent::PointerLeave(SubmenuId::Trips)).next,
            DropdownVisibility::Closed
        );
    }

    #[test]
    fn test_leave_and_outside_click_commute() {
        let open = DropdownVisibility::Open(SubmenuId::Business);
        let leave = SidebarEvent::PointerLeave(SubmenuId::Business);
        let outside = SidebarEvent::ClickOutside;
        let a = open.apply(&leave).next.apply(&outside).next;
        let b = open.apply(&outside).next.apply(&leave).next;
        assert_eq!(a, b);
        assert_eq!(a, DropdownVisibility::Closed);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(DropdownVisibility::Closed.as_str(), "closed");
        assert_eq!(DropdownVisibility::Open(SubmenuId::More).as_str(), "more");
        assert_eq!(SidebarEvent::ClickOutside.as_str(), "click_outside");
    }
}
