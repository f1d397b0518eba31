use crate::app::pages::routes::Route;
use crate::domain::models::{DropdownVisibility, SidebarEvent};
use crate::shared::logging;
use dioxus::prelude::*;
use dioxus::router::Navigator;

/// Sidebar dropdown state, scoped to one mounted sidebar
#[derive(Clone, Copy)]
pub struct SidebarState {
    pub visibility: Signal<DropdownVisibility>,
    navigator: Navigator,
}

impl SidebarState {
    /// Feed one event through the state machine and apply its effects
    pub fn dispatch(&self, event: SidebarEvent) {
        let mut visibility = self.visibility;
        let current = *visibility.peek();
        let transition = current.apply(&event);

        logging::log_dropdown_transition(current, &event, transition.next);
        if transition.next != current {
            visibility.set(transition.next);
        }

        if let Some(path) = transition.navigate_to {
            self.navigate(path);
        }
    }

    fn navigate(&self, path: &str) {
        match Route::resolve(path) {
            Ok(route) => {
                logging::log_navigation(path);
                if let Some(failure) = self.navigator.push(route) {
                    logging::log_navigation_failure(path, &format!("{failure:?}"));
                }
            }
            Err(e) => logging::log_unknown_route(path, &e.to_string()),
        }
    }
}

/// Must be called below a `Router`
pub fn use_sidebar() -> SidebarState {
    let visibility = use_signal(DropdownVisibility::default);
    let navigator = use_navigator();

    SidebarState {
        visibility,
        navigator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::layouts::Sidebar;
    use crate::domain::models::{NavId, SubmenuId};
    use dioxus::history::{History, MemoryHistory};
    use std::cell::RefCell;
    use std::rc::Rc;

    type StateSlot = Rc<RefCell<Option<SidebarState>>>;

    // Any path lands on the harness, so pushes are observable through the history alone.
    #[derive(Clone, Routable, Debug, PartialEq)]
    #[rustfmt::skip]
    enum HarnessRoute {
        #[layout(SidebarHarness)]
        #[route("/:..segments")]
        Anywhere { segments: Vec<String> },
    }

    #[component]
    fn SidebarHarness() -> Element {
        let sidebar = use_sidebar();
        let slot = use_context::<StateSlot>();
        slot.borrow_mut().replace(sidebar);

        rsx! {
            Sidebar {
                active: Some(NavId::Trips),
                visibility: sidebar.visibility,
                on_event: move |event| sidebar.dispatch(event),
            }
            Outlet::<HarnessRoute> {}
        }
    }

    #[component]
    fn Anywhere(segments: Vec<String>) -> Element {
        let path = segments.join("/");
        rsx! { p { "/{path}" } }
    }

    fn harness_root() -> Element {
        rsx! { Router::<HarnessRoute> {} }
    }

    struct Harness {
        dom: VirtualDom,
        history: Rc<MemoryHistory>,
        slot: StateSlot,
    }

    impl Harness {
        fn mount(initial_path: &str) -> Self {
            let history = Rc::new(MemoryHistory::with_initial_path(initial_path));
            let slot: StateSlot = Rc::new(RefCell::new(None));
            let mut dom = VirtualDom::new(harness_root)
                .with_root_context(history.clone() as Rc<dyn History>)
                .with_root_context(slot.clone());
            dom.rebuild_in_place();
            Self { dom, history, slot }
        }

        fn dispatch(&mut self, event: SidebarEvent) {
            let sidebar = self.state();
            self.dom.in_scope(ScopeId::ROOT, || sidebar.dispatch(event));
            self.dom.render_immediate_to_vec();
        }

        fn state(&self) -> SidebarState {
            (*self.slot.borrow()).expect("harness mounted")
        }

        fn visibility(&self) -> DropdownVisibility {
            let sidebar = self.state();
            self.dom.in_runtime(|| *sidebar.visibility.peek())
        }

        fn html(&self) -> String {
            dioxus_ssr::render(&self.dom)
        }
    }

    #[test]
    fn test_select_history_item_navigates_once_and_closes() {
        let mut harness = Harness::mount("/calendar");

        harness.dispatch(SidebarEvent::Click(NavId::Trips));
        assert_eq!(harness.visibility(), DropdownVisibility::Open(SubmenuId::Trips));
        assert_eq!(harness.history.current_route(), "/calendar");

        harness.dispatch(SidebarEvent::SelectItem { submenu: SubmenuId::Trips, index: 1 });
        assert_eq!(harness.visibility(), DropdownVisibility::Closed);
        assert_eq!(harness.history.current_route(), "/trips/history");

        // Exactly one entry was pushed on top of the initial one
        harness.history.go_back();
        assert_eq!(harness.history.current_route(), "/calendar");
        assert!(!harness.history.can_go_back());
    }

    #[test]
    fn test_outside_click_closes_without_navigating() {
        let mut harness = Harness::mount("/inbox");

        harness.dispatch(SidebarEvent::PointerEnter(NavId::More));
        harness.dispatch(SidebarEvent::ClickOutside);

        assert_eq!(harness.visibility(), DropdownVisibility::Closed);
        assert_eq!(harness.history.current_route(), "/inbox");
        assert!(!harness.history.can_go_back());
    }

    #[test]
    fn test_background_click_closes_without_navigating() {
        let mut harness = Harness::mount("/inbox");

        harness.dispatch(SidebarEvent::Click(NavId::Business));
        harness.dispatch(SidebarEvent::BackgroundClick);

        assert_eq!(harness.visibility(), DropdownVisibility::Closed);
        assert!(!harness.history.can_go_back());
    }

    #[test]
    fn test_non_navigating_entries_only_toggle() {
        let mut harness = Harness::mount("/inbox");

        harness.dispatch(SidebarEvent::Click(NavId::Business));
        harness.dispatch(SidebarEvent::Click(NavId::More));
        harness.dispatch(SidebarEvent::Click(NavId::More));

        assert_eq!(harness.visibility(), DropdownVisibility::Closed);
        assert_eq!(harness.history.current_route(), "/inbox");
    }

    #[test]
    fn test_leaf_click_pushes_route() {
        let mut harness = Harness::mount("/inbox");

        harness.dispatch(SidebarEvent::Click(NavId::Vehicles));

        assert_eq!(harness.history.current_route(), "/vehicles");
        assert_eq!(harness.visibility(), DropdownVisibility::Closed);
    }

    #[test]
    fn test_backdrop_only_while_open() {
        let mut harness = Harness::mount("/calendar");
        assert!(!harness.html().contains("c-sidebar__backdrop"));
        assert!(!harness.html().contains("c-sidebar__popover"));

        harness.dispatch(SidebarEvent::PointerEnter(NavId::Trips));
        let html = harness.html();
        assert!(html.contains("c-sidebar__backdrop"));
        assert!(html.contains("c-sidebar__popover"));

        harness.dispatch(SidebarEvent::ClickOutside);
        assert!(!harness.html().contains("c-sidebar__backdrop"));
    }
}
