use crate::app::components::{Button, ButtonVariant};
use crate::app::pages::routes::Route;
use crate::shared::constants::{FINISH_LISTING_LABEL, OVERFLOW_MENU_LABEL};
use dioxus::prelude::*;

/// Tabs of the trips pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripsTab {
    Booked,
    History,
}

impl TripsTab {
    pub const ALL: [TripsTab; 2] = [TripsTab::Booked, TripsTab::History];

    pub fn label(&self) -> &'static str {
        match self {
            TripsTab::Booked => "Booked",
            TripsTab::History => "History",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            TripsTab::Booked => Route::BookedTrips {},
            TripsTab::History => Route::TripHistory {},
        }
    }
}

/// Title bar with the listing actions, followed by the tab strip
#[component]
pub fn TripsHeader(active: TripsTab) -> Element {
    rsx! {
        header { class: "c-trips-header",
            div { class: "c-trips-header__bar",
                h1 { class: "c-trips-header__title", "{active.label()}" }
                div { class: "c-trips-header__actions",
                    Button { variant: ButtonVariant::Secondary, "{FINISH_LISTING_LABEL}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        label: OVERFLOW_MENU_LABEL.to_string(),
                        onclick: move |_| {},
                        "⋯"
                    }
                }
            }
            TripsTabs { active }
        }
    }
}

/// The selected tab is plain text; the others link to their page
#[component]
pub fn TripsTabs(active: TripsTab) -> Element {
    rsx! {
        nav { class: "c-tabs", role: "tablist",
            for tab in TripsTab::ALL {
                if tab == active {
                    span {
                        key: "{tab.label()}",
                        class: "c-tabs__tab c-tabs__tab--active",
                        role: "tab",
                        "aria-selected": "true",
                        "{tab.label()}"
                    }
                } else {
                    Link {
                        key: "{tab.label()}",
                        to: tab.route(),
                        class: "c-tabs__tab",
                        "{tab.label()}"
                    }
                }
            }
        }
    }
}
