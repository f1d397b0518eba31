use crate::app::components::{EmptyState, TripsHeader, TripsIllustration, TripsTab};
use crate::shared::constants::{HISTORY_EMPTY_DESCRIPTION, HISTORY_EMPTY_TITLE};
use dioxus::prelude::*;

/// Trip history. Nothing is fetched: the page always shows its empty state.
#[component]
pub fn TripHistory() -> Element {
    rsx! {
        section { class: "c-trips-page",
            TripsHeader { active: TripsTab::History }

            EmptyState {
                title: HISTORY_EMPTY_TITLE,
                description: HISTORY_EMPTY_DESCRIPTION,
                TripsIllustration {}
            }
        }
    }
}
