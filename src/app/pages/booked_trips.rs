use crate::app::components::{EmptyState, TripsHeader, TripsIllustration, TripsTab};
use crate::shared::constants::{BOOKED_EMPTY_DESCRIPTION, BOOKED_EMPTY_TITLE};
use dioxus::prelude::*;

#[component]
pub fn BookedTrips() -> Element {
    rsx! {
        section { class: "c-trips-page",
            TripsHeader { active: TripsTab::Booked }

            EmptyState {
                title: BOOKED_EMPTY_TITLE,
                description: BOOKED_EMPTY_DESCRIPTION,
                TripsIllustration {}
            }
        }
    }
}
