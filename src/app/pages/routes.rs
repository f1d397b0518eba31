use crate::app::layouts::DashboardLayout;
use crate::app::pages::{BookedTrips, Business, Calendar, Inbox, More, PageNotFound, TripHistory, Vehicles};
use crate::domain::models::NavId;
use crate::shared::errors::{AppError, Result};

use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
    // Trips history is the landing page
    #[redirect("/", || Route::TripHistory {})]
    #[redirect("/trips", || Route::TripHistory {})]

    #[route("/calendar")]
    Calendar {},
    #[route("/trips/booked")]
    BookedTrips {},
    #[route("/trips/history")]
    TripHistory {},
    #[route("/inbox")]
    Inbox {},
    #[route("/vehicles")]
    Vehicles {},

    // Submenu-only sections
    #[route("/business/:page")]
    Business { page: String },
    #[route("/more/:page")]
    More { page: String },

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Resolve a menu path to a route. Paths that only match the
    /// catch-all are reported as unknown.
    pub fn resolve(path: &str) -> Result<Route> {
        match path.parse::<Route>() {
            Ok(Route::PageNotFound { .. }) => Err(AppError::UnknownRoute(path.to_string())),
            Ok(route) => Ok(route),
            Err(e) => {
                tracing::debug!("Route parse failed for '{}': {}", path, e);
                Err(AppError::UnknownRoute(path.to_string()))
            }
        }
    }

    /// Sidebar entry marked active while this route is shown
    pub fn section(&self) -> Option<NavId> {
        match self {
            Route::Calendar {} => Some(NavId::Calendar),
            Route::BookedTrips {} | Route::TripHistory {} => Some(NavId::Trips),
            Route::Inbox {} => Some(NavId::Inbox),
            Route::Vehicles {} => Some(NavId::Vehicles),
            Route::Business { .. } => Some(NavId::Business),
            Route::More { .. } => Some(NavId::More),
            Route::PageNotFound { .. } => None,
        }
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Host dashboard initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}
