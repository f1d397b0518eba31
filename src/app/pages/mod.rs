pub mod routes;
pub mod trip_history;
pub mod booked_trips;
pub mod sections;

pub use trip_history::TripHistory;
pub use booked_trips::BookedTrips;
pub use sections::{Business, Calendar, Inbox, More, PageNotFound, Vehicles};
