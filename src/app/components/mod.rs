pub mod button;
pub mod empty_state;
pub mod trips_header;

pub use button::{Button, ButtonVariant};
pub use empty_state::{EmptyState, TripsIllustration};
pub use trips_header::{TripsHeader, TripsTab, TripsTabs};
