// Fixed copy shown by the trips pages

pub const FINISH_LISTING_LABEL: &str = "Finish listing";
pub const OVERFLOW_MENU_LABEL: &str = "More actions";

pub const HISTORY_EMPTY_TITLE: &str = "No trip history";
pub const HISTORY_EMPTY_DESCRIPTION: &str =
    "This is where you can access information about your completed trips";

pub const BOOKED_EMPTY_TITLE: &str = "No booked trips";
pub const BOOKED_EMPTY_DESCRIPTION: &str =
    "Upcoming and in-progress trips will show up here once guests book your vehicles";

pub const NOT_FOUND_TITLE: &str = "Page not found";
