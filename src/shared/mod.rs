pub mod errors;
pub mod constants;
pub mod logging;
