pub mod menu;
pub mod models;
