pub mod components;
pub mod hooks;
pub mod layouts;
pub mod pages;

// Re-export the dashboard App
pub use pages::routes::{App, Route};
