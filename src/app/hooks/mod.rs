// Custom Dioxus hooks
pub mod use_sidebar;

pub use use_sidebar::{use_sidebar, SidebarState};
