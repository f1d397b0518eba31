// Domain models (navigation entities)
// Pure Rust, no framework dependencies

pub mod nav;
pub mod dropdown;

pub use nav::{EntryKind, Icon, NavEntry, NavId, SubmenuId, SubmenuItem};
pub use dropdown::{DropdownVisibility, SidebarEvent, Transition};
