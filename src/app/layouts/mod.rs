pub mod dashboard;
pub mod sidebar;

pub use dashboard::DashboardLayout;
pub use sidebar::Sidebar;
