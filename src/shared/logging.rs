//! Structured logging for the host dashboard
//!
//! Keeps log fields consistent between the sidebar, the router glue
//! and the server entry point.

use crate::domain::models::{DropdownVisibility, SidebarEvent};

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    DropdownTransition,
    Navigation,
    Routing,
    Startup,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::DropdownTransition => "dropdown_transition",
            LogOperation::Navigation => "navigation",
            LogOperation::Routing => "routing",
            LogOperation::Startup => "startup",
        }
    }
}

/// Log a dropdown state change; unchanged states are not logged
pub fn log_dropdown_transition(
    from: DropdownVisibility,
    event: &SidebarEvent,
    to: DropdownVisibility,
) {
    if from == to {
        return;
    }
    tracing::debug!(
        operation = LogOperation::DropdownTransition.as_str(),
        from = from.as_str(),
        event = event.as_str(),
        to = to.as_str(),
        "Sidebar dropdown changed"
    );
}

pub fn log_navigation(path: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "Navigating"
    );
}

/// Log a path the router could not resolve
pub fn log_unknown_route(path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Routing.as_str(),
        path = path,
        error = error,
        "Navigation target does not match any route"
    );
}

/// Log a route the router refused to navigate to
pub fn log_navigation_failure(path: &str, failure: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        failure = failure,
        "Router rejected navigation"
    );
}

pub fn log_startup(app_name: &str, log_level: &str) {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        app_name = app_name,
        log_level = log_level,
        "Starting dashboard server"
    );
}

pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::Startup.as_str(),
        error = error,
        "Invalid configuration, using defaults"
    );
}
