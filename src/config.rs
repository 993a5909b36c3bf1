//! Frontend Configuration

/// Base URL of the menu backend service.
pub const API_BASE_URL: &str = "http://localhost:8000";
