//! API utilities for frontend-backend communication

/// Port the backend listens on by default
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port, so the
/// page works both from the Trunk dev server and from the backend itself.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
