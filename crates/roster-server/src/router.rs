//! Route table for the users service

use hyper::Method;

/// Path of the users endpoint
pub const USERS_PATH: &str = "/users";

/// Methods accepted on the users endpoint, as sent in `Allow`
pub const USERS_ALLOW: &str = "GET, HEAD";

/// Result of routing a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// List (and optionally filter) users
    ListUsers,
    /// Known path, unsupported method
    MethodNotAllowed,
    /// Unknown path
    NotFound,
}

/// Match a method and path against the route table.
///
/// Paths match exactly; `/users/` is a different path.
pub fn route(method: &Method, path: &str) -> Route {
    if path != USERS_PATH {
        return Route::NotFound;
    }

    if method == Method::GET || method == Method::HEAD {
        Route::ListUsers
    } else {
        Route::MethodNotAllowed
    }
}
