//! Read-only users service over HTTP
//!
//! Serves `GET /users` from a [`roster_core::UserStore`], optionally narrowed
//! with an exact `?name=` match, and answers everything else with the usual
//! 404/405 responses.

pub mod app;
pub mod config;
pub mod error;
pub mod query;
pub mod response;
pub mod router;
pub mod server;

pub use app::App;
pub use config::Config;
pub use error::{ConfigError, ResponseError};
pub use response::{error_response, send_json, HttpResponse};
pub use router::{route, Route};
pub use server::{serve, serve_connection};
