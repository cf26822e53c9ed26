//! Request handling for the users endpoint

use crate::error::Result;
use crate::query::query_param;
use crate::response::{error_response, send_json, HttpResponse};
use crate::router::{self, Route, USERS_ALLOW};
use hyper::header::{HeaderValue, ALLOW};
use hyper::{Request, StatusCode};
use roster_core::{filter_by_name, UserStore};
use std::sync::Arc;
use tracing::{debug, error};

/// Name of the query parameter that filters users
pub const NAME_PARAM: &str = "name";

/// Application state shared by every connection.
///
/// Built once at startup and handed to connections behind an `Arc`.
pub struct App {
    store: Arc<dyn UserStore>,
}

impl App {
    /// Create an app serving users from `store`
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Route a request and produce its response.
    ///
    /// The request body is never read, so any body type is accepted.
    pub fn handle<B>(&self, req: &Request<B>) -> HttpResponse {
        let method = req.method();
        let path = req.uri().path();

        let response = match router::route(method, path) {
            Route::ListUsers => or_internal_error(self.list_users(req.uri().query())),
            Route::MethodNotAllowed => {
                let mut response =
                    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
                response
                    .headers_mut()
                    .insert(ALLOW, HeaderValue::from_static(USERS_ALLOW));
                response
            }
            Route::NotFound => error_response(StatusCode::NOT_FOUND, "404 page not found"),
        };

        debug!(%method, path, status = response.status().as_u16(), "handled request");
        response
    }

    /// List users, narrowed to an exact name when `name` is present and non-empty
    pub fn list_users(&self, query: Option<&str>) -> Result<HttpResponse> {
        let users = self.store.list();

        match query.and_then(|q| query_param(q, NAME_PARAM)) {
            Some(name) if !name.is_empty() => {
                send_json(StatusCode::OK, &filter_by_name(&name, users))
            }
            _ => send_json(StatusCode::OK, users),
        }
    }
}

/// Turn a failed response into a 500 carrying the error text
pub fn or_internal_error(result: Result<HttpResponse>) -> HttpResponse {
    match result {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "failed to build response");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}
