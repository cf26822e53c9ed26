//! Roster Core - user records and how they are looked up
//!
//! This crate holds the parts of the users service that know nothing about HTTP:
//! - `User` records and their JSON shape
//! - The `UserStore` capability and the in-memory `MemoryStore` backend
//! - Exact-match filtering by name

mod filter;
mod store;
mod user;

pub use filter::filter_by_name;
pub use store::{MemoryStore, UserStore};
pub use user::User;
