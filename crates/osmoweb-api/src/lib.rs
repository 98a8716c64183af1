//! osmoweb-api: HTTP query layer for osmoweb
//!
//! Serves the bridge configuration tables and every list endpoint as an
//! infinite query: clients pass `cursor` and `limit`, and feed the returned
//! `nextCursor` back to fetch the following page.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{AppState, StateError};
