//! osmoweb-core: Shared types, errors, configuration, and pagination
//!
//! This crate provides the foundational pieces used across the osmoweb workspace,
//! including the index-based cursor paginator that backs every infinite query.

pub mod config;
pub mod errors;
pub mod pagination;
pub mod query;
pub mod types;

pub use config::*;
pub use errors::*;
pub use pagination::{
    paginate, paginate_query, CursorPage, OwnedPage, Pages, DEFAULT_PAGE_LIMIT,
};
pub use query::{InfiniteQuery, MAX_PAGE_LIMIT, MIN_PAGE_LIMIT};
pub use types::*;
