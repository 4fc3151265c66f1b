//! Axum extractors for API handlers

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use jb_core::PageParams;
use jb_db::JobStore;

/// Application state
///
/// The store is injected as a capability so tests can substitute a double.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }
}

/// Raw page/limit text as it appears in the query string.
#[derive(Debug, Default, serde::Deserialize)]
struct RawPageQuery {
    page: Option<String>,
    limit: Option<String>,
}

/// Pagination extractor.
///
/// Lenient on purpose: a missing, unparsable, or non-positive parameter
/// degrades to its default rather than rejecting the request, each
/// parameter independently.
pub struct Pagination(pub PageParams);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPageQuery>::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|_| Query(RawPageQuery::default()));

        Ok(Pagination(PageParams::resolve(
            raw.page.as_deref(),
            raw.limit.as_deref(),
        )))
    }
}

impl std::ops::Deref for Pagination {
    type Target = PageParams;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
