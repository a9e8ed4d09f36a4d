//! Authenticated session trait.

use async_trait::async_trait;

use crate::auth::SessionCookie;
use crate::dog::Dog;
use crate::page::SearchPage;
use crate::query::SearchQuery;
use crate::types::{DogId, ServiceUrl};
use crate::Result;

/// An authenticated session against the adoption service.
#[async_trait]
pub trait Session: Send + Sync {
    /// Returns the service URL associated with this session.
    fn service(&self) -> &ServiceUrl;

    /// Returns the opaque session cookie.
    fn cookie(&self) -> &SessionCookie;

    /// Fetch the list of known breed names, in server order.
    async fn breeds(&self) -> Result<Vec<String>>;

    /// Run a search, resolving a page of ids plus pagination cursors.
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage>;

    /// Fetch the full records for a batch of ids.
    ///
    /// Implementations must reject an empty id list locally; the batch
    /// endpoint is never to be called without ids.
    async fn dogs(&self, ids: &[DogId]) -> Result<Vec<Dog>>;

    /// Submit a candidate set of favorite ids; the service picks one winner.
    ///
    /// Implementations must reject an empty candidate set locally, without
    /// a network call.
    async fn find_match(&self, favorites: &[DogId]) -> Result<DogId>;

    /// Invalidate the server-side session.
    async fn logout(&self) -> Result<()>;
}
