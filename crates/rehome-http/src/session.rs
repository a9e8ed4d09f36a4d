//! HTTP-backed session implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use rehome_core::error::InvalidInputError;
use rehome_core::traits::Session as SessionTrait;
use rehome_core::{
    Dog, DogId, Error, PageCursor, Result, SearchPage, SearchQuery, ServiceUrl, SessionCookie,
};

use crate::client::HttpClient;
use crate::endpoints::{
    AUTH_LOGOUT, DOG_BREEDS, DOG_MATCH, DOG_RECORDS, DOG_SEARCH, MatchResponse, SearchResponse,
};

/// An authenticated session against the HTTP adoption service.
///
/// Holds the opaque session cookie captured at login and replays it on
/// every request. The cookie never rotates, so no interior mutability is
/// needed.
#[derive(Clone)]
pub struct HttpSession {
    client: HttpClient,
    service: ServiceUrl,
    cookie: SessionCookie,
}

impl HttpSession {
    pub(crate) fn new(client: HttpClient, service: ServiceUrl, cookie: SessionCookie) -> Self {
        Self {
            client,
            service,
            cookie,
        }
    }

    /// Restore a session from a persisted service URL and cookie.
    pub fn from_parts(service: ServiceUrl, cookie: SessionCookie) -> Self {
        Self::new(HttpClient::new(service.clone()), service, cookie)
    }
}

#[async_trait]
impl SessionTrait for HttpSession {
    fn service(&self) -> &ServiceUrl {
        &self.service
    }

    fn cookie(&self) -> &SessionCookie {
        &self.cookie
    }

    #[instrument(skip(self), fields(service = %self.service))]
    async fn breeds(&self) -> Result<Vec<String>> {
        debug!("Fetching breed catalog");
        self.client.get_json(DOG_BREEDS, &[], &self.cookie).await
    }

    #[instrument(skip(self, query), fields(service = %self.service))]
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        debug!("Searching dogs");
        let params = query.to_params();
        let response: SearchResponse = self
            .client
            .get_json(DOG_SEARCH, &params, &self.cookie)
            .await?;

        Ok(SearchPage {
            result_ids: response.result_ids,
            total: response.total,
            next: response.next.as_deref().and_then(PageCursor::from_link),
            prev: response.prev.as_deref().and_then(PageCursor::from_link),
        })
    }

    #[instrument(skip(self, ids), fields(service = %self.service, count = ids.len()))]
    async fn dogs(&self, ids: &[DogId]) -> Result<Vec<Dog>> {
        if ids.is_empty() {
            return Err(InvalidInputError::EmptyIdList.into());
        }

        debug!("Fetching dog records");
        self.client.post_json(DOG_RECORDS, &ids, &self.cookie).await
    }

    #[instrument(skip(self, favorites), fields(service = %self.service, count = favorites.len()))]
    async fn find_match(&self, favorites: &[DogId]) -> Result<DogId> {
        if favorites.is_empty() {
            return Err(Error::InvalidInput(InvalidInputError::NoFavorites));
        }

        debug!("Requesting match");
        let response: MatchResponse = self
            .client
            .post_json(DOG_MATCH, &favorites, &self.cookie)
            .await?;

        Ok(response.winner)
    }

    #[instrument(skip(self), fields(service = %self.service))]
    async fn logout(&self) -> Result<()> {
        debug!("Logging out");
        self.client.post_empty(AUTH_LOGOUT, &self.cookie).await
    }
}

impl std::fmt::Debug for HttpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSession")
            .field("service", &self.service)
            .field("cookie", &"[REDACTED]")
            .finish()
    }
}
