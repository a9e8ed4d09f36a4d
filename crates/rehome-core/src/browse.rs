//! Browse-screen controller.
//!
//! [`Browser`] is the explicit state object behind the search-and-favorites
//! view: it owns the breed catalog, the current filters, the displayed page
//! and records, the favorites set, and the last match. The rendering layer
//! reads from it; every mutation goes through one of its operations.

use tracing::{debug, warn};

use crate::dog::Dog;
use crate::error::InvalidInputError;
use crate::favorites::Favorites;
use crate::page::SearchPage;
use crate::query::{SearchQuery, Sort};
use crate::traits::Session;
use crate::types::DogId;
use crate::Result;

/// Current filter-control values.
///
/// A fresh [`SearchQuery`] is built from these on every search action;
/// changing a filter does not itself trigger a query.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Selected breed names; empty means no breed constraint.
    pub breeds: Vec<String>,

    /// Minimum age in years.
    pub age_min: Option<u8>,

    /// Maximum age in years.
    pub age_max: Option<u8>,

    /// Postal code.
    pub zip_code: Option<String>,

    /// Sort specification.
    pub sort: Sort,
}

impl Filters {
    /// Build a query from the current filter values, with no cursor.
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            breeds: self.breeds.clone(),
            age_min: self.age_min,
            age_max: self.age_max,
            zip_code: self
                .zip_code
                .as_deref()
                .map(str::trim)
                .filter(|zip| !zip.is_empty())
                .map(str::to_string),
            sort: self.sort,
            from: None,
        }
    }

    /// Toggle a breed in the selection, returning the new membership state.
    pub fn toggle_breed(&mut self, breed: &str) -> bool {
        if let Some(pos) = self.breeds.iter().position(|b| b == breed) {
            self.breeds.remove(pos);
            false
        } else {
            self.breeds.push(breed.to_string());
            true
        }
    }
}

/// Outcome of a match request.
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    /// The winning dog is among the currently fetched records.
    Found(Dog),

    /// The service picked a winner that is no longer on the current page
    /// (pagination moved away from it). Only the id is known.
    OffPage(DogId),
}

/// State and operations of the search-and-favorites screen.
pub struct Browser<S: Session> {
    session: S,
    breeds: Vec<String>,
    filters: Filters,
    page: Option<SearchPage>,
    dogs: Vec<Dog>,
    favorites: Favorites,
    matched: Option<Dog>,
}

impl<S: Session> Browser<S> {
    /// Create a browser over an authenticated session.
    pub fn new(session: S) -> Self {
        Self {
            session,
            breeds: Vec::new(),
            filters: Filters::default(),
            page: None,
            dogs: Vec::new(),
            favorites: Favorites::new(),
            matched: None,
        }
    }

    /// Load the breed catalog for the filter controls.
    ///
    /// Breed filtering is optional, so this failure is soft: it is logged
    /// and the catalog stays empty.
    pub async fn load_breeds(&mut self) {
        match self.session.breeds().await {
            Ok(breeds) => self.breeds = breeds,
            Err(error) => warn!(%error, "failed to load breed catalog"),
        }
    }

    /// The breed catalog, possibly empty.
    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    /// The current filter values.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Mutable access to the filter values.
    pub fn filters_mut(&mut self) -> &mut Filters {
        &mut self.filters
    }

    /// Run a search from the current filters, starting at the first page.
    pub async fn search(&mut self) -> Result<()> {
        self.run_search(self.filters.to_query()).await
    }

    /// Move to the next page of the current results.
    ///
    /// Re-issues the identical query with only the cursor replaced.
    /// Returns false without a network call when there is no next page.
    pub async fn next_page(&mut self) -> Result<bool> {
        let Some(cursor) = self.page.as_ref().and_then(|p| p.next.clone()) else {
            return Ok(false);
        };
        self.run_search(self.filters.to_query().with_cursor(Some(cursor)))
            .await?;
        Ok(true)
    }

    /// Move to the previous page of the current results.
    pub async fn prev_page(&mut self) -> Result<bool> {
        let Some(cursor) = self.page.as_ref().and_then(|p| p.prev.clone()) else {
            return Ok(false);
        };
        self.run_search(self.filters.to_query().with_cursor(Some(cursor)))
            .await?;
        Ok(true)
    }

    /// Two-step fetch: a page of ids, then the records for those ids.
    ///
    /// The batch record fetch is skipped entirely when the page is empty.
    /// Displayed state is only replaced once every call has succeeded, so a
    /// failed search leaves the previous results intact.
    async fn run_search(&mut self, query: SearchQuery) -> Result<()> {
        let page = self.session.search(&query).await?;
        debug!(total = page.total, ids = page.result_ids.len(), "search page resolved");

        let dogs = if page.result_ids.is_empty() {
            Vec::new()
        } else {
            self.session.dogs(&page.result_ids).await?
        };

        self.page = Some(page);
        self.dogs = dogs;
        Ok(())
    }

    /// The records currently displayed.
    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    /// The current result page, if a search has completed.
    pub fn page(&self) -> Option<&SearchPage> {
        self.page.as_ref()
    }

    /// The favorites set.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Toggle favorite membership for an id. Purely local.
    pub fn toggle_favorite(&mut self, id: DogId) -> bool {
        self.favorites.toggle(id)
    }

    /// Submit the favorites set to the match endpoint.
    ///
    /// Fails locally with no network call when no favorites are selected.
    /// The winning id is resolved against the currently fetched records;
    /// when pagination has moved away from it, the outcome reports the bare
    /// id instead of a record.
    pub async fn request_match(&mut self) -> Result<MatchOutcome> {
        if self.favorites.is_empty() {
            return Err(InvalidInputError::NoFavorites.into());
        }

        let winner = self.session.find_match(&self.favorites.ids()).await?;

        let outcome = match self.dogs.iter().find(|dog| dog.id == winner) {
            Some(dog) => {
                self.matched = Some(dog.clone());
                MatchOutcome::Found(dog.clone())
            }
            None => MatchOutcome::OffPage(winner),
        };
        Ok(outcome)
    }

    /// The last successfully resolved match, if any.
    pub fn matched(&self) -> Option<&Dog> {
        self.matched.as_ref()
    }

    /// End the session, best-effort.
    ///
    /// A failed logout call is logged, never surfaced; the browser is
    /// consumed either way.
    pub async fn logout(self) {
        if let Err(error) = self.session.logout().await {
            warn!(%error, "logout request failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::auth::SessionCookie;
    use crate::error::{ApiError, Error};
    use crate::types::{PageCursor, ServiceUrl};

    /// Scripted in-memory session recording every network-facing call.
    struct FakeSession {
        service: ServiceUrl,
        cookie: SessionCookie,
        calls: Mutex<Vec<String>>,
        breeds: Mutex<VecDeque<Result<Vec<String>>>>,
        searches: Mutex<VecDeque<Result<SearchPage>>>,
        dog_batches: Mutex<VecDeque<Result<Vec<Dog>>>>,
        matches: Mutex<VecDeque<Result<DogId>>>,
        last_query: Mutex<Option<SearchQuery>>,
    }

    impl FakeSession {
        fn new() -> Self {
            Self {
                service: ServiceUrl::new("https://shelter.example.com").unwrap(),
                cookie: SessionCookie::new("session=test"),
                calls: Mutex::new(Vec::new()),
                breeds: Mutex::new(VecDeque::new()),
                searches: Mutex::new(VecDeque::new()),
                dog_batches: Mutex::new(VecDeque::new()),
                matches: Mutex::new(VecDeque::new()),
                last_query: Mutex::new(None),
            }
        }

        fn record(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn queue_search(&self, result: Result<SearchPage>) {
            self.searches.lock().unwrap().push_back(result);
        }

        fn queue_dogs(&self, result: Result<Vec<Dog>>) {
            self.dog_batches.lock().unwrap().push_back(result);
        }

        fn queue_match(&self, result: Result<DogId>) {
            self.matches.lock().unwrap().push_back(result);
        }
    }

    #[async_trait]
    impl Session for &FakeSession {
        fn service(&self) -> &ServiceUrl {
            &self.service
        }

        fn cookie(&self) -> &SessionCookie {
            &self.cookie
        }

        async fn breeds(&self) -> Result<Vec<String>> {
            self.record("breeds");
            self.breeds
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
            self.record("search");
            *self.last_query.lock().unwrap() = Some(query.clone());
            self.searches
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected search call")
        }

        async fn dogs(&self, ids: &[DogId]) -> Result<Vec<Dog>> {
            self.record("dogs");
            assert!(!ids.is_empty(), "batch fetch called with empty id list");
            self.dog_batches
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected dogs call")
        }

        async fn find_match(&self, _favorites: &[DogId]) -> Result<DogId> {
            self.record("match");
            self.matches
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected match call")
        }

        async fn logout(&self) -> Result<()> {
            self.record("logout");
            Ok(())
        }
    }

    fn id(s: &str) -> DogId {
        DogId::new(s).unwrap()
    }

    fn dog(dog_id: &str, name: &str) -> Dog {
        Dog {
            id: id(dog_id),
            img: format!("https://example.com/{dog_id}.jpg"),
            name: name.to_string(),
            age: 3,
            zip_code: "60601".to_string(),
            breed: "Poodle".to_string(),
        }
    }

    fn page_of(ids: &[&str], next: Option<&str>, prev: Option<&str>) -> SearchPage {
        SearchPage {
            result_ids: ids.iter().map(|s| id(s)).collect(),
            total: ids.len() as u64,
            next: next.map(PageCursor::new),
            prev: prev.map(PageCursor::new),
        }
    }

    fn api_error() -> Error {
        ApiError::new(500).into()
    }

    #[tokio::test]
    async fn search_fetches_records_for_page_ids() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a", "b"], None, None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby"), dog("b", "Bruno")]));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();

        assert_eq!(browser.dogs().len(), 2);
        assert_eq!(browser.page().unwrap().total, 2);
        assert_eq!(session.calls(), vec!["search", "dogs"]);
    }

    #[tokio::test]
    async fn empty_page_skips_record_fetch_and_clears_display() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a"], None, None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby")]));
        session.queue_search(Ok(page_of(&[], None, None)));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();
        assert_eq!(browser.dogs().len(), 1);

        browser.search().await.unwrap();
        assert!(browser.dogs().is_empty());
        // no second "dogs" call
        assert_eq!(session.calls(), vec!["search", "dogs", "search"]);
    }

    #[tokio::test]
    async fn failed_search_preserves_previous_results() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a"], None, None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby")]));
        session.queue_search(Err(api_error()));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();

        assert!(browser.search().await.is_err());
        assert_eq!(browser.dogs().len(), 1);
        assert_eq!(browser.page().unwrap().result_ids.len(), 1);
    }

    #[tokio::test]
    async fn failed_record_fetch_preserves_previous_results() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a"], None, None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby")]));
        session.queue_search(Ok(page_of(&["b"], None, None)));
        session.queue_dogs(Err(api_error()));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();

        assert!(browser.search().await.is_err());
        assert_eq!(browser.dogs()[0].name, "Abby");
    }

    #[tokio::test]
    async fn next_page_forwards_cursor_verbatim() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a"], Some("abc123"), None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby")]));
        session.queue_search(Ok(page_of(&["b"], None, Some("0"))));
        session.queue_dogs(Ok(vec![dog("b", "Bruno")]));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();

        assert!(browser.next_page().await.unwrap());
        let query = session.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(query.from.unwrap().as_str(), "abc123");
    }

    #[tokio::test]
    async fn next_page_without_cursor_is_a_local_no_op() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a"], None, None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby")]));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();

        assert!(!browser.next_page().await.unwrap());
        assert!(!browser.prev_page().await.unwrap());
        assert_eq!(session.calls(), vec!["search", "dogs"]);
    }

    #[tokio::test]
    async fn pagination_keeps_current_filters() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a"], Some("25"), None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby")]));
        session.queue_search(Ok(page_of(&["b"], None, None)));
        session.queue_dogs(Ok(vec![dog("b", "Bruno")]));

        let mut browser = Browser::new(&session);
        browser.filters_mut().breeds = vec!["Poodle".to_string()];
        browser.filters_mut().age_min = Some(2);
        browser.search().await.unwrap();

        browser.next_page().await.unwrap();
        let query = session.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(query.breeds, vec!["Poodle".to_string()]);
        assert_eq!(query.age_min, Some(2));
    }

    #[tokio::test]
    async fn match_with_no_favorites_fails_without_network_call() {
        let session = FakeSession::new();
        let mut browser = Browser::new(&session);

        let err = browser.request_match().await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::NoFavorites)
        ));
        assert!(session.calls().is_empty());
    }

    #[tokio::test]
    async fn match_resolves_against_current_page() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a", "b"], None, None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby"), dog("b", "Bruno")]));
        session.queue_match(Ok(id("b")));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();
        browser.toggle_favorite(id("a"));
        browser.toggle_favorite(id("b"));

        match browser.request_match().await.unwrap() {
            MatchOutcome::Found(dog) => assert_eq!(dog.name, "Bruno"),
            other => panic!("expected Found, got {other:?}"),
        }
        assert_eq!(browser.matched().unwrap().name, "Bruno");
    }

    #[tokio::test]
    async fn match_off_current_page_reports_bare_id() {
        let session = FakeSession::new();
        session.queue_search(Ok(page_of(&["a"], None, None)));
        session.queue_dogs(Ok(vec![dog("a", "Abby")]));
        session.queue_match(Ok(id("gone")));

        let mut browser = Browser::new(&session);
        browser.search().await.unwrap();
        browser.toggle_favorite(id("gone"));

        match browser.request_match().await.unwrap() {
            MatchOutcome::OffPage(winner) => assert_eq!(winner.as_str(), "gone"),
            other => panic!("expected OffPage, got {other:?}"),
        }
        assert!(browser.matched().is_none());
    }

    #[tokio::test]
    async fn breed_load_failure_is_soft() {
        let session = FakeSession::new();
        session
            .breeds
            .lock()
            .unwrap()
            .push_back(Err(api_error()));

        let mut browser = Browser::new(&session);
        browser.load_breeds().await;

        assert!(browser.breeds().is_empty());
    }

    #[tokio::test]
    async fn toggle_favorite_twice_restores_original_set() {
        let session = FakeSession::new();
        let mut browser = Browser::new(&session);

        assert!(browser.toggle_favorite(id("a")));
        assert!(!browser.toggle_favorite(id("a")));
        assert!(browser.favorites().is_empty());
        assert!(session.calls().is_empty());
    }

    #[test]
    fn filters_omit_blank_zip() {
        let filters = Filters {
            zip_code: Some("   ".to_string()),
            ..Filters::default()
        };
        assert!(filters.to_query().zip_code.is_none());
    }

    #[test]
    fn toggle_breed_is_an_involution() {
        let mut filters = Filters::default();
        assert!(filters.toggle_breed("Poodle"));
        assert!(!filters.toggle_breed("Poodle"));
        assert!(filters.breeds.is_empty());
    }
}
