//! rehome-core - Core types and traits for the dog-adoption client toolkit.

pub mod auth;
pub mod browse;
pub mod dog;
pub mod error;
pub mod favorites;
pub mod page;
pub mod query;
pub mod traits;
pub mod types;

pub use auth::{Credentials, SessionCookie};
pub use browse::{Browser, Filters, MatchOutcome};
pub use dog::Dog;
pub use error::Error;
pub use favorites::Favorites;
pub use page::SearchPage;
pub use query::{PAGE_SIZE, SearchQuery, Sort, SortDirection, SortField};
pub use traits::{AdoptionService, Session};
pub use types::{DogId, PageCursor, ServiceUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
