//! Adoption service trait.

use async_trait::async_trait;

use crate::auth::Credentials;
use crate::types::ServiceUrl;
use crate::Result;

use super::Session;

/// An adoption service implementation.
#[async_trait]
pub trait AdoptionService: Send + Sync {
    /// Session type for this service.
    type Session: Session;

    /// Returns the base URL for this instance.
    fn url(&self) -> &ServiceUrl;

    /// Authenticate with the service and create a new session.
    ///
    /// The service establishes the session via an opaque cookie that every
    /// subsequent request carries implicitly.
    async fn login(&self, credentials: Credentials) -> Result<Self::Session>;
}
