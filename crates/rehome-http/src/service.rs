//! HTTP-backed adoption service implementation.

use async_trait::async_trait;

use rehome_core::traits::AdoptionService;
use rehome_core::{Credentials, Result, ServiceUrl};

use crate::client::HttpClient;
use crate::endpoints::{AUTH_LOGIN, LoginRequest};
use crate::session::HttpSession;

/// A network-backed adoption service.
#[derive(Debug, Clone)]
pub struct HttpService {
    service: ServiceUrl,
    client: HttpClient,
}

impl HttpService {
    /// Create a new HTTP service for the given base URL.
    pub fn new(service: ServiceUrl) -> Self {
        let client = HttpClient::new(service.clone());
        Self { service, client }
    }
}

#[async_trait]
impl AdoptionService for HttpService {
    type Session = HttpSession;

    fn url(&self) -> &ServiceUrl {
        &self.service
    }

    async fn login(&self, credentials: Credentials) -> Result<Self::Session> {
        let request = LoginRequest {
            name: credentials.name(),
            email: credentials.email(),
        };

        let cookie = self.client.post_for_cookie(AUTH_LOGIN, &request).await?;

        Ok(HttpSession::new(self.client.clone(), self.service.clone(), cookie))
    }
}
