//! HTTP client for adoption-service requests.

use reqwest::RequestBuilder;
use reqwest::header::{COOKIE, SET_COOKIE};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use rehome_core::error::{ApiError, AuthError, TransportError};
use rehome_core::{Error, Result, ServiceUrl, SessionCookie};

/// Thin wrapper over reqwest for talking to the adoption service.
///
/// Requests optionally carry the opaque session cookie; any non-success
/// status maps uniformly to [`ApiError`] by status code alone.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    service: ServiceUrl,
}

impl HttpClient {
    /// Create a new client for the given service.
    pub fn new(service: ServiceUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rehome/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, service }
    }

    /// Make a GET request with query parameters, expecting a JSON body.
    #[instrument(skip(self, cookie), fields(service = %self.service))]
    pub async fn get_json<R>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        cookie: &SessionCookie,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.service.api_url(path);
        debug!(path, "GET");
        trace!(?params, "query parameters");

        let request = self.client.get(&url).query(params);
        let response = attach_cookie(request, cookie)
            .send()
            .await
            .map_err(transport_error)?;

        handle_response(response).await
    }

    /// Make a POST request with a JSON body, expecting a JSON body back.
    #[instrument(skip(self, body, cookie), fields(service = %self.service))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B, cookie: &SessionCookie) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.service.api_url(path);
        debug!(path, "POST");

        let request = self.client.post(&url).json(body);
        let response = attach_cookie(request, cookie)
            .send()
            .await
            .map_err(transport_error)?;

        handle_response(response).await
    }

    /// Make a POST request with no body, ignoring any response body.
    #[instrument(skip(self, cookie), fields(service = %self.service))]
    pub async fn post_empty(&self, path: &str, cookie: &SessionCookie) -> Result<()> {
        let url = self.service.api_url(path);
        debug!(path, "POST (empty)");

        let request = self.client.post(&url);
        let response = attach_cookie(request, cookie)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::new(status.as_u16()).into())
        }
    }

    /// POST credentials and capture the session cookie the service sets.
    ///
    /// The cookie pair is taken verbatim from each `Set-Cookie` header
    /// (attributes stripped) and never parsed further.
    #[instrument(skip(self, body), fields(service = %self.service))]
    pub async fn post_for_cookie<B>(&self, path: &str, body: &B) -> Result<SessionCookie>
    where
        B: Serialize,
    {
        let url = self.service.api_url(path);
        debug!(path, "POST (login)");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(status.as_u16()).into());
        }

        let pairs: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_string())
            .filter(|pair| !pair.is_empty())
            .collect();

        if pairs.is_empty() {
            return Err(AuthError::MissingCookie.into());
        }

        Ok(SessionCookie::new(pairs.join("; ")))
    }
}

/// Attach the session cookie header to a request.
fn attach_cookie(request: RequestBuilder, cookie: &SessionCookie) -> RequestBuilder {
    request.header(COOKIE, cookie.as_str())
}

/// Handle a response, parsing the JSON body or mapping the error status.
async fn handle_response<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    trace!(status = %status, "response");

    if status.is_success() {
        response.json::<R>().await.map_err(transport_error)
    } else {
        Err(ApiError::new(status.as_u16()).into())
    }
}

/// Classify a reqwest error into the core transport taxonomy.
fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let service = ServiceUrl::new("https://frontend-take-home-service.fetch.com").unwrap();
        let client = HttpClient::new(service.clone());
        assert_eq!(client.service.as_str(), service.as_str());
    }
}
