//! Service base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for the adoption service.
///
/// Network URLs must use HTTPS (or HTTP for localhost, which the mock-server
/// tests rely on).
///
/// # Example
///
/// ```
/// use rehome_core::ServiceUrl;
///
/// let service = ServiceUrl::new("https://frontend-take-home-service.fetch.com").unwrap();
/// assert_eq!(service.api_url("/dogs/search"),
///            "https://frontend-take-home-service.fetch.com/dogs/search");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Create a new service URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full endpoint URL for a given API path.
    pub fn api_url(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so strip it when joining the endpoint path
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if url.scheme() != "https" && !(url.scheme() == "http" && is_localhost) {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let service = ServiceUrl::new("https://frontend-take-home-service.fetch.com").unwrap();
        assert_eq!(service.host(), Some("frontend-take-home-service.fetch.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let service = ServiceUrl::new("http://localhost:8080").unwrap();
        assert_eq!(service.host(), Some("localhost"));
    }

    #[test]
    fn api_url_construction() {
        let service = ServiceUrl::new("https://frontend-take-home-service.fetch.com").unwrap();
        assert_eq!(
            service.api_url("/auth/login"),
            "https://frontend-take-home-service.fetch.com/auth/login"
        );
    }

    #[test]
    fn normalizes_trailing_slash_in_api_url() {
        let service = ServiceUrl::new("https://frontend-take-home-service.fetch.com/").unwrap();
        assert_eq!(
            service.api_url("/dogs/breeds"),
            "https://frontend-take-home-service.fetch.com/dogs/breeds"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ServiceUrl::new("http://frontend-take-home-service.fetch.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServiceUrl::new("/dogs/search").is_err());
    }
}
