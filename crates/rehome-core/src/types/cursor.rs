//! Pagination cursor type.

use std::fmt;

/// An opaque pagination token issued by the search endpoint.
///
/// The service returns `next`/`prev` pagination links with the token
/// embedded as the `from` query parameter. The token is extracted from the
/// link and forwarded back verbatim on the next query; its contents are
/// never interpreted or validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    /// Create a cursor from a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Extract the cursor embedded in a pagination link.
    ///
    /// Returns `None` if the link carries no `from` parameter.
    pub fn from_link(link: &str) -> Option<Self> {
        let (_, query) = link.split_once('?')?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "from")
            .map(|(_, value)| Self(value.into_owned()))
    }

    /// Returns the token value, to be sent back as the `from` parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_link() {
        let cursor = PageCursor::from_link("/dogs/search?size=25&from=abc123").unwrap();
        assert_eq!(cursor.as_str(), "abc123");
    }

    #[test]
    fn extracts_token_regardless_of_parameter_order() {
        let cursor =
            PageCursor::from_link("/dogs/search?from=50&sort=breed%3Aasc&size=25").unwrap();
        assert_eq!(cursor.as_str(), "50");
    }

    #[test]
    fn link_without_cursor_yields_none() {
        assert!(PageCursor::from_link("/dogs/search?size=25").is_none());
        assert!(PageCursor::from_link("/dogs/search").is_none());
    }

    #[test]
    fn token_round_trips_unmodified() {
        let cursor = PageCursor::new("abc123");
        assert_eq!(cursor.as_str(), "abc123");
    }
}
