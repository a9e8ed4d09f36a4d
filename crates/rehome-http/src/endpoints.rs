//! Adoption-service endpoint definitions and wire types.

use serde::{Deserialize, Serialize};

use rehome_core::DogId;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST: authenticate and establish the session cookie.
pub const AUTH_LOGIN: &str = "/auth/login";

/// POST: invalidate the server-side session.
pub const AUTH_LOGOUT: &str = "/auth/logout";

/// GET: list known breed names.
pub const DOG_BREEDS: &str = "/dogs/breeds";

/// GET: search for dog ids with filters and pagination.
pub const DOG_SEARCH: &str = "/dogs/search";

/// POST: fetch full records for a batch of ids.
pub const DOG_RECORDS: &str = "/dogs";

/// POST: pick a match from a set of favorite ids.
pub const DOG_MATCH: &str = "/dogs/match";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Response from search.
///
/// `next` and `prev` are opaque pagination links with the cursor token
/// embedded as a query parameter; the session layer extracts the token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_ids: Vec<DogId>,
    pub total: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Response from match.
#[derive(Debug, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub winner: DogId,
}
