//! Search query construction.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};
use crate::types::PageCursor;

/// Fixed number of results per page.
pub const PAGE_SIZE: u32 = 25;

/// Field the search results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Breed,
    Name,
    Age,
}

impl SortField {
    fn as_str(self) -> &'static str {
        match self {
            SortField::Breed => "breed",
            SortField::Name => "name",
            SortField::Age => "age",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breed" => Ok(SortField::Breed),
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            other => Err(InvalidInputError::SortField {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// Direction the search results are ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(InvalidInputError::SortDirection {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// Sort specification, rendered as `field:direction` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Breed,
            direction: SortDirection::Asc,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// A search query against the dog catalog.
///
/// Rebuilt fresh from the current filter values on every search action.
/// Unset filters are omitted from the query entirely; the service treats
/// absence as "no constraint".
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Breed filter; empty means no breed constraint.
    pub breeds: Vec<String>,

    /// Minimum age in years, inclusive.
    pub age_min: Option<u8>,

    /// Maximum age in years, inclusive.
    pub age_max: Option<u8>,

    /// Postal code filter.
    pub zip_code: Option<String>,

    /// Sort specification; always sent.
    pub sort: Sort,

    /// Opaque pagination cursor from a previous page's link.
    pub from: Option<PageCursor>,
}

impl SearchQuery {
    /// Create an unfiltered query with the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pagination cursor, keeping every filter identical.
    pub fn with_cursor(mut self, cursor: Option<PageCursor>) -> Self {
        self.from = cursor;
        self
    }

    /// Render the query as URL parameter pairs.
    ///
    /// Unset filters produce no pair at all; `sort` and `size` are always
    /// present, and `size` is pinned to [`PAGE_SIZE`].
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        for breed in &self.breeds {
            params.push(("breeds", breed.clone()));
        }
        if let Some(min) = self.age_min {
            params.push(("ageMin", min.to_string()));
        }
        if let Some(max) = self.age_max {
            params.push(("ageMax", max.to_string()));
        }
        if let Some(zip) = &self.zip_code {
            params.push(("zipCodes", zip.clone()));
        }
        if let Some(cursor) = &self.from {
            params.push(("from", cursor.as_str().to_string()));
        }

        params.push(("sort", self.sort.to_string()));
        params.push(("size", PAGE_SIZE.to_string()));

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_query_has_only_sort_and_size() {
        let params = SearchQuery::new().to_params();
        assert_eq!(
            params,
            vec![
                ("sort", "breed:asc".to_string()),
                ("size", "25".to_string()),
            ]
        );
    }

    #[test]
    fn filters_appear_only_when_set() {
        let query = SearchQuery {
            breeds: vec!["Poodle".to_string()],
            age_min: Some(2),
            ..SearchQuery::new()
        };
        let params = query.to_params();

        assert!(params.contains(&("breeds", "Poodle".to_string())));
        assert!(params.contains(&("ageMin", "2".to_string())));
        assert!(!params.iter().any(|(key, _)| *key == "ageMax"));
        assert!(!params.iter().any(|(key, _)| *key == "zipCodes"));
        assert!(!params.iter().any(|(key, _)| *key == "from"));
    }

    #[test]
    fn breeds_repeat_as_separate_pairs() {
        let query = SearchQuery {
            breeds: vec!["Poodle".to_string(), "Beagle".to_string()],
            ..SearchQuery::new()
        };
        let breeds: Vec<_> = query
            .to_params()
            .into_iter()
            .filter(|(key, _)| *key == "breeds")
            .collect();
        assert_eq!(breeds.len(), 2);
    }

    #[test]
    fn cursor_token_is_forwarded_verbatim() {
        let query = SearchQuery::new().with_cursor(Some(PageCursor::new("abc123")));
        let params = query.to_params();
        assert!(params.contains(&("from", "abc123".to_string())));
    }

    #[test]
    fn with_cursor_preserves_filters() {
        let query = SearchQuery {
            breeds: vec!["Poodle".to_string()],
            ..SearchQuery::new()
        };
        let paged = query.with_cursor(Some(PageCursor::new("25")));
        assert_eq!(paged.breeds, vec!["Poodle".to_string()]);
    }

    #[test]
    fn sort_renders_field_and_direction() {
        let sort = Sort {
            field: SortField::Age,
            direction: SortDirection::Desc,
        };
        assert_eq!(sort.to_string(), "age:desc");
    }

    #[test]
    fn sort_field_parses_known_names() {
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert!("color".parse::<SortField>().is_err());
    }
}
