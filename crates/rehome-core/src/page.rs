//! Search result page.

use crate::types::{DogId, PageCursor};

/// One page of search results.
///
/// Holds ids in server-defined order plus the cursors extracted from the
/// server's pagination links. Transient; each new query supersedes it
/// entirely.
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Matching ids for this page, in server order.
    pub result_ids: Vec<DogId>,

    /// Total number of matches across all pages.
    pub total: u64,

    /// Cursor for the next page, if one exists.
    pub next: Option<PageCursor>,

    /// Cursor for the previous page, if one exists.
    pub prev: Option<PageCursor>,
}

impl SearchPage {
    /// Returns true if this page matched no records.
    pub fn is_empty(&self) -> bool {
        self.result_ids.is_empty()
    }
}
