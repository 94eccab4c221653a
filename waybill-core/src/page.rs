//! Pagination envelope and caller-side pagination contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hard upper bound on the per-request page size accepted upstream.
pub const PAGE_SIZE_CAP: u32 = 100;

/// The envelope every Shippo listing endpoint returns.
///
/// `next` is a cursor URL for the following page and is null (or absent)
/// exactly on the last page. Individual results stay opaque JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Value>,
}

impl PageEnvelope {
    /// True when the server reports a further page. An empty-string
    /// cursor counts as "no further page", like a missing one.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

/// How much of a listing the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Walk every page to exhaustion instead of stopping at `limit`.
    pub return_all: bool,
    /// Maximum number of items to return when `return_all` is false.
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            return_all: true,
            limit: PAGE_SIZE_CAP,
        }
    }
}

impl Pagination {
    /// Fetch every page.
    pub fn all() -> Self {
        Self::default()
    }

    /// Fetch up to `limit` items.
    pub fn limited(limit: u32) -> Self {
        Self {
            return_all: false,
            limit,
        }
    }

    /// Per-request page size: the caller's limit, capped by the API.
    pub fn page_size(&self) -> u32 {
        self.limit.min(PAGE_SIZE_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_tolerates_missing_fields() {
        let envelope: PageEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.results.is_empty());
        assert!(!envelope.has_next());
    }

    #[test]
    fn has_next_treats_null_and_empty_as_last_page() {
        let last: PageEnvelope =
            serde_json::from_value(json!({"next": null, "results": []})).unwrap();
        assert!(!last.has_next());

        let blank: PageEnvelope =
            serde_json::from_value(json!({"next": "", "results": []})).unwrap();
        assert!(!blank.has_next());

        let more: PageEnvelope = serde_json::from_value(
            json!({"next": "https://api.goshippo.com/addresses?page=2", "results": []}),
        )
        .unwrap();
        assert!(more.has_next());
    }

    #[test]
    fn page_size_is_capped() {
        assert_eq!(Pagination::limited(25).page_size(), 25);
        assert_eq!(Pagination::limited(500).page_size(), 100);
        assert_eq!(Pagination::all().page_size(), 100);
    }
}
