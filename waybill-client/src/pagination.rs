//! Paginated fetcher.
//!
//! Drives the single-request executor against a cursor-paginated listing
//! endpoint until the caller's requested item count is satisfied or the
//! server reports no further pages.

use serde_json::Value;
use waybill_core::{PageEnvelope, Pagination};

use crate::error::ClientError;
use crate::transport::{RequestSpec, ShippoClient};

impl ShippoClient {
    /// Walk a listing endpoint page by page and return a flattened,
    /// order-preserving sequence of results.
    ///
    /// Each traversed page costs exactly one request; no page is fetched
    /// twice and results are neither deduplicated nor re-sorted. With
    /// `return_all` unset the walk stops as soon as `limit` items are
    /// collected, truncating any over-fetch from the final page.
    ///
    /// Termination is driven entirely by the server's `next` cursor.
    /// An upstream that keeps reporting further pages forever keeps this
    /// loop running forever; that contract violation is not guarded here.
    pub async fn request_paged(
        &self,
        spec: RequestSpec,
        pagination: Pagination,
    ) -> Result<Vec<Value>, ClientError> {
        let page_size = pagination.page_size();
        let mut collected: Vec<Value> = Vec::new();
        let mut page: u64 = 1;

        loop {
            let page_spec = spec
                .clone()
                .with_query("page", page.to_string())
                .with_query("results", page_size.to_string());
            let envelope: PageEnvelope =
                serde_json::from_value(self.request(page_spec).await?)?;
            let has_next = envelope.has_next();
            collected.extend(envelope.results);

            if !pagination.return_all && collected.len() >= pagination.limit as usize {
                collected.truncate(pagination.limit as usize);
                return Ok(collected);
            }
            if !has_next {
                return Ok(collected);
            }
            page += 1;
        }
    }

    /// Fetch the first page only, sized to `limit`.
    ///
    /// A few listing endpoints (refunds, carrier accounts, webhooks)
    /// short-circuit to a single request when the caller asked for a
    /// bounded listing.
    pub(crate) async fn request_first_page(
        &self,
        spec: RequestSpec,
        limit: u32,
    ) -> Result<Vec<Value>, ClientError> {
        let envelope: PageEnvelope = serde_json::from_value(
            self.request(spec.with_query("results", limit.to_string()))
                .await?,
        )?;
        Ok(envelope.results)
    }
}
