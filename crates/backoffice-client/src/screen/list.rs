use std::sync::atomic::{AtomicU64, Ordering};

use backoffice_shared::{Page, PageQuery};
use tracing::{debug, warn};

use crate::repo::RepoResult;

/// Identifies one load of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out increasing tickets and remembers the latest one.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Rows of one list page plus its load status.
///
/// Every load takes a [`Ticket`]; a response is applied only if no newer
/// load started in the meantime, so a slow early response cannot overwrite
/// a later one.
#[derive(Debug)]
pub struct ListState<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub loading: bool,
    /// Message of the last failed load, cleared by the next success.
    pub error: Option<String>,
    pub query: PageQuery,
    sequencer: RequestSequencer,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(PageQuery::default())
    }
}

impl<T> ListState<T> {
    pub fn new(query: PageQuery) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            query,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.loading = true;
        self.sequencer.issue()
    }

    /// Apply the outcome of the load `ticket`. Returns `false` when the
    /// response was stale and dropped.
    pub fn apply(&mut self, ticket: Ticket, result: RepoResult<Page<T>>) -> bool {
        if !self.sequencer.is_current(ticket) {
            debug!(?ticket, "dropping stale list response");
            return false;
        }

        self.loading = false;
        match result.map(|resp| resp.into_data()) {
            Ok(Ok(page)) => {
                self.total = page.total;
                self.records = page.records;
                self.error = None;
            }
            Ok(Err(e)) => {
                warn!(error = %e, "list request rejected");
                self.error = Some(e.to_string());
            }
            Err(e) => {
                warn!(error = %e, "list request failed");
                self.error = Some(e.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use backoffice_shared::ApiResponse;

    use super::*;
    use crate::error::ApiError;

    fn page(ids: &[i64]) -> RepoResult<Page<i64>> {
        Ok(ApiResponse::success(Page::from_records(ids.to_vec())))
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut list = ListState::default();
        let first = list.begin_load();
        let second = list.begin_load();

        assert!(list.apply(second, page(&[2])));
        assert!(!list.apply(first, page(&[1])));
        assert_eq!(list.records, vec![2]);
        assert!(!list.loading);
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let mut list: ListState<i64> = ListState::default();
        let first = list.begin_load();
        let _second = list.begin_load();
        assert!(!list.apply(first, page(&[1])));
        assert!(list.loading);
    }

    #[test]
    fn failures_keep_rows_and_record_error() {
        let mut list = ListState::default();
        let t = list.begin_load();
        list.apply(t, page(&[1, 2]));

        let t = list.begin_load();
        list.apply(t, Err(ApiError::Status { status: 500, text: "Internal Server Error".into() }));
        assert_eq!(list.records, vec![1, 2]);
        assert_eq!(list.error.as_deref(), Some("API Error: Internal Server Error"));

        let t = list.begin_load();
        list.apply(t, Ok(ApiResponse::failure(500, "boom")));
        assert!(list.error.is_some());

        let t = list.begin_load();
        list.apply(t, page(&[]));
        assert_eq!(list.error, None);
        assert_eq!(list.total, 0);
    }
}
