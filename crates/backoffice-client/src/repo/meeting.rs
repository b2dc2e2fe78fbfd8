use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, MeetingReservation, Page, PageQuery};

use super::{MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Reservations of the signed-in user.
    async fn my(&self, query: &PageQuery) -> RepoResult<Page<MeetingReservation>>;
}

pub struct MockMeetingRepository {
    table: MockTable<MeetingReservation>,
}

impl MockMeetingRepository {
    pub fn new(table: MockTable<MeetingReservation>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl MeetingRepository for MockMeetingRepository {
    async fn my(&self, _query: &PageQuery) -> RepoResult<Page<MeetingReservation>> {
        self.table.pause().await;
        Ok(ApiResponse::success(Page::from_records(self.table.all().await)))
    }
}

pub struct LiveMeetingRepository {
    api: Arc<ApiClient>,
}

impl LiveMeetingRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MeetingRepository for LiveMeetingRepository {
    async fn my(&self, query: &PageQuery) -> RepoResult<Page<MeetingReservation>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size);
        self.api.request("/meeting/my", options).await
    }
}
