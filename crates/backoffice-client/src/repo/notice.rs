use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, Notice, Page, PageQuery};

use super::{MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Newest first, at most `limit` entries.
    async fn latest(&self, limit: u32) -> RepoResult<Vec<Notice>>;
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Notice>>;
}

pub struct MockNoticeRepository {
    table: MockTable<Notice>,
}

impl MockNoticeRepository {
    pub fn new(table: MockTable<Notice>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl NoticeRepository for MockNoticeRepository {
    async fn latest(&self, limit: u32) -> RepoResult<Vec<Notice>> {
        self.table.pause().await;
        let mut notices = self.table.all().await;
        // ISO timestamps sort lexicographically.
        notices.sort_by(|a, b| b.publish_time.cmp(&a.publish_time));
        notices.truncate(limit as usize);
        Ok(ApiResponse::success(notices))
    }

    async fn list(&self, _query: &PageQuery) -> RepoResult<Page<Notice>> {
        self.table.pause().await;
        Ok(ApiResponse::success(Page::from_records(self.table.all().await)))
    }
}

pub struct LiveNoticeRepository {
    api: Arc<ApiClient>,
}

impl LiveNoticeRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl NoticeRepository for LiveNoticeRepository {
    async fn latest(&self, limit: u32) -> RepoResult<Vec<Notice>> {
        self.api
            .request("/notice/latest", RequestOptions::get().query("limit", limit))
            .await
    }

    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Notice>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size);
        self.api.request("/notice/list", options).await
    }
}
