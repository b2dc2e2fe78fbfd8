use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, AttendanceRecord, Page, PageQuery};
use tokio::sync::Mutex;
use tracing::info;

use super::{now_timestamp, MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn today(&self) -> RepoResult<AttendanceRecord>;
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<AttendanceRecord>>;
    async fn check_in(&self) -> RepoResult<AttendanceRecord>;
    async fn check_out(&self) -> RepoResult<AttendanceRecord>;
}

/// Keeps today's record apart from the history table; punches only ever
/// touch today's record.
pub struct MockAttendanceRepository {
    today: Mutex<AttendanceRecord>,
    history: MockTable<AttendanceRecord>,
}

impl MockAttendanceRepository {
    pub fn new(today: AttendanceRecord, history: MockTable<AttendanceRecord>) -> Self {
        Self {
            today: Mutex::new(today),
            history,
        }
    }
}

#[async_trait]
impl AttendanceRepository for MockAttendanceRepository {
    async fn today(&self) -> RepoResult<AttendanceRecord> {
        self.history.pause().await;
        Ok(ApiResponse::success(self.today.lock().await.clone()))
    }

    async fn list(&self, _query: &PageQuery) -> RepoResult<Page<AttendanceRecord>> {
        self.history.pause().await;
        Ok(ApiResponse::success(Page::from_records(self.history.all().await)))
    }

    async fn check_in(&self) -> RepoResult<AttendanceRecord> {
        self.history.pause().await;
        let mut today = self.today.lock().await;
        today.check_in_time = Some(now_timestamp());
        info!(date = %today.attendance_date, "checked in");
        Ok(ApiResponse::success(today.clone()))
    }

    async fn check_out(&self) -> RepoResult<AttendanceRecord> {
        self.history.pause().await;
        let mut today = self.today.lock().await;
        today.check_out_time = Some(now_timestamp());
        info!(date = %today.attendance_date, "checked out");
        Ok(ApiResponse::success(today.clone()))
    }
}

pub struct LiveAttendanceRepository {
    api: Arc<ApiClient>,
}

impl LiveAttendanceRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AttendanceRepository for LiveAttendanceRepository {
    async fn today(&self) -> RepoResult<AttendanceRecord> {
        self.api
            .request("/attendance/today", RequestOptions::get())
            .await
    }

    async fn list(&self, query: &PageQuery) -> RepoResult<Page<AttendanceRecord>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size);
        self.api.request("/attendance/list", options).await
    }

    async fn check_in(&self) -> RepoResult<AttendanceRecord> {
        self.api
            .request("/attendance/check-in", RequestOptions::post())
            .await
    }

    async fn check_out(&self) -> RepoResult<AttendanceRecord> {
        self.api
            .request("/attendance/check-out", RequestOptions::post())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::repo::{fixtures, today};

    #[tokio::test]
    async fn punches_stamp_todays_record() {
        let repo = MockAttendanceRepository::new(
            fixtures::attendance_today(),
            MockTable::new(fixtures::attendance_history(), Duration::ZERO),
        );

        let before = repo.today().await.unwrap().into_data().unwrap();
        assert_eq!(before.attendance_date, today());
        assert!(before.check_out_time.is_none());

        let out = repo.check_out().await.unwrap().into_data().unwrap();
        let stamp = out.check_out_time.unwrap();
        assert!(stamp.starts_with(&today()));
        assert_eq!(stamp.len(), "2023-10-27T18:00:00".len());

        let after = repo.today().await.unwrap().into_data().unwrap();
        assert_eq!(after.check_out_time.as_deref(), Some(stamp.as_str()));

        let history = repo.list(&PageQuery::default()).await.unwrap().into_data().unwrap();
        assert_eq!(history.total, 4);
    }
}
