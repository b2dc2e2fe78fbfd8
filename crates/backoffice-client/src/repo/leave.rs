use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, ApprovalStatus, LeaveApply, LeaveRecord, Page, PageQuery};
use serde_json::Value;
use tracing::info;

use super::{MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait LeaveRepository: Send + Sync {
    async fn my(&self, query: &PageQuery) -> RepoResult<Page<LeaveRecord>>;
    /// Applications waiting for a decision.
    async fn todo(&self, query: &PageQuery) -> RepoResult<Page<LeaveRecord>>;
    async fn apply(&self, application: &LeaveApply) -> RepoResult<Value>;
    async fn approve(&self, id: i64, approved: bool, comment: &str) -> RepoResult<Value>;
}

pub struct MockLeaveRepository {
    table: MockTable<LeaveRecord>,
}

impl MockLeaveRepository {
    pub fn new(table: MockTable<LeaveRecord>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl LeaveRepository for MockLeaveRepository {
    async fn my(&self, _query: &PageQuery) -> RepoResult<Page<LeaveRecord>> {
        self.table.pause().await;
        Ok(ApiResponse::success(Page::from_records(self.table.all().await)))
    }

    async fn todo(&self, _query: &PageQuery) -> RepoResult<Page<LeaveRecord>> {
        self.table.pause().await;
        let pending = ApprovalStatus::Pending.code();
        let records = self.table.filter(|l| l.status == pending).await;
        Ok(ApiResponse::success(Page::from_records(records)))
    }

    async fn apply(&self, application: &LeaveApply) -> RepoResult<Value> {
        self.table.pause().await;
        let record = LeaveRecord {
            id: self.table.next_id(),
            user_id: 1,
            user_name: "Admin User".into(),
            leave_type: application.leave_type,
            start_time: application.start_time.clone(),
            end_time: application.end_time.clone(),
            reason: application.reason.clone(),
            status: ApprovalStatus::Pending.code(),
            approval_remark: None,
        };
        self.table.append(record).await;
        Ok(ApiResponse::ok())
    }

    async fn approve(&self, id: i64, approved: bool, comment: &str) -> RepoResult<Value> {
        self.table.pause().await;
        let status = if approved {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Rejected
        };
        let decided = self
            .table
            .update(id, |l| {
                l.status = status.code();
                l.approval_remark = Some(comment.to_string());
            })
            .await;
        if decided.is_some() {
            info!(id, ?status, "leave decided");
        }
        Ok(ApiResponse::ok())
    }
}

pub struct LiveLeaveRepository {
    api: Arc<ApiClient>,
}

impl LiveLeaveRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl LeaveRepository for LiveLeaveRepository {
    async fn my(&self, query: &PageQuery) -> RepoResult<Page<LeaveRecord>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size);
        self.api.request("/leave/my", options).await
    }

    async fn todo(&self, query: &PageQuery) -> RepoResult<Page<LeaveRecord>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size);
        self.api.request("/leave/approval/todo", options).await
    }

    async fn apply(&self, application: &LeaveApply) -> RepoResult<Value> {
        self.api
            .request("/leave/apply", RequestOptions::post().json(application)?)
            .await
    }

    async fn approve(&self, id: i64, approved: bool, comment: &str) -> RepoResult<Value> {
        let options = RequestOptions::post()
            .query("approved", approved)
            .query("comment", comment);
        self.api
            .request(&format!("/leave/approve/{id}"), options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use backoffice_shared::LEAVE_SICK;

    use super::*;
    use crate::repo::fixtures;

    fn repo() -> MockLeaveRepository {
        MockLeaveRepository::new(MockTable::new(fixtures::leaves(), Duration::ZERO))
    }

    async fn todo_ids(repo: &MockLeaveRepository) -> Vec<i64> {
        let page = repo.todo(&PageQuery::default()).await.unwrap().into_data().unwrap();
        page.records.iter().map(|l| l.id).collect()
    }

    #[tokio::test]
    async fn apply_lands_in_todo() {
        let repo = repo();
        assert_eq!(todo_ids(&repo).await, [2, 3]);

        let application = LeaveApply {
            leave_type: LEAVE_SICK,
            start_time: "2023-12-01".into(),
            end_time: "2023-12-01".into(),
            reason: "Dentist".into(),
        };
        repo.apply(&application).await.unwrap();
        assert_eq!(todo_ids(&repo).await, [2, 3, 5]);
    }

    #[tokio::test]
    async fn approve_and_reject() {
        let repo = repo();
        repo.approve(2, true, "Get well").await.unwrap();
        repo.approve(3, false, "Busy week").await.unwrap();
        assert!(todo_ids(&repo).await.is_empty());

        let all = repo.my(&PageQuery::default()).await.unwrap().into_data().unwrap();
        let rejected = all.records.iter().find(|l| l.id == 3).unwrap();
        assert_eq!(rejected.status, 2);
        assert_eq!(rejected.approval_remark.as_deref(), Some("Busy week"));
    }
}
