use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, Page, PageQuery, Role, RoleDraft};
use serde_json::Value;

use super::{now_timestamp, MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Role>>;
    async fn add(&self, draft: &RoleDraft) -> RepoResult<Value>;
    async fn update(&self, id: i64, draft: &RoleDraft) -> RepoResult<Value>;
    async fn delete(&self, id: i64) -> RepoResult<Value>;
}

pub struct MockRoleRepository {
    table: MockTable<Role>,
}

impl MockRoleRepository {
    pub fn new(table: MockTable<Role>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn list(&self, _query: &PageQuery) -> RepoResult<Page<Role>> {
        self.table.pause().await;
        Ok(ApiResponse::success(Page::from_records(self.table.all().await)))
    }

    async fn add(&self, draft: &RoleDraft) -> RepoResult<Value> {
        self.table.pause().await;
        let role = Role {
            id: self.table.next_id(),
            role_name: draft.role_name.clone().unwrap_or_default(),
            role_code: draft.role_code.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
            status: 1,
            create_time: now_timestamp(),
        };
        self.table.append(role).await;
        Ok(ApiResponse::ok())
    }

    async fn update(&self, id: i64, draft: &RoleDraft) -> RepoResult<Value> {
        self.table.pause().await;
        self.table
            .update(id, |r| {
                if let Some(v) = &draft.role_name {
                    r.role_name = v.clone();
                }
                if let Some(v) = &draft.role_code {
                    r.role_code = v.clone();
                }
                if let Some(v) = &draft.description {
                    r.description = v.clone();
                }
                if let Some(v) = draft.status {
                    r.status = v;
                }
            })
            .await;
        Ok(ApiResponse::ok())
    }

    async fn delete(&self, id: i64) -> RepoResult<Value> {
        self.table.pause().await;
        self.table.remove(id).await;
        Ok(ApiResponse::ok())
    }
}

pub struct LiveRoleRepository {
    api: Arc<ApiClient>,
}

impl LiveRoleRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RoleRepository for LiveRoleRepository {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Role>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size);
        self.api.request("/role/list", options).await
    }

    async fn add(&self, draft: &RoleDraft) -> RepoResult<Value> {
        self.api
            .request("/role", RequestOptions::post().json(draft)?)
            .await
    }

    async fn update(&self, id: i64, draft: &RoleDraft) -> RepoResult<Value> {
        self.api
            .request(&format!("/role/{id}"), RequestOptions::put().json(draft)?)
            .await
    }

    async fn delete(&self, id: i64) -> RepoResult<Value> {
        self.api
            .request(&format!("/role/{id}"), RequestOptions::delete())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::repo::fixtures;

    #[tokio::test]
    async fn add_appends_and_delete_removes() {
        let repo = MockRoleRepository::new(MockTable::new(fixtures::roles(), Duration::ZERO));
        let draft = RoleDraft {
            role_name: Some("Finance".into()),
            role_code: Some("finance".into()),
            ..Default::default()
        };
        repo.add(&draft).await.unwrap();

        let roles = repo.list(&PageQuery::default()).await.unwrap().into_data().unwrap();
        let last = roles.records.last().unwrap();
        assert_eq!(last.id, 5);
        assert_eq!(last.role_code, "finance");
        assert_eq!(last.status, 1);
        assert!(!last.create_time.is_empty());

        repo.delete(5).await.unwrap();
        let roles = repo.list(&PageQuery::default()).await.unwrap().into_data().unwrap();
        assert_eq!(roles.total, 4);
    }
}
