use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, Dept};

use super::{MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait DeptRepository: Send + Sync {
    async fn all(&self) -> RepoResult<Vec<Dept>>;
}

/// Shares its table with the employee mock, which resolves `deptName` from it.
pub struct MockDeptRepository {
    table: Arc<MockTable<Dept>>,
}

impl MockDeptRepository {
    pub fn new(table: Arc<MockTable<Dept>>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl DeptRepository for MockDeptRepository {
    async fn all(&self) -> RepoResult<Vec<Dept>> {
        self.table.pause().await;
        Ok(ApiResponse::success(self.table.all().await))
    }
}

pub struct LiveDeptRepository {
    api: Arc<ApiClient>,
}

impl LiveDeptRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DeptRepository for LiveDeptRepository {
    async fn all(&self) -> RepoResult<Vec<Dept>> {
        self.api.request("/dept/all", RequestOptions::get()).await
    }
}
