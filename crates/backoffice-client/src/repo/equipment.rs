use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, Equipment, Page, PageQuery};

use super::{MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Equipment>>;
}

pub struct MockEquipmentRepository {
    table: MockTable<Equipment>,
}

impl MockEquipmentRepository {
    pub fn new(table: MockTable<Equipment>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl EquipmentRepository for MockEquipmentRepository {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Equipment>> {
        self.table.pause().await;
        let records = match query.status_filter() {
            Some(status) => self.table.filter(|e| e.status == status).await,
            None => self.table.all().await,
        };
        Ok(ApiResponse::success(Page::from_records(records)))
    }
}

pub struct LiveEquipmentRepository {
    api: Arc<ApiClient>,
}

impl LiveEquipmentRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EquipmentRepository for LiveEquipmentRepository {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Equipment>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size)
            .query_opt("status", query.status);
        self.api.request("/equipment/list", options).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::repo::fixtures;

    #[tokio::test]
    async fn filters_by_status() {
        let repo = MockEquipmentRepository::new(MockTable::new(fixtures::equipment(), Duration::ZERO));
        let available = repo
            .list(&PageQuery::default().with_status(1))
            .await
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(available.total, 3);
    }
}
