use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, Contract, ContractDraft, ContractStat, Page, PageQuery};
use chrono::Datelike;
use serde_json::Value;

use super::{today, MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Contract>>;
    async fn add(&self, draft: &ContractDraft) -> RepoResult<Value>;
    async fn update(&self, id: i64, draft: &ContractDraft) -> RepoResult<Value>;
    async fn statistics(&self) -> RepoResult<Vec<ContractStat>>;
}

pub struct MockContractRepository {
    table: MockTable<Contract>,
}

impl MockContractRepository {
    pub fn new(table: MockTable<Contract>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl ContractRepository for MockContractRepository {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Contract>> {
        self.table.pause().await;
        let records = match query.status_filter() {
            Some(status) => self.table.filter(|c| c.contract_status == status).await,
            None => self.table.all().await,
        };
        Ok(ApiResponse::success(Page::from_records(records)))
    }

    async fn add(&self, draft: &ContractDraft) -> RepoResult<Value> {
        self.table.pause().await;
        let id = self.table.next_id();
        let year = chrono::Local::now().year();
        let contract = Contract {
            id,
            contract_no: format!("CTR-{year}-{id:03}"),
            contract_name: draft.contract_name.clone().unwrap_or_default(),
            amount: draft.amount.unwrap_or(0.0),
            party_a: "Our Company".into(),
            party_b: draft.party_b.clone().unwrap_or_else(|| "Client".into()),
            sign_date: today(),
            end_date: draft.end_date.clone().unwrap_or_else(today),
            contract_status: draft.contract_status.unwrap_or(1),
            approval_status: 0,
        };
        self.table.prepend(contract).await;
        Ok(ApiResponse::ok())
    }

    async fn update(&self, id: i64, draft: &ContractDraft) -> RepoResult<Value> {
        self.table.pause().await;
        self.table
            .update(id, |c| {
                if let Some(v) = &draft.contract_name {
                    c.contract_name = v.clone();
                }
                if let Some(v) = draft.amount {
                    c.amount = v;
                }
                if let Some(v) = &draft.party_b {
                    c.party_b = v.clone();
                }
                if let Some(v) = &draft.end_date {
                    c.end_date = v.clone();
                }
                if let Some(v) = draft.contract_status {
                    c.contract_status = v;
                }
            })
            .await;
        Ok(ApiResponse::ok())
    }

    async fn statistics(&self) -> RepoResult<Vec<ContractStat>> {
        self.table.pause().await;
        Ok(ApiResponse::success(vec![
            ContractStat::new("Jan", 4000.0),
            ContractStat::new("Feb", 3000.0),
            ContractStat::new("Mar", 2000.0),
            ContractStat::new("Apr", 2780.0),
        ]))
    }
}

pub struct LiveContractRepository {
    api: Arc<ApiClient>,
}

impl LiveContractRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ContractRepository for LiveContractRepository {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Contract>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size)
            .query_opt("status", query.status);
        self.api.request("/contract/list", options).await
    }

    async fn add(&self, draft: &ContractDraft) -> RepoResult<Value> {
        self.api
            .request("/contract", RequestOptions::post().json(draft)?)
            .await
    }

    async fn update(&self, id: i64, draft: &ContractDraft) -> RepoResult<Value> {
        self.api
            .request(&format!("/contract/{id}"), RequestOptions::put().json(draft)?)
            .await
    }

    async fn statistics(&self) -> RepoResult<Vec<ContractStat>> {
        self.api
            .request("/contract/statistics", RequestOptions::get())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use backoffice_shared::constants::STATUS_ALL;

    use super::*;
    use crate::repo::fixtures;

    fn repo() -> MockContractRepository {
        MockContractRepository::new(MockTable::new(fixtures::contracts(), Duration::ZERO))
    }

    async fn records(repo: &MockContractRepository, query: PageQuery) -> Vec<Contract> {
        repo.list(&query).await.unwrap().into_data().unwrap().records
    }

    #[tokio::test]
    async fn status_filter() {
        let repo = repo();
        let active = records(&repo, PageQuery::default().with_status(1)).await;
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|c| c.contract_status == 1));

        let all = records(&repo, PageQuery::default().with_status(STATUS_ALL)).await;
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn add_then_update() {
        let repo = repo();
        let draft = ContractDraft {
            contract_name: Some("Security Audit".into()),
            amount: Some(9_500.0),
            ..Default::default()
        };
        repo.add(&draft).await.unwrap();

        let added = records(&repo, PageQuery::default()).await.remove(0);
        assert_eq!(added.id, 5);
        assert!(added.contract_no.starts_with("CTR-"));
        assert!(added.contract_no.ends_with("-005"));
        assert_eq!(added.party_a, "Our Company");
        assert_eq!(added.party_b, "Client");
        assert_eq!(added.approval_status, 0);

        let change = ContractDraft {
            contract_status: Some(2),
            ..Default::default()
        };
        repo.update(5, &change).await.unwrap();
        let updated = records(&repo, PageQuery::default()).await.remove(0);
        assert_eq!(updated.contract_status, 2);
        assert_eq!(updated.contract_name, "Security Audit");
    }

    #[tokio::test]
    async fn statistics_series() {
        let stats = repo().statistics().await.unwrap().into_data().unwrap();
        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(stats[3].value, 2780.0);
    }
}
