use std::sync::Arc;

use async_trait::async_trait;
use backoffice_shared::{ApiResponse, Dept, Employee, EmployeeDraft, Page, PageQuery};
use serde_json::Value;
use tracing::debug;

use super::{matches_keyword, today, MockTable, RepoResult};
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Employee>>;
    async fn add(&self, draft: &EmployeeDraft) -> RepoResult<Value>;
    async fn update(&self, id: i64, draft: &EmployeeDraft) -> RepoResult<Value>;
    async fn delete(&self, id: i64) -> RepoResult<Value>;
}

pub struct MockEmployeeRepository {
    table: MockTable<Employee>,
    depts: Arc<MockTable<Dept>>,
}

impl MockEmployeeRepository {
    pub fn new(table: MockTable<Employee>, depts: Arc<MockTable<Dept>>) -> Self {
        Self { table, depts }
    }

    async fn dept_name(&self, dept_id: i64) -> Option<String> {
        self.depts.find(dept_id).await.map(|d| d.dept_name)
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Employee>> {
        self.table.pause().await;
        let records = match query.keyword_filter() {
            Some(keyword) => {
                self.table
                    .filter(|e| {
                        matches_keyword(keyword, &[e.emp_name.as_str(), &e.emp_no, &e.position])
                    })
                    .await
            }
            None => self.table.all().await,
        };
        Ok(ApiResponse::success(Page::from_records(records)))
    }

    async fn add(&self, draft: &EmployeeDraft) -> RepoResult<Value> {
        self.table.pause().await;
        let id = self.table.next_id();
        let dept_id = draft.dept_id.unwrap_or(101);
        let employee = Employee {
            id,
            emp_no: format!("EMP{id:03}"),
            emp_name: draft.emp_name.clone().unwrap_or_else(|| "New Employee".into()),
            gender: draft.gender.unwrap_or(1),
            mobile: draft.mobile.clone().unwrap_or_else(|| "000-000-0000".into()),
            email: draft.email.clone().unwrap_or_else(|| "new@company.com".into()),
            dept_id,
            dept_name: self.dept_name(dept_id).await,
            position: draft.position.clone().unwrap_or_else(|| "Staff".into()),
            hire_date: today(),
            status: draft.status.unwrap_or(1),
            avatar: None,
        };
        debug!(id, emp_no = %employee.emp_no, "mock employee added");
        self.table.prepend(employee).await;
        Ok(ApiResponse::ok())
    }

    async fn update(&self, id: i64, draft: &EmployeeDraft) -> RepoResult<Value> {
        self.table.pause().await;
        let dept_name = match draft.dept_id {
            Some(dept_id) => Some(self.dept_name(dept_id).await),
            None => None,
        };
        self.table
            .update(id, |e| {
                if let Some(v) = &draft.emp_name {
                    e.emp_name = v.clone();
                }
                if let Some(v) = draft.gender {
                    e.gender = v;
                }
                if let Some(v) = &draft.mobile {
                    e.mobile = v.clone();
                }
                if let Some(v) = &draft.email {
                    e.email = v.clone();
                }
                if let Some(v) = &draft.position {
                    e.position = v.clone();
                }
                if let Some(v) = draft.status {
                    e.status = v;
                }
                if let (Some(dept_id), Some(name)) = (draft.dept_id, dept_name) {
                    e.dept_id = dept_id;
                    e.dept_name = name;
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

pub struct LiveEmployeeRepository {
    api: Arc<ApiClient>,
}

impl LiveEmployeeRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EmployeeRepository for LiveEmployeeRepository {
    async fn list(&self, query: &PageQuery) -> RepoResult<Page<Employee>> {
        let options = RequestOptions::get()
            .query("page", query.page)
            .query("size", query.size)
            .query_opt("keyword", query.keyword_filter());
        self.api.request("/employee/list", options).await
    }

    async fn add(&self, draft: &EmployeeDraft) -> RepoResult<Value> {
        self.api
            .request("/employee", RequestOptions::post().json(draft)?)
            .await
    }

    async fn update(&self, id: i64, draft: &EmployeeDraft) -> RepoResult<Value> {
        self.api
            .request(&format!("/employee/{id}"), RequestOptions::put().json(draft)?)
            .await
    }

    async fn delete(&self, id: i64) -> RepoResult<Value> {
        self.api
            .request(&format!("/employee/{id}"), RequestOptions::delete())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::repo::fixtures;

    fn repo() -> MockEmployeeRepository {
        MockEmployeeRepository::new(
            MockTable::new(fixtures::employees(), Duration::ZERO),
            Arc::new(MockTable::new(fixtures::depts(), Duration::ZERO)),
        )
    }

    async fn records(repo: &MockEmployeeRepository, query: PageQuery) -> Vec<Employee> {
        repo.list(&query).await.unwrap().into_data().unwrap().records
    }

    #[tokio::test]
    async fn keyword_matches_position() {
        let repo = repo();
        let found = records(&repo, PageQuery::default().with_keyword("dev")).await;
        let names: Vec<_> = found.iter().map(|e| e.emp_name.as_str()).collect();
        assert_eq!(names, ["Alice Johnson", "Charlie Brown"]);

        let page = repo.list(&PageQuery::default()).await.unwrap().into_data().unwrap();
        assert_eq!(page.total, 5);
    }

    #[tokio::test]
    async fn blank_keyword_lists_everything() {
        let repo = repo();
        assert_eq!(records(&repo, PageQuery::default().with_keyword("  ")).await.len(), 5);
    }

    #[tokio::test]
    async fn add_prepends_with_fresh_id() {
        let repo = repo();
        let draft = EmployeeDraft {
            emp_name: Some("Fiona Gale".into()),
            dept_id: Some(104),
            ..Default::default()
        };
        assert!(repo.add(&draft).await.unwrap().is_success());

        let all = records(&repo, PageQuery::default()).await;
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, 6);
        assert_eq!(all[0].emp_no, "EMP006");
        assert_eq!(all[0].dept_name.as_deref(), Some("Marketing"));
        assert_eq!(all[0].position, "Staff");
    }

    #[tokio::test]
    async fn deleted_id_is_not_reused() {
        let repo = repo();
        repo.add(&EmployeeDraft::default()).await.unwrap();
        repo.delete(6).await.unwrap();
        repo.add(&EmployeeDraft::default()).await.unwrap();

        let all = records(&repo, PageQuery::default()).await;
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, 7);
        assert!(all.iter().all(|e| e.id != 6));
    }

    #[tokio::test]
    async fn update_merges_fields_and_dept_name() {
        let repo = repo();
        let draft = EmployeeDraft {
            position: Some("Lead Dev".into()),
            dept_id: Some(102),
            ..Default::default()
        };
        repo.update(1, &draft).await.unwrap();

        let alice = records(&repo, PageQuery::default()).await.remove(0);
        assert_eq!(alice.position, "Lead Dev");
        assert_eq!(alice.dept_id, 102);
        assert_eq!(alice.dept_name.as_deref(), Some("HR Dept"));
        assert_eq!(alice.email, "alice@company.com");
    }

    #[tokio::test]
    async fn update_unknown_id_is_a_no_op() {
        let repo = repo();
        let before = records(&repo, PageQuery::default()).await;
        let resp = repo.update(42, &EmployeeDraft::default()).await.unwrap();
        assert!(resp.is_success());
        assert_eq!(records(&repo, PageQuery::default()).await, before);
    }
}
