use async_trait::async_trait;
use backoffice_shared::{ContractDraft, EmployeeDraft, EnvelopeError, RoleDraft};
use serde_json::Value;
use tracing::info;

use crate::error::ClientError;
use crate::repo::{ContractRepository, EmployeeRepository, RepoResult, RoleRepository};

/// Create/update pair a form saves through.
#[async_trait]
pub trait DraftTarget: Send + Sync {
    type Draft: Send + Sync;

    async fn create(&self, draft: &Self::Draft) -> RepoResult<Value>;
    async fn update(&self, id: i64, draft: &Self::Draft) -> RepoResult<Value>;
}

#[async_trait]
impl DraftTarget for dyn EmployeeRepository {
    type Draft = EmployeeDraft;

    async fn create(&self, draft: &EmployeeDraft) -> RepoResult<Value> {
        self.add(draft).await
    }

    async fn update(&self, id: i64, draft: &EmployeeDraft) -> RepoResult<Value> {
        EmployeeRepository::update(self, id, draft).await
    }
}

#[async_trait]
impl DraftTarget for dyn ContractRepository {
    type Draft = ContractDraft;

    async fn create(&self, draft: &ContractDraft) -> RepoResult<Value> {
        self.add(draft).await
    }

    async fn update(&self, id: i64, draft: &ContractDraft) -> RepoResult<Value> {
        ContractRepository::update(self, id, draft).await
    }
}

#[async_trait]
impl DraftTarget for dyn RoleRepository {
    type Draft = RoleDraft;

    async fn create(&self, draft: &RoleDraft) -> RepoResult<Value> {
        self.add(draft).await
    }

    async fn update(&self, id: i64, draft: &RoleDraft) -> RepoResult<Value> {
        RoleRepository::update(self, id, draft).await
    }
}

/// The add/edit dialog of a CRUD page.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<D> {
    Closed,
    Creating(D),
    Editing { id: i64, draft: D },
}

impl<D> Default for FormState<D> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<D: Default> FormState<D> {
    pub fn open_create(&mut self) {
        *self = Self::Creating(D::default());
    }
}

impl<D> FormState<D> {
    pub fn open_edit(&mut self, id: i64, draft: D) {
        *self = Self::Editing { id, draft };
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Send the draft to `target`. The form closes only when the backend
    /// accepted it; on any failure it stays open with the draft intact.
    /// Saving a closed form does nothing.
    pub async fn save<T>(&mut self, target: &T) -> Result<(), ClientError>
    where
        T: DraftTarget<Draft = D> + ?Sized,
    {
        let response = match self {
            Self::Closed => return Ok(()),
            Self::Creating(draft) => target.create(draft).await?,
            Self::Editing { id, draft } => target.update(*id, draft).await?,
        };

        if !response.is_success() {
            return Err(ClientError::Envelope(EnvelopeError::Failed {
                code: response.code,
                msg: response.msg,
            }));
        }

        info!("form saved");
        *self = Self::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use backoffice_shared::{Page, PageQuery, Role};

    use super::*;
    use crate::repo::{fixtures, MockRoleRepository, MockTable};

    fn roles() -> Arc<dyn RoleRepository> {
        Arc::new(MockRoleRepository::new(MockTable::new(fixtures::roles(), Duration::ZERO)))
    }

    async fn list(repo: &dyn RoleRepository) -> Page<Role> {
        repo.list(&PageQuery::default()).await.unwrap().into_data().unwrap()
    }

    #[tokio::test]
    async fn create_closes_form() {
        let repo = roles();
        let mut form = FormState::<RoleDraft>::default();
        form.open_create();
        form.draft_mut().unwrap().role_name = Some("Finance".into());

        form.save(repo.as_ref()).await.unwrap();
        assert!(!form.is_open());
        assert_eq!(list(repo.as_ref()).await.total, 5);
    }

    #[tokio::test]
    async fn edit_updates_existing_row() {
        let repo = roles();
        let current = list(repo.as_ref()).await.records.remove(3);

        let mut form = FormState::default();
        form.open_edit(current.id, RoleDraft::from(&current));
        form.draft_mut().unwrap().status = Some(1);
        form.save(repo.as_ref()).await.unwrap();

        let after = list(repo.as_ref()).await.records.remove(3);
        assert_eq!(after.status, 1);
        assert_eq!(after.role_code, "auditor");
    }

    #[test]
    fn cancel_discards_draft() {
        let mut form = FormState::<RoleDraft>::default();
        form.open_create();
        assert!(form.is_open());
        form.cancel();
        assert_eq!(form, FormState::Closed);
        assert!(form.draft().is_none());
    }
}
