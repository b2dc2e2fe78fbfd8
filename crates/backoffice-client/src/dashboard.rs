//! Data behind the landing page.

use backoffice_shared::constants::DEFAULT_NOTICE_LIMIT;
use backoffice_shared::{AttendanceRecord, ContractStat, Notice};
use tracing::warn;

use crate::error::ApiError;
use crate::repo::Services;

/// Shown when the statistics endpoint has no series to offer.
pub fn placeholder_stats() -> Vec<ContractStat> {
    vec![
        ContractStat::new("Q1", 12.0),
        ContractStat::new("Q2", 19.0),
        ContractStat::new("Q3", 8.0),
        ContractStat::new("Q4", 15.0),
    ]
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub attendance: Option<AttendanceRecord>,
    pub notices: Vec<Notice>,
    pub contract_stats: Vec<ContractStat>,
}

impl Dashboard {
    /// Load every section in turn. The first transport failure stops the
    /// load; sections fetched before it are kept.
    pub async fn load(services: &Services) -> Self {
        let mut dashboard = Self::default();
        if let Err(e) = dashboard.fill(services).await {
            warn!(error = %e, "dashboard load failed");
        }
        dashboard
    }

    async fn fill(&mut self, services: &Services) -> Result<(), ApiError> {
        self.attendance = services.attendance.today().await?.data;
        self.notices = services
            .notices
            .latest(DEFAULT_NOTICE_LIMIT)
            .await?
            .data
            .unwrap_or_default();
        self.contract_stats = services
            .contracts
            .statistics()
            .await?
            .data
            .unwrap_or_else(placeholder_stats);
        Ok(())
    }

    /// Punch in, then reload.
    pub async fn check_in(services: &Services) -> Result<Self, ApiError> {
        services.attendance.check_in().await?;
        Ok(Self::load(services).await)
    }

    /// Punch out, then reload.
    pub async fn check_out(services: &Services) -> Result<Self, ApiError> {
        services.attendance.check_out().await?;
        Ok(Self::load(services).await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use backoffice_shared::{ApiResponse, Contract, ContractDraft, Page, PageQuery};
    use serde_json::Value;

    use super::*;
    use crate::repo::{ContractRepository, RepoResult};

    struct EmptyStats;

    #[async_trait]
    impl ContractRepository for EmptyStats {
        async fn list(&self, _: &PageQuery) -> RepoResult<Page<Contract>> {
            Ok(ApiResponse::success(Page::default()))
        }

        async fn add(&self, _: &ContractDraft) -> RepoResult<Value> {
            Ok(ApiResponse::ok())
        }

        async fn update(&self, _: i64, _: &ContractDraft) -> RepoResult<Value> {
            Ok(ApiResponse::ok())
        }

        async fn statistics(&self) -> RepoResult<Vec<ContractStat>> {
            Ok(ApiResponse::ok())
        }
    }

    #[tokio::test]
    async fn loads_all_sections() {
        let services = Services::mock(Duration::ZERO);
        let dashboard = Dashboard::load(&services).await;
        assert!(dashboard.attendance.is_some());
        assert_eq!(dashboard.notices.len(), 3);
        assert_eq!(dashboard.contract_stats.len(), 4);
        assert_eq!(dashboard.contract_stats[0].name, "Jan");
    }

    #[tokio::test]
    async fn missing_stats_fall_back_to_quarters() {
        let mut services = Services::mock(Duration::ZERO);
        services.contracts = Arc::new(EmptyStats);
        let dashboard = Dashboard::load(&services).await;
        assert_eq!(dashboard.contract_stats, placeholder_stats());
    }

    #[tokio::test]
    async fn check_in_reloads() {
        let services = Services::mock(Duration::ZERO);
        let dashboard = Dashboard::check_in(&services).await.unwrap();
        let record = dashboard.attendance.unwrap();
        assert!(record.check_in_time.unwrap().starts_with(&record.attendance_date));
    }
}
