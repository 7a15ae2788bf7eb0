use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::PortfolioSnapshot;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetSnapshotError, GetSnapshotUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

pub struct GetSnapshotService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetSnapshotService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSnapshotUseCase for GetSnapshotService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioSnapshot, GetSnapshotError> {
        self.query.snapshot().await.map_err(|e| match e {
            PortfolioQueryError::DatabaseError(msg) | PortfolioQueryError::CorruptRecord(msg) => {
                GetSnapshotError::StorageUnavailable(msg)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{sample_profile, sample_project, sample_skill};

    #[derive(Clone)]
    struct StubPortfolioQuery {
        result: Result<PortfolioSnapshot, PortfolioQueryError>,
    }

    #[async_trait]
    impl PortfolioQuery for StubPortfolioQuery {
        async fn snapshot(&self) -> Result<PortfolioSnapshot, PortfolioQueryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn returns_snapshot_unchanged() {
        let rust = sample_skill(1, "Rust");
        let snapshot = PortfolioSnapshot {
            profile: Some(sample_profile(1)),
            skills: vec![rust.clone()],
            projects: vec![sample_project(7, vec![rust])],
            experiences: vec![],
        };
        let service = GetSnapshotService::new(StubPortfolioQuery {
            result: Ok(snapshot.clone()),
        });

        let got = service.execute().await.unwrap();

        assert_eq!(got, snapshot);
    }

    #[tokio::test]
    async fn empty_store_is_not_an_error() {
        let service = GetSnapshotService::new(StubPortfolioQuery {
            result: Ok(PortfolioSnapshot::default()),
        });

        let got = service.execute().await.unwrap();

        assert!(got.profile.is_none());
        assert!(got.skills.is_empty());
        assert!(got.projects.is_empty());
        assert!(got.experiences.is_empty());
    }

    #[tokio::test]
    async fn database_error_becomes_storage_unavailable() {
        let service = GetSnapshotService::new(StubPortfolioQuery {
            result: Err(PortfolioQueryError::DatabaseError("db down".to_string())),
        });

        let err = service.execute().await.unwrap_err();

        assert_eq!(err, GetSnapshotError::StorageUnavailable("db down".to_string()));
    }

    #[tokio::test]
    async fn corrupt_record_becomes_storage_unavailable() {
        let service = GetSnapshotService::new(StubPortfolioQuery {
            result: Err(PortfolioQueryError::CorruptRecord("bad status".to_string())),
        });

        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, GetSnapshotError::StorageUnavailable(msg) if msg == "bad status"));
    }
}
