mod bulk_update_projects;
mod get_snapshot;
mod increment_project_views;

pub use bulk_update_projects::{BulkUpdateProjectsError, BulkUpdateProjectsUseCase};
pub use get_snapshot::{GetSnapshotError, GetSnapshotUseCase};
pub use increment_project_views::{IncrementProjectViewsError, IncrementProjectViewsUseCase};
