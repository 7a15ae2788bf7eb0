mod bulk_update_projects_service;
mod get_snapshot_service;
mod increment_project_views_service;

pub use bulk_update_projects_service::BulkUpdateProjectsService;
pub use get_snapshot_service::GetSnapshotService;
pub use increment_project_views_service::IncrementProjectViewsService;
