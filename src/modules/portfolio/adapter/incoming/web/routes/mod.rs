mod bulk_update_projects;
mod frontend_shell;
mod get_portfolio;
mod increment_project_views;

pub use bulk_update_projects::*;
pub use frontend_shell::*;
pub use get_portfolio::*;
pub use increment_project_views::*;
