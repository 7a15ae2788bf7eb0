pub mod experience_skills;
pub mod experiences;
pub mod profiles;
pub mod project_skills;
pub mod projects;
pub mod skills;
