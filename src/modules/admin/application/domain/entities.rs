/// Counters shown on the admin dashboard. Every count except unread
/// messages covers active records only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: i64,
    pub featured_projects: i64,
    pub total_skills: i64,
    pub total_experiences: i64,
    pub unread_messages: i64,
    pub total_project_views: i64,
}

/// Identity carried by a verified admin bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub subject: String,
}
