use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use crate::shared::locale::Locale;

use super::duration::{months_between, render_duration};

//
// ──────────────────────────────────────────────────────────
// Closed vocabularies
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Design,
    Ai,
    Other,
}

impl SkillCategory {
    pub fn code(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Design => "design",
            SkillCategory::Ai => "ai",
            SkillCategory::Other => "other",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SkillCategory::Frontend, _) => "Frontend",
            (SkillCategory::Backend, _) => "Backend",
            (SkillCategory::Database, Locale::Fr) => "Base de données",
            (SkillCategory::Database, Locale::En) => "Database",
            (SkillCategory::Devops, _) => "DevOps",
            (SkillCategory::Design, _) => "Design",
            (SkillCategory::Ai, Locale::Fr) => "Intelligence Artificielle",
            (SkillCategory::Ai, Locale::En) => "Artificial Intelligence",
            (SkillCategory::Other, Locale::Fr) => "Autres",
            (SkillCategory::Other, Locale::En) => "Other",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "database" => Ok(SkillCategory::Database),
            "devops" => Ok(SkillCategory::Devops),
            "design" => Ok(SkillCategory::Design),
            "ai" => Ok(SkillCategory::Ai),
            "other" => Ok(SkillCategory::Other),
            other => Err(UnknownCode {
                kind: "skill category",
                code: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Finished,
    Paused,
    Archived,
}

impl ProjectStatus {
    pub fn code(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Finished => "finished",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ProjectStatus::InProgress, Locale::Fr) => "En cours",
            (ProjectStatus::InProgress, Locale::En) => "In progress",
            (ProjectStatus::Finished, Locale::Fr) => "Terminé",
            (ProjectStatus::Finished, Locale::En) => "Finished",
            (ProjectStatus::Paused, Locale::Fr) => "En pause",
            (ProjectStatus::Paused, Locale::En) => "Paused",
            (ProjectStatus::Archived, Locale::Fr) => "Archivé",
            (ProjectStatus::Archived, Locale::En) => "Archived",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(ProjectStatus::InProgress),
            "finished" => Ok(ProjectStatus::Finished),
            "paused" => Ok(ProjectStatus::Paused),
            "archived" => Ok(ProjectStatus::Archived),
            other => Err(UnknownCode {
                kind: "project status",
                code: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceKind {
    Work,
    Education,
    PersonalProject,
    Volunteer,
}

impl ExperienceKind {
    pub fn code(self) -> &'static str {
        match self {
            ExperienceKind::Work => "work",
            ExperienceKind::Education => "education",
            ExperienceKind::PersonalProject => "personal_project",
            ExperienceKind::Volunteer => "volunteer",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ExperienceKind::Work, Locale::Fr) => "Expérience professionnelle",
            (ExperienceKind::Work, Locale::En) => "Work experience",
            (ExperienceKind::Education, Locale::Fr) => "Formation",
            (ExperienceKind::Education, Locale::En) => "Education",
            (ExperienceKind::PersonalProject, Locale::Fr) => "Projet personnel",
            (ExperienceKind::PersonalProject, Locale::En) => "Personal project",
            (ExperienceKind::Volunteer, Locale::Fr) => "Bénévolat",
            (ExperienceKind::Volunteer, Locale::En) => "Volunteering",
        }
    }
}

impl FromStr for ExperienceKind {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(ExperienceKind::Work),
            "education" => Ok(ExperienceKind::Education),
            "personal_project" => Ok(ExperienceKind::PersonalProject),
            "volunteer" => Ok(ExperienceKind::Volunteer),
            other => Err(UnknownCode {
                kind: "experience kind",
                code: other.to_string(),
            }),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub long_description: String,
    pub city: String,
    pub country: String,
    /// Storage path of the photo, if any.
    pub photo: Option<String>,
    /// Storage path of the downloadable CV, if any.
    pub cv: Option<String>,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub website: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: SkillCategory,
    pub level: i32,
    pub icon: String,
    pub color: String,
    pub display_order: i32,
}

impl Skill {
    /// Level as a percentage. Storage does not guarantee the bounds.
    pub fn clamped_level(&self) -> i32 {
        self.level.clamp(0, 100)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub main_image: Option<String>,
    pub second_image: Option<String>,
    pub third_image: Option<String>,
    pub demo_url: String,
    pub code_url: String,
    pub case_study_url: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub featured: bool,
    pub display_order: i32,
    pub views: i64,
    pub technologies: Vec<Skill>,
}

impl Project {
    /// Months between start and end, only for projects with an end date.
    pub fn duration_months(&self) -> Option<i64> {
        self.end_date.map(|end| months_between(self.start_date, end))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub id: i64,
    pub kind: ExperienceKind,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub display_order: i32,
    pub skills: Vec<Skill>,
}

impl Experience {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// Elapsed months, measured up to `today` while ongoing.
    pub fn duration_months(&self, today: NaiveDate) -> i64 {
        months_between(self.start_date, self.end_date.unwrap_or(today))
    }

    pub fn duration_label(&self, today: NaiveDate, locale: Locale) -> String {
        render_duration(self.duration_months(today), locale)
    }
}

/// Everything the public read endpoint shows, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
}
