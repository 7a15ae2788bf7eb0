// src/modules/portfolio/adapter/incoming/web/serializers.rs

//! JSON projections of the portfolio records.
//!
//! Keys follow the public front-end contract, which is French.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::entities::{
    Experience, PortfolioSnapshot, Profile, Project, Skill,
};
use crate::shared::locale::Locale;
use crate::shared::media::MediaUrlResolver;

/// Everything a projection needs besides the record itself.
#[derive(Debug, Clone, Copy)]
pub struct WireContext<'a> {
    pub media: &'a MediaUrlResolver,
    /// Scheme and host of the incoming request, e.g. `https://me.dev`.
    pub request_base: &'a str,
    pub today: NaiveDate,
    pub locale: Locale,
}

impl WireContext<'_> {
    fn relative(&self, stored: Option<&str>) -> Option<String> {
        stored.map(|s| self.media.relative_url(s))
    }

    fn absolute(&self, stored: Option<&str>) -> Option<String> {
        stored.map(|s| self.media.absolute_url(self.request_base, s))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfilePayload {
    pub nom: String,
    pub titre: String,
    pub email: String,
    pub telephone: String,
    pub bio: String,
    pub description_longue: String,
    pub ville: String,
    pub pays: String,
    pub photo: Option<String>,
    pub photo_url: Option<String>,
    pub cv: Option<String>,
    pub cv_url: Option<String>,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub website: String,
}

impl ProfilePayload {
    pub fn project(profile: &Profile, ctx: &WireContext<'_>) -> Self {
        Self {
            nom: profile.name.clone(),
            titre: profile.title.clone(),
            email: profile.email.clone(),
            telephone: profile.phone.clone(),
            bio: profile.bio.clone(),
            description_longue: profile.long_description.clone(),
            ville: profile.city.clone(),
            pays: profile.country.clone(),
            photo: ctx.relative(profile.photo.as_deref()),
            photo_url: ctx.absolute(profile.photo.as_deref()),
            cv: ctx.relative(profile.cv.as_deref()),
            cv_url: ctx.absolute(profile.cv.as_deref()),
            linkedin: profile.linkedin.clone(),
            github: profile.github.clone(),
            twitter: profile.twitter.clone(),
            website: profile.website.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SkillPayload {
    pub id: i64,
    pub nom: String,
    pub categorie: String,
    pub categorie_display: String,
    /// Percentage, always within 0..=100.
    pub niveau: i32,
    pub icone: String,
    pub couleur: String,
    pub ordre: i32,
}

impl SkillPayload {
    pub fn project(skill: &Skill, locale: Locale) -> Self {
        Self {
            id: skill.id,
            nom: skill.name.clone(),
            categorie: skill.category.code().to_string(),
            categorie_display: skill.category.label(locale).to_string(),
            niveau: skill.clamped_level(),
            icone: skill.icon.clone(),
            couleur: skill.color.clone(),
            ordre: skill.display_order,
        }
    }
}

/// Compact skill projection used for project technologies.
#[derive(Debug, Serialize, ToSchema)]
pub struct SkillSummary {
    pub nom: String,
    pub couleur: String,
}

impl SkillSummary {
    pub fn project(skill: &Skill) -> Self {
        Self {
            nom: skill.name.clone(),
            couleur: skill.color.clone(),
        }
    }
}

/// Skill projection with enough to render an icon badge.
#[derive(Debug, Serialize, ToSchema)]
pub struct SkillBadge {
    pub id: i64,
    pub nom: String,
    pub couleur: String,
    pub icone: String,
}

impl SkillBadge {
    pub fn project(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            nom: skill.name.clone(),
            couleur: skill.color.clone(),
            icone: skill.icon.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectPayload {
    pub id: i64,
    pub titre: String,
    pub description_courte: String,
    pub description_longue: String,
    pub image_principale: Option<String>,
    pub image_principale_url: Option<String>,
    pub image_2: Option<String>,
    pub image_2_url: Option<String>,
    pub image_3: Option<String>,
    pub image_3_url: Option<String>,
    pub technologies: Vec<SkillSummary>,
    pub url_demo: String,
    pub url_code: String,
    pub url_case_study: String,
    pub statut: String,
    pub statut_display: String,
    pub date_debut: NaiveDate,
    pub date_fin: Option<NaiveDate>,
    pub featured: bool,
    pub ordre: i32,
    pub vues: i64,
    /// Only present for projects with an end date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duree_projet: Option<i64>,
}

impl ProjectPayload {
    pub fn project(project: &Project, ctx: &WireContext<'_>) -> Self {
        Self {
            id: project.id,
            titre: project.title.clone(),
            description_courte: project.short_description.clone(),
            description_longue: project.long_description.clone(),
            image_principale: ctx.relative(project.main_image.as_deref()),
            image_principale_url: ctx.absolute(project.main_image.as_deref()),
            image_2: ctx.relative(project.second_image.as_deref()),
            image_2_url: ctx.absolute(project.second_image.as_deref()),
            image_3: ctx.relative(project.third_image.as_deref()),
            image_3_url: ctx.absolute(project.third_image.as_deref()),
            technologies: project.technologies.iter().map(SkillSummary::project).collect(),
            url_demo: project.demo_url.clone(),
            url_code: project.code_url.clone(),
            url_case_study: project.case_study_url.clone(),
            statut: project.status.code().to_string(),
            statut_display: project.status.label(ctx.locale).to_string(),
            date_debut: project.start_date,
            date_fin: project.end_date,
            featured: project.featured,
            ordre: project.display_order,
            vues: project.views,
            duree_projet: project.duration_months(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperiencePayload {
    pub id: i64,
    pub type_experience: String,
    pub type_display: String,
    pub titre: String,
    pub entreprise: String,
    pub lieu: String,
    pub date_debut: NaiveDate,
    pub date_fin: Option<NaiveDate>,
    pub est_en_cours: bool,
    pub duree: String,
    pub description: String,
    pub competences_acquises: Vec<SkillBadge>,
}

impl ExperiencePayload {
    pub fn project(experience: &Experience, ctx: &WireContext<'_>) -> Self {
        Self {
            id: experience.id,
            type_experience: experience.kind.code().to_string(),
            type_display: experience.kind.label(ctx.locale).to_string(),
            titre: experience.title.clone(),
            entreprise: experience.organization.clone(),
            lieu: experience.location.clone(),
            date_debut: experience.start_date,
            date_fin: experience.end_date,
            est_en_cours: experience.is_ongoing(),
            duree: experience.duration_label(ctx.today, ctx.locale),
            description: experience.description.clone(),
            competences_acquises: experience.skills.iter().map(SkillBadge::project).collect(),
        }
    }
}

/// Body of `GET /api/portfolio/`, flattened next to `success`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioPayload {
    pub profile: Option<ProfilePayload>,
    pub competences: Vec<SkillPayload>,
    pub projets: Vec<ProjectPayload>,
    pub experiences: Vec<ExperiencePayload>,
}

impl PortfolioPayload {
    pub fn project(snapshot: &PortfolioSnapshot, ctx: &WireContext<'_>) -> Self {
        Self {
            profile: snapshot
                .profile
                .as_ref()
                .map(|p| ProfilePayload::project(p, ctx)),
            competences: snapshot
                .skills
                .iter()
                .map(|s| SkillPayload::project(s, ctx.locale))
                .collect(),
            projets: snapshot
                .projects
                .iter()
                .map(|p| ProjectPayload::project(p, ctx))
                .collect(),
            experiences: snapshot
                .experiences
                .iter()
                .map(|e| ExperiencePayload::project(e, ctx))
                .collect(),
        }
    }
}
