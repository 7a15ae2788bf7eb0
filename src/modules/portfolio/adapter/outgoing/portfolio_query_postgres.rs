use async_trait::async_trait;
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IsolationLevel, QueryFilter, QueryOrder, Select, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    experience_skills, experiences, profiles, project_skills, projects, skills,
};
use crate::modules::portfolio::application::domain::entities::{
    Experience, PortfolioSnapshot, Profile, Project, Skill,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Skills in display order: display_order, name, id.
    fn skills_in_display_order() -> Select<skills::Entity> {
        skills::Entity::find()
            .order_by_asc(skills::Column::DisplayOrder)
            .order_by_asc(skills::Column::Name)
            .order_by_asc(skills::Column::Id)
    }

    /// Featured first, then display_order, then most recent start.
    fn projects_in_display_order() -> Select<projects::Entity> {
        projects::Entity::find()
            .order_by_desc(projects::Column::Featured)
            .order_by_asc(projects::Column::DisplayOrder)
            .order_by_desc(projects::Column::StartDate)
            .order_by_asc(projects::Column::Id)
    }

    async fn load_project_links<C: ConnectionTrait>(
        conn: &C,
        project_ids: &[i64],
    ) -> Result<Vec<(i64, i64)>, DbErr> {
        if project_ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = project_skills::Entity::find()
            .filter(project_skills::Column::ProjectId.is_in(project_ids.iter().copied()))
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(|r| (r.project_id, r.skill_id)).collect())
    }

    async fn load_experience_links<C: ConnectionTrait>(
        conn: &C,
        experience_ids: &[i64],
    ) -> Result<Vec<(i64, i64)>, DbErr> {
        if experience_ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = experience_skills::Entity::find()
            .filter(
                experience_skills::Column::ExperienceId.is_in(experience_ids.iter().copied()),
            )
            .all(conn)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| (r.experience_id, r.skill_id))
            .collect())
    }

    /// Related skills are loaded regardless of their own active flag.
    async fn load_related_skills<C: ConnectionTrait>(
        conn: &C,
        skill_ids: &BTreeSet<i64>,
    ) -> Result<Vec<skills::Model>, DbErr> {
        if skill_ids.is_empty() {
            return Ok(vec![]);
        }
        Self::skills_in_display_order()
            .filter(skills::Column::Id.is_in(skill_ids.iter().copied()))
            .all(conn)
            .await
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn snapshot(&self) -> Result<PortfolioSnapshot, PortfolioQueryError> {
        // All reads see the same committed state.
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(map_db_err)?;

        let profile = profiles::Entity::find()
            .filter(profiles::Column::Active.eq(true))
            .order_by_asc(profiles::Column::Id)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let skill_rows = Self::skills_in_display_order()
            .filter(skills::Column::Active.eq(true))
            .all(&txn)
            .await
            .map_err(map_db_err)?;

        let project_rows = Self::projects_in_display_order()
            .filter(projects::Column::Active.eq(true))
            .all(&txn)
            .await
            .map_err(map_db_err)?;

        let experience_rows = experiences::Entity::find()
            .filter(experiences::Column::Active.eq(true))
            .order_by_desc(experiences::Column::StartDate)
            .order_by_asc(experiences::Column::Id)
            .all(&txn)
            .await
            .map_err(map_db_err)?;

        let project_ids: Vec<i64> = project_rows.iter().map(|p| p.id).collect();
        let experience_ids: Vec<i64> = experience_rows.iter().map(|e| e.id).collect();

        let project_links = Self::load_project_links(&txn, &project_ids)
            .await
            .map_err(map_db_err)?;
        let experience_links = Self::load_experience_links(&txn, &experience_ids)
            .await
            .map_err(map_db_err)?;

        let related_ids: BTreeSet<i64> = project_links
            .iter()
            .chain(experience_links.iter())
            .map(|(_, skill_id)| *skill_id)
            .collect();
        let related_rows = Self::load_related_skills(&txn, &related_ids)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        let related = related_rows
            .into_iter()
            .map(skill_from_model)
            .collect::<Result<Vec<_>, _>>()?;

        let technologies = group_related(&project_links, &related);
        let acquired = group_related(&experience_links, &related);

        let projects = project_rows
            .into_iter()
            .map(|row| {
                let techs = technologies.get(&row.id).cloned().unwrap_or_default();
                project_from_model(row, techs)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let experiences = experience_rows
            .into_iter()
            .map(|row| {
                let skills = acquired.get(&row.id).cloned().unwrap_or_default();
                experience_from_model(row, skills)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PortfolioSnapshot {
            profile: profile.map(profile_from_model),
            skills: skill_rows
                .into_iter()
                .map(skill_from_model)
                .collect::<Result<Vec<_>, _>>()?,
            projects,
            experiences,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Groups `(owner_id, skill_id)` links into per-owner skill lists, keeping the
/// order of `related`.
fn group_related(links: &[(i64, i64)], related: &[Skill]) -> HashMap<i64, Vec<Skill>> {
    let rank: HashMap<i64, usize> = related
        .iter()
        .enumerate()
        .map(|(i, skill)| (skill.id, i))
        .collect();

    let mut ranks_by_owner: HashMap<i64, Vec<usize>> = HashMap::new();
    for (owner_id, skill_id) in links {
        if let Some(&r) = rank.get(skill_id) {
            ranks_by_owner.entry(*owner_id).or_default().push(r);
        }
    }

    ranks_by_owner
        .into_iter()
        .map(|(owner_id, mut ranks)| {
            ranks.sort_unstable();
            ranks.dedup();
            let skills = ranks.into_iter().map(|r| related[r].clone()).collect();
            (owner_id, skills)
        })
        .collect()
}

fn profile_from_model(m: profiles::Model) -> Profile {
    Profile {
        id: m.id,
        name: m.name,
        title: m.title,
        email: m.email,
        phone: m.phone,
        bio: m.bio,
        long_description: m.long_description,
        city: m.city,
        country: m.country,
        photo: m.photo.filter(|p| !p.is_empty()),
        cv: m.cv.filter(|c| !c.is_empty()),
        linkedin: m.linkedin,
        github: m.github,
        twitter: m.twitter,
        website: m.website,
        created_at: m.created_at.into(),
        updated_at: m.updated_at.into(),
    }
}

fn skill_from_model(m: skills::Model) -> Result<Skill, PortfolioQueryError> {
    Ok(Skill {
        id: m.id,
        category: m.category.parse().map_err(corrupt)?,
        name: m.name,
        level: m.level,
        icon: m.icon,
        color: m.color,
        display_order: m.display_order,
    })
}

fn project_from_model(
    m: projects::Model,
    technologies: Vec<Skill>,
) -> Result<Project, PortfolioQueryError> {
    Ok(Project {
        id: m.id,
        status: m.status.parse().map_err(corrupt)?,
        title: m.title,
        short_description: m.short_description,
        long_description: m.long_description,
        main_image: m.main_image.filter(|p| !p.is_empty()),
        second_image: m.second_image.filter(|p| !p.is_empty()),
        third_image: m.third_image.filter(|p| !p.is_empty()),
        demo_url: m.demo_url,
        code_url: m.code_url,
        case_study_url: m.case_study_url,
        start_date: m.start_date,
        end_date: m.end_date,
        featured: m.featured,
        display_order: m.display_order,
        views: m.views,
        technologies,
    })
}

fn experience_from_model(
    m: experiences::Model,
    skills: Vec<Skill>,
) -> Result<Experience, PortfolioQueryError> {
    Ok(Experience {
        id: m.id,
        kind: m.kind.parse().map_err(corrupt)?,
        title: m.title,
        organization: m.organization,
        location: m.location,
        start_date: m.start_date,
        end_date: m.end_date,
        description: m.description,
        display_order: m.display_order,
        skills,
    })
}

fn corrupt(e: impl std::fmt::Display) -> PortfolioQueryError {
    PortfolioQueryError::CorruptRecord(e.to_string())
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
