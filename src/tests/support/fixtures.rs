use chrono::{NaiveDate, TimeZone, Utc};

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::portfolio::application::domain::entities::{
    Experience, ExperienceKind, Profile, Project, ProjectStatus, Skill, SkillCategory,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_profile(id: i64) -> Profile {
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    Profile {
        id,
        name: "Camille Martin".to_string(),
        title: "Développeuse backend".to_string(),
        email: "camille@example.com".to_string(),
        phone: "+33 6 00 00 00 00".to_string(),
        bio: "Je construis des API.".to_string(),
        long_description: "Dix ans de services web.".to_string(),
        city: "Lyon".to_string(),
        country: "France".to_string(),
        photo: None,
        cv: None,
        linkedin: "https://linkedin.com/in/camille".to_string(),
        github: "https://github.com/camille".to_string(),
        twitter: String::new(),
        website: String::new(),
        created_at: created,
        updated_at: created,
    }
}

pub fn sample_skill(id: i64, name: &str) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        category: SkillCategory::Backend,
        level: 80,
        icon: format!("icons/{}.svg", name.to_lowercase()),
        color: "#dea584".to_string(),
        display_order: 0,
    }
}

/// A finished, non-featured project that ran from January to June 2024.
pub fn sample_project(id: i64, technologies: Vec<Skill>) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        short_description: "Short pitch".to_string(),
        long_description: "Longer write-up".to_string(),
        main_image: None,
        second_image: None,
        third_image: None,
        demo_url: String::new(),
        code_url: "https://github.com/camille/project".to_string(),
        case_study_url: String::new(),
        status: ProjectStatus::Finished,
        start_date: date(2024, 1, 1),
        end_date: Some(date(2024, 6, 30)),
        featured: false,
        display_order: 0,
        views: 0,
        technologies,
    }
}

pub fn sample_experience(id: i64, skills: Vec<Skill>) -> Experience {
    Experience {
        id,
        kind: ExperienceKind::Work,
        title: "Backend developer".to_string(),
        organization: "Acme".to_string(),
        location: "Lyon".to_string(),
        start_date: date(2021, 3, 1),
        end_date: Some(date(2023, 9, 1)),
        description: "APIs and data pipelines".to_string(),
        display_order: 0,
        skills,
    }
}

pub fn sample_contact_message(id: i64) -> ContactMessage {
    ContactMessage {
        id,
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "Would you be available next month?".to_string(),
        sent_at: Utc.with_ymd_and_hms(2025, 3, 2, 14, 30, 0).unwrap(),
        read: false,
        replied: false,
    }
}
