//! Profile knowledge base: the structured record the chatbot speaks for.
//!
//! Built once at startup (built-in data, or a JSON file named by `PROFILE_PATH`)
//! and shared read-only behind an `Arc`. There is no mutation path.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::models::profile::{
    Article, Contact, Portfolio, PortfolioCategory, PortfolioItem, ProfileRecord,
};

/// Loads the profile from `path` if given, else returns the built-in profile.
pub fn load_profile(path: Option<&Path>) -> Result<ProfileRecord> {
    let Some(path) = path else {
        return Ok(default_profile());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile file {}", path.display()))?;
    let profile: ProfileRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid profile JSON in {}", path.display()))?;

    info!(
        "Loaded profile for {} from {} ({} portfolio items)",
        profile.name,
        path.display(),
        profile.portfolio.iter_ordered().count()
    );
    for category in PortfolioCategory::ORDER {
        debug!(
            "Portfolio category {}: {} items",
            category.as_str(),
            profile.portfolio.items(category).len()
        );
    }
    Ok(profile)
}

fn item(title: &str, url: &str, skills: &[&str]) -> PortfolioItem {
    PortfolioItem {
        title: title.to_string(),
        url: url.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The built-in profile used when no override file is configured.
pub fn default_profile() -> ProfileRecord {
    ProfileRecord {
        name: "Dragoș Baicu".to_string(),
        competences: strings(&[
            "Python",
            "Flask",
            "JavaScript",
            "HTML e CSS",
            "Adobe Photoshop",
            "Adobe Premiere Pro",
            "After Effects",
            "Analisi dati con Pandas",
        ]),
        strengths: strings(&[
            "Problem solving",
            "Apprendimento rapido di nuovi strumenti",
            "Cura del dettaglio visivo",
            "Comunicazione chiara con team e clienti",
        ]),
        contact: Contact {
            email: "dragos.baicu@example.com".to_string(),
            phone: "+39 000 000 0000".to_string(),
            linkedin_url: "https://www.linkedin.com/in/dragos-baicu".to_string(),
        },
        portfolio: Portfolio {
            photoshop: vec![
                item(
                    "Fotoritocco ritratti",
                    "https://portfolio.example.com/photoshop/ritratti",
                    &["photoshop", "fotoritocco", "ritocco"],
                ),
                item(
                    "Manifesti per eventi",
                    "https://portfolio.example.com/photoshop/manifesti",
                    &["photoshop", "grafica", "locandin", "manifest"],
                ),
            ],
            video: vec![
                item(
                    "Spot pubblicitario",
                    "https://portfolio.example.com/video/spot",
                    &["premiere", "montaggio", "video"],
                ),
                item(
                    "Motion graphics social",
                    "https://portfolio.example.com/video/motion",
                    &["after effects", "motion", "animazion"],
                ),
            ],
            projects: vec![
                item(
                    "Chatbot professionale",
                    "https://portfolio.example.com/projects/chatbot",
                    &["python", "flask", "chatbot", "intelligenza artificiale"],
                ),
                item(
                    "Dashboard report automatici",
                    "https://portfolio.example.com/projects/report",
                    &["python", "pandas", "automazion", "dati"],
                ),
                item(
                    "Sito portfolio personale",
                    "https://portfolio.example.com/projects/sito",
                    &["html", "css", "javascript", "sito web"],
                ),
            ],
        },
        articles: vec![Article {
            title: "Automatizzare la reportistica con Python".to_string(),
            url: "https://blog.example.com/automatizzare-report-python".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::relevance::{find_relevant_portfolio, DEFAULT_MAX_ITEMS};
    use std::io::Write;

    #[test]
    fn test_default_profile_skills_are_lowercase() {
        let profile = default_profile();
        for item in profile.portfolio.iter_ordered() {
            for skill in &item.skills {
                assert_eq!(skill, &skill.to_lowercase(), "skill tag {skill} must be lower-case");
            }
        }
    }

    #[test]
    fn test_python_question_suggests_python_projects() {
        let profile = default_profile();
        let matched = find_relevant_portfolio(
            &profile.portfolio,
            "Quali sono le tue competenze in Python?",
            DEFAULT_MAX_ITEMS,
        );
        let titles: Vec<_> = matched.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Chatbot professionale", "Dashboard report automatici"]);
    }

    #[test]
    fn test_load_profile_without_path_uses_builtin() {
        let profile = load_profile(None).unwrap();
        assert_eq!(profile, default_profile());
    }

    #[test]
    fn test_load_profile_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Test Person",
                "competences": ["Rust"],
                "strengths": ["Focus"],
                "contact": {{"email": "t@example.com", "phone": "1", "linkedin_url": "https://l"}},
                "portfolio": {{"projects": [{{"title": "Crate", "url": "https://c", "skills": ["rust"]}}]}}
            }}"#
        )
        .unwrap();

        let profile = load_profile(Some(file.path())).unwrap();
        assert_eq!(profile.name, "Test Person");
        assert_eq!(profile.portfolio.projects.len(), 1);
        assert!(profile.articles.is_empty());
    }

    #[test]
    fn test_load_profile_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_profile(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid profile JSON"));
    }
}
