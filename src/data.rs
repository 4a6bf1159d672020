use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

/// Everything shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub owner: String,
    /// Text typed out in the hero section.
    pub greeting: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactLink>,
}

impl Portfolio {
    /// Loads content from a JSON file. Missing fields fall back to the
    /// built-in content.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| FolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| FolioError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        let skill = |name: &str, level: u8| Skill {
            name: name.into(),
            level,
        };
        let project = |title: &str, description: &str, tech: &[&str]| Project {
            title: title.into(),
            description: description.into(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            link: None,
        };

        Self {
            owner: "Meheraj Hossain".into(),
            greeting: "Hello, I'm Meheraj Hossain".into(),
            tagline: "Software developer building fast, friendly tools".into(),
            about: vec![
                "I enjoy turning rough ideas into small, dependable programs.".into(),
                "Most days that means web front ends, command-line tools and the glue in between."
                    .into(),
            ],
            skills: vec![
                skill("HTML & CSS", 90),
                skill("JavaScript", 85),
                skill("Rust", 70),
                skill("Python", 75),
                skill("Git", 80),
                skill("UI Design", 65),
            ],
            projects: vec![
                project(
                    "Portfolio",
                    "This site: section scrolling, a typing hero and a card slider.",
                    &["HTML", "CSS", "JavaScript"],
                ),
                project(
                    "Weather Board",
                    "Forecast dashboard with location search and hourly charts.",
                    &["JavaScript", "REST"],
                ),
                project(
                    "Task Flow",
                    "Kanban-style task tracker with drag and drop.",
                    &["TypeScript", "React"],
                ),
                project(
                    "Snip",
                    "Terminal snippet manager with fuzzy search.",
                    &["Rust", "TUI"],
                ),
                project(
                    "Pixel Notes",
                    "Markdown notes synced to local storage.",
                    &["JavaScript", "Markdown"],
                ),
            ],
            contact: vec![
                ContactLink {
                    label: "Email".into(),
                    value: "hello@example.com".into(),
                },
                ContactLink {
                    label: "GitHub".into(),
                    value: "github.com/meheraj".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_content() {
        let p = Portfolio::default();
        assert_eq!(p.greeting, "Hello, I'm Meheraj Hossain");
        assert_eq!(p.projects.len(), 5);
        assert!(!p.skills.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        fs::write(
            &path,
            r#"{ "owner": "Ada", "projects": [ { "title": "Engine", "description": "Analytical" } ] }"#,
        )
        .unwrap();

        let p = Portfolio::load(&path).unwrap();
        assert_eq!(p.owner, "Ada");
        assert_eq!(p.projects.len(), 1);
        assert!(p.projects[0].tech.is_empty());
        assert_eq!(p.greeting, Portfolio::default().greeting);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, "{").unwrap();
        let err = Portfolio::load(&path).unwrap_err();
        assert!(matches!(err, FolioError::Json { .. }));
        assert!(err.to_string().contains("content.json"));
    }
}
