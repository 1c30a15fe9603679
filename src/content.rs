use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<PortfolioData> =
    LazyLock::new(|| load().expect("Should be able to load embedded portfolio content"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioData {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub avatar_url: String,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub social: Social,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory<'a> {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'a [String],
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    NotFound,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
}

pub fn load() -> Result<PortfolioData, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::NotFound)?;
    parse(&file.data)
}

pub fn parse(data: &[u8]) -> Result<PortfolioData, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))
}

impl PortfolioData {
    /// Frontend, backend and tools skills, in that order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .frontend
            .iter()
            .chain(&self.skills.backend)
            .chain(&self.skills.tools)
            .map(String::as_str)
    }

    pub fn skill_categories(&self) -> [SkillCategory<'_>; 3] {
        [
            SkillCategory {
                title: "Frontend",
                icon: "</>",
                skills: &self.skills.frontend,
            },
            SkillCategory {
                title: "Backend",
                icon: "🗄",
                skills: &self.skills.backend,
            },
            SkillCategory {
                title: "Tools & Others",
                icon: "🔧",
                skills: &self.skills.tools,
            },
        ]
    }

    /// Nav bar logo, e.g. "AM" for "Alex Morgan".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.social.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let data = load().expect("embedded content should parse");
        assert!(!data.name.is_empty());
        assert!(!data.projects.is_empty());
        assert!(data.all_skills().count() > 0);
    }

    #[test]
    fn test_parse_error() {
        let err = parse(b"{\"name\": \"Someone\"}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    fn sample() -> PortfolioData {
        PortfolioData {
            name: "ada lovelace byron".to_string(),
            title: "Analyst".to_string(),
            tagline: String::new(),
            bio: String::new(),
            avatar_url: String::new(),
            skills: Skills {
                frontend: vec!["A".to_string()],
                backend: vec!["B".to_string(), "C".to_string()],
                tools: vec!["D".to_string()],
            },
            projects: vec![],
            social: Social {
                github: String::new(),
                linkedin: String::new(),
                twitter: String::new(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_all_skills_order() {
        let data = sample();
        assert_eq!(data.all_skills().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_skill_categories() {
        let data = sample();
        let categories = data.skill_categories();
        assert_eq!(categories[0].title, "Frontend");
        assert_eq!(categories[1].skills.len(), 2);
        assert_eq!(categories[2].title, "Tools & Others");
    }

    #[test]
    fn test_initials_and_email() {
        let data = sample();
        assert_eq!(data.initials(), "ALB");
        assert_eq!(data.email_href(), "mailto:ada@example.com");
    }

    #[test]
    fn test_missing_link_defaults_to_none() {
        let project: Project =
            serde_json::from_str(r#"{"title": "T", "description": "D", "tags": []}"#).unwrap();
        assert_eq!(project.link, None);
    }
}
