//! Static page content: hero copy, projects, skills and contact links
//!
//! The coordinator treats content as opaque; only the host renders it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Error, Result};

/// Most entries a single list may hold
pub const MAX_ITEMS: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub hero: Hero,
    #[serde(default = "default_marquee")]
    pub marquee: String,
    #[serde(default)]
    pub projects: Vec<BentoItem>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub tagline: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            headline: "Creative Developer".to_string(),
            tagline: "I craft immersive digital experiences that blend cutting-edge \
                      technology with thoughtful design."
                .to_string(),
        }
    }
}

fn default_marquee() -> String {
    "CREATIVE DEVELOPER • AI ENTHUSIAST • INTERACTIVE EXPERIENCES • ".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BentoKind {
    Project,
    Tech,
    Detail,
    Image,
    Profile,
    Contact,
    ComingSoon,
}

/// Cell span on a 12-column grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpan {
    pub col: u8,
    pub row: u8,
}

impl Default for GridSpan {
    fn default() -> Self {
        Self { col: 4, row: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BentoItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: BentoKind,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub span: GridSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percent, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub link: String,
}

fn item(id: u32, kind: BentoKind, title: &str, col: u8, row: u8) -> BentoItem {
    BentoItem {
        id,
        kind,
        title: title.to_string(),
        description: None,
        category: None,
        items: Vec::new(),
        tags: Vec::new(),
        span: GridSpan { col, row },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PortfolioContent {
    /// The page shipped with the binary
    pub fn builtin() -> Self {
        let projects = vec![
            BentoItem {
                description: Some("Modern shopping experience blending performance and design.".into()),
                category: Some("Web Development".into()),
                tags: strings(&["React", "Node.js", "MongoDB", "Tailwind"]),
                ..item(1, BentoKind::Project, "E-Commerce Platform", 7, 2)
            },
            BentoItem {
                items: strings(&["React", "Node.js", "MongoDB"]),
                ..item(2, BentoKind::Tech, "Core Technologies", 5, 1)
            },
            BentoItem {
                description: Some("Real-time inventory updates and seamless checkout flow.".into()),
                ..item(3, BentoKind::Detail, "Key Feature", 5, 1)
            },
            BentoItem {
                description: Some("Sleek UI/UX for natural language processing.".into()),
                category: Some("UI/UX & AI".into()),
                tags: strings(&["React", "Python", "NLP", "Figma"]),
                ..item(4, BentoKind::Project, "AI Chatbot Interface", 5, 2)
            },
            BentoItem {
                items: strings(&["Python", "NLTK", "Figma", "GSAP"]),
                ..item(5, BentoKind::Tech, "AI & UI Tools", 3, 1)
            },
            item(6, BentoKind::Image, "Visual Detail", 4, 1),
            BentoItem {
                description: Some("Focusing on interactive & performant web solutions.".into()),
                ..item(7, BentoKind::Profile, "Alex - Creative Dev", 4, 2)
            },
            item(8, BentoKind::Contact, "Let's Collaborate", 5, 1),
            BentoItem {
                description: Some("Web3 project under development.".into()),
                ..item(9, BentoKind::ComingSoon, "Blockchain Explorer", 3, 1)
            },
        ];

        let skills = [
            ("React", 95),
            ("JavaScript", 92),
            ("TypeScript", 88),
            ("Node.js", 85),
            ("UI/UX Design", 90),
            ("Three.js / R3F", 82),
            ("GSAP", 78),
            ("CSS/SCSS/Tailwind", 94),
        ]
        .into_iter()
        .map(|(name, level)| Skill {
            name: name.to_string(),
            level,
        })
        .collect();

        let socials = [
            ("Mail", "mailto:hello@example.com"),
            ("Github", "https://github.com/"),
            ("LinkedIn", "https://www.linkedin.com/"),
            ("Instagram", "https://www.instagram.com/"),
        ]
        .into_iter()
        .map(|(name, link)| SocialLink {
            name: name.to_string(),
            link: link.to_string(),
        })
        .collect();

        Self {
            hero: Hero::default(),
            marquee: default_marquee(),
            projects,
            skills,
            socials,
            email: "hello@example.com".to_string(),
        }
    }

    /// Load content from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let content: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&raw)?,
            Some("toml") => toml::from_str(&raw).map_err(|e| Error::Config(e.to_string()))?,
            other => {
                return Err(Error::Content(format!(
                    "unsupported content format {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };
        content.validate()?;
        info!(path = %path.display(), projects = content.projects.len(), "Loaded content");
        Ok(content)
    }

    /// File content when a path is configured, the builtin page otherwise
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using builtin content");
                Ok(Self::builtin())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (list, len) in [
            ("projects", self.projects.len()),
            ("skills", self.skills.len()),
            ("socials", self.socials.len()),
        ] {
            if len > MAX_ITEMS {
                return Err(Error::Content(format!(
                    "{len} {list}, at most {MAX_ITEMS} allowed"
                )));
            }
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(Error::Content(format!("duplicate project id {}", project.id)));
            }
            if project.span.col == 0 || project.span.col > 12 {
                return Err(Error::Content(format!(
                    "project {} spans {} columns, expected 1..=12",
                    project.id, project.span.col
                )));
            }
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(Error::Content(format!(
                "skill {} has level {}, expected 0..=100",
                skill.name, skill.level
            )));
        }
        Ok(())
    }

    /// Items that are actual projects, in grid order
    pub fn featured_projects(&self) -> impl Iterator<Item = &BentoItem> {
        self.projects.iter().filter(|p| p.kind == BentoKind::Project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let content = PortfolioContent::builtin();
        assert!(content.validate().is_ok());
        assert_eq!(content.projects.len(), 9);
        assert_eq!(content.skills.len(), 8);
        assert_eq!(content.featured_projects().count(), 2);
    }

    #[test]
    fn test_load_json() {
        let dir = std::env::temp_dir().join(format!("folio-content-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("content.json");
        std::fs::write(
            &path,
            r#"{
                "marquee": "HELLO • ",
                "projects": [{ "id": 1, "type": "coming-soon", "title": "Soon" }],
                "skills": [{ "name": "Rust", "level": 80 }]
            }"#,
        )
        .unwrap();

        let content = PortfolioContent::load(&path).unwrap();
        assert_eq!(content.marquee, "HELLO • ");
        assert_eq!(content.projects[0].kind, BentoKind::ComingSoon);
        assert_eq!(content.projects[0].span, GridSpan::default());
        assert_eq!(content.hero, Hero::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_toml() {
        let dir = std::env::temp_dir().join(format!("folio-content-toml-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("content.toml");
        std::fs::write(
            &path,
            r#"
email = "me@example.com"

[[skills]]
name = "Rust"
level = 90
"#,
        )
        .unwrap();

        let content = PortfolioContent::load(&path).unwrap();
        assert_eq!(content.email, "me@example.com");
        assert_eq!(content.skills.len(), 1);
        assert!(content.projects.is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = std::env::temp_dir().join(format!("folio-content-ext-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("content.yaml");
        std::fs::write(&path, "marquee: hi").unwrap();
        assert!(matches!(PortfolioContent::load(&path), Err(Error::Content(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let mut content = PortfolioContent::builtin();
        content.skills[0].level = 120;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut content = PortfolioContent::builtin();
        content.projects[1].id = 1;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_lists() {
        let mut content = PortfolioContent::builtin();
        let skill = content.skills[0].clone();
        content.skills = vec![skill; MAX_ITEMS + 1];
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("skills"));

        let mut content = PortfolioContent::builtin();
        content.skills.truncate(1);
        let social = content.socials[0].clone();
        content.socials = vec![social; MAX_ITEMS];
        assert!(content.validate().is_ok());
    }
}
