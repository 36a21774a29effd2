use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::project::ProjectCard;

/// Everything the page renders that is not derived from scroll state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub brand: String,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub projects: Vec<ProjectCard>,
    pub contact: ContactContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Rotating headline strings.
    pub titles: Vec<String>,
    pub tagline: String,
    pub contact_cta: String,
    pub projects_cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub role: String,
    pub bio: Vec<String>,
    pub skills: Vec<String>,
    pub image_url: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub heading: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl PortfolioContent {
    /// Parse and validate content from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Json` for malformed input (including invalid
    /// project cards) and `ContentError::NoTitles` when no hero title is set.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// # Errors
    ///
    /// Returns `ContentError::NoTitles` when there is nothing to rotate in the
    /// hero and `ContentError::EmptyBrand` for a blank brand name.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.trim().is_empty() {
            return Err(ContentError::EmptyBrand);
        }
        if self.hero.titles.iter().all(|title| title.trim().is_empty()) {
            return Err(ContentError::NoTitles);
        }
        Ok(())
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            brand: "DevPortfolio".to_string(),
            hero: HeroContent {
                titles: vec!["<Code>".into(), "<Create>".into(), "<Elevate>".into()],
                tagline: "Crafting digital experiences that make a difference".into(),
                contact_cta: "Get in Touch".into(),
                projects_cta: "View Work".into(),
            },
            about: AboutContent {
                heading: "About Me".into(),
                role: "Full Stack Developer".into(),
                bio: vec![
                    "With over 5 years of experience in web development, I specialize in creating \
                     scalable applications using modern technologies. My passion lies in solving \
                     complex problems and delivering exceptional user experiences."
                        .into(),
                ],
                skills: ["React", "TypeScript", "Node.js", "Python", "AWS", "Docker"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                image_url: "https://images.unsplash.com/photo-1596778402543-00146d446fac?auto=format&fit=crop&q=80&w=800".into(),
                image_alt: "Developer at work".into(),
            },
            projects: default_projects(),
            contact: ContactContent {
                heading: "Get in Touch".into(),
                email: "contact@example.com".into(),
                links: vec![
                    SocialLink {
                        label: "GitHub".into(),
                        url: "https://github.com".into(),
                    },
                    SocialLink {
                        label: "LinkedIn".into(),
                        url: "https://linkedin.com".into(),
                    },
                ],
            },
        }
    }
}

fn default_projects() -> Vec<ProjectCard> {
    let seeds: [(&str, &str, &str, [&str; 3]); 3] = [
        (
            "E-Commerce Platform",
            "A full-stack e-commerce solution with real-time inventory management",
            "https://images.unsplash.com/photo-1661956602116-aa6865609028?auto=format&fit=crop&q=80&w=800",
            ["React", "Node.js", "PostgreSQL"],
        ),
        (
            "AI Task Manager",
            "Smart task management app with AI-powered prioritization",
            "https://images.unsplash.com/photo-1589652717521-10c0d092dea9?auto=format&fit=crop&q=80&w=800",
            ["TypeScript", "Python", "TensorFlow"],
        ),
        (
            "Blockchain Explorer",
            "Real-time blockchain data visualization and analysis tool",
            "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?auto=format&fit=crop&q=80&w=800",
            ["Web3.js", "React", "GraphQL"],
        ),
    ];
    // Seeds are non-empty literals, so construction cannot fail.
    seeds
        .into_iter()
        .filter_map(|(title, description, image, tech)| {
            ProjectCard::new(title, description, image, tech).ok()
        })
        .collect()
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("content must define at least one hero title")]
    NoTitles,
    #[error("brand name cannot be empty")]
    EmptyBrand,
    #[error("invalid content file: {0}")]
    Json(#[from] serde_json::Error),
}
