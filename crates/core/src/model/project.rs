use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectCard")]
pub struct ProjectCard {
    title: String,
    description: String,
    image_url: String,
    tech: Vec<String>,
}

impl ProjectCard {
    /// Create a validated project card.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::EmptyTitle` if the title is blank and
    /// `ProjectError::EmptyImage` if the image URL is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        tech: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ProjectError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ProjectError::EmptyTitle);
        }
        let image_url = image_url.into().trim().to_string();
        if image_url.is_empty() {
            return Err(ProjectError::EmptyImage { title });
        }
        let tech = tech
            .into_iter()
            .map(Into::into)
            .map(|tag: String| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Self {
            title,
            description: description.into(),
            image_url,
            tech,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn tech(&self) -> &[String] {
        &self.tech
    }
}

#[derive(Deserialize)]
struct RawProjectCard {
    title: String,
    #[serde(default)]
    description: String,
    image_url: String,
    #[serde(default)]
    tech: Vec<String>,
}

impl TryFrom<RawProjectCard> for ProjectCard {
    type Error = ProjectError;

    fn try_from(raw: RawProjectCard) -> Result<Self, Self::Error> {
        ProjectCard::new(raw.title, raw.description, raw.image_url, raw.tech)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProjectError {
    #[error("project title cannot be empty")]
    EmptyTitle,
    #[error("project {title:?} has no image")]
    EmptyImage { title: String },
}
