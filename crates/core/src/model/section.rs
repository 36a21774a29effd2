use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named region of the page, in top-to-bottom document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Every section, in document order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections that start hidden and are revealed when scrolled into view.
    pub const OBSERVED: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    /// DOM id of the section's root element.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "home",
            other => other.id(),
        }
    }

    #[must_use]
    pub const fn first() -> Self {
        Section::Hero
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::first()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SectionError::Unknown(trimmed.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}
