mod content;
mod project;
mod section;

pub use content::{AboutContent, ContactContent, ContentError, HeroContent, PortfolioContent, SocialLink};
pub use project::{ProjectCard, ProjectError};
pub use section::{Section, SectionError};
