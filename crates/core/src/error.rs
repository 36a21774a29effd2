use thiserror::Error;

use crate::model::{ContentError, ProjectError, SectionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
