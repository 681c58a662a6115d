mod commands;
mod queries;

use crate::domain::CourseId;
use crate::repository::CourseRepository;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("course not found with id: {0}")]
    NotFound(CourseId),
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

pub struct Application<R> {
    repository: R,
}

impl<R> Application<R>
where
    R: CourseRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}
