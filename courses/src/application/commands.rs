use super::{Application, Error};
use crate::domain::{Course, CreateCourse};
use crate::repository::CourseRepository;
use tracing::{info, instrument};

impl<R> Application<R>
where
    R: CourseRepository,
{
    #[instrument(skip(self))]
    pub async fn create_course(&self, command: CreateCourse) -> Result<Course, Error> {
        info!("creating new course: {}", command.course_name);
        Ok(self.repository.save(command).await?)
    }
}
