use super::{Application, Error};
use crate::domain::{Course, CourseId};
use crate::repository::CourseRepository;
use tracing::{info, instrument};

impl<R> Application<R>
where
    R: CourseRepository,
{
    #[instrument(skip(self))]
    pub async fn course_by_id(&self, id: CourseId) -> Result<Course, Error> {
        info!("fetching course with id: {id}");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn courses_by_ids(&self, ids: Vec<CourseId>) -> Result<Vec<Course>, Error> {
        info!("fetching courses with ids: {ids:?}");
        Ok(self.repository.find_all_by_id(ids).await?)
    }

    #[instrument(skip(self))]
    pub async fn all_courses(&self) -> Result<Vec<Course>, Error> {
        info!("fetching all courses");
        Ok(self.repository.find_all().await?)
    }

    pub async fn health_check(&self) -> Result<(), Error> {
        Ok(self.repository.ping().await?)
    }
}
