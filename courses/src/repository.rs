//! Storage of `Course` rows.
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::{Course, CourseId, CreateCourse};


/// Data access for the `course` table.
///
/// Lookups never fail on a missing id: `find_by_id` returns `None` and
/// `find_all_by_id` leaves the id out of its result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, sqlx::Error>;
    async fn find_all_by_id(&self, ids: Vec<CourseId>) -> Result<Vec<Course>, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<Course>, sqlx::Error>;
    /// Inserts a new row, or overwrites the row whose id matches `course.id`.
    async fn save(&self, course: CreateCourse) -> Result<Course, sqlx::Error>;
    /// Round-trip to the store without touching any row.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin_read_only(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, sqlx::Error> {
        let mut tx = self.begin_read_only().await?;
        let course = sqlx::query_as::<_, Course>("SELECT id, course_name FROM course WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(course)
    }

    async fn find_all_by_id(&self, ids: Vec<CourseId>) -> Result<Vec<Course>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let mut tx = self.begin_read_only().await?;
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, course_name FROM course WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(courses)
    }

    async fn find_all(&self) -> Result<Vec<Course>, sqlx::Error> {
        let mut tx = self.begin_read_only().await?;
        let courses = sqlx::query_as::<_, Course>("SELECT id, course_name FROM course ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(courses)
    }

    async fn save(&self, course: CreateCourse) -> Result<Course, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let updated = match course.id {
            Some(id) => {
                sqlx::query_as::<_, Course>(
                    "UPDATE course SET course_name = $2 WHERE id = $1 RETURNING id, course_name",
                )
                .bind(id)
                .bind(&course.course_name)
                .fetch_optional(&mut *tx)
                .await?
            }
            None => None,
        };

        let saved = match updated {
            Some(saved) => saved,
            None => {
                sqlx::query_as::<_, Course>(
                    "INSERT INTO course (course_name) VALUES ($1) RETURNING id, course_name",
                )
                .bind(&course.course_name)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(saved)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
