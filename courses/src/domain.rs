use serde::{Deserialize, Serialize};

pub type CourseId = i64;

/// A persisted course row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub course_name: String,
}

/// Payload accepted by `save`.
///
/// Without an `id` a new row is inserted. With the `id` of an existing row
/// that row is overwritten; an unknown `id` is ignored and a fresh one is
/// assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[serde(default)]
    pub id: Option<CourseId>,
    pub course_name: String,
}

impl CreateCourse {
    pub fn new(course_name: &str) -> Self {
        Self {
            id: None,
            course_name: course_name.into(),
        }
    }

    pub fn with_id(mut self, id: CourseId) -> Self {
        self.id = Some(id);
        self
    }
}
