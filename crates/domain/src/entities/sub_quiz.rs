//! SubQuiz entity - an ordered set of questions inside a category

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::question::{QuizQuestion, QUIZ_QUESTION_KIND};
use crate::ids::{CategoryId, QuizId};
use crate::schema::{Field, FieldKind, Schema, SchemaDecode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuiz {
    pub id: QuizId,
    pub category_id: CategoryId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuizQuestion>,
    pub created_at: DateTime<Utc>,
}

pub const SUB_QUIZ_SCHEMA: Schema = Schema {
    name: "SubQuiz",
    fields: &[
        Field::required("id", FieldKind::String),
        Field::required("categoryId", FieldKind::String),
        Field::required("title", FieldKind::String),
        Field::optional("description", FieldKind::String),
        Field::required("questions", FieldKind::ArrayOf(&QUIZ_QUESTION_KIND)),
        Field::required("createdAt", FieldKind::DateFromString),
    ],
};

impl SchemaDecode for SubQuiz {
    const SCHEMA: &'static Schema = &SUB_QUIZ_SCHEMA;
}
