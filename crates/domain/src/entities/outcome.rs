//! Outcomes returned by mutating server operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ChoiceId, QuestionId, SequenceItemId, SkillId};
use crate::schema::{Field, FieldKind, Schema, SchemaDecode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceValidation {
    pub question_id: QuestionId,
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_choice_id: Option<ChoiceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceValidation {
    pub question_id: QuestionId,
    pub correct: bool,
    /// Revealed only after a wrong attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_order: Option<Vec<SequenceItemId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCompletion {
    pub skill_id: SkillId,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySelection {
    pub selected_category_ids: Vec<CategoryId>,
}

pub const CHOICE_VALIDATION_SCHEMA: Schema = Schema {
    name: "ChoiceValidation",
    fields: &[
        Field::required("questionId", FieldKind::String),
        Field::required("correct", FieldKind::Boolean),
        Field::optional("correctChoiceId", FieldKind::String),
        Field::optional("explanation", FieldKind::String),
    ],
};

pub const SEQUENCE_VALIDATION_SCHEMA: Schema = Schema {
    name: "SequenceValidation",
    fields: &[
        Field::required("questionId", FieldKind::String),
        Field::required("correct", FieldKind::Boolean),
        Field::optional("expectedOrder", FieldKind::ArrayOf(&FieldKind::String)),
    ],
};

pub const SKILL_COMPLETION_SCHEMA: Schema = Schema {
    name: "SkillCompletion",
    fields: &[
        Field::required("skillId", FieldKind::String),
        Field::required("completedAt", FieldKind::DateFromString),
    ],
};

pub const CATEGORY_SELECTION_SCHEMA: Schema = Schema {
    name: "CategorySelection",
    fields: &[Field::required(
        "selectedCategoryIds",
        FieldKind::ArrayOf(&FieldKind::String),
    )],
};

impl SchemaDecode for ChoiceValidation {
    const SCHEMA: &'static Schema = &CHOICE_VALIDATION_SCHEMA;
}

impl SchemaDecode for SequenceValidation {
    const SCHEMA: &'static Schema = &SEQUENCE_VALIDATION_SCHEMA;
}

impl SchemaDecode for SkillCompletion {
    const SCHEMA: &'static Schema = &SKILL_COMPLETION_SCHEMA;
}

impl SchemaDecode for CategorySelection {
    const SCHEMA: &'static Schema = &CATEGORY_SELECTION_SCHEMA;
}
