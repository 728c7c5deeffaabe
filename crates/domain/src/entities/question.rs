//! Question entities - the two answerable shapes inside a sub-quiz

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ChoiceId, QuestionId, SequenceItemId};
use crate::schema::{Field, FieldKind, Schema, SchemaDecode};

/// One selectable answer of a [`ChoiceQuestion`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub label: String,
}

/// Single-answer multiple-choice question
///
/// The correct answer never reaches the client; it is revealed only by a
/// server-side validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub position: u32,
    pub created_at: DateTime<Utc>,
}

/// One draggable entry of a [`SequenceOrder`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceItem {
    pub id: SequenceItemId,
    pub label: String,
}

/// Question answered by putting items into the right order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceOrder {
    pub id: QuestionId,
    pub prompt: String,
    /// Items in display (shuffled) order
    pub items: Vec<SequenceItem>,
    pub position: u32,
    pub created_at: DateTime<Utc>,
}

/// Any question that can appear inside a sub-quiz, discriminated by `_tag`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_tag")]
pub enum QuizQuestion {
    #[serde(rename = "choice_question")]
    ChoiceQuestion(ChoiceQuestion),
    #[serde(rename = "sequence_order")]
    SequenceOrder(SequenceOrder),
}

pub const CHOICE_QUESTION_TAG: &str = "choice_question";
pub const SEQUENCE_ORDER_TAG: &str = "sequence_order";

const CHOICE_SCHEMA: Schema = Schema {
    name: "Choice",
    fields: &[
        Field::required("id", FieldKind::String),
        Field::required("label", FieldKind::String),
    ],
};

pub const CHOICE_QUESTION_SCHEMA: Schema = Schema {
    name: "ChoiceQuestion",
    fields: &[
        Field::required("_tag", FieldKind::Literal(&[CHOICE_QUESTION_TAG])),
        Field::required("id", FieldKind::String),
        Field::required("prompt", FieldKind::String),
        Field::required("choices", FieldKind::ArrayOf(&FieldKind::Object(&CHOICE_SCHEMA))),
        Field::optional("explanation", FieldKind::String),
        Field::required("position", FieldKind::Unsigned),
        Field::required("createdAt", FieldKind::DateFromString),
    ],
};

const SEQUENCE_ITEM_SCHEMA: Schema = Schema {
    name: "SequenceItem",
    fields: &[
        Field::required("id", FieldKind::String),
        Field::required("label", FieldKind::String),
    ],
};

pub const SEQUENCE_ORDER_SCHEMA: Schema = Schema {
    name: "SequenceOrder",
    fields: &[
        Field::required("_tag", FieldKind::Literal(&[SEQUENCE_ORDER_TAG])),
        Field::required("id", FieldKind::String),
        Field::required("prompt", FieldKind::String),
        Field::required(
            "items",
            FieldKind::ArrayOf(&FieldKind::Object(&SEQUENCE_ITEM_SCHEMA)),
        ),
        Field::required("position", FieldKind::Unsigned),
        Field::required("createdAt", FieldKind::DateFromString),
    ],
};

pub const QUIZ_QUESTION_KIND: FieldKind = FieldKind::Tagged {
    tag: "_tag",
    variants: &[
        (CHOICE_QUESTION_TAG, &CHOICE_QUESTION_SCHEMA),
        (SEQUENCE_ORDER_TAG, &SEQUENCE_ORDER_SCHEMA),
    ],
};

impl SchemaDecode for ChoiceQuestion {
    const SCHEMA: &'static Schema = &CHOICE_QUESTION_SCHEMA;
}

impl SchemaDecode for SequenceOrder {
    const SCHEMA: &'static Schema = &SEQUENCE_ORDER_SCHEMA;
}
