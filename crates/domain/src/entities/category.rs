//! Category entities - learning categories and the items inside them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ItemId};
use crate::schema::{Field, FieldKind, Schema, SchemaDecode};

/// A learning category a user can select during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub item_count: u32,
}

/// Wrapper returned by the category listing operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryItemKind {
    Skill,
    Lesson,
    Quiz,
}

impl std::fmt::Display for CategoryItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryItemKind::Skill => write!(f, "skill"),
            CategoryItemKind::Lesson => write!(f, "lesson"),
            CategoryItemKind::Quiz => write!(f, "quiz"),
        }
    }
}

/// A single piece of content (skill, lesson or quiz) inside a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub title: String,
    pub kind: CategoryItemKind,
    pub completed: bool,
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

pub const CATEGORY_SCHEMA: Schema = Schema {
    name: "Category",
    fields: &[
        Field::required("id", FieldKind::String),
        Field::required("name", FieldKind::String),
        Field::optional("description", FieldKind::String),
        Field::required("itemCount", FieldKind::Unsigned),
    ],
};

pub const CATEGORY_LIST_SCHEMA: Schema = Schema {
    name: "CategoryList",
    fields: &[Field::required(
        "categories",
        FieldKind::ArrayOf(&FieldKind::Object(&CATEGORY_SCHEMA)),
    )],
};

pub const CATEGORY_ITEM_SCHEMA: Schema = Schema {
    name: "CategoryItem",
    fields: &[
        Field::required("id", FieldKind::String),
        Field::required("categoryId", FieldKind::String),
        Field::required("title", FieldKind::String),
        Field::required("kind", FieldKind::Literal(&["skill", "lesson", "quiz"])),
        Field::required("completed", FieldKind::Boolean),
        Field::required("position", FieldKind::Unsigned),
        Field::optional("updatedAt", FieldKind::DateFromString),
    ],
};

impl SchemaDecode for Category {
    const SCHEMA: &'static Schema = &CATEGORY_SCHEMA;
}

impl SchemaDecode for CategoryList {
    const SCHEMA: &'static Schema = &CATEGORY_LIST_SCHEMA;
}

impl SchemaDecode for CategoryItem {
    const SCHEMA: &'static Schema = &CATEGORY_ITEM_SCHEMA;
}
