//! Quizdeck Domain - entities, identifiers, and structural schemas
//!
//! Everything in this crate is read-only data as far as the client is
//! concerned: entities are created server-side and replaced by refetching.
//! The [`schema`] module describes each entity's wire shape declaratively so
//! malformed payloads are rejected before they reach application code.

pub mod entities;
pub mod ids;
pub mod schema;

pub use entities::{
    Category, CategoryItem, CategoryItemKind, CategoryList, CategorySelection, Choice,
    ChoiceQuestion, ChoiceValidation, QuizQuestion, SequenceItem, SequenceOrder,
    SequenceValidation, SkillCompletion, SubQuiz, UserProfile,
};
pub use ids::{
    CategoryId, ChoiceId, ItemId, QuestionId, QuizId, SequenceItemId, SkillId, UserId,
};
pub use schema::{decode, Field, FieldKind, Schema, SchemaDecode, SchemaViolations, Violation};
