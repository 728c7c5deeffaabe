//! Domain entities
//!
//! All entities are immutable value records identified by string ids. Each
//! one carries its wire [`Schema`](crate::schema::Schema) next to its type.

mod category;
mod outcome;
mod question;
mod sub_quiz;
mod user;

pub use category::{
    Category, CategoryItem, CategoryItemKind, CategoryList, CATEGORY_ITEM_SCHEMA,
    CATEGORY_LIST_SCHEMA, CATEGORY_SCHEMA,
};
pub use outcome::{
    CategorySelection, ChoiceValidation, SequenceValidation, SkillCompletion,
    CATEGORY_SELECTION_SCHEMA, CHOICE_VALIDATION_SCHEMA, SEQUENCE_VALIDATION_SCHEMA,
    SKILL_COMPLETION_SCHEMA,
};
pub use question::{
    Choice, ChoiceQuestion, QuizQuestion, SequenceItem, SequenceOrder, CHOICE_QUESTION_SCHEMA,
    CHOICE_QUESTION_TAG, QUIZ_QUESTION_KIND, SEQUENCE_ORDER_SCHEMA, SEQUENCE_ORDER_TAG,
};
pub use sub_quiz::{SubQuiz, SUB_QUIZ_SCHEMA};
pub use user::{UserProfile, USER_PROFILE_SCHEMA};
