//! Query keys and the pure functions deriving them
//!
//! A [`QueryKey`] is an ordered tuple of string segments. Keys are
//! hierarchical: invalidating `["sub-quiz-content", "c1"]` also invalidates
//! `["sub-quiz-content", "c1", "q1", "qq1"]`. Interaction hooks always derive
//! their key from the same identifiers they pass to the adapter, so only the
//! affected region of the cache is touched.

use std::fmt;

use quizdeck_domain::{CategoryId, QuestionId, QuizId, SkillId};

pub const CURRENT_USER: &str = "current-user";
pub const USER_CATEGORIES: &str = "user-categories";
pub const SINGLE_CATEGORY_ITEM: &str = "single-category-item";
pub const SUB_QUIZ_CONTENT: &str = "sub-quiz-content";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Whether `self` addresses `other`, i.e. `other` starts with every
    /// segment of `self` in order. A key is a prefix of itself.
    pub fn is_prefix_of(&self, other: &QueryKey) -> bool {
        other.0.len() >= self.0.len() && other.0.iter().zip(&self.0).all(|(a, b)| a == b)
    }

    /// Extend with one more segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }
}

impl<const N: usize> From<[&str; N]> for QueryKey {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

pub fn current_user() -> QueryKey {
    QueryKey::new([CURRENT_USER])
}

pub fn user_categories() -> QueryKey {
    QueryKey::new([USER_CATEGORIES])
}

/// Key of a single category item; skills are category items, so completing
/// a skill invalidates `single_category_item(category, skill)`.
pub fn single_category_item(category_id: &CategoryId, item_id: &str) -> QueryKey {
    QueryKey::new([SINGLE_CATEGORY_ITEM, category_id.as_str(), item_id])
}

pub fn completed_skill(category_id: &CategoryId, skill_id: &SkillId) -> QueryKey {
    single_category_item(category_id, skill_id.as_str())
}

pub fn sub_quiz(category_id: &CategoryId, quiz_id: &QuizId) -> QueryKey {
    QueryKey::new([SUB_QUIZ_CONTENT, category_id.as_str(), quiz_id.as_str()])
}

pub fn sub_quiz_question(
    category_id: &CategoryId,
    quiz_id: &QuizId,
    question_id: &QuestionId,
) -> QueryKey {
    sub_quiz(category_id, quiz_id).child(question_id.as_str())
}
