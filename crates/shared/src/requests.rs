//! Server-function request payloads
//!
//! Every remote operation is a named server function taking a single `data`
//! object. [`ServerFnRequest`] is adjacently tagged so the wire form is
//! `{"function": "completeSkill", "data": {"categoryId": "...", ...}}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quizdeck_domain::{
    CategoryId, ChoiceId, ItemId, QuestionId, QuizId, SequenceItemId, SkillId,
};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

// Passwords never end up in logs.
impl fmt::Debug for SignInData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for SignUpData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailTokenData {
    pub token: String,
}

/// Password reset: the emailed token plus the new password
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePasswordData {
    pub token: String,
    pub password: String,
}

impl fmt::Debug for UpdatePasswordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdatePasswordData")
            .field("token", &self.token)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOnboardingData {
    pub display_name: String,
    pub category_ids: Vec<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectCategoriesData {
    pub category_ids: Vec<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItemParams {
    pub category_id: CategoryId,
    pub item_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSkillParams {
    pub category_id: CategoryId,
    pub skill_id: SkillId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuizParams {
    pub category_id: CategoryId,
    pub quiz_id: QuizId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateChoiceQuestionParams {
    pub category_id: CategoryId,
    pub quiz_id: QuizId,
    pub question_id: QuestionId,
    pub choice_id: ChoiceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSequenceOrderParams {
    pub category_id: CategoryId,
    pub quiz_id: QuizId,
    pub question_id: QuestionId,
    pub order: Vec<SequenceItemId>,
}

/// One call to a named server function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "function", content = "data", rename_all = "camelCase")]
pub enum ServerFnRequest {
    // === Auth ===
    SignIn(SignInData),
    SignUp(SignUpData),
    SignOut,
    VerifyEmailToken(VerifyEmailTokenData),
    UpdatePassword(UpdatePasswordData),
    GetCurrentUser,

    // === Onboarding ===
    CompleteOnboarding(CompleteOnboardingData),

    // === Categories ===
    ListCategories,
    SelectCategories(SelectCategoriesData),
    GetCategoryContentItemById(CategoryItemParams),
    CompleteSkill(CompleteSkillParams),

    // === Quizzes ===
    GetSubQuizContent(SubQuizParams),
    ValidateChoiceQuestion(ValidateChoiceQuestionParams),
    ValidateSequenceOrder(ValidateSequenceOrderParams),
}

impl ServerFnRequest {
    /// Name of the server function, identical to the serialized tag.
    pub fn function_name(&self) -> &'static str {
        match self {
            ServerFnRequest::SignIn(_) => "signIn",
            ServerFnRequest::SignUp(_) => "signUp",
            ServerFnRequest::SignOut => "signOut",
            ServerFnRequest::VerifyEmailToken(_) => "verifyEmailToken",
            ServerFnRequest::UpdatePassword(_) => "updatePassword",
            ServerFnRequest::GetCurrentUser => "getCurrentUser",
            ServerFnRequest::CompleteOnboarding(_) => "completeOnboarding",
            ServerFnRequest::ListCategories => "listCategories",
            ServerFnRequest::SelectCategories(_) => "selectCategories",
            ServerFnRequest::GetCategoryContentItemById(_) => "getCategoryContentItemById",
            ServerFnRequest::CompleteSkill(_) => "completeSkill",
            ServerFnRequest::GetSubQuizContent(_) => "getSubQuizContent",
            ServerFnRequest::ValidateChoiceQuestion(_) => "validateChoiceQuestion",
            ServerFnRequest::ValidateSequenceOrder(_) => "validateSequenceOrder",
        }
    }

    /// The `data` object sent to the server function; `{}` for
    /// functions without parameters.
    pub fn data(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        Ok(value
            .get_mut("data")
            .map(Value::take)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_requests() -> Vec<ServerFnRequest> {
        vec![
            ServerFnRequest::SignIn(SignInData {
                email: "a@b.c".into(),
                password: "pw".into(),
            }),
            ServerFnRequest::SignOut,
            ServerFnRequest::GetCurrentUser,
            ServerFnRequest::ListCategories,
            ServerFnRequest::GetCategoryContentItemById(CategoryItemParams {
                category_id: "c1".into(),
                item_id: "i1".into(),
            }),
            ServerFnRequest::ValidateSequenceOrder(ValidateSequenceOrderParams {
                category_id: "c1".into(),
                quiz_id: "q1".into(),
                question_id: "qq1".into(),
                order: vec!["b".into(), "a".into()],
            }),
        ]
    }

    #[test]
    fn function_name_matches_serialized_tag() {
        for request in all_requests() {
            let value = serde_json::to_value(&request).expect("serialize");
            assert_eq!(value["function"], request.function_name());
        }
    }

    #[test]
    fn data_uses_camel_case_identifiers() {
        let request = ServerFnRequest::CompleteSkill(CompleteSkillParams {
            category_id: "c1".into(),
            skill_id: "s1".into(),
        });
        assert_eq!(
            request.data().expect("data"),
            json!({"categoryId": "c1", "skillId": "s1"})
        );
    }

    #[test]
    fn parameterless_functions_send_empty_object() {
        assert_eq!(ServerFnRequest::SignOut.data().expect("data"), json!({}));
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let request = ServerFnRequest::SignIn(SignInData {
            email: "a@b.c".into(),
            password: "hunter2".into(),
        });
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("a@b.c"));
    }
}
