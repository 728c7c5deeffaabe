//! Interaction hooks - mutations coupled to query-cache invalidation
//!
//! Each handler awaits its adapter, then on `Success` invalidates the query
//! key derived from the same identifiers it sent. A `Failure` leaves the
//! cache untouched. The adapter's result is always returned verbatim, even
//! when the cache itself fails.

use std::sync::Arc;

use quizdeck_domain::{
    CategoryId, CategorySelection, ChoiceValidation, SequenceValidation, SkillCompletion,
    UserProfile,
};
use quizdeck_shared::{
    CompleteSkillParams, ValidateChoiceQuestionParams, ValidateSequenceOrderParams, WireResult,
};

use crate::application::query_keys::{self, QueryKey};
use crate::application::services::{
    AuthResult, AuthService, CategoryResult, CategoryService, OnboardingResult,
    OnboardingService, QuizResult, QuizService,
};
use crate::ports::outbound::QueryCachePort;

/// Invalidate `key` when `result` is a success; hand `result` back unchanged.
pub async fn invalidate_on_success<T, E>(
    cache: &dyn QueryCachePort,
    key: QueryKey,
    result: WireResult<T, E>,
) -> WireResult<T, E> {
    if result.is_success() {
        match cache.invalidate(&key).await {
            Ok(count) => tracing::debug!(key = %key, count, "Invalidated query"),
            Err(e) => tracing::warn!(key = %key, error = %e, "Failed to invalidate query"),
        }
    }
    result
}

/// Cache-coupled actions exposed to the UI
#[derive(Clone)]
pub struct Interactions {
    auth: AuthService,
    onboarding: OnboardingService,
    categories: CategoryService,
    quiz: QuizService,
    cache: Arc<dyn QueryCachePort>,
}

impl Interactions {
    pub fn new(
        auth: AuthService,
        onboarding: OnboardingService,
        categories: CategoryService,
        quiz: QuizService,
        cache: Arc<dyn QueryCachePort>,
    ) -> Self {
        Self {
            auth,
            onboarding,
            categories,
            quiz,
            cache,
        }
    }

    pub async fn handle_complete_skill(
        &self,
        params: CompleteSkillParams,
    ) -> CategoryResult<SkillCompletion> {
        let key = query_keys::completed_skill(&params.category_id, &params.skill_id);
        let result = self.categories.complete_skill(params).await;
        invalidate_on_success(self.cache.as_ref(), key, result).await
    }

    pub async fn handle_validate_choice_question(
        &self,
        params: ValidateChoiceQuestionParams,
    ) -> QuizResult<ChoiceValidation> {
        let key =
            query_keys::sub_quiz_question(&params.category_id, &params.quiz_id, &params.question_id);
        let result = self.quiz.validate_choice_question(params).await;
        invalidate_on_success(self.cache.as_ref(), key, result).await
    }

    pub async fn handle_validate_sequence_order(
        &self,
        params: ValidateSequenceOrderParams,
    ) -> QuizResult<SequenceValidation> {
        let key =
            query_keys::sub_quiz_question(&params.category_id, &params.quiz_id, &params.question_id);
        let result = self.quiz.validate_sequence_order(params).await;
        invalidate_on_success(self.cache.as_ref(), key, result).await
    }

    pub async fn handle_select_categories(
        &self,
        category_ids: Vec<CategoryId>,
    ) -> CategoryResult<CategorySelection> {
        let result = self.categories.select_categories(category_ids).await;
        invalidate_on_success(self.cache.as_ref(), query_keys::user_categories(), result).await
    }

    pub async fn handle_complete_onboarding(
        &self,
        display_name: &str,
        category_ids: Vec<CategoryId>,
    ) -> OnboardingResult<UserProfile> {
        let result = self
            .onboarding
            .complete_onboarding(display_name, category_ids)
            .await;
        invalidate_on_success(self.cache.as_ref(), query_keys::current_user(), result).await
    }

    pub async fn handle_sign_out(&self) -> AuthResult<()> {
        let result = self.auth.sign_out().await;
        invalidate_on_success(self.cache.as_ref(), query_keys::current_user(), result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::{CacheError, MockQueryCachePort, MockServerFnPort};
    use quizdeck_shared::{QuizErrorCode, ServerFnRequest, WireError};
    use serde_json::json;

    fn interactions(server: MockServerFnPort, cache: MockQueryCachePort) -> Interactions {
        let server: Arc<dyn crate::ports::outbound::ServerFnPort> = Arc::new(server);
        Interactions::new(
            AuthService::new(server.clone()),
            OnboardingService::new(server.clone()),
            CategoryService::new(server.clone()),
            QuizService::new(server),
            Arc::new(cache),
        )
    }

    fn choice_params() -> ValidateChoiceQuestionParams {
        ValidateChoiceQuestionParams {
            category_id: "c1".into(),
            quiz_id: "q1".into(),
            question_id: "qq1".into(),
            choice_id: "a".into(),
        }
    }

    #[tokio::test]
    async fn complete_skill_invalidates_the_skill_item_once() {
        let mut server = MockServerFnPort::new();
        server
            .expect_call()
            .withf(|req| matches!(req, ServerFnRequest::CompleteSkill(_)))
            .times(1)
            .returning(|_| {
                Ok(fixtures::success(json!({
                    "skillId": "s1",
                    "completedAt": "2024-03-01T12:00:00Z"
                })))
            });

        let mut cache = MockQueryCachePort::new();
        cache
            .expect_invalidate()
            .withf(|key| *key == QueryKey::from(["single-category-item", "c1", "s1"]))
            .times(1)
            .returning(|_| Ok(1));

        let result = interactions(server, cache)
            .handle_complete_skill(CompleteSkillParams {
                category_id: "c1".into(),
                skill_id: "s1".into(),
            })
            .await;

        let WireResult::Success { value } = result else {
            panic!("expected success");
        };
        assert_eq!(value.skill_id.as_str(), "s1");
    }

    #[tokio::test]
    async fn failed_validation_leaves_cache_untouched() {
        let mut server = MockServerFnPort::new();
        server
            .expect_call()
            .returning(|_| Ok(fixtures::failure("question_not_found", "Gone")));

        let mut cache = MockQueryCachePort::new();
        cache.expect_invalidate().times(0);

        let result = interactions(server, cache)
            .handle_validate_choice_question(choice_params())
            .await;
        assert_eq!(
            result,
            WireResult::failure(WireError::new(QuizErrorCode::QuestionNotFound, "Gone"))
        );
    }

    #[tokio::test]
    async fn successful_validation_invalidates_only_that_question() {
        let mut server = MockServerFnPort::new();
        server.expect_call().returning(|_| {
            Ok(fixtures::success(json!({"questionId": "qq1", "correct": true})))
        });

        let mut cache = MockQueryCachePort::new();
        cache
            .expect_invalidate()
            .withf(|key| *key == QueryKey::from(["sub-quiz-content", "c1", "q1", "qq1"]))
            .times(1)
            .returning(|_| Ok(1));

        let result = interactions(server, cache)
            .handle_validate_choice_question(choice_params())
            .await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn sequence_validation_uses_question_key() {
        let mut server = MockServerFnPort::new();
        server.expect_call().returning(|_| {
            Ok(fixtures::success(json!({"questionId": "qq2", "correct": true})))
        });

        let mut cache = MockQueryCachePort::new();
        cache
            .expect_invalidate()
            .withf(|key| *key == QueryKey::from(["sub-quiz-content", "c1", "q1", "qq2"]))
            .times(1)
            .returning(|_| Ok(0));

        let result = interactions(server, cache)
            .handle_validate_sequence_order(ValidateSequenceOrderParams {
                category_id: "c1".into(),
                quiz_id: "q1".into(),
                question_id: "qq2".into(),
                order: vec!["a".into(), "b".into()],
            })
            .await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn cache_failure_does_not_change_result() {
        let mut server = MockServerFnPort::new();
        server.expect_call().returning(|_| {
            Ok(fixtures::success(json!({"selectedCategoryIds": ["c1"]})))
        });

        let mut cache = MockQueryCachePort::new();
        cache
            .expect_invalidate()
            .withf(|key| *key == QueryKey::from(["user-categories"]))
            .times(1)
            .returning(|_| Err(CacheError::Closed));

        let result = interactions(server, cache)
            .handle_select_categories(vec!["c1".into()])
            .await;

        let WireResult::Success { value } = result else {
            panic!("expected success");
        };
        assert_eq!(value.selected_category_ids.len(), 1);
    }

    #[tokio::test]
    async fn onboarding_and_sign_out_refresh_current_user() {
        let mut server = MockServerFnPort::new();
        server
            .expect_call()
            .withf(|req| matches!(req, ServerFnRequest::CompleteOnboarding(_)))
            .times(1)
            .returning(|_| Ok(fixtures::success(fixtures::user_json(true, true))));
        server
            .expect_call()
            .withf(|req| matches!(req, ServerFnRequest::SignOut))
            .times(1)
            .returning(|_| Ok(fixtures::success(serde_json::Value::Null)));

        let mut cache = MockQueryCachePort::new();
        cache
            .expect_invalidate()
            .withf(|key| *key == QueryKey::from(["current-user"]))
            .times(2)
            .returning(|_| Ok(1));

        let interactions = interactions(server, cache);
        assert!(interactions
            .handle_complete_onboarding("Ada", vec!["c1".into()])
            .await
            .is_success());
        assert!(interactions.handle_sign_out().await.is_success());
    }
}
