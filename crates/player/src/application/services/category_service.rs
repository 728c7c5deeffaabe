//! Category Service - browsing, selecting, and completing category content

use std::sync::Arc;

use quizdeck_domain::{decode, CategoryId, CategoryItem, CategoryList, CategorySelection, SkillCompletion};
use quizdeck_shared::{
    CategoryErrorCode, CategoryItemParams, CompleteSkillParams, SelectCategoriesData,
    ServerFnRequest, WireError, WireResult,
};

use crate::application::error::{catch, take_field};
use crate::application::ParseEnvelope;
use crate::ports::outbound::ServerFnPort;

pub type CategoryResult<T> = WireResult<T, WireError<CategoryErrorCode>>;

/// Message raised when the content-item envelope comes back as `Failure`
pub const CONTENT_ITEM_FETCH_FAILED: &str = "Failed to fetch category content item";

#[derive(Clone)]
pub struct CategoryService {
    server: Arc<dyn ServerFnPort>,
}

impl CategoryService {
    pub fn new(server: Arc<dyn ServerFnPort>) -> Self {
        Self { server }
    }

    /// All categories available for selection
    pub async fn list_categories(&self) -> CategoryResult<CategoryList> {
        self.server
            .call(ServerFnRequest::ListCategories)
            .await
            .into_payload()
    }

    /// Replace the user's selected categories
    pub async fn select_categories(
        &self,
        category_ids: Vec<CategoryId>,
    ) -> CategoryResult<CategorySelection> {
        self.server
            .call(ServerFnRequest::SelectCategories(SelectCategoriesData {
                category_ids,
            }))
            .await
            .into_envelope()
    }

    /// Fetch one item of a category.
    ///
    /// The server answers with an envelope wrapping `{ categoryItem }`; this
    /// adapter unwraps it, so a `Success` carries the bare item. A remote
    /// `Failure` is not passed through: it is reported as `FETCH_ERROR` with
    /// [`CONTENT_ITEM_FETCH_FAILED`].
    pub async fn get_category_content_item_by_id(
        &self,
        params: CategoryItemParams,
    ) -> CategoryResult<CategoryItem> {
        let response = self
            .server
            .call(ServerFnRequest::GetCategoryContentItemById(params))
            .await;

        catch(
            response
                .unwrap_envelope::<CategoryErrorCode>(CONTENT_ITEM_FETCH_FAILED)
                .and_then(|value| take_field(value, "categoryItem"))
                .and_then(|item| decode::<CategoryItem>(item).map_err(Into::into)),
        )
    }

    /// Mark a skill complete
    pub async fn complete_skill(&self, params: CompleteSkillParams) -> CategoryResult<SkillCompletion> {
        self.server
            .call(ServerFnRequest::CompleteSkill(params))
            .await
            .into_envelope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::MockServerFnPort;
    use quizdeck_shared::{RequestError, FALLBACK_ERROR_MESSAGE};
    use serde_json::json;

    fn params() -> CategoryItemParams {
        CategoryItemParams {
            category_id: "c1".into(),
            item_id: "i1".into(),
        }
    }

    fn service(mock: MockServerFnPort) -> CategoryService {
        CategoryService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn content_item_success_is_unwrapped() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call()
            .withf(|req| {
                matches!(req, ServerFnRequest::GetCategoryContentItemById(p)
                    if p.category_id.as_str() == "c1" && p.item_id.as_str() == "i1")
            })
            .times(1)
            .returning(|_| {
                Ok(fixtures::success(json!({
                    "categoryItem": fixtures::category_item_json("i1", "c1")
                })))
            });

        let result = service(mock).get_category_content_item_by_id(params()).await;

        let expected: CategoryItem =
            serde_json::from_value(fixtures::category_item_json("i1", "c1")).expect("fixture");
        assert_eq!(result, WireResult::success(expected));
    }

    #[tokio::test]
    async fn content_item_thrown_error_becomes_fetch_error() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call().returning(|_| {
            Err(RequestError::Thrown {
                status: 500,
                value: json!({"name": "Error", "message": "boom"}),
            })
        });

        let result = service(mock).get_category_content_item_by_id(params()).await;
        assert_eq!(
            result,
            WireResult::failure(WireError::new(CategoryErrorCode::FetchError, "boom"))
        );
    }

    #[tokio::test]
    async fn content_item_thrown_undefined_uses_fallback() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call().returning(|_| {
            Err(RequestError::Thrown {
                status: 500,
                value: serde_json::Value::Null,
            })
        });

        let result = service(mock).get_category_content_item_by_id(params()).await;
        assert_eq!(
            result,
            WireResult::failure(WireError::new(
                CategoryErrorCode::FetchError,
                FALLBACK_ERROR_MESSAGE
            ))
        );
    }

    #[tokio::test]
    async fn content_item_remote_failure_is_rewrapped_as_fetch_error() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call().returning(|_| {
            Ok(fixtures::failure("category_item_not_found", "No such item"))
        });

        let result = service(mock).get_category_content_item_by_id(params()).await;
        assert_eq!(
            result,
            WireResult::failure(WireError::new(
                CategoryErrorCode::FetchError,
                CONTENT_ITEM_FETCH_FAILED
            ))
        );
    }

    #[tokio::test]
    async fn identical_calls_produce_identical_results() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call().times(2).returning(|_| {
            Ok(fixtures::success(json!({
                "categoryItem": fixtures::category_item_json("i1", "c1")
            })))
        });
        let service = service(mock);

        let first = service.get_category_content_item_by_id(params()).await;
        let second = service.get_category_content_item_by_id(params()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn list_categories_rejects_malformed_payload() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call()
            .returning(|_| Ok(json!({"categories": [{"id": "c1"}]})));

        let result = service(mock).list_categories().await;
        let WireResult::Failure { error } = result else {
            panic!("expected failure");
        };
        assert!(error.is_fetch_error());
        assert!(error.message.contains("$.categories[0].name"));
    }

    #[tokio::test]
    async fn complete_skill_passes_business_failure_through() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call().returning(|_| {
            Ok(fixtures::failure("skill_already_completed", "Already completed"))
        });

        let result = service(mock)
            .complete_skill(CompleteSkillParams {
                category_id: "c1".into(),
                skill_id: "s1".into(),
            })
            .await;
        assert_eq!(
            result,
            WireResult::failure(WireError::new(
                CategoryErrorCode::SkillAlreadyCompleted,
                "Already completed"
            ))
        );
    }
}
