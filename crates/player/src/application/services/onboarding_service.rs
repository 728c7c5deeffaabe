//! Onboarding Service - completes the first-run profile setup

use std::sync::Arc;

use quizdeck_domain::{CategoryId, UserProfile};
use quizdeck_shared::{
    CompleteOnboardingData, OnboardingErrorCode, ServerFnRequest, WireError, WireResult,
};

use crate::application::ParseEnvelope;
use crate::ports::outbound::ServerFnPort;

pub type OnboardingResult<T> = WireResult<T, WireError<OnboardingErrorCode>>;

#[derive(Clone)]
pub struct OnboardingService {
    server: Arc<dyn ServerFnPort>,
}

impl OnboardingService {
    pub fn new(server: Arc<dyn ServerFnPort>) -> Self {
        Self { server }
    }

    /// Store the display name and initial category picks; resolves to the
    /// updated (now onboarded) profile.
    pub async fn complete_onboarding(
        &self,
        display_name: &str,
        category_ids: Vec<CategoryId>,
    ) -> OnboardingResult<UserProfile> {
        self.server
            .call(ServerFnRequest::CompleteOnboarding(CompleteOnboardingData {
                display_name: display_name.to_string(),
                category_ids,
            }))
            .await
            .into_envelope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::MockServerFnPort;

    #[tokio::test]
    async fn complete_onboarding_returns_updated_profile() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call()
            .withf(|req| {
                matches!(req, ServerFnRequest::CompleteOnboarding(data)
                    if data.display_name == "Ada" && data.category_ids.len() == 2)
            })
            .times(1)
            .returning(|_| Ok(fixtures::success(fixtures::user_json(true, true))));

        let service = OnboardingService::new(Arc::new(mock));
        let result = service
            .complete_onboarding("Ada", vec!["c1".into(), "c2".into()])
            .await;

        let WireResult::Success { value } = result else {
            panic!("expected success");
        };
        assert!(value.onboarded);
    }

    #[tokio::test]
    async fn already_onboarded_is_a_business_failure() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call().returning(|_| {
            Ok(fixtures::failure("onboarding_already_completed", "Already done"))
        });

        let service = OnboardingService::new(Arc::new(mock));
        let result = service.complete_onboarding("Ada", Vec::new()).await;
        assert_eq!(
            result,
            WireResult::failure(WireError::new(
                OnboardingErrorCode::OnboardingAlreadyCompleted,
                "Already done"
            ))
        );
    }
}
