//! Service providers for the presentation layer
//!
//! The composition root builds one [`Services`] bundle and provides it as a
//! Dioxus context. Components reach adapters, interaction hooks, and the
//! query cache through it without depending on infrastructure types.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::{AuthService, CategoryService, OnboardingService, QuizService};
use crate::application::Interactions;
use crate::ports::outbound::{QueryCachePort, ServerFnPort};

#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub onboarding: OnboardingService,
    pub categories: CategoryService,
    pub quiz: QuizService,
    pub interactions: Interactions,
    pub cache: Arc<dyn QueryCachePort>,
}

impl Services {
    /// Wire every adapter to the same server-function transport and cache.
    pub fn new(server: Arc<dyn ServerFnPort>, cache: Arc<dyn QueryCachePort>) -> Self {
        let auth = AuthService::new(server.clone());
        let onboarding = OnboardingService::new(server.clone());
        let categories = CategoryService::new(server.clone());
        let quiz = QuizService::new(server);
        let interactions = Interactions::new(
            auth.clone(),
            onboarding.clone(),
            categories.clone(),
            quiz.clone(),
            cache.clone(),
        );

        Self {
            auth,
            onboarding,
            categories,
            quiz,
            interactions,
            cache,
        }
    }
}

/// Hook to access the service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

pub fn use_interactions() -> Interactions {
    use_services().interactions
}
