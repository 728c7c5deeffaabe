//! Dioxus hooks over the interaction layer and the current-user query
//!
//! Mutation hooks return a [`Mutation`] holding the last tagged result plus a
//! [`Callback`] that triggers the interaction. Triggering spawns the call on
//! the component's scope; invalidation happens inside the interaction, and
//! queries listening on the cache refetch on their own.

use std::future::Future;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use serde::Serialize;

use quizdeck_domain::{
    CategoryId, CategorySelection, ChoiceValidation, SequenceValidation, SkillCompletion,
    UserProfile,
};
use quizdeck_shared::{
    CompleteSkillParams, ValidateChoiceQuestionParams, ValidateSequenceOrderParams, WireResult,
};

use crate::application::query_keys::{self, QueryKey};
use crate::application::services::{
    AuthResult, AuthService, CategoryResult, OnboardingResult, QuizResult,
};
use crate::ports::outbound::QueryCachePort;
use crate::ui::gate::SessionSnapshot;
use crate::ui::services::{use_interactions, use_services};

/// Number of calls of one mutation still running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct InFlight(usize);

impl InFlight {
    fn start(&mut self) {
        self.0 += 1;
    }

    fn finish(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    fn is_pending(self) -> bool {
        self.0 > 0
    }
}

/// State of one mutation hook
pub struct Mutation<T: 'static> {
    result: Signal<Option<T>>,
    in_flight: Signal<InFlight>,
}

impl<T: 'static> Clone for Mutation<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Mutation<T> {}

impl<T: 'static> Mutation<T> {
    /// Last settled result, `None` until the first call completes
    pub fn result(&self) -> Signal<Option<T>> {
        self.result
    }

    /// Whether any triggered call has not settled yet
    pub fn is_pending(&self) -> bool {
        self.in_flight.read().is_pending()
    }

    fn run(self, action: impl Future<Output = T> + 'static) {
        let mut result = self.result;
        let mut in_flight = self.in_flight;
        in_flight.write().start();
        spawn(async move {
            let outcome = action.await;
            result.set(Some(outcome));
            in_flight.write().finish();
        });
    }
}

fn use_mutation<T: 'static>() -> Mutation<T> {
    Mutation {
        result: use_signal(|| None),
        in_flight: use_signal(InFlight::default),
    }
}

pub fn use_complete_skill() -> (
    Mutation<CategoryResult<SkillCompletion>>,
    Callback<CompleteSkillParams>,
) {
    let interactions = use_interactions();
    let mutation = use_mutation();
    let trigger = use_callback(move |params: CompleteSkillParams| {
        let interactions = interactions.clone();
        mutation.run(async move { interactions.handle_complete_skill(params).await });
    });
    (mutation, trigger)
}

pub fn use_validate_choice_question() -> (
    Mutation<QuizResult<ChoiceValidation>>,
    Callback<ValidateChoiceQuestionParams>,
) {
    let interactions = use_interactions();
    let mutation = use_mutation();
    let trigger = use_callback(move |params: ValidateChoiceQuestionParams| {
        let interactions = interactions.clone();
        mutation.run(async move { interactions.handle_validate_choice_question(params).await });
    });
    (mutation, trigger)
}

pub fn use_validate_sequence_order() -> (
    Mutation<QuizResult<SequenceValidation>>,
    Callback<ValidateSequenceOrderParams>,
) {
    let interactions = use_interactions();
    let mutation = use_mutation();
    let trigger = use_callback(move |params: ValidateSequenceOrderParams| {
        let interactions = interactions.clone();
        mutation.run(async move { interactions.handle_validate_sequence_order(params).await });
    });
    (mutation, trigger)
}

pub fn use_select_categories() -> (
    Mutation<CategoryResult<CategorySelection>>,
    Callback<Vec<CategoryId>>,
) {
    let interactions = use_interactions();
    let mutation = use_mutation();
    let trigger = use_callback(move |category_ids: Vec<CategoryId>| {
        let interactions = interactions.clone();
        mutation.run(async move { interactions.handle_select_categories(category_ids).await });
    });
    (mutation, trigger)
}

/// Trigger takes `(display_name, category_ids)`
pub fn use_complete_onboarding() -> (
    Mutation<OnboardingResult<UserProfile>>,
    Callback<(String, Vec<CategoryId>)>,
) {
    let interactions = use_interactions();
    let mutation = use_mutation();
    let trigger = use_callback(move |(display_name, category_ids): (String, Vec<CategoryId>)| {
        let interactions = interactions.clone();
        mutation.run(async move {
            interactions
                .handle_complete_onboarding(&display_name, category_ids)
                .await
        });
    });
    (mutation, trigger)
}

pub fn use_sign_out() -> (Mutation<AuthResult<()>>, Callback<()>) {
    let interactions = use_interactions();
    let mutation = use_mutation();
    let trigger = use_callback(move |()| {
        let interactions = interactions.clone();
        mutation.run(async move { interactions.handle_sign_out().await });
    });
    (mutation, trigger)
}

/// Current-user query shared through context
pub type CurrentUser = Resource<AuthResult<Option<UserProfile>>>;

async fn remember<T: Serialize>(cache: &dyn QueryCachePort, key: QueryKey, value: &T) {
    let stored = match serde_json::to_value(value) {
        Ok(json) => cache.set(key.clone(), json).await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    if let Err(error) = stored {
        tracing::warn!(key = %key, error = %error, "Failed to cache query result");
    }
}

/// Fetch the current user and record the outcome under the `current-user` key.
///
/// Failures are cached too: invalidation only reaches keys present in the
/// cache, so a query that never succeeded must still be registered.
pub(crate) async fn fetch_current_user(
    auth: &AuthService,
    cache: &dyn QueryCachePort,
) -> AuthResult<Option<UserProfile>> {
    let result = auth.get_current_user().await;
    remember(cache, query_keys::current_user(), &result).await;
    result
}

/// Call `refetch` each time `key` is invalidated, until the cache ends the
/// subscription.
pub(crate) async fn refetch_on_invalidation(
    mut invalidated: UnboundedReceiver<QueryKey>,
    key: QueryKey,
    mut refetch: impl FnMut(),
) {
    while let Some(stale) = invalidated.next().await {
        if stale == key {
            tracing::debug!(key = %key, "Refetching query");
            refetch();
        }
    }
}

/// Start the current-user query and provide it to descendants.
///
/// The query refetches whenever the `current-user` key is invalidated.
pub fn use_current_user_provider() -> CurrentUser {
    let services = use_services();
    let auth = services.auth.clone();
    let cache = services.cache.clone();

    let current_user = use_resource(move || {
        let auth = auth.clone();
        let cache = cache.clone();
        async move { fetch_current_user(&auth, cache.as_ref()).await }
    });

    let cache = services.cache;
    use_future(move || {
        let cache = cache.clone();
        let mut current_user = current_user;
        async move {
            let invalidated = cache.subscribe().await;
            refetch_on_invalidation(invalidated, query_keys::current_user(), move || {
                current_user.restart()
            })
            .await;
        }
    });

    use_context_provider(|| current_user)
}

pub fn session_snapshot(current_user: &CurrentUser) -> SessionSnapshot {
    match &*current_user.read() {
        None => SessionSnapshot::loading(),
        Some(WireResult::Success { value }) => SessionSnapshot::resolved(value.clone()),
        Some(WireResult::Failure { error }) => {
            tracing::warn!(error = %error, "Current user unavailable");
            SessionSnapshot::resolved(None)
        }
    }
}

/// Session state from the nearest [`use_current_user_provider`]
pub fn use_session() -> SessionSnapshot {
    let current_user = use_context::<CurrentUser>();
    session_snapshot(&current_user)
}
