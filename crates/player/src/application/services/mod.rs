//! Application services
//!
//! One adapter service per feature. Each wraps the remote operations of its
//! feature and always resolves to a [`WireResult`](quizdeck_shared::WireResult),
//! never to a raw error. Services depend on port traits, not concrete
//! infrastructure implementations.

pub mod auth_service;
pub mod category_service;
pub mod onboarding_service;
pub mod quiz_service;

pub use auth_service::{AuthResult, AuthService};
pub use category_service::{CategoryResult, CategoryService, CONTENT_ITEM_FETCH_FAILED};
pub use onboarding_service::{OnboardingResult, OnboardingService};
pub use quiz_service::{QuizResult, QuizService};
