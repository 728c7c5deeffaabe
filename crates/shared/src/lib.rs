//! Quizdeck Shared - wire types exchanged with the server functions
//!
//! This crate contains everything that crosses the client/server boundary:
//! - The tagged `Success`/`Failure` envelope ([`WireResult`])
//! - Closed error-code vocabularies per feature ([`WireError`])
//! - Server-function request payloads ([`ServerFnRequest`])
//! - Client-side transport errors ([`RequestError`])
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and thiserror
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod envelope;
pub mod errors;
pub mod requests;
pub mod responses;

pub use envelope::WireResult;
pub use errors::{
    AuthErrorCode, CategoryErrorCode, ErrorVocabulary, OnboardingErrorCode, QuizErrorCode,
    WireError, FALLBACK_ERROR_MESSAGE,
};
pub use requests::{
    CategoryItemParams, CompleteOnboardingData, CompleteSkillParams, SelectCategoriesData,
    ServerFnRequest, SignInData, SignUpData, SubQuizParams, UpdatePasswordData,
    ValidateChoiceQuestionParams, ValidateSequenceOrderParams, VerifyEmailTokenData,
};
pub use responses::RequestError;
