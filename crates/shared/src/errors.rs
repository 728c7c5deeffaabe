//! Error records carried inside a `Failure` envelope
//!
//! Every feature owns a closed vocabulary of error codes. Codes serialize as
//! fixed string literals and unknown codes are rejected on deserialization,
//! so a free-form value can never masquerade as a known failure.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Message used when a failure carries nothing error-shaped to report
pub const FALLBACK_ERROR_MESSAGE: &str = "Unknown error occurred";

/// A closed set of error codes for one feature.
///
/// Each vocabulary reserves a transport code (`FETCH_ERROR`) that adapters
/// use when the remote call itself fails.
pub trait ErrorVocabulary:
    Copy + Eq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const FETCH_ERROR: Self;

    /// The literal written on the wire.
    fn as_str(&self) -> &'static str;
}

macro_rules! error_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl ErrorVocabulary for $name {
            const FETCH_ERROR: Self = $name::FetchError;

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

error_vocabulary! {
    /// Sign-in, sign-up, and account maintenance failures
    AuthErrorCode {
        /// Email confirmation or reset token is unknown or expired
        InvalidToken => "invalid_token",
        /// Account was created through an external provider and has no password
        UserPasswordNotSetOrInvalidProvider => "user_password_not_set_or_invalid_provider",
        InvalidCredentials => "invalid_credentials",
        EmailNotConfirmed => "email_not_confirmed",
        FetchError => "FETCH_ERROR",
    }
}

error_vocabulary! {
    OnboardingErrorCode {
        OnboardingAlreadyCompleted => "onboarding_already_completed",
        InvalidProfile => "invalid_profile",
        FetchError => "FETCH_ERROR",
    }
}

error_vocabulary! {
    /// Category browsing, selection, and skill completion failures
    CategoryErrorCode {
        CategoryNotFound => "category_not_found",
        CategoryItemNotFound => "category_item_not_found",
        SkillAlreadyCompleted => "skill_already_completed",
        InvalidCategorySelection => "invalid_category_selection",
        FetchError => "FETCH_ERROR",
    }
}

error_vocabulary! {
    /// Quiz content and answer validation failures
    QuizErrorCode {
        SubQuizNotFound => "sub_quiz_not_found",
        QuestionNotFound => "question_not_found",
        /// The submitted answer does not fit the question (unknown choice, incomplete ordering)
        InvalidAnswer => "invalid_answer",
        FetchError => "FETCH_ERROR",
    }
}

/// Error record `{ code, message }` inside a `Failure` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError<C> {
    pub code: C,
    pub message: String,
}

impl<C: ErrorVocabulary> WireError<C> {
    pub fn new(code: C, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Transport failure; falls back to a generic message when the
    /// underlying failure carried none.
    pub fn fetch_error(message: Option<String>) -> Self {
        Self {
            code: C::FETCH_ERROR,
            message: message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn is_fetch_error(&self) -> bool {
        self.code == C::FETCH_ERROR
    }
}

impl<C: ErrorVocabulary> fmt::Display for WireError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code.as_str())
    }
}

impl<C: ErrorVocabulary> std::error::Error for WireError<C> {}
