//! Shell gating - which view a shell shows for the current session
//!
//! Gates are an ordered list of `(predicate, view)` pairs checked top-down on
//! every render; the first one that applies wins and nothing is remembered
//! between renders. Order is load-bearing: loading pre-empts everything,
//! confirmation is checked before onboarding, and the wrapped content is
//! shown only when no gate applies.

use quizdeck_domain::UserProfile;

/// Session state as resolved by the current-user query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub is_loading: bool,
    pub user: Option<UserProfile>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            user: None,
        }
    }

    pub fn resolved(user: Option<UserProfile>) -> Self {
        Self {
            is_loading: false,
            user,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellView {
    Loading,
    /// Signed in, email not yet confirmed
    Unconfirmed,
    /// Confirmed, first-run setup not finished
    Onboarding,
    /// Render the wrapped content
    Content,
}

#[derive(Clone, Copy)]
pub struct Guard {
    pub name: &'static str,
    pub applies: fn(&SessionSnapshot) -> bool,
    pub view: ShellView,
}

fn is_loading(session: &SessionSnapshot) -> bool {
    session.is_loading
}

fn is_unconfirmed(session: &SessionSnapshot) -> bool {
    session.user.as_ref().is_some_and(|user| !user.confirmed)
}

fn needs_onboarding(session: &SessionSnapshot) -> bool {
    session
        .user
        .as_ref()
        .is_some_and(|user| user.confirmed && !user.onboarded)
}

pub const LOADING_GUARD: Guard = Guard {
    name: "loading",
    applies: is_loading,
    view: ShellView::Loading,
};

pub const UNCONFIRMED_GUARD: Guard = Guard {
    name: "unconfirmed",
    applies: is_unconfirmed,
    view: ShellView::Unconfirmed,
};

pub const ONBOARDING_GUARD: Guard = Guard {
    name: "onboarding",
    applies: needs_onboarding,
    view: ShellView::Onboarding,
};

/// Gates owned by the outer `UserShell`
pub const USER_SHELL_GUARDS: &[Guard] = &[LOADING_GUARD, UNCONFIRMED_GUARD];

/// Gates owned by the inner `OnboardingShell`
pub const ONBOARDING_SHELL_GUARDS: &[Guard] = &[ONBOARDING_GUARD];

/// The full chain seen by content nested in both shells
pub const SHELL_GUARDS: &[Guard] = &[LOADING_GUARD, UNCONFIRMED_GUARD, ONBOARDING_GUARD];

/// First applicable guard's view, or [`ShellView::Content`].
pub fn evaluate(guards: &[Guard], session: &SessionSnapshot) -> ShellView {
    guards
        .iter()
        .find(|guard| (guard.applies)(session))
        .map(|guard| {
            tracing::trace!(guard = guard.name, "Shell gate applied");
            guard.view
        })
        .unwrap_or(ShellView::Content)
}
