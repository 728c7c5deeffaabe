//! Auth Service - sign-in, sign-up, and account maintenance
//!
//! Every operation except `get_current_user` uses the explicit-result
//! protocol, so failures such as `invalid_token` reach the UI as typed codes.

use std::sync::Arc;

use quizdeck_domain::UserProfile;
use quizdeck_shared::{
    AuthErrorCode, ServerFnRequest, SignInData, SignUpData, UpdatePasswordData,
    VerifyEmailTokenData, WireError, WireResult,
};

use crate::application::ParseEnvelope;
use crate::ports::outbound::ServerFnPort;

pub type AuthResult<T> = WireResult<T, WireError<AuthErrorCode>>;

#[derive(Clone)]
pub struct AuthService {
    server: Arc<dyn ServerFnPort>,
}

impl AuthService {
    pub fn new(server: Arc<dyn ServerFnPort>) -> Self {
        Self { server }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<UserProfile> {
        self.server
            .call(ServerFnRequest::SignIn(SignInData {
                email: email.to_string(),
                password: password.to_string(),
            }))
            .await
            .into_envelope()
    }

    pub async fn sign_up(&self, data: SignUpData) -> AuthResult<UserProfile> {
        self.server
            .call(ServerFnRequest::SignUp(data))
            .await
            .into_envelope()
    }

    pub async fn sign_out(&self) -> AuthResult<()> {
        self.server
            .call(ServerFnRequest::SignOut)
            .await
            .into_empty_envelope()
    }

    /// Confirm an email address with the token from the confirmation mail
    pub async fn verify_email_token(&self, token: &str) -> AuthResult<UserProfile> {
        self.server
            .call(ServerFnRequest::VerifyEmailToken(VerifyEmailTokenData {
                token: token.to_string(),
            }))
            .await
            .into_envelope()
    }

    /// Set a new password using a reset token
    pub async fn update_password(&self, token: &str, password: &str) -> AuthResult<()> {
        self.server
            .call(ServerFnRequest::UpdatePassword(UpdatePasswordData {
                token: token.to_string(),
                password: password.to_string(),
            }))
            .await
            .into_empty_envelope()
    }

    /// The signed-in user, `None` when nobody is signed in
    pub async fn get_current_user(&self) -> AuthResult<Option<UserProfile>> {
        self.server
            .call(ServerFnRequest::GetCurrentUser)
            .await
            .into_optional_payload()
    }
}
