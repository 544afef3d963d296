//! Session service — login, logout and the signed-in user.

use rackdash_domain::user::{NavUser, UserProfile};

use crate::endpoints::Endpoint;
use crate::error::{AppError, expect_success};
use crate::ports::{ApiTransport, RawBody};

pub const LOGIN_FAILED: &str = "Invalid username or password.";
pub const LOGOUT_FAILED: &str = "Failed to log out.";

/// Application service for the browser session.
pub struct AuthService<T> {
    transport: T,
}

impl<T: ApiTransport> AuthService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submit the login form, form-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] with the server message (or a generic
    /// one) when the credentials are refused.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AppError> {
        let form = RawBody::Form(vec![
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ]);
        let response = self.transport.post_raw(&Endpoint::Login.path(), form).await?;
        expect_success(response, LOGIN_FAILED)?;
        tracing::info!("signed in");
        Ok(())
    }

    /// End the session. Callers redirect to the login page whatever the
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] or [`AppError::Transport`] when the
    /// backend did not confirm the logout.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AppError> {
        let response = self
            .transport
            .post_json(&Endpoint::Logout.path(), &serde_json::json!({}))
            .await?;
        expect_success(response, LOGOUT_FAILED)?;
        Ok(())
    }

    /// Labels for the user chip.
    ///
    /// Any failure, including a body that is not a profile, yields `None`
    /// and the chrome keeps its generic labels.
    pub async fn current_user(&self) -> Option<NavUser> {
        let response = match self.transport.get(&Endpoint::CurrentUser.path(), &[]).await {
            Ok(response) if response.status_code == 200 => response,
            Ok(response) => {
                tracing::debug!(status = response.status_code, "no signed-in user");
                return None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "unable to load current user");
                return None;
            }
        };
        match response.decode::<UserProfile>() {
            Ok(profile) => Some(NavUser::from(&profile)),
            Err(err) => {
                tracing::warn!(error = %err, "unexpected profile body");
                None
            }
        }
    }
}
