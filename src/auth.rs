// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hosted authentication.
//!
//! The hosted service is reached through the [`AuthBackend`] trait. The
//! HTTP client is built explicitly from configuration at startup and
//! handed to an [`AuthSession`], which tracks who is signed in.

use crate::config::BackendConfig;
use crate::error::{AuthError, StoreError};
use crate::io::serialization::{decode, encode};
use crate::io::storage::KeyValueStore;
use crate::models::user::User;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

/// Email and password as typed on the login screen.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

/// Tokens and user returned by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub token_type: String,
    pub user: User,
}

/// Result of a sign-up: either signed in straight away, or waiting for
/// the user to confirm their email.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationRequired(User),
}

/// Operations offered by the hosted auth service.
pub trait AuthBackend {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError>;

    fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    fn current_user(&self, access_token: &str) -> Result<User, AuthError>;
}

/// Error body shapes used by the auth service.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Session(Session),
    User(User),
}

/// REST client for the hosted auth API.
pub struct HostedAuthClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl HostedAuthClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Turn a non-success response into [`AuthError::Rejected`].
    fn check(response: Response) -> Result<Response, AuthError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ErrorBody = response.json().unwrap_or_default();
        let message = body
            .error_description
            .or(body.msg)
            .or(body.message)
            .or(body.error)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

impl AuthBackend for HostedAuthClient {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(credentials)
            .send()?;

        Ok(Self::check(response)?.json::<Session>()?)
    }

    fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        let response = self
            .client
            .post(self.endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(credentials)
            .send()?;

        let outcome = match Self::check(response)?.json::<SignUpBody>()? {
            SignUpBody::Session(session) => SignUpOutcome::SignedIn(session),
            SignUpBody::User(user) => SignUpOutcome::ConfirmationRequired(user),
        };
        Ok(outcome)
    }

    fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()?;

        Self::check(response)?;
        Ok(())
    }

    fn current_user(&self, access_token: &str) -> Result<User, AuthError> {
        let response = self
            .client
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()?;

        Ok(Self::check(response)?.json::<User>()?)
    }
}

/// Storage key of the persisted session.
pub const SESSION_KEY: &str = "hawkwatch_session";

/// Read the persisted session. Unreadable values count as signed out.
pub fn load_session<S: KeyValueStore>(storage: &S) -> Option<Session> {
    let raw = match storage.get(SESSION_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            log::error!("Error loading session: {}", e);
            return None;
        }
    };

    match decode(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Stored session is unreadable, ignoring it: {}", e);
            None
        }
    }
}

/// Persist `session`, or remove the stored one when signed out.
pub fn save_session<S: KeyValueStore>(storage: &mut S, session: Option<&Session>) -> Result<(), StoreError> {
    let key = SESSION_KEY.to_string();
    match session {
        Some(session) => {
            let raw = encode(session).map_err(|source| StoreError::Encode { key: key.clone(), source })?;
            storage.set(SESSION_KEY, &raw).map_err(|source| StoreError::Io { key, source })
        }
        None => storage.remove(SESSION_KEY).map_err(|source| StoreError::Io { key, source }),
    }
}

/// Tracks the signed-in user on top of an [`AuthBackend`].
pub struct AuthSession<B: AuthBackend> {
    backend: B,
    session: Option<Session>,
}

impl<B: AuthBackend> AuthSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: None,
        }
    }

    /// Resume a previously persisted session.
    pub fn restore(backend: B, session: Option<Session>) -> Self {
        Self { backend, session }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_in(&mut self, credentials: &Credentials) -> Result<&User, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        let session = self.backend.sign_in(credentials)?;
        log::info!("Signed in as {}", session.user.email.as_deref().unwrap_or(&session.user.id));
        Ok(&self.session.insert(session).user)
    }

    pub fn sign_up(&mut self, credentials: &Credentials) -> Result<SignUpOutcome, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        let outcome = self.backend.sign_up(credentials)?;
        match outcome {
            SignUpOutcome::SignedIn(ref session) => {
                log::info!("Signed up and signed in as {}", session.user.id);
                self.session = Some(session.clone());
            }
            SignUpOutcome::ConfirmationRequired(ref user) => {
                log::info!("Signed up {}, awaiting email confirmation", user.id);
            }
        }
        Ok(outcome)
    }

    /// Sign out. The local session is dropped even when the service
    /// call fails; the error is still returned so it can be shown.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };

        self.backend.sign_out(&session.access_token).map_err(|e| {
            log::error!("Error signing out: {}", e);
            e
        })
    }

    /// Fetch the current user from the service and update the session.
    pub fn refresh_user(&mut self) -> Result<&User, AuthError> {
        let session = self.session.as_mut().ok_or(AuthError::NotSignedIn)?;
        session.user = self.backend.current_user(&session.access_token)?;
        Ok(&session.user)
    }
}
