/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::client::Client;
use crate::v1::errors::BoxError;
use crate::v1::User;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Receives a human readable message each time the login moves to a new step
pub type StatusObserver = Arc<dyn Fn(&str) + Send + Sync>;

/// Authentication state shared by every clone of a client
#[derive(Clone, Default)]
pub struct Session {
    pub(crate) ticket: Option<String>,
    pub(crate) token: Option<String>,
    pub(crate) user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn clear(&mut self) {
        *self = Session::default();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("ticket", &self.ticket)
            .field("token", &self.token.as_ref().map(|_| "xxx"))
            .field("user", &self.user)
            .finish()
    }
}

/// Steps of the interactive login.
///
/// `Start -> TicketObtained -> CredentialsSubmitted -> Authenticated`, where each step can
/// instead end in its failed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Start,
    TicketObtained { ticket: String },
    TicketFailed,
    CredentialsSubmitted { ticket: String },
    CredentialsFailed,
    Authenticated,
    TokenFailed,
}

impl LoginState {
    /// Message reported to the status observer on entering this state
    pub fn message(&self) -> &'static str {
        match self {
            LoginState::Start => "Retrieving ticket...",
            LoginState::TicketObtained { .. } => "Submitting login/password...",
            LoginState::TicketFailed => "Failed to retrieve ticket",
            LoginState::CredentialsSubmitted { .. } => "Retrieving authentication token...",
            LoginState::CredentialsFailed => "Failed to submit login/password",
            LoginState::Authenticated => "Authentication finished successfully",
            LoginState::TokenFailed => "Failed to retrieve authentication token",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LoginState::Authenticated
                | LoginState::TicketFailed
                | LoginState::CredentialsFailed
                | LoginState::TokenFailed
        )
    }
}

impl Client {
    /// Logs in with a login and password.
    ///
    /// Obtains a ticket, posts the credentials for it and exchanges the ticket for a token. The
    /// token and user are stored in the session on success. Returns `Ok(false)` when any step
    /// is refused by the service, transport failures are returned as errors.
    pub async fn login(
        &self,
        login: &str,
        password: &str,
        observer: Option<StatusObserver>,
    ) -> Result<bool, BoxError> {
        let _guard = self.inner.login_lock.lock().await;
        let mut state = LoginState::Start;
        loop {
            log::debug!("Login state {:?}", state);
            if let Some(observer) = &observer {
                observer(state.message());
            }
            state = match state {
                LoginState::Start => match self.get_ticket().await?.payload {
                    Some(ticket) if !ticket.is_empty() => LoginState::TicketObtained { ticket },
                    _ => LoginState::TicketFailed,
                },
                LoginState::TicketObtained { ticket } => {
                    let transport = self.inner.transport.clone();
                    let submit = (ticket.clone(), login.to_string(), password.to_string());
                    let body = self
                        .inner
                        .runtime
                        .spawn(async move {
                            transport.submit_credentials(submit.0, submit.1, submit.2).await
                        })
                        .await??;
                    if body.trim().is_empty() {
                        LoginState::CredentialsFailed
                    } else {
                        LoginState::CredentialsSubmitted { ticket }
                    }
                }
                LoginState::CredentialsSubmitted { ticket } => {
                    match self.get_auth_token(&ticket).await?.payload {
                        Some(_) => LoginState::Authenticated,
                        None => LoginState::TokenFailed,
                    }
                }
                terminal => {
                    log::info!("Login finished: {}", terminal.message());
                    return Ok(terminal == LoginState::Authenticated);
                }
            };
        }
    }

    /// Runs [`Client::login`] on the runtime and hands the outcome to `finished`
    pub fn login_with_callback<F>(
        &self,
        login: String,
        password: String,
        finished: Option<F>,
        observer: Option<StatusObserver>,
    ) -> Result<JoinHandle<()>, BoxError>
    where
        F: FnOnce(Result<bool, BoxError>) + Send + 'static,
    {
        let finished = finished.ok_or(BoxError::MissingCallback("login_with_callback"))?;
        let client = self.clone();
        Ok(self.spawn(async move {
            finished(client.login(&login, &password, observer).await);
        }))
    }
}
