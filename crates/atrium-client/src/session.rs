//! Session lifecycle: login, registration, logout and the auth-state loop.
//!
//! The auth collaborator is the single source of truth for who is signed
//! in.  `login` and `register` only validate input and call the service;
//! everything that follows a successful sign-in (profile upkeep, presence,
//! subscriptions, screen switch) runs from the auth-state loop, so a session
//! restored at startup takes exactly the same path as a fresh login.

use std::sync::Arc;

use serde_json::json;

use atrium_shared::constants::{COLLECTION_USERS, DEFAULT_BRANCH, MIN_PASSWORD_LEN};
use atrium_shared::Role;
use atrium_store::{AuthUser, SERVER_TIMESTAMP};

use crate::events::{ScreenPayload, SessionPayload, EVENT_SCREEN_CHANGED, EVENT_SESSION_CHANGED};
use crate::notify::Severity;
use crate::portal::Portal;
use crate::state::SessionUser;

impl Portal {
    /// Follow auth-state changes for the lifetime of the application.
    ///
    /// The watch channel holds the current value, so the loop handles the
    /// restored session (or its absence) once before waiting for changes.
    pub async fn run_session_loop(self: Arc<Self>) {
        let mut rx = self.auth.auth_state();
        loop {
            let current = rx.borrow_and_update().clone();
            self.clone().handle_auth_state(current).await;
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    pub(crate) async fn handle_auth_state(self: Arc<Self>, user: Option<AuthUser>) {
        match user {
            Some(user) => {
                let session = SessionUser {
                    uid: user.uid.clone(),
                    name: user.name(),
                    email: user.email.clone(),
                    role: Role::from_email(&user.email),
                };
                tracing::info!(uid = %session.uid, role = %session.role, "signed in");

                self.state().current_user = Some(session.clone());
                self.emit(
                    EVENT_SESSION_CHANGED,
                    SessionPayload {
                        name: session.name.clone(),
                        email: session.email.clone(),
                        role: session.role,
                        is_teacher: session.role.is_teacher(),
                    },
                );
                self.emit(EVENT_SCREEN_CHANGED, ScreenPayload { screen: "dashboard" });

                // Profile upkeep must not block the dashboard.
                if let Err(e) = self.ensure_profile(&session).await {
                    tracing::warn!(error = %e, "could not update user profile");
                }

                self.clone().start_subscriptions().await;
                if let Err(e) = self.set_presence(true).await {
                    tracing::warn!(error = %e, "could not record presence");
                }

                self.notify(
                    &format!("Welcome back, {}! 🔬", session.name),
                    Severity::Success,
                );
            }
            None => {
                self.state().clear_session();
                self.emit(EVENT_SCREEN_CHANGED, ScreenPayload { screen: "login" });
            }
        }
    }

    /// Sign in with email and password.  Returns whether the credentials
    /// were accepted; the auth-state loop finishes the transition.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            self.notify("Please enter email and password", Severity::Warning);
            return false;
        }

        match self.auth.sign_in(email, password).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(email, error = %e, "sign-in rejected");
                self.notify(&e.to_string(), Severity::Error);
                false
            }
        }
    }

    /// Create an account, its profile document, and sign it in.
    pub async fn register(&self, name: &str, email: &str, password: &str, branch: &str) -> bool {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            self.notify("Please fill all required fields", Severity::Warning);
            return false;
        }
        if password.len() < MIN_PASSWORD_LEN {
            self.notify(
                "Password must be at least 6 characters",
                Severity::Warning,
            );
            return false;
        }

        let user = match self
            .auth
            .register(email, password, Some(name.to_string()))
            .await
        {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(email, error = %e, "registration rejected");
                self.notify(&e.to_string(), Severity::Error);
                return false;
            }
        };

        let branch = if branch.is_empty() {
            DEFAULT_BRANCH
        } else {
            branch
        };
        let profile = json!({
            "name": name,
            "email": email,
            "branch": branch,
            "role": Role::from_email(email),
            "appId": atrium_shared::constants::APP_ID,
            "createdAt": SERVER_TIMESTAMP,
            "lastSeen": SERVER_TIMESTAMP,
        });
        if let Err(e) = self
            .store
            .set(COLLECTION_USERS, &user.uid, profile, false)
            .await
        {
            tracing::warn!(uid = %user.uid, error = %e, "could not create user profile");
        }

        self.notify("Welcome to the Physics Club! 🚀", Severity::Success);
        true
    }

    /// Sign out, marking the identity offline first.
    pub async fn logout(&self) {
        if let Err(e) = self.set_presence(false).await {
            tracing::warn!(error = %e, "could not mark identity offline");
        }

        match self.auth.sign_out().await {
            Ok(()) => {
                self.notify("Logged out successfully 👋", Severity::Success);
            }
            Err(e) => {
                tracing::error!(error = %e, "sign-out failed");
                self.notify("Error during logout", Severity::Error);
            }
        }
    }

    /// Create the profile document on first sign-in, or refresh its
    /// last-seen stamp on a later one.
    ///
    /// On a fresh registration this races the profile write in
    /// [`register`]: the service signs the account in immediately, so the
    /// auth-state loop can reach this before that write lands.  If the
    /// lookup here runs first, the create path overwrites the registered
    /// profile and the chosen branch reverts to the default.
    async fn ensure_profile(&self, session: &SessionUser) -> atrium_store::Result<()> {
        match self.store.get(COLLECTION_USERS, &session.uid).await? {
            Some(_) => {
                self.store
                    .set(
                        COLLECTION_USERS,
                        &session.uid,
                        json!({ "lastSeen": SERVER_TIMESTAMP }),
                        true,
                    )
                    .await
            }
            None => {
                self.store
                    .set(
                        COLLECTION_USERS,
                        &session.uid,
                        json!({
                            "name": session.name,
                            "email": session.email,
                            "branch": DEFAULT_BRANCH,
                            "role": session.role,
                            "appId": atrium_shared::constants::APP_ID,
                            "createdAt": SERVER_TIMESTAMP,
                            "lastSeen": SERVER_TIMESTAMP,
                        }),
                        false,
                    )
                    .await
            }
        }
    }
}
