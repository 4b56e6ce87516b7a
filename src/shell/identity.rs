//! Identity collaborator
//!
//! The studio only needs to know whether a session exists. Sign-up,
//! sign-in and session changes belong to an external identity service,
//! reached through [`IdentityProvider`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::IdentityError;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}

pub type SessionCallback = Arc<dyn Fn(SessionEvent, Option<&Session>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    async fn current_session(&self) -> Option<Session>;

    /// Register a callback invoked on every session change
    fn subscribe(&self, callback: SessionCallback) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

struct Account {
    user_id: Uuid,
    password: String,
    confirmed: bool,
}

#[derive(Default)]
struct State {
    accounts: HashMap<String, Account>,
    session: Option<Session>,
}

/// Identity service held in process memory
///
/// Used by tests and the CLI. Passwords are kept in plain text.
#[derive(Default)]
pub struct InMemoryIdentity {
    state: Mutex<State>,
    subscribers: Mutex<Vec<(SubscriptionId, SessionCallback)>>,
    next_subscription: Mutex<u64>,
    require_confirmation: bool,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// New accounts must be confirmed with [`confirm_email`](Self::confirm_email)
    /// before they can sign in
    pub fn with_email_confirmation() -> Self {
        Self {
            require_confirmation: true,
            ..Self::default()
        }
    }

    /// Mark an account's email as confirmed
    pub fn confirm_email(&self, email: &str) -> Result<(), IdentityError> {
        let mut state = self.state();
        let account = state
            .accounts
            .get_mut(&normalize_email(email))
            .ok_or(IdentityError::InvalidCredentials)?;
        account.confirmed = true;
        Ok(())
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn broadcast(&self, event: SessionEvent, session: Option<&Session>) {
        // Clone the callbacks so one may subscribe or unsubscribe re-entrantly
        let callbacks: Vec<SessionCallback> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        debug!(?event, subscribers = callbacks.len(), "session change");
        for callback in callbacks {
            callback(event, session);
        }
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentity {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(IdentityError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(IdentityError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        let mut state = self.state();
        if state.accounts.contains_key(&email) {
            warn!(%email, "sign-up for existing account");
            return Err(IdentityError::AlreadyRegistered);
        }
        state.accounts.insert(
            email.clone(),
            Account {
                user_id: Uuid::new_v4(),
                password: password.to_string(),
                confirmed: !self.require_confirmation,
            },
        );
        info!(%email, "account created");
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let email = normalize_email(email);
        let session = {
            let mut state = self.state();
            let account = state
                .accounts
                .get(&email)
                .filter(|a| a.password == password)
                .ok_or(IdentityError::InvalidCredentials)?;
            if !account.confirmed {
                return Err(IdentityError::EmailNotConfirmed);
            }

            let session = Session {
                user_id: account.user_id,
                email: email.clone(),
                signed_in_at: Utc::now(),
            };
            state.session = Some(session.clone());
            session
        };

        info!(%email, "signed in");
        self.broadcast(SessionEvent::SignedIn, Some(&session));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let previous = self.state().session.take();
        if let Some(session) = previous {
            info!(email = %session.email, "signed out");
            self.broadcast(SessionEvent::SignedOut, None);
        }
        Ok(())
    }

    async fn current_session(&self) -> Option<Session> {
        self.state().session.clone()
    }

    fn subscribe(&self, callback: SessionCallback) -> SubscriptionId {
        let id = {
            let mut next = self
                .next_subscription
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *next += 1;
            SubscriptionId(*next)
        };
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(sub, _)| *sub != id);
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let identity = InMemoryIdentity::new();
        identity.sign_up("Lucas@Zanlu.net ", "segredo1").await.unwrap();

        let session = identity.sign_in("lucas@zanlu.net", "segredo1").await.unwrap();
        assert_eq!(session.email, "lucas@zanlu.net");
        assert_eq!(identity.current_session().await, Some(session));
    }

    #[tokio::test]
    async fn test_sign_up_rejections() {
        let identity = InMemoryIdentity::new();
        assert_eq!(
            identity.sign_up("sem-arroba", "segredo1").await,
            Err(IdentityError::InvalidEmail)
        );
        assert_eq!(
            identity.sign_up("a@b.com", "123").await,
            Err(IdentityError::WeakPassword { min: 6 })
        );
        identity.sign_up("a@b.com", "123456").await.unwrap();
        assert_eq!(
            identity.sign_up("a@b.com", "654321").await,
            Err(IdentityError::AlreadyRegistered)
        );
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_no_session() {
        let identity = InMemoryIdentity::new();
        identity.sign_up("a@b.com", "123456").await.unwrap();
        assert_eq!(
            identity.sign_in("a@b.com", "errada").await,
            Err(IdentityError::InvalidCredentials)
        );
        assert!(identity.current_session().await.is_none());
    }

    #[tokio::test]
    async fn test_confirmation_required() {
        let identity = InMemoryIdentity::with_email_confirmation();
        identity.sign_up("a@b.com", "123456").await.unwrap();
        assert_eq!(
            identity.sign_in("a@b.com", "123456").await,
            Err(IdentityError::EmailNotConfirmed)
        );

        identity.confirm_email("a@b.com").unwrap();
        assert!(identity.sign_in("a@b.com", "123456").await.is_ok());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes_until_unsubscribed() {
        let identity = InMemoryIdentity::new();
        let events = Arc::new(AtomicUsize::new(0));
        let seen = events.clone();
        let id = identity.subscribe(Arc::new(move |_: SessionEvent, _: Option<&Session>| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        identity.sign_up("a@b.com", "123456").await.unwrap();
        identity.sign_in("a@b.com", "123456").await.unwrap();
        identity.sign_out().await.unwrap();
        assert_eq!(events.load(Ordering::SeqCst), 2);

        identity.unsubscribe(id);
        identity.sign_in("a@b.com", "123456").await.unwrap();
        assert_eq!(events.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_sign_out_without_session_is_silent() {
        let identity = InMemoryIdentity::new();
        let id = identity.subscribe(Arc::new(|_: SessionEvent, _: Option<&Session>| {
            panic!("no event expected");
        }));
        identity.sign_out().await.unwrap();
        identity.unsubscribe(id);
    }
}
