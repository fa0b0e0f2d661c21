use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use turfbook_shared::{Masked, User};
use crate::storage::KeyValueStore;
use crate::{CoreError, CoreResult};

/// The fixed identity every login resolves to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MockIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Default for MockIdentity {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }
}

impl MockIdentity {
    fn to_user(&self) -> User {
        User::new(&self.id, &self.name, &self.email)
    }
}

/// Snapshot of the session. Every mutation publishes a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "user", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthState {
    Anonymous,
    Authenticated(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Anonymous => None,
            AuthState::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Single-session auth store with mock credentials.
///
/// Every mutation is written through to the backing [`KeyValueStore`] before
/// the new snapshot is published, so subscribers never observe state that
/// failed to persist.
pub struct AuthStore {
    storage: Arc<dyn KeyValueStore>,
    session_key: String,
    identity: MockIdentity,
    state_tx: watch::Sender<AuthState>,
    write_lock: Mutex<()>,
}

impl AuthStore {
    /// Restore the persisted session, if any.
    ///
    /// A record that does not parse is fatal: the caller is expected to abort startup.
    pub async fn initialize(
        storage: Arc<dyn KeyValueStore>,
        session_key: impl Into<String>,
        identity: MockIdentity,
    ) -> CoreResult<Self> {
        let session_key = session_key.into();

        let state = match storage.get(&session_key).await? {
            Some(raw) => {
                let user: User = serde_json::from_str(&raw)
                    .map_err(|e| CoreError::CorruptSession(e.to_string()))?;
                tracing::info!(user_id = %user.id, "Restored persisted session");
                AuthState::Authenticated(user)
            }
            None => {
                tracing::info!("No persisted session, starting anonymous");
                AuthState::Anonymous
            }
        };

        let (state_tx, _) = watch::channel(state);

        Ok(Self {
            storage,
            session_key,
            identity,
            state_tx,
            write_lock: Mutex::new(()),
        })
    }

    pub fn snapshot(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state_tx.borrow().user().cloned()
    }

    /// Receiver that sees every snapshot published after this call
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// Credentials are not checked; the mock identity is always signed in.
    pub async fn login(&self, _email: &str, _password: &Masked<String>) -> CoreResult<User> {
        let _guard = self.write_lock.lock().await;

        let user = self.identity.to_user();
        self.persist(&user).await?;
        tracing::info!(user_id = %user.id, "Signed in");
        self.publish(AuthState::Authenticated(user.clone()));

        Ok(user)
    }

    /// The mock identity with the supplied name and email. Nothing is validated.
    pub async fn register(&self, name: &str, email: &str, _password: &Masked<String>) -> CoreResult<User> {
        let _guard = self.write_lock.lock().await;

        let mut user = self.identity.to_user();
        user.name = name.to_string();
        user.email = email.to_string();

        self.persist(&user).await?;
        tracing::info!(user_id = %user.id, "Registered");
        self.publish(AuthState::Authenticated(user.clone()));

        Ok(user)
    }

    pub async fn logout(&self) -> CoreResult<()> {
        let _guard = self.write_lock.lock().await;

        self.storage.delete(&self.session_key).await?;
        if self.snapshot().is_authenticated() {
            tracing::info!("Signed out");
        }
        self.publish(AuthState::Anonymous);

        Ok(())
    }

    /// `Ok(None)` when nobody is signed in.
    pub async fn add_favorite(&self, turf_id: &str) -> CoreResult<Option<User>> {
        self.update_user(|user| user.with_favorite(turf_id)).await
    }

    pub async fn remove_favorite(&self, turf_id: &str) -> CoreResult<Option<User>> {
        self.update_user(|user| user.without_favorite(turf_id)).await
    }

    pub async fn toggle_favorite(&self, turf_id: &str) -> CoreResult<Option<User>> {
        self.update_user(|user| {
            if user.is_favorite(turf_id) {
                user.without_favorite(turf_id)
            } else {
                user.with_favorite(turf_id)
            }
        })
        .await
    }

    async fn update_user<F>(&self, change: F) -> CoreResult<Option<User>>
    where
        F: FnOnce(&User) -> User,
    {
        let _guard = self.write_lock.lock().await;

        let Some(current) = self.current_user() else {
            tracing::debug!("Favorite change ignored, no active session");
            return Ok(None);
        };

        let updated = change(&current);
        self.persist(&updated).await?;
        tracing::debug!(user_id = %updated.id, favorites = updated.favorites.len(), "Favorites updated");
        self.publish(AuthState::Authenticated(updated.clone()));

        Ok(Some(updated))
    }

    async fn persist(&self, user: &User) -> CoreResult<()> {
        let raw = serde_json::to_string(user).map_err(|e| CoreError::Internal(e.to_string()))?;
        self.storage.set(&self.session_key, &raw).await?;
        Ok(())
    }

    fn publish(&self, state: AuthState) {
        self.state_tx.send_replace(state);
    }
}
