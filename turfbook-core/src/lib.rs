pub mod auth;
pub mod booking;
pub mod navigation;
pub mod profile;
pub mod storage;

pub use auth::{AuthState, AuthStore, MockIdentity};
pub use booking::{BookingDialog, BookingOutcome, TIME_SLOTS};
pub use navigation::{nav_links, NavItem, Route};
pub use profile::ProfileView;
pub use storage::{InMemoryStore, KeyValueStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persisted session is unreadable: {0}")]
    CorruptSession(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
