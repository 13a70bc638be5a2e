//! Player session identity.

use derive_getters::Getters;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Length of generated session ids.
pub const SESSION_ID_LEN: usize = 8;

/// Unique identifier for a session.
pub type SessionId = String;

/// Who is playing. Opaque to the engine; copied into score events.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Session {
    /// Session id.
    id: SessionId,
    /// Player age as entered at session start.
    age: u32,
}

impl Session {
    /// Creates a session with a random alphanumeric id.
    #[instrument]
    pub fn new(age: u32) -> Self {
        let id: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect();
        info!(session_id = %id, "Created session");
        Self { id, age }
    }

    /// Creates a session with an explicit id.
    #[instrument(skip(id), fields(session_id = %id.as_ref()))]
    pub fn with_id(id: impl AsRef<str>, age: u32) -> Self {
        Self {
            id: id.as_ref().to_string(),
            age,
        }
    }
}
