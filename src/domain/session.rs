//! Session identity values shared between the cache and its consumers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Public identity of the signed-in traveler.
///
/// Carries no credentials or tokens; the boundary strips those before a
/// record reaches this layer.
pub struct PublicUserRecord {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Cached view of the caller's authenticated identity, or its absence.
pub enum SessionState {
    /// No resolved value yet: never fetched, or invalidated by a logout.
    #[default]
    Unknown,
    /// The endpoint explicitly reported an unauthenticated visitor.
    Anonymous,
    Authenticated(PublicUserRecord),
}

impl SessionState {
    /// Pure projection over the cached value; never independently cached.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&PublicUserRecord> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_accepts_payload_without_display_name() {
        let payload = r#"{"id":"6f9fd1d4-0f53-4f7a-a9a1-3d9a4f2a5b11","email":"ada@example.com"}"#;
        let user: PublicUserRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert!(user.display_name.is_none());
    }

    #[test]
    fn default_state_is_unknown_and_unauthenticated() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }
}
