use serde::{Deserialize, Serialize};
use uuid::Uuid;

// User identity = the authentication provider's uid string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> &str {
        let end = self.0.len().min(8);
        &self.0[..end]
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Generate a fresh document id carrying a kind prefix, e.g. `log-<uuid>`.
///
/// Several shared collections discriminate entity kinds by id prefix, so
/// every write path that creates one of those documents must go through this
/// helper with the prefix declared in [`crate::constants`].
pub fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4())
}

/// Generate a fresh unprefixed document id.
pub fn doc_id() -> String {
    Uuid::new_v4().to_string()
}
