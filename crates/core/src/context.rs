//! Caller context passed explicitly into every service operation.

use serde::{Deserialize, Serialize};

/// Identity of the caller as established by the authentication layer.
///
/// A context without a `client_id` is unscoped and sees every client's
/// records; a client-scoped context only sees records owned by that client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub user_id: Option<String>,
    pub client_id: Option<String>,
}

impl RequestContext {
    pub fn unscoped() -> Self {
        Self::default()
    }

    pub fn for_client(client_id: impl Into<String>) -> Self {
        Self {
            user_id: None,
            client_id: Some(client_id.into()),
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The client every list is narrowed to, if any.
    pub fn client_scope(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn can_access(&self, owner_client_id: &str) -> bool {
        match &self.client_id {
            Some(scope) => scope == owner_client_id,
            None => true,
        }
    }
}
