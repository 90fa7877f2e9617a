use serde::Serialize;
use utoipa::ToSchema;

use quillgate_core::AuthUser;

/// Session state of the current request. `user` is `null` for anonymous
/// callers.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<AuthUser>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }

    pub fn authenticated(user: AuthUser) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }
}
