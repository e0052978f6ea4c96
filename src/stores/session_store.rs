// ============================================================================
// SESSION STORE - Estado de sesión en memoria
// ============================================================================
// Sólo SessionViewModel produce nuevos valores; los hooks los reemplazan enteros
// ============================================================================

use crate::models::SessionUser;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl SessionStore {
    pub fn signed_in(user: SessionUser, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}
