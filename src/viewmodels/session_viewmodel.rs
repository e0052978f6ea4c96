// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Devuelve SessionStore completos; el provider los reemplaza de una vez.
// Token en disco y token en memoria cambian siempre en la misma operación.
// ============================================================================

use std::rc::Rc;

use crate::models::SessionUser;
use crate::stores::{SessionStore, TokenStore};
use crate::utils::StorageError;

#[derive(Clone)]
pub struct SessionViewModel {
    tokens: Rc<dyn TokenStore>,
}

impl SessionViewModel {
    pub fn new(tokens: Rc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// Shared with the ApiClient so both see the same persisted token
    pub fn tokens(&self) -> Rc<dyn TokenStore> {
        self.tokens.clone()
    }

    /// Initial state after a reload.
    ///
    /// A stored token yields a `Restored` placeholder user; the profile is not
    /// fetched here.
    pub fn restore(&self) -> SessionStore {
        match self.tokens.get() {
            Some(token) => {
                log::info!("✅ Token encontrado, sesión restaurada");
                SessionStore::signed_in(SessionUser::Restored, token)
            }
            None => SessionStore::signed_out(),
        }
    }

    /// Only call after a successful authentication response
    pub fn login(&self, user: SessionUser, token: String) -> Result<SessionStore, StorageError> {
        self.tokens.set(&token)?;
        log::info!("✅ Sesión iniciada: {}", user.display_name());
        Ok(SessionStore::signed_in(user, token))
    }

    pub fn logout(&self) -> SessionStore {
        self.tokens.clear();
        log::info!("👋 Logout");
        SessionStore::signed_out()
    }

    /// Signed-out state after a 401. The HTTP client has already cleared the
    /// token store, so it is not touched again.
    pub fn expire(&self) -> SessionStore {
        log::warn!("🔒 Sesión expirada");
        SessionStore::signed_out()
    }
}
