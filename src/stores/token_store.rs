// ============================================================================
// TOKEN STORE - Token de sesión persistido
// ============================================================================
// Única fuente del token en disco. Sin expiración en cliente: el token vale
// hasta que el servidor responda 401.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::{load_string, remove_from_storage, save_string, StorageError, STORAGE_KEY_TOKEN};

pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

/// Token en localStorage bajo `STORAGE_KEY_TOKEN`; sobrevive a un reload
#[derive(Clone, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        load_string(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        if token.is_empty() {
            return Err(StorageError::EmptyToken);
        }
        save_string(STORAGE_KEY_TOKEN, token)
    }

    fn clear(&self) {
        if let Err(e) = remove_from_storage(STORAGE_KEY_TOKEN) {
            log::warn!("⚠️ No se pudo borrar el token: {}", e);
        }
    }
}

/// In-memory store. Used by tests and when localStorage is unavailable.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) -> Result<(), StorageError> {
        if token.is_empty() {
            return Err(StorageError::EmptyToken);
        }
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Picks localStorage when the browser exposes it, memory otherwise
pub fn default_token_store() -> Rc<dyn TokenStore> {
    if crate::utils::get_local_storage().is_some() {
        Rc::new(LocalStorageTokenStore::new())
    } else {
        log::warn!("⚠️ localStorage no disponible, el token no sobrevivirá a un reload");
        Rc::new(MemoryTokenStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn empty_token_is_rejected() {
        let store = MemoryTokenStore::with_token("old");
        assert_eq!(store.set(""), Err(StorageError::EmptyToken));
        assert_eq!(store.get().as_deref(), Some("old"));
    }

    #[test]
    fn clones_share_the_same_slot() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.set("shared").unwrap();
        assert_eq!(other.get().as_deref(), Some("shared"));
    }
}
