pub mod session_store;
pub mod token_store;

pub use session_store::SessionStore;
pub use token_store::{default_token_store, LocalStorageTokenStore, MemoryTokenStore, TokenStore};
