use crate::models::{ProfileUpdate, UserProfile};
use crate::services::{ApiClient, ApiError};

/// Perfil del usuario de la sesión actual
pub async fn get_profile(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get_json("/user/profile", &[]).await
}

pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    log::info!("👤 Actualizando perfil");
    client.put_json("/user/profile", update).await
}
