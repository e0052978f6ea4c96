use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    /// Perfil mínimo cuando el login no devuelve `user`
    pub fn from_username(username: &str) -> Self {
        Self {
            id: None,
            username: username.to_string(),
            email: None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Who the session belongs to.
///
/// `Restored` is the placeholder used after a reload: a token was found in
/// storage but no profile has been fetched for it.
#[derive(Clone, PartialEq, Debug)]
pub enum SessionUser {
    Known(UserProfile),
    Restored,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        match self {
            SessionUser::Known(profile) => &profile.username,
            SessionUser::Restored => "",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SessionUser::Restored)
    }
}
