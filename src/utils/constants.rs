/// Clave de localStorage donde vive el token de sesión
pub const STORAGE_KEY_TOKEN: &str = "token";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Generic fallback shown when the server gives no usable detail
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error.";
