use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::{ApiClient, ApiError};

/// Login against `/auth/login`.
///
/// The endpoint is an OAuth2 password form, so the credentials go out
/// form-urlencoded and never as JSON.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    log::info!("🔐 Login para usuario: {}", request.username);
    let response = client
        .post_form(
            "/auth/login",
            &[("username", request.username.as_str()), ("password", request.password.as_str())],
        )
        .await?;
    log::info!("✅ Login exitoso: {}", request.username);
    Ok(response)
}

/// Alta de cuenta en `/auth/signup` (JSON)
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    log::info!("📝 Registro de usuario: {}", request.username);
    client.post_json("/auth/signup", request).await
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::services::http_transport::mock::MockTransport;
    use crate::stores::MemoryTokenStore;
    use crate::utils::CONTENT_TYPE_FORM;

    fn client(transport: &MockTransport) -> ApiClient {
        ApiClient::with_transport("http://api.test", Rc::new(transport.clone()), Rc::new(MemoryTokenStore::new()))
    }

    #[test]
    fn login_is_sent_as_form_data() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"access_token":"jwt","token_type":"bearer"}"#);

        let request = LoginRequest {
            username: "ana@corp.io".to_string(),
            password: "s3cret&x".to_string(),
        };
        let response = block_on(login(&client(&transport), &request)).unwrap();
        assert_eq!(response.access_token, "jwt");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/auth/login");
        assert_eq!(sent.header("Content-Type"), Some(CONTENT_TYPE_FORM));
        assert_eq!(sent.body.as_deref(), Some("username=ana%40corp.io&password=s3cret%26x"));
    }

    #[test]
    fn rejected_credentials_surface_as_unauthorized() {
        let transport = MockTransport::new();
        transport.respond(401, r#"{"detail":"Invalid credentials"}"#);

        let request = LoginRequest {
            username: "ana".to_string(),
            password: "wrong-pass".to_string(),
        };
        let err = block_on(login(&client(&transport), &request)).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn register_posts_json() {
        let transport = MockTransport::new();
        transport.respond(201, r#"{"message":"User created successfully","user_id":"u1"}"#);

        let request = RegisterRequest {
            username: "ana".to_string(),
            email: "ana@corp.io".to_string(),
            password: "secret1".to_string(),
        };
        let response = block_on(register(&client(&transport), &request)).unwrap();
        assert_eq!(response.user_id.as_deref(), Some("u1"));

        let sent = transport.last_request().unwrap();
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "ana@corp.io");
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
    }
}
