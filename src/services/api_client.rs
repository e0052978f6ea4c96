// ============================================================================
// API CLIENT - Envío central de requests con interceptores
// ============================================================================
// Saliente: adjunta `Authorization: Bearer <token>` si hay token.
// Entrante: un 401 borra el token y avisa al handler inyectado, siempre.
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use url::form_urlencoded;

use crate::config::CONFIG;
use crate::services::api_error::ApiError;
use crate::services::http_transport::{
    GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
};
use crate::stores::TokenStore;
use crate::utils::{CONTENT_TYPE_FORM, CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};

pub type UnauthorizedHandler = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    tokens: Rc<dyn TokenStore>,
    on_unauthorized: Option<UnauthorizedHandler>,
}

impl ApiClient {
    /// Cliente del navegador contra `CONFIG.backend_url()`
    pub fn new(tokens: Rc<dyn TokenStore>) -> Self {
        Self::with_transport(CONFIG.backend_url(), Rc::new(GlooTransport::new()), tokens)
    }

    pub fn with_transport(
        base_url: &str,
        transport: Rc<dyn HttpTransport>,
        tokens: Rc<dyn TokenStore>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            tokens,
            on_unauthorized: None,
        }
    }

    /// Registers the observer run after a 401 has cleared the token
    pub fn on_unauthorized(mut self, handler: UnauthorizedHandler) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    /// Two clients are the same client when they share a transport
    pub fn same_as(&self, other: &ApiClient) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport) && Rc::ptr_eq(&self.tokens, &other.tokens)
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    fn request(&self, method: HttpMethod, path: &str, query: &[(&str, String)]) -> HttpRequest {
        let mut request = HttpRequest::new(method, self.url(path, query));
        request.set_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);
        request
    }

    /// Runs both interceptors around the transport call
    async fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(token) = self.tokens.get() {
            request.set_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        log::debug!("🌐 {} {}", request.method.as_str(), request.url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Network(e.0))?;

        if response.ok() {
            return Ok(response);
        }

        let error = ApiError::from_status(response.status, &response.body);
        if response.status == 401 {
            log::warn!("🔒 401 recibido, cerrando sesión");
            self.tokens.clear();
            if let Some(handler) = &self.on_unauthorized {
                handler();
            }
        } else {
            log::error!("❌ HTTP {}: {}", response.status, error.user_message());
        }
        Err(error)
    }

    fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn json_body<B: Serialize>(request: &mut HttpRequest, body: &B) -> Result<(), ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        request.body = Some(json);
        Ok(())
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(HttpMethod::Get, path, query);
        Self::decode(self.dispatch(request).await?)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut request = self.request(HttpMethod::Post, path, &[]);
        Self::json_body(&mut request, body)?;
        Self::decode(self.dispatch(request).await?)
    }

    /// POST con cuerpo `application/x-www-form-urlencoded`
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self.request(HttpMethod::Post, path, &[]);
        request.set_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_FORM);
        request.body = Some(
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(fields.iter().copied())
                .finish(),
        );
        Self::decode(self.dispatch(request).await?)
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut request = self.request(HttpMethod::Put, path, &[]);
        Self::json_body(&mut request, body)?;
        Self::decode(self.dispatch(request).await?)
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(HttpMethod::Delete, path, &[]);
        Self::decode(self.dispatch(request).await?)
    }
}

/// Percent-encodes a single path segment (ids may contain `/` or spaces)
pub fn path_segment(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
