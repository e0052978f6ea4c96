pub mod api_client;
pub mod api_error;
pub mod http_transport;
pub mod auth_service;
pub mod employee_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod fake_backend;

pub use api_client::{ApiClient, UnauthorizedHandler};
pub use api_error::{ApiError, FieldErrors, FieldIssue, ServerDetail};
pub use http_transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
