use serde_json::json;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};
use crate::services::api_client::ApiClient;
use crate::services::transport::HttpRequest;

/// Endpoints de autenticación (sin estado propio)
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST /login` → token
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        log::info!("🔐 Login para: {}", email);
        let response: LoginResponse = self
            .api
            .send_json(HttpRequest::post("/login", json!(body)))
            .await?;
        Ok(response.token)
    }

    /// `GET /users/me` con el token del interceptor actual
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.api.send_json(HttpRequest::get("/users/me")).await
    }

    /// `POST /users/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        log::info!("📝 Registrando usuario: {}", request.email);
        self.api
            .send(HttpRequest::post("/users/register", json!(request)))
            .await
            .map(|_| ())
    }
}
