// ============================================================================
// TRANSPORT - Ejecución HTTP cruda (caja negra)
// ============================================================================
// Solo mueve bytes: no conoce tokens ni interpreta status. El ApiClient
// decide qué es error.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Request saliente, antes de pasar por el interceptor
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Ruta relativa al backend, p.ej. `/complaints/filter`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Reemplaza el header si ya existía (case-insensitive)
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Body JSON; `Null` si vino vacío, `String` si no era JSON
    pub body: Value,
}

impl HttpResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Ejecutor HTTP intercambiable (navegador real o fake en tests)
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport del navegador sobre `gloo-net` (fetch API).
/// Sin timeout propio: se usa el comportamiento por defecto del navegador.
#[derive(Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url(&request.path);
        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        let builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Body read error: {}", e)))?;

        Ok(HttpResponse { status, body: body_from_text(text) })
    }
}

/// Body leído: vacío → `Null`, JSON → valor, otra cosa → `String`
fn body_from_text(text: String) -> Value {
    if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_header_replaces_case_insensitively() {
        let mut request = HttpRequest::get("/users/me");
        request.set_header("authorization", "Bearer old");
        request.set_header("Authorization", "Bearer new");

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("AUTHORIZATION"), Some("Bearer new"));
    }

    #[test]
    fn builders_fill_method_body_and_query() {
        let request = HttpRequest::post("/complaints/filter", json!({"priority": "ALTA"}))
            .with_query(vec![("page".into(), "1".into())]);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"priority": "ALTA"})));
        assert_eq!(request.query_param("page"), Some("1"));
        assert_eq!(request.query_param("size"), None);
    }

    #[test]
    fn base_url_is_normalised() {
        let transport = GlooTransport::new("http://localhost:8080/");
        assert_eq!(transport.url("/login"), "http://localhost:8080/login");
    }

    #[test]
    fn read_body_is_decoded_by_shape() {
        assert_eq!(body_from_text("  ".to_string()), Value::Null);
        assert_eq!(body_from_text(r#"{"token":"t"}"#.to_string()), json!({"token": "t"}));
        assert_eq!(body_from_text("Forbidden".to_string()), json!("Forbidden"));
    }

    #[test]
    fn success_range() {
        assert!(HttpResponse::new(204, Value::Null).is_success());
        assert!(!HttpResponse::new(401, Value::Null).is_success());
    }
}
