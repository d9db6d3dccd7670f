// ============================================================================
// API CLIENT - Cliente HTTP compartido con slot de interceptor
// ============================================================================
// NO tiene lógica de negocio. Convierte status no-2xx en ApiError y deja que
// el interceptor actual decore el request y observe el error.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::services::transport::{HttpRequest, Transport};

/// Middleware global del cliente HTTP
pub trait Interceptor {
    /// Antes de enviar cada request
    fn on_request(&self, request: &mut HttpRequest);

    /// Con cada error; el error se devuelve igual al caller después
    fn on_error(&self, error: &ApiError);
}

/// Interceptor de autenticación: bearer token + logout en 401/403
pub struct AuthInterceptor {
    token: Option<String>,
    on_unauthorized: Box<dyn Fn()>,
}

impl AuthInterceptor {
    pub fn new(token: Option<String>, on_unauthorized: impl Fn() + 'static) -> Self {
        Self {
            token,
            on_unauthorized: Box::new(on_unauthorized),
        }
    }
}

impl Interceptor for AuthInterceptor {
    fn on_request(&self, request: &mut HttpRequest) {
        if let Some(token) = &self.token {
            request.set_header("Authorization", format!("Bearer {}", token));
        }
    }

    fn on_error(&self, error: &ApiError) {
        if error.is_auth_failure() {
            log::warn!("🔒 Respuesta {:?}: sesión inválida, forzando logout", error.status());
            (self.on_unauthorized)();
        }
    }
}

/// Cliente compartido por toda la app.
///
/// Los clones comparten transport y slot de interceptor: instalar un
/// interceptor nuevo afecta a todos los requests emitidos a partir de ese
/// momento. Un request ya emitido sigue gobernado por el interceptor que
/// estaba activo cuando salió.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    interceptor: Rc<RefCell<Option<Rc<dyn Interceptor>>>>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self {
            transport,
            interceptor: Rc::new(RefCell::new(None)),
        }
    }

    /// Reemplaza el interceptor actual (gana la última instalación)
    pub fn install_interceptor(&self, interceptor: Rc<dyn Interceptor>) {
        *self.interceptor.borrow_mut() = Some(interceptor);
    }

    pub fn has_interceptor(&self) -> bool {
        self.interceptor.borrow().is_some()
    }

    /// Envía el request y devuelve el body JSON crudo
    pub async fn send(&self, mut request: HttpRequest) -> Result<Value, ApiError> {
        // Snapshot: no se mantiene el borrow durante el await ni durante los hooks
        let interceptor = self.interceptor.borrow().clone();
        if let Some(interceptor) = &interceptor {
            interceptor.on_request(&mut request);
        }

        let method = request.method;
        let path = request.path.clone();
        log::debug!("➡️ {:?} {}", method, path);

        let result = match self.transport.execute(request).await {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => Err(ApiError::Http {
                status: response.status,
                message: server_message(&response.body),
            }),
            Err(e) => Err(e),
        };

        if let Err(err) = &result {
            log::warn!("⚠️ {:?} {} falló: {}", method, path, err);
            if let Some(interceptor) = &interceptor {
                interceptor.on_error(err);
            }
        }

        result
    }

    /// Envía el request y decodifica el body
    pub async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}

fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}
