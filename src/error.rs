// ============================================================================
// ERRORES - Tipo de error único del cliente
// ============================================================================

use thiserror::Error;

/// Error de cliente API.
///
/// `Http` lleva el status y, si el servidor lo envió, el campo `message`
/// del body. El resto son fallos locales (red, decodificación, storage).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("sin mensaje"))]
    Http { status: u16, message: Option<String> },

    #[error("network: {0}")]
    Network(String),

    #[error("decode: {0}")]
    Decode(String),

    #[error("storage: {0}")]
    Storage(String),
}

impl ApiError {
    /// Status HTTP si el error vino del servidor
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Campo `message` enviado por el servidor, si existe
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// 401/403: la sesión ya no es válida
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failure_only_for_401_and_403() {
        let unauthorized = ApiError::Http { status: 401, message: None };
        let forbidden = ApiError::Http { status: 403, message: None };
        let not_found = ApiError::Http { status: 404, message: None };

        assert!(unauthorized.is_auth_failure());
        assert!(forbidden.is_auth_failure());
        assert!(!not_found.is_auth_failure());
        assert!(!ApiError::Network("offline".into()).is_auth_failure());
    }

    #[test]
    fn server_message_is_exposed() {
        let err = ApiError::Http {
            status: 400,
            message: Some("Título obrigatório".into()),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message(), Some("Título obrigatório"));
        assert_eq!(err.to_string(), "HTTP 400: Título obrigatório");
        assert_eq!(ApiError::Decode("x".into()).server_message(), None);
    }
}
