// ============================================================================
// SESSION STATE - Token + perfil del usuario autenticado
// ============================================================================

use crate::models::UserProfile;

/// Fase de la sesión derivada de los campos
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Restaurando desde storage al arrancar; no renderizar vistas protegidas
    Restoring,
    Unauthenticated,
    /// Hay token pero `/users/me` todavía no respondió
    Confirming,
    Authenticated,
}

/// Estado de sesión.
///
/// `user` solo existe si existe `token`; ambos se limpian juntos.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub auth_loading: bool,
}

impl SessionState {
    /// Estado de arranque: token leído de storage, restauración pendiente
    pub fn starting(token: Option<String>) -> Self {
        Self {
            token,
            user: None,
            auth_loading: true,
        }
    }

    pub fn phase(&self) -> AuthPhase {
        if self.auth_loading {
            return AuthPhase::Restoring;
        }
        match (&self.token, &self.user) {
            (None, _) => AuthPhase::Unauthenticated,
            (Some(_), None) => AuthPhase::Confirming,
            (Some(_), Some(_)) => AuthPhase::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == AuthPhase::Authenticated
    }

    /// Logout - limpiar todo
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::starting(None)
    }
}
