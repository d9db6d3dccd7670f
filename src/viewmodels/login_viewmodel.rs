// ============================================================================
// LOGIN VIEWMODEL - Login + arranque de sesión
// ============================================================================
// Devuelve valores; la vista solo muestra el error o navega
// ============================================================================

use crate::models::UserProfile;
use crate::services::{AuthService, Platform};
use crate::stores::SessionManager;
use crate::utils::constants::{HOME_PATH, MSG_LOGIN_FAILED};

/// ViewModel de login - SOLO lógica de negocio
pub struct LoginViewModel {
    auth: AuthService,
    session: SessionManager,
    platform: Platform,
}

impl LoginViewModel {
    pub fn new(auth: AuthService, session: SessionManager, platform: Platform) -> Self {
        Self { auth, session, platform }
    }

    /// `POST /login` → `set_token` → dashboard
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, String> {
        log::info!("🔐 Iniciando login...");

        let token = match self.auth.login(email, password).await {
            Ok(token) => token,
            Err(e) => {
                log::error!("❌ Login rechazado: {}", e);
                return Err(e.server_message().unwrap_or(MSG_LOGIN_FAILED).to_string());
            }
        };

        let user = self.session.set_token(token).await.map_err(|e| {
            log::error!("❌ No se pudo confirmar el usuario: {}", e);
            e.server_message().unwrap_or(MSG_LOGIN_FAILED).to_string()
        })?;

        log::info!("✅ Login exitoso: {}", user.name);
        self.platform.navigator.redirect(HOME_PATH);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::{ApiClient, HttpMethod};
    use crate::testing::{FakeTransport, MemoryStorage, TestPlatform};
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::rc::Rc;

    struct Harness {
        transport: Rc<FakeTransport>,
        platform: TestPlatform,
        session: SessionManager,
        vm: LoginViewModel,
    }

    fn harness() -> Harness {
        let transport = FakeTransport::new();
        let platform = TestPlatform::at("/login");
        let api = ApiClient::new(transport.clone());
        let session = SessionManager::new(
            api.clone(),
            MemoryStorage::new(),
            platform.platform(),
            &AppConfig::default(),
        );
        block_on(session.restore());
        let vm = LoginViewModel::new(AuthService::new(api), session.clone(), platform.platform());
        Harness { transport, platform, session, vm }
    }

    #[test]
    fn successful_login_starts_session_and_goes_home() {
        let h = harness();
        h.transport.respond(HttpMethod::Post, "/login", 200, json!({"token": "abc"}));
        h.transport.respond(HttpMethod::Get, "/users/me", 200, json!({"name": "Ana"}));

        let user = block_on(h.vm.login("ana@example.com", "segredo")).unwrap();

        assert_eq!(user.name, "Ana");
        assert_eq!(h.session.token().as_deref(), Some("abc"));
        assert_eq!(h.platform.redirects(), vec!["/".to_string()]);
        let body = h.transport.requests_to("/login")[0].body.clone();
        assert_eq!(body, Some(json!({"email": "ana@example.com", "password": "segredo"})));
    }

    #[test]
    fn wrong_credentials_show_generic_message() {
        let h = harness();
        h.transport.respond(HttpMethod::Post, "/login", 401, Value::Null);

        let err = block_on(h.vm.login("ana@example.com", "x")).unwrap_err();

        assert_eq!(err, MSG_LOGIN_FAILED);
        assert_eq!(h.session.token(), None);
        assert!(h.platform.redirects().is_empty());
        // Sin sesión previa no hay aviso de "sesión expirada"
        assert!(h.platform.notifications().is_empty());
    }

    #[test]
    fn server_message_is_preferred() {
        let h = harness();
        h.transport.respond(HttpMethod::Post, "/login", 400, json!({"message": "Usuário bloqueado"}));

        let err = block_on(h.vm.login("ana@example.com", "x")).unwrap_err();

        assert_eq!(err, "Usuário bloqueado");
    }
}
