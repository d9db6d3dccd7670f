// ============================================================================
// SESSION MANAGER - Dueño del token y del perfil del usuario
// ============================================================================
// Única autoridad que puede forzar un logout global. Instala el interceptor
// de auth en el ApiClient compartido cada vez que cambia el token.
// ============================================================================

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::UserProfile;
use crate::services::{ApiClient, AuthInterceptor, AuthService, NotificationLevel, Platform};
use crate::state::{ReactiveState, SessionState};
use crate::utils::constants::MSG_SESSION_EXPIRED;
use crate::utils::storage::KeyValueStorage;

/// Gestor de sesión compartido. Los clones apuntan a la misma sesión.
#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<SessionInner>,
}

struct SessionInner {
    state: ReactiveState<SessionState>,
    api: ApiClient,
    auth: AuthService,
    storage: Rc<dyn KeyValueStorage>,
    platform: Platform,
    storage_key: String,
    login_path: String,
    redirect_delay_ms: u32,
    /// El logout de este periodo ya notificó/redirigió. Se rearma en set_token.
    logout_handled: Cell<bool>,
    restore_started: Cell<bool>,
}

impl SessionManager {
    /// Lee el token persistido; la sesión queda en `auth_loading` hasta `restore()`
    pub fn new(
        api: ApiClient,
        storage: Rc<dyn KeyValueStorage>,
        platform: Platform,
        config: &AppConfig,
    ) -> Self {
        let token = storage
            .load(&config.token_storage_key)
            .filter(|token| !token.trim().is_empty());
        let no_session = token.is_none();

        Self {
            inner: Rc::new(SessionInner {
                state: ReactiveState::new(SessionState::starting(token)),
                auth: AuthService::new(api.clone()),
                api,
                storage,
                platform,
                storage_key: config.token_storage_key.clone(),
                login_path: config.login_path.clone(),
                redirect_delay_ms: config.logout_redirect_delay_ms,
                logout_handled: Cell::new(no_session),
                restore_started: Cell::new(false),
            }),
        }
    }

    /// Estado observable (para suscribir vistas)
    pub fn state(&self) -> ReactiveState<SessionState> {
        self.inner.state.clone()
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.state.snapshot()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.with(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.inner.state.with(|s| s.user.clone())
    }

    pub fn auth_loading(&self) -> bool {
        self.inner.state.with(|s| s.auth_loading)
    }

    /// Restaurar sesión al arrancar. Solo corre una vez.
    pub async fn restore(&self) {
        let inner = &self.inner;
        if inner.restore_started.replace(true) {
            log::warn!("⚠️ restore() ya fue llamado, ignorando llamada duplicada");
            return;
        }

        let Some(token) = self.token() else {
            log::info!("ℹ️ No hay token guardado, sesión sin autenticar");
            self.install_interceptor(None);
            inner.state.update(|s| s.auth_loading = false);
            return;
        };

        log::info!("🔄 Restaurando sesión desde storage...");
        self.install_interceptor(Some(token.clone()));

        match inner.auth.current_user().await {
            Ok(user) => {
                log::info!("✅ Sesión restaurada para {}", user.name);
                inner.state.update(|s| {
                    if s.token.as_deref() == Some(token.as_str()) {
                        s.user = Some(user);
                    }
                    s.auth_loading = false;
                });
            }
            Err(e) => {
                log::warn!("⚠️ Token guardado rechazado: {}", e);
                self.logout_if_current(Some(&token));
                inner.state.update(|s| s.auth_loading = false);
            }
        }
    }

    /// Tras un login correcto: persistir, reinstalar interceptor y cargar perfil.
    /// Si `/users/me` falla se hace logout y el error se devuelve igual.
    pub async fn set_token(&self, token: impl Into<String>) -> Result<UserProfile, ApiError> {
        let token = token.into();
        let inner = &self.inner;

        if let Err(e) = inner.storage.save(&inner.storage_key, &token) {
            log::error!("❌ Error guardando token: {}", e);
        }
        inner.logout_handled.set(false);
        inner.state.update(|s| {
            s.token = Some(token.clone());
            s.user = None;
        });
        self.install_interceptor(Some(token.clone()));

        match inner.auth.current_user().await {
            Ok(user) => {
                let mut applied = false;
                inner.state.update(|s| {
                    // Un set_token posterior gana: no pisar su usuario
                    if s.token.as_deref() == Some(token.as_str()) {
                        s.user = Some(user.clone());
                        applied = true;
                    }
                });
                if applied {
                    log::info!("✅ Usuario autenticado: {}", user.name);
                } else {
                    log::debug!("Perfil de un token reemplazado, descartado");
                }
                Ok(user)
            }
            Err(e) => {
                log::error!("❌ Error obteniendo perfil: {}", e);
                self.logout_if_current(Some(&token));
                Err(e)
            }
        }
    }

    /// Limpia token y usuario, borra el token persistido y, la primera vez
    /// en este periodo, avisa al usuario y programa la vuelta al login.
    pub fn logout(&self) {
        let inner = &self.inner;

        let had_session = inner.state.with(|s| s.token.is_some() || s.user.is_some());
        if had_session {
            inner.state.update(SessionState::clear);
        }
        if let Err(e) = inner.storage.remove(&inner.storage_key) {
            log::error!("❌ Error eliminando token: {}", e);
        }
        self.install_interceptor(None);

        if inner.logout_handled.replace(true) {
            log::debug!("Logout ya gestionado, sin nueva notificación");
            return;
        }

        log::info!("👋 Logout - sesión cerrada");
        inner
            .platform
            .notifier
            .notify(NotificationLevel::Error, MSG_SESSION_EXPIRED);

        let navigator = inner.platform.navigator.clone();
        if navigator.current_path() == inner.login_path {
            return;
        }
        let login_path = inner.login_path.clone();
        inner.platform.scheduler.schedule(
            inner.redirect_delay_ms,
            Box::new(move || {
                if navigator.current_path() != login_path {
                    navigator.redirect(&login_path);
                }
            }),
        );
    }

    /// Logout disparado por un request: solo si el token con el que salió
    /// sigue siendo el actual
    fn logout_if_current(&self, token: Option<&str>) {
        let current = self.token();
        if current.as_deref() == token {
            self.logout();
        } else {
            log::debug!("401/403 de un token anterior, ignorado");
        }
    }

    fn install_interceptor(&self, token: Option<String>) {
        let weak: Weak<SessionInner> = Rc::downgrade(&self.inner);
        let bound = token.clone();
        let interceptor = AuthInterceptor::new(token, move || {
            if let Some(inner) = weak.upgrade() {
                SessionManager { inner }.logout_if_current(bound.as_deref());
            }
        });
        self.inner.api.install_interceptor(Rc::new(interceptor));
    }
}
