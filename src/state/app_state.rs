// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Un solo ApiClient compartido: el interceptor que instala la sesión se
// aplica a todos los servicios y stores.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{
    ApiClient, AuthService, ComplaintService, GlooTransport, Platform, Transport,
};
use crate::stores::{ComplaintListStore, SessionManager};
use crate::utils::storage::{BrowserStorage, KeyValueStorage};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub api: ApiClient,
    pub platform: Platform,
    pub session: SessionManager,
    pub complaints: ComplaintListStore,
    pub complaint_service: ComplaintService,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(
        transport: Rc<dyn Transport>,
        storage: Rc<dyn KeyValueStorage>,
        platform: Platform,
        config: AppConfig,
    ) -> Self {
        let api = ApiClient::new(transport);
        let complaint_service = ComplaintService::new(api.clone());
        let session = SessionManager::new(api.clone(), storage, platform.clone(), &config);
        let complaints = ComplaintListStore::new(
            complaint_service.clone(),
            platform.notifier.clone(),
            config.page_size,
        );

        Self {
            auth_service: AuthService::new(api.clone()),
            api,
            platform,
            session,
            complaints,
            complaint_service,
            config,
        }
    }

    /// Cableado real: fetch de gloo, localStorage y window
    pub fn browser(config: AppConfig) -> Self {
        log::info!("🌐 Backend: {}", config.backend_url);
        let transport = Rc::new(GlooTransport::new(&config.backend_url));
        Self::new(transport, Rc::new(BrowserStorage), Platform::browser(), config)
    }
}
