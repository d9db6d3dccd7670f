// ============================================================================
// COMPLAINTS CLIENT - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - ViewModels: Lógica UI, devuelven valores a las vistas
// - Stores: Sesión + listas de reclamaciones (estado observable)
// - Services: SOLO comunicación API y acceso al navegador
// - State: State Management con Rc<RefCell> + notificaciones
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::config::CONFIG;
use crate::state::AppState;

// Variable estática global para mantener el estado de la app
thread_local! {
    static APP: RefCell<Option<AppState>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Complaints Client - Rust Puro + MVVM ({})", CONFIG.environment);

    let app = AppState::browser(CONFIG.clone());
    let session = app.session.clone();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Restaurar la sesión guardada sin bloquear el arranque
    wasm_bindgen_futures::spawn_local(async move {
        session.restore().await;
    });

    Ok(())
}

/// Acceso al estado global desde las vistas.
/// `None` si la app todavía no arrancó.
pub fn with_app<R>(f: impl FnOnce(&AppState) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow().as_ref().map(f))
}

/// Logout manual (llamable desde JavaScript)
#[wasm_bindgen]
pub fn logout_wasm() {
    if with_app(|app| app.session.logout()).is_none() {
        log::warn!("⚠️ Logout pedido antes de inicializar la app");
    }
}
