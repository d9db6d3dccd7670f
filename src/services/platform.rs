// ============================================================================
// PLATFORM - Navegación, notificaciones y timers del navegador
// ============================================================================
// Los stores dependen de estos traits, no de `window`, para poder probarlos
// fuera del navegador.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};

/// Nombre del evento DOM con las notificaciones para la capa de vistas
pub const NOTIFICATION_EVENT: &str = "app-notification";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Info => "info",
            NotificationLevel::Error => "error",
        }
    }
}

pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

pub trait Notifier {
    fn notify(&self, level: NotificationLevel, message: &str);
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Colaboradores de plataforma que necesitan los stores
#[derive(Clone)]
pub struct Platform {
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl Platform {
    pub fn browser() -> Self {
        Self {
            navigator: Rc::new(BrowserNavigator),
            notifier: Rc::new(EventNotifier),
            scheduler: Rc::new(TimeoutScheduler),
        }
    }
}

/// `window.location`
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn redirect(&self, path: &str) {
        let Some(win) = window() else {
            log::warn!("⚠️ Sin window, no se puede redirigir a {}", path);
            return;
        };
        if let Err(e) = win.location().set_href(path) {
            log::error!("❌ Error redirigiendo a {}: {:?}", path, e);
        }
    }
}

/// Publica la notificación como `CustomEvent` en `window`; las vistas
/// deciden cómo mostrarla (toast, alert inline...).
pub struct EventNotifier;

impl Notifier for EventNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => log::warn!("🔔 [{}] {}", level.as_str(), message),
            _ => log::info!("🔔 [{}] {}", level.as_str(), message),
        }

        let Some(win) = window() else { return };
        let detail = serde_json::json!({ "level": level.as_str(), "message": message });
        let init = CustomEventInit::new();
        init.set_detail(&JsValue::from_str(&detail.to_string()));

        match CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &init) {
            Ok(event) => {
                if let Err(e) = win.dispatch_event(&event) {
                    log::error!("❌ Error despachando notificación: {:?}", e);
                }
            }
            Err(e) => log::error!("❌ Error creando evento de notificación: {:?}", e),
        }
    }
}

/// `setTimeout` vía gloo-timers
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // forget(): el timeout debe dispararse aunque nadie guarde el handle
        Timeout::new(delay_ms, task).forget();
    }
}
