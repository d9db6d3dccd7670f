// ============================================================================
// COMPLAINT LIST STORE - Listas paginadas/filtradas sincronizadas con el server
// ============================================================================
// Dos listas: activas y eliminadas. Cada fetch pasa por
// idle → loading → succeeded|failed; los datos anteriores se mantienen
// visibles mientras carga y si falla.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{ComplaintSummary, Page, PageRequest, PriorityFilter};
use crate::services::{ComplaintService, NotificationLevel, Notifier};
use crate::state::{ComplaintListState, ReactiveState, RequestState};
use crate::utils::constants::{MSG_FETCH_COMPLAINTS_FAILED, MSG_FETCH_DELETED_FAILED};

/// Parámetros de `fetch_complaints`; lo omitido se toma del store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchParams {
    pub page: Option<u32>,
    pub priority: Option<PriorityFilter>,
}

impl FetchParams {
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), priority: None }
    }

    pub fn priority(priority: PriorityFilter) -> Self {
        Self { page: None, priority: Some(priority) }
    }
}

#[derive(Clone)]
pub struct ComplaintListStore {
    inner: Rc<ListInner>,
}

struct ListInner {
    service: ComplaintService,
    notifier: Rc<dyn Notifier>,
    active: ReactiveState<ComplaintListState>,
    deleted: ReactiveState<ComplaintListState>,
    /// Último request emitido por lista; respuestas más viejas se descartan
    active_seq: Cell<u64>,
    deleted_seq: Cell<u64>,
}

impl ComplaintListStore {
    pub fn new(service: ComplaintService, notifier: Rc<dyn Notifier>, page_size: u32) -> Self {
        Self {
            inner: Rc::new(ListInner {
                service,
                notifier,
                active: ReactiveState::new(ComplaintListState::new(page_size)),
                deleted: ReactiveState::new(ComplaintListState::new(page_size)),
                active_seq: Cell::new(0),
                deleted_seq: Cell::new(0),
            }),
        }
    }

    pub fn active(&self) -> ReactiveState<ComplaintListState> {
        self.inner.active.clone()
    }

    pub fn deleted(&self) -> ReactiveState<ComplaintListState> {
        self.inner.deleted.clone()
    }

    pub fn active_snapshot(&self) -> ComplaintListState {
        self.inner.active.snapshot()
    }

    pub fn deleted_snapshot(&self) -> ComplaintListState {
        self.inner.deleted.snapshot()
    }

    /// Carga una página de la lista activa.
    ///
    /// Con prioridad (distinta de "todas") usa el endpoint de filtro; sin ella,
    /// el listado normal. `page` solo se confirma si el fetch tiene éxito.
    pub async fn fetch_complaints(&self, params: FetchParams) {
        let inner = &self.inner;
        let (page, priority, size) = inner.active.with(|s| {
            (
                params.page.unwrap_or(s.page),
                params.priority.unwrap_or(s.priority_filter),
                s.page_size,
            )
        });

        let seq = bump(&inner.active_seq);
        inner.active.update(|s| s.request = RequestState::Loading);

        let request = PageRequest::new(page, size);
        let result = match priority.priority() {
            Some(priority) => {
                log::info!("📋 Filtrando reclamaciones por prioridad {} (página {})", priority, page);
                inner.service.filter(priority, request).await
            }
            None => {
                log::info!("📋 Cargando reclamaciones (página {})", page);
                inner.service.list(request).await
            }
        };

        if seq != inner.active_seq.get() {
            log::debug!("Respuesta de la página {} descartada: hay un request más nuevo", page);
            return;
        }

        if let Err(message) = settle(&inner.active, page, result, MSG_FETCH_COMPLAINTS_FAILED) {
            log::error!("❌ Error cargando reclamaciones: {}", message);
        }
    }

    /// Carga una página de la lista de eliminadas (sin filtro de prioridad).
    /// El filtro por fecha de eliminación lo aplica la vista sobre la página.
    pub async fn fetch_deleted_complaints(&self, page: Option<u32>) {
        let inner = &self.inner;
        let (page, size) = inner.deleted.with(|s| (page.unwrap_or(s.page), s.page_size));

        let seq = bump(&inner.deleted_seq);
        inner.deleted.update(|s| s.request = RequestState::Loading);

        log::info!("🗑️ Cargando reclamaciones eliminadas (página {})", page);
        let result = inner.service.list_deleted(PageRequest::new(page, size)).await;

        if seq != inner.deleted_seq.get() {
            log::debug!("Respuesta de eliminadas (página {}) descartada", page);
            return;
        }

        let auth_failure = matches!(&result, Err(e) if e.is_auth_failure());
        if let Err(message) = settle(&inner.deleted, page, result, MSG_FETCH_DELETED_FAILED) {
            log::error!("❌ Error cargando eliminadas: {}", message);
            // En 401/403 la sesión ya avisó al usuario
            if !auth_failure {
                inner.notifier.notify(NotificationLevel::Error, &message);
            }
        }
    }

    /// Solo guarda el filtro. La vista decide cuándo volver a la página 0 y
    /// recargar.
    pub fn set_priority_filter(&self, filter: PriorityFilter) {
        self.inner.active.update(|s| s.priority_filter = filter);
    }

    /// Navegar a una página de la lista activa: dispara el fetch en el acto
    pub async fn set_page(&self, page: u32) {
        self.fetch_complaints(FetchParams::page(page)).await;
    }
}

fn bump(counter: &Cell<u64>) -> u64 {
    let next = counter.get() + 1;
    counter.set(next);
    next
}

/// Aplica el resultado de un fetch en una sola actualización
fn settle(
    state: &ReactiveState<ComplaintListState>,
    page: u32,
    result: Result<Page<ComplaintSummary>, ApiError>,
    fallback: &str,
) -> Result<(), String> {
    match result {
        Ok(fetched) => {
            log::info!(
                "✅ Página {} cargada: {} reclamaciones de {} páginas",
                page,
                fetched.content.len(),
                fetched.total_pages
            );
            state.update(|s| {
                s.items = fetched.content;
                s.total_pages = fetched.total_pages;
                s.page = page;
                s.request = RequestState::Succeeded;
            });
            Ok(())
        }
        Err(e) => {
            let message = e.server_message().unwrap_or(fallback).to_string();
            state.update(|s| {
                s.request = RequestState::Failed { message: message.clone() };
            });
            Err(message)
        }
    }
}
