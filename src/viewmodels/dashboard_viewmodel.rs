// ============================================================================
// DASHBOARD VIEWMODEL - Lista activa: filtro, paginación y contadores
// ============================================================================

use crate::models::{ComplaintStatus, ComplaintSummary, PriorityFilter};
use crate::state::ComplaintListState;
use crate::stores::{ComplaintListStore, FetchParams};

/// Contadores de la página visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub resolved: usize,
    pub not_completed: usize,
}

pub fn count_by_status(items: &[ComplaintSummary]) -> StatusCounts {
    items.iter().fold(
        StatusCounts { total: items.len(), ..Default::default() },
        |mut counts, complaint| {
            match complaint.status {
                ComplaintStatus::Pendente => counts.pending += 1,
                ComplaintStatus::Resolvido => counts.resolved += 1,
                ComplaintStatus::NaoConcluido => counts.not_completed += 1,
                ComplaintStatus::Unknown => {}
            }
            counts
        },
    )
}

pub struct DashboardViewModel {
    store: ComplaintListStore,
}

impl DashboardViewModel {
    pub fn new(store: ComplaintListStore) -> Self {
        Self { store }
    }

    pub fn state(&self) -> ComplaintListState {
        self.store.active_snapshot()
    }

    /// Primera carga: página 0 con el filtro guardado
    pub async fn load(&self) {
        self.store.fetch_complaints(FetchParams::page(0)).await;
    }

    /// Cambio en el selector de prioridad: guardar y volver a la página 0
    pub async fn change_priority(&self, raw: &str) {
        self.store.set_priority_filter(PriorityFilter::parse(raw));
        self.store.set_page(0).await;
    }

    pub async fn next_page(&self) {
        let state = self.store.active_snapshot();
        if state.has_next() {
            self.store.set_page(state.page + 1).await;
        }
    }

    pub async fn previous_page(&self) {
        let state = self.store.active_snapshot();
        if state.has_previous() {
            self.store.set_page(state.page - 1).await;
        }
    }

    pub fn counts(&self) -> StatusCounts {
        self.store.active().with(|s| count_by_status(&s.items))
    }
}
