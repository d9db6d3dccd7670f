// ============================================================================
// DELETED VIEWMODEL - Reclamaciones eliminadas + filtro por fecha
// ============================================================================
// El filtro por fecha es solo de cliente, sobre la página cargada.
// ============================================================================

use chrono::{Local, NaiveDate, TimeZone};

use crate::models::ComplaintSummary;
use crate::state::ComplaintListState;
use crate::stores::ComplaintListStore;

/// Elementos eliminados el día `date` (parte de fecha de `deletedAt`)
pub fn filter_by_deletion_date(items: &[ComplaintSummary], date: NaiveDate) -> Vec<ComplaintSummary> {
    items
        .iter()
        .filter(|c| c.deleted_on() == Some(date))
        .cloned()
        .collect()
}

/// Eliminados el día `day`, con fechas y `day` en la misma zona `tz`
pub fn count_deleted_on<Tz: TimeZone>(items: &[ComplaintSummary], day: NaiveDate, tz: &Tz) -> usize {
    items.iter().filter(|c| c.deleted_on_in(tz) == Some(day)).count()
}

pub struct DeletedViewModel {
    store: ComplaintListStore,
    date_filter: Option<NaiveDate>,
}

impl DeletedViewModel {
    pub fn new(store: ComplaintListStore) -> Self {
        Self { store, date_filter: None }
    }

    pub async fn load(&self, page: Option<u32>) {
        self.store.fetch_deleted_complaints(page).await;
    }

    /// Texto del input de fecha (`YYYY-MM-DD`); vacío o inválido quita el filtro
    pub fn set_date_filter(&mut self, raw: &str) {
        self.date_filter = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.date_filter
    }

    pub fn state(&self) -> ComplaintListState {
        self.store.deleted_snapshot()
    }

    /// Lo que la vista muestra: la página cargada con el filtro de fecha aplicado
    pub fn visible(&self) -> Vec<ComplaintSummary> {
        self.store.deleted().with(|s| match self.date_filter {
            Some(date) => filter_by_deletion_date(&s.items, date),
            None => s.items.clone(),
        })
    }

    pub fn deleted_today(&self) -> usize {
        let today = Local::now().date_naive();
        self.store.deleted().with(|s| count_deleted_on(&s.items, today, &Local))
    }
}
