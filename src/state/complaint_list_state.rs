// ============================================================================
// COMPLAINT LIST STATE - Página actual + ciclo de vida del request
// ============================================================================

use crate::models::{ComplaintSummary, PriorityFilter};

/// Ciclo de vida del último request de la lista.
/// El mensaje de error solo existe en `Failed`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed { message: String },
}

/// Estado de una lista paginada (activas o eliminadas).
///
/// `items`/`total_pages`/`page` son siempre los del último fetch completado
/// con éxito: un fetch en vuelo o fallido no los toca.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplaintListState {
    pub items: Vec<ComplaintSummary>,
    pub request: RequestState,
    pub page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub priority_filter: PriorityFilter,
}

impl ComplaintListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            request: RequestState::Idle,
            page: 0,
            total_pages: 0,
            page_size,
            priority_filter: PriorityFilter::All,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_only_when_failed() {
        let mut state = ComplaintListState::new(9);
        assert_eq!(state.error(), None);

        state.request = RequestState::Failed { message: "boom".into() };
        assert_eq!(state.error(), Some("boom"));

        state.request = RequestState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn pagination_affordances() {
        let mut state = ComplaintListState::new(9);
        assert!(!state.has_previous());
        assert!(!state.has_next());

        state.total_pages = 3;
        state.page = 1;
        assert!(state.has_previous());
        assert!(state.has_next());

        state.page = 2;
        assert!(!state.has_next());
    }

    #[test]
    fn last_possible_page_has_no_next() {
        let mut state = ComplaintListState::new(9);
        state.page = u32::MAX;
        state.total_pages = u32::MAX;

        assert!(!state.has_next());
        assert!(state.has_previous());
    }
}
