// ============================================================================
// COMPLAINT VIEWMODEL - Detalle, edición, borrado y alta de una reclamación
// ============================================================================

use crate::error::ApiError;
use crate::models::{ComplaintDetail, ComplaintPriority, ComplaintStatus, ComplaintUpdate, NewComplaint};
use crate::services::{ComplaintService, Platform};
use crate::utils::constants::{HOME_PATH, MSG_CREATE_COMPLAINT_FAILED};

fn user_message(error: &ApiError, fallback: &str) -> String {
    error.server_message().unwrap_or(fallback).to_string()
}

pub struct ComplaintViewModel {
    service: ComplaintService,
    platform: Platform,
}

impl ComplaintViewModel {
    pub fn new(service: ComplaintService, platform: Platform) -> Self {
        Self { service, platform }
    }

    pub async fn load(&self, id: i64) -> Result<ComplaintDetail, String> {
        self.service.get(id).await.map_err(|e| {
            log::error!("❌ Error cargando reclamación {}: {}", id, e);
            user_message(&e, "Erro ao carregar reclamação.")
        })
    }

    /// Guarda descripción/estado y devuelve el detalle recién leído del server
    pub async fn save(
        &self,
        id: i64,
        description: &str,
        status: ComplaintStatus,
    ) -> Result<ComplaintDetail, String> {
        let update = ComplaintUpdate {
            description: description.to_string(),
            status,
        };
        if let Err(e) = self.service.update(id, &update).await {
            log::error!("❌ Error actualizando reclamación {}: {}", id, e);
            return Err(user_message(&e, "Erro ao atualizar reclamação."));
        }
        log::info!("✏️ Reclamación {} actualizada", id);
        self.load(id).await
    }

    /// Borra y vuelve al dashboard
    pub async fn delete(&self, id: i64) -> Result<(), String> {
        self.service.delete(id).await.map_err(|e| {
            log::error!("❌ Error eliminando reclamación {}: {}", id, e);
            user_message(&e, "Erro ao excluir reclamação.")
        })?;
        log::info!("🗑️ Reclamación {} eliminada", id);
        self.platform.navigator.redirect(HOME_PATH);
        Ok(())
    }

    pub async fn create(
        &self,
        title: &str,
        description: &str,
        priority: ComplaintPriority,
    ) -> Result<(), String> {
        let complaint = NewComplaint {
            title: title.trim().to_string(),
            description: description.to_string(),
            priority,
        };
        self.service.create(&complaint).await.map_err(|e| {
            log::error!("❌ Error creando reclamación: {}", e);
            MSG_CREATE_COMPLAINT_FAILED.to_string()
        })
    }
}
