use serde_json::json;

use crate::error::ApiError;
use crate::models::{
    ComplaintDetail, ComplaintPriority, ComplaintSummary, ComplaintUpdate, NewComplaint, Page,
    PageRequest,
};
use crate::services::api_client::ApiClient;
use crate::services::transport::HttpRequest;

/// Endpoints de reclamaciones (sin estado propio)
#[derive(Clone)]
pub struct ComplaintService {
    api: ApiClient,
}

impl ComplaintService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /complaints?page&size`
    pub async fn list(&self, page: PageRequest) -> Result<Page<ComplaintSummary>, ApiError> {
        let request = HttpRequest::get("/complaints").with_query(page.to_query());
        self.api.send(request).await.map(Page::from_value)
    }

    /// `POST /complaints/filter?page&size` con `{priority}` en el body
    pub async fn filter(
        &self,
        priority: ComplaintPriority,
        page: PageRequest,
    ) -> Result<Page<ComplaintSummary>, ApiError> {
        let request = HttpRequest::post("/complaints/filter", json!({ "priority": priority }))
            .with_query(page.to_query());
        self.api.send(request).await.map(Page::from_value)
    }

    /// `GET /complaints/deleted?page&size`
    pub async fn list_deleted(&self, page: PageRequest) -> Result<Page<ComplaintSummary>, ApiError> {
        let request = HttpRequest::get("/complaints/deleted").with_query(page.to_query());
        self.api.send(request).await.map(Page::from_value)
    }

    pub async fn get(&self, id: i64) -> Result<ComplaintDetail, ApiError> {
        self.api
            .send_json(HttpRequest::get(format!("/complaints/{}", id)))
            .await
    }

    pub async fn create(&self, complaint: &NewComplaint) -> Result<(), ApiError> {
        log::info!("📝 Creando reclamación: {}", complaint.title);
        self.api
            .send(HttpRequest::post("/complaints", json!(complaint)))
            .await
            .map(|_| ())
    }

    pub async fn update(&self, id: i64, update: &ComplaintUpdate) -> Result<(), ApiError> {
        log::info!("✏️ Actualizando reclamación {}", id);
        self.api
            .send(HttpRequest::put(format!("/complaints/{}", id), json!(update)))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        log::info!("🗑️ Eliminando reclamación {}", id);
        self.api
            .send(HttpRequest::delete(format!("/complaints/{}", id)))
            .await
            .map(|_| ())
    }
}
