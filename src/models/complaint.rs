use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Pendente,
    Resolvido,
    NaoConcluido,
    /// Valor que el cliente no conoce; no debe tumbar la página entera
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintPriority {
    Baixa,
    Media,
    Alta,
    #[serde(other)]
    Unknown,
}

impl ComplaintPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintPriority::Baixa => "BAIXA",
            ComplaintPriority::Media => "MEDIA",
            ComplaintPriority::Alta => "ALTA",
            ComplaintPriority::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "BAIXA" => Some(ComplaintPriority::Baixa),
            "MEDIA" => Some(ComplaintPriority::Media),
            "ALTA" => Some(ComplaintPriority::Alta),
            _ => None,
        }
    }
}

impl fmt::Display for ComplaintPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filtro de prioridad de la lista activa. `All` = sin filtro.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(ComplaintPriority),
}

impl PriorityFilter {
    /// Acepta `todas`/`all`/vacío como "sin filtro". Un valor desconocido
    /// también cae en `All` (con warning): el backend solo filtra por las
    /// tres prioridades.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "todas" | "all" => PriorityFilter::All,
            other => match ComplaintPriority::parse(other) {
                Some(priority) => PriorityFilter::Only(priority),
                None => {
                    log::warn!("⚠️ Prioridad desconocida '{}', se lista sin filtro", value.trim());
                    PriorityFilter::All
                }
            },
        }
    }

    /// Prioridad a enviar al endpoint de filtro, si aplica
    pub fn priority(&self) -> Option<ComplaintPriority> {
        match self {
            PriorityFilter::All | PriorityFilter::Only(ComplaintPriority::Unknown) => None,
            PriorityFilter::Only(priority) => Some(*priority),
        }
    }
}

/// Resumen de reclamación tal como viene en las páginas del servidor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub resumed_description: String,
    pub status: ComplaintStatus,
    pub created_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
    pub priority: ComplaintPriority,
}

impl ComplaintSummary {
    /// Día (YYYY-MM-DD) de la eliminación, si la fecha es legible
    pub fn deleted_on(&self) -> Option<NaiveDate> {
        self.deleted_at.as_deref().and_then(parse_date_part)
    }

    /// Día de la eliminación visto desde la zona `tz`
    pub fn deleted_on_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        self.deleted_at
            .as_deref()
            .and_then(|raw| parse_date_part_in(raw, tz))
    }
}

/// `GET /complaints/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDetail {
    pub title: String,
    pub description: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub email: String,
    pub priority: ComplaintPriority,
}

/// `POST /complaints`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub priority: ComplaintPriority,
}

/// `PUT /complaints/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplaintUpdate {
    pub description: String,
    pub status: ComplaintStatus,
}

/// Extrae el día de un timestamp del backend.
///
/// Con zona (RFC 3339) se normaliza a UTC; sin zona (`LocalDateTime`) se
/// toma la parte de fecha tal cual.
pub fn parse_date_part(raw: &str) -> Option<NaiveDate> {
    parse_date_part_in(raw, &Utc)
}

/// Igual que `parse_date_part`, pero los timestamps con zona se pasan a `tz`
pub fn parse_date_part_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
