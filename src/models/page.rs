use serde::de::DeserializeOwned;
use serde_json::Value;

/// Página devuelta por el servidor: `{ content: [...], totalPages }`
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_pages: 0 }
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decodifica una página sin fallar nunca.
    ///
    /// `content` ausente o que no sea array → vacío; elementos ilegibles se
    /// descartan; `totalPages` ausente → 0. Un array suelto cuenta como una
    /// página. El orden del servidor se respeta.
    pub fn from_value(value: Value) -> Self {
        let mut body = match value {
            Value::Object(body) => body,
            // Listado sin paginar (array suelto): una sola página
            Value::Array(items) => {
                return Self { content: decode_items(items), total_pages: 1 };
            }
            _ => {
                log::warn!("⚠️ Respuesta de página sin forma de objeto, se trata como vacía");
                return Self::default();
            }
        };

        let total_pages = body
            .get("totalPages")
            .and_then(Value::as_u64)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0);

        let content = match body.remove("content") {
            Some(Value::Array(items)) => decode_items(items),
            Some(other) => {
                log::warn!("⚠️ `content` no es un array ({}), se trata como vacío", type_name(&other));
                Vec::new()
            }
            None => Vec::new(),
        };

        Self { content, total_pages }
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("⚠️ Elemento de página descartado: {}", e);
                None
            }
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parámetros de paginación (`?page=&size=`), página base 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ]
    }
}
