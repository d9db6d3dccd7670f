use web_sys::{window, Storage};

use crate::error::ApiError;

/// Almacenamiento clave/valor durable (strings crudos).
///
/// En el navegador es `localStorage`; en tests, un mapa en memoria.
/// Solo `SessionManager` escribe en él.
pub trait KeyValueStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str) -> Result<(), ApiError>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = get_local_storage()?;
        storage.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let storage = get_local_storage()
            .ok_or_else(|| ApiError::Storage("No se pudo acceder a localStorage".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| ApiError::Storage("Error guardando en localStorage".to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), ApiError> {
        let storage = get_local_storage()
            .ok_or_else(|| ApiError::Storage("No se pudo acceder a localStorage".to_string()))?;
        storage
            .remove_item(key)
            .map_err(|_| ApiError::Storage("Error eliminando de localStorage".to_string()))
    }
}
