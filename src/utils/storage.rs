use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Variante sin JSON: el timestamp del caché se guarda como string plano.
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

// sessionStorage: usuario actual (vive lo que dura la pestaña)

pub fn save_session_value(key: &str, value: &str) -> Result<(), String> {
    let storage = get_session_storage().ok_or("No se pudo acceder a sessionStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en sessionStorage".to_string())?;
    Ok(())
}

pub fn load_session_value(key: &str) -> Option<String> {
    get_session_storage()?.get_item(key).ok()?
}

pub fn remove_session_value(key: &str) -> Result<(), String> {
    let storage = get_session_storage().ok_or("No se pudo acceder a sessionStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de sessionStorage".to_string())?;
    Ok(())
}
