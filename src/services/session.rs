// Usuario actual en sessionStorage: "autenticación" puramente local,
// solo un nombre para mostrar y para el header X-User.

use crate::utils::{
    load_session_value, remove_session_value, save_session_value, STORAGE_KEY_USER,
};

pub fn current_user() -> Option<String> {
    load_session_value(STORAGE_KEY_USER)
}

pub fn save_user(username: &str) {
    if let Err(e) = save_session_value(STORAGE_KEY_USER, username) {
        log::error!("❌ Error guardando usuario: {}", e);
    }
}

pub fn clear_user() {
    if let Err(e) = remove_session_value(STORAGE_KEY_USER) {
        log::error!("❌ Error eliminando usuario: {}", e);
    }
}
