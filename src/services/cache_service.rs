// ============================================================================
// CACHE SERVICE - Persistencia de la ventana de página 1 en localStorage
// ============================================================================

use crate::models::Post;
use crate::state::PostCache;
use crate::utils::{
    load_from_storage, load_raw, save_raw, save_to_storage, STORAGE_KEY_POSTS,
    STORAGE_KEY_TIMESTAMP,
};

/// Caché persistente del motor de sincronización.
/// Guarda la ventana de página 1 (como mucho `limit` posts) y el timestamp
/// del último sync completo. Se sobreescribe en cada carga exitosa de
/// página 1; nunca se invalida explícitamente.
pub struct BrowserCache;

impl BrowserCache {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PostCache for BrowserCache {
    fn posts(&self) -> Option<Vec<Post>> {
        load_from_storage(STORAGE_KEY_POSTS)
    }

    fn timestamp(&self) -> Option<String> {
        load_raw(STORAGE_KEY_TIMESTAMP)
    }

    fn store_posts(&self, posts: &[Post]) {
        if let Err(e) = save_to_storage(STORAGE_KEY_POSTS, &posts) {
            log::error!("❌ Error guardando caché de posts: {}", e);
        }
    }

    fn store_timestamp(&self, iso: &str) {
        if let Err(e) = save_raw(STORAGE_KEY_TIMESTAMP, iso) {
            log::error!("❌ Error guardando timestamp del caché: {}", e);
        }
    }
}
