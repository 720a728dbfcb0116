use crate::models::Post;

/// Estado publicado por el motor de sincronización (escritor único).
///
/// `posts` es siempre una ventana de como mucho `limit` elementos; `page`
/// es 1-based y `total_pages` se deriva del último total reportado por el
/// backend.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncState {
    pub posts: Vec<Post>,
    pub page: u32,
    pub total_pages: u32,
    pub total_posts: u64,
    pub loading: bool,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            page: 1,
            total_pages: 1,
            total_posts: 0,
            // Arranca en true: la carga inicial se dispara al montar la app
            // y así no parpadea el estado vacío.
            loading: true,
        }
    }
}
