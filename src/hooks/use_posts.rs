use std::rc::Rc;

use yew::prelude::*;

use crate::services::{ApiClient, BrowserCache};
use crate::state::{SyncEngine, SyncState};
use crate::utils::PAGE_SIZE;

/// Motor concreto de la app: backend HTTP + caché en localStorage.
pub type AppEngine = SyncEngine<ApiClient, BrowserCache>;

/// Handle compartido por contexto: snapshot del estado publicado más el
/// motor para disparar operaciones.
#[derive(Clone)]
pub struct UsePostsHandle {
    pub engine: Rc<AppEngine>,
    pub state: SyncState,
    pub limit: u32,
}

impl PartialEq for UsePostsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.engine, &other.engine) && self.state == other.state
    }
}

impl UsePostsHandle {
    /// Navegación desde la barra de paginación.
    pub fn go_to_page(&self, page: u32) {
        let engine = self.engine.clone();
        wasm_bindgen_futures::spawn_local(async move {
            engine.go_to_page(&page.to_string()).await;
        });
    }
}

/// Crea el motor una sola vez por sesión de UI, se suscribe a sus
/// publicaciones y dispara la carga inicial (página 1, con caché).
/// Usar solo en la raíz; el resto del árbol lo recibe por contexto.
#[hook]
pub fn use_posts() -> UsePostsHandle {
    let engine = use_memo((), |_| {
        SyncEngine::new(ApiClient::new(), BrowserCache::new(), PAGE_SIZE)
    });

    let state = use_state(|| engine.snapshot());

    {
        let engine = engine.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            {
                let state = state.clone();
                engine.subscribe(move |snapshot| state.set(snapshot));
            }

            let engine = engine.clone();
            wasm_bindgen_futures::spawn_local(async move {
                engine.load_posts(1, true).await;
            });
            || ()
        });
    }

    UsePostsHandle {
        engine: engine.clone(),
        state: (*state).clone(),
        limit: PAGE_SIZE,
    }
}
