// ============================================================================
// SYNC ENGINE - caché, paginación y sincronización incremental de posts
// ============================================================================

use std::cell::RefCell;

use chrono::{SecondsFormat, Utc};

use crate::models::{Post, PostInput, PostsPage};
use crate::services::ApiError;

use super::merge::merge_posts;
use super::paging::{parse_page, total_pages};
use super::sync_state::SyncState;

/// Origen remoto de posts. `ApiClient` lo implementa contra el backend;
/// los tests inyectan un doble en memoria.
#[allow(async_fn_in_trait)]
pub trait PostSource {
    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        min_date: Option<&str>,
    ) -> Result<PostsPage, ApiError>;
    async fn create(&self, data: &PostInput) -> Result<Post, ApiError>;
    async fn update(&self, id: u64, data: &PostInput, usuario: &str) -> Result<Post, ApiError>;
    async fn delete(&self, id: u64, usuario: &str) -> Result<(), ApiError>;
}

/// Persistencia de la ventana de página 1 y su timestamp.
/// Escribir nunca falla hacia afuera: un caché que no guarda solo cuesta
/// una recarga completa la próxima vez.
pub trait PostCache {
    fn posts(&self) -> Option<Vec<Post>>;
    fn timestamp(&self) -> Option<String>;
    fn store_posts(&self, posts: &[Post]);
    fn store_timestamp(&self, iso: &str);
}

type Subscriber = Box<dyn Fn(SyncState)>;

/// Motor de sincronización/paginación: único escritor de `SyncState`.
///
/// Cada mutación publica una copia del estado a los suscriptores, así que
/// la secuencia de publicaciones es observable — en particular las dos
/// fases del camino con caché (ventana rancia primero, merge después).
///
/// Las operaciones son futures cooperativas sobre el event loop del
/// navegador; no hay exclusión mutua ni contador de generación: si dos
/// cargas se solapan, gana la última en completar.
pub struct SyncEngine<S, C> {
    source: S,
    cache: C,
    limit: u32,
    state: RefCell<SyncState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<S: PostSource, C: PostCache> SyncEngine<S, C> {
    pub fn new(source: S, cache: C, limit: u32) -> Self {
        Self {
            source,
            cache,
            limit,
            state: RefCell::new(SyncState::default()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn snapshot(&self) -> SyncState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, callback: impl Fn(SyncState) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Muta el estado y notifica a todos los suscriptores con una copia.
    fn publish<F: FnOnce(&mut SyncState)>(&self, mutate: F) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(snapshot.clone());
        }
    }

    /// Limpieza garantizada: un fetch fallido nunca deja la UI cargando.
    fn finish_loading(&self) {
        if self.state.borrow().loading {
            self.publish(|s| s.loading = false);
        }
    }

    /// Carga una página. Con `use_cache` y página 1, si hay caché se sirve
    /// primero la ventana cacheada y después se corrige con un fetch
    /// incremental; en cualquier otro caso va directo a la red.
    ///
    /// Los errores de lectura se registran y se tragan aquí: el estado
    /// anterior queda intacto y solo se limpia el flag de carga.
    pub async fn load_posts(&self, page_num: u32, use_cache: bool) {
        self.publish(|s| s.loading = true);

        if page_num == 1 && use_cache {
            if let (Some(cached), Some(timestamp)) = (self.cache.posts(), self.cache.timestamp()) {
                self.load_cache_first(cached, &timestamp).await;
                self.finish_loading();
                return;
            }
        }

        self.load_network_first(page_num).await;
        self.finish_loading();
    }

    async fn load_cache_first(&self, cached: Vec<Post>, timestamp: &str) {
        // Total autoritativo antes de mostrar nada: el camino con caché
        // nunca se ahorra esta vuelta, el test de doble publicación
        // depende de ella.
        let total = match self.source.fetch_page(1, self.limit, None).await {
            Ok(data) => data.total,
            Err(e) => {
                log::error!("❌ Error cargando total de posts: {}", e);
                return;
            }
        };
        let pages = total_pages(total, self.limit);
        self.publish(|s| {
            s.total_posts = total;
            s.total_pages = pages;
        });

        // Fase 1: contenido casi instantáneo desde el caché (posiblemente
        // rancio), recortado a la ventana.
        let limited: Vec<Post> = cached.iter().take(self.limit as usize).cloned().collect();
        {
            let limited = limited.clone();
            self.publish(move |s| {
                s.posts = limited;
                s.page = 1;
                s.loading = false;
            });
        }

        // Fase 2: fetch incremental de lo nuevo desde el último sync.
        match self.source.fetch_page(1, self.limit, Some(timestamp)).await {
            Ok(fresh) => {
                if fresh.posts.is_empty() {
                    // Nada nuevo: re-afirma la ventana cacheada tal cual.
                    self.cache.store_posts(&limited);
                } else {
                    let merged = merge_posts(&fresh.posts, &cached, self.limit as usize);
                    log::info!("🔄 {} posts nuevos fusionados con el caché", fresh.posts.len());
                    self.cache.store_posts(&merged);
                    self.publish(move |s| s.posts = merged);
                }
                self.cache.store_timestamp(&now_iso());
            }
            Err(e) => log::error!("❌ Error en fetch incremental: {}", e),
        }
    }

    async fn load_network_first(&self, page_num: u32) {
        match self.source.fetch_page(page_num, self.limit, None).await {
            Ok(data) => {
                let total = data.total;
                let pages = total_pages(total, self.limit);
                // El backend ya devuelve como mucho `limit` posts; página 1
                // se persiste sin recortar.
                if page_num == 1 {
                    self.cache.store_posts(&data.posts);
                    self.cache.store_timestamp(&now_iso());
                }
                self.publish(move |s| {
                    s.posts = data.posts;
                    s.page = page_num;
                    s.total_posts = total;
                    s.total_pages = pages;
                });
            }
            Err(e) => log::error!("❌ Error cargando posts: {}", e),
        }
    }

    /// Crea un post y recarga página 1 sin caché: el post nuevo queda
    /// visible sin depender del timing del fetch incremental.
    /// Los errores de creación se propagan (el formulario los muestra).
    pub async fn create_post(&self, data: &PostInput) -> Result<Post, ApiError> {
        let created = self.source.create(data).await?;
        self.load_posts(1, false).await;
        Ok(created)
    }

    /// Actualiza un post (el backend valida la propiedad vía `usuario`)
    /// y recarga la página actualmente mostrada sin caché.
    pub async fn update_post(
        &self,
        id: u64,
        data: &PostInput,
        usuario: &str,
    ) -> Result<Post, ApiError> {
        let updated = self.source.update(id, data, usuario).await?;
        let current = self.state.borrow().page;
        self.load_posts(current, false).await;
        Ok(updated)
    }

    /// Elimina un post y recarga la página actual sin caché.
    pub async fn delete_post(&self, id: u64, usuario: &str) -> Result<(), ApiError> {
        self.source.delete(id, usuario).await?;
        let current = self.state.borrow().page;
        self.load_posts(current, false).await;
        Ok(())
    }

    /// Navegación explícita: valida la entrada y nunca usa el caché.
    /// Entrada inválida es un no-op registrado, sin tocar estado ni red.
    pub async fn go_to_page(&self, raw: &str) {
        match parse_page(raw) {
            Some(page) => self.load_posts(page, false).await,
            None => log::warn!("⚠️ Página inválida: {}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::collections::VecDeque;
    use std::rc::Rc;

    fn post(id: u64) -> Post {
        Post {
            id,
            usuario: "ana".to_string(),
            link_imagen: format!("https://img.test/{}.jpg", id),
            etiquetas: vec![],
            fecha_alta: "2024-03-01T10:00:00".to_string(),
        }
    }

    fn page_of(posts: Vec<Post>, total: u64) -> PostsPage {
        PostsPage { total, posts }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        FetchPage { page: u32, min_date: Option<String> },
        Create,
        Update { id: u64, usuario: String },
        Delete { id: u64, usuario: String },
    }

    /// Doble del backend: respuestas encoladas en orden de llamada.
    #[derive(Default)]
    struct FakeSource {
        pages: RefCell<VecDeque<Result<PostsPage, ApiError>>>,
        create_result: RefCell<Option<Result<Post, ApiError>>>,
        update_result: RefCell<Option<Result<Post, ApiError>>>,
        delete_result: RefCell<Option<Result<(), ApiError>>>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeSource {
        fn queue_page(&self, response: Result<PostsPage, ApiError>) {
            self.pages.borrow_mut().push_back(response);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl PostSource for Rc<FakeSource> {
        async fn fetch_page(
            &self,
            page: u32,
            _limit: u32,
            min_date: Option<&str>,
        ) -> Result<PostsPage, ApiError> {
            self.calls.borrow_mut().push(Call::FetchPage {
                page,
                min_date: min_date.map(str::to_string),
            });
            self.pages
                .borrow_mut()
                .pop_front()
                .expect("fetch_page sin respuesta encolada")
        }

        async fn create(&self, _data: &PostInput) -> Result<Post, ApiError> {
            self.calls.borrow_mut().push(Call::Create);
            self.create_result.borrow_mut().take().unwrap()
        }

        async fn update(
            &self,
            id: u64,
            _data: &PostInput,
            usuario: &str,
        ) -> Result<Post, ApiError> {
            self.calls.borrow_mut().push(Call::Update {
                id,
                usuario: usuario.to_string(),
            });
            self.update_result.borrow_mut().take().unwrap()
        }

        async fn delete(&self, id: u64, usuario: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete {
                id,
                usuario: usuario.to_string(),
            });
            self.delete_result.borrow_mut().take().unwrap()
        }
    }

    #[derive(Default)]
    struct FakeCache {
        posts: RefCell<Option<Vec<Post>>>,
        timestamp: RefCell<Option<String>>,
    }

    impl PostCache for Rc<FakeCache> {
        fn posts(&self) -> Option<Vec<Post>> {
            self.posts.borrow().clone()
        }

        fn timestamp(&self) -> Option<String> {
            self.timestamp.borrow().clone()
        }

        fn store_posts(&self, posts: &[Post]) {
            *self.posts.borrow_mut() = Some(posts.to_vec());
        }

        fn store_timestamp(&self, iso: &str) {
            *self.timestamp.borrow_mut() = Some(iso.to_string());
        }
    }

    type TestEngine = SyncEngine<Rc<FakeSource>, Rc<FakeCache>>;

    fn engine(limit: u32) -> (TestEngine, Rc<FakeSource>, Rc<FakeCache>) {
        let source = Rc::new(FakeSource::default());
        let cache = Rc::new(FakeCache::default());
        let engine = SyncEngine::new(source.clone(), cache.clone(), limit);
        (engine, source, cache)
    }

    fn record_publishes(engine: &TestEngine) -> Rc<RefCell<Vec<SyncState>>> {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        engine.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));
        published
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_network_first_publishes_page_and_totals() {
        let (engine, source, cache) = engine(10);
        source.queue_page(Ok(page_of(vec![post(11), post(12)], 25)));

        block_on(engine.load_posts(2, false));

        let state = engine.snapshot();
        assert_eq!(ids(&state.posts), vec![11, 12]);
        assert_eq!(state.page, 2);
        assert_eq!(state.total_posts, 25);
        assert_eq!(state.total_pages, 3);
        assert!(!state.loading);
        // Página distinta de 1 no toca el caché
        assert!(cache.posts.borrow().is_none());
    }

    #[test]
    fn test_network_first_page_one_writes_cache() {
        let (engine, source, cache) = engine(10);
        source.queue_page(Ok(page_of(vec![post(1), post(2)], 2)));

        block_on(engine.load_posts(1, false));

        assert_eq!(ids(&cache.posts.borrow().clone().unwrap()), vec![1, 2]);
        assert!(cache.timestamp.borrow().is_some());
    }

    #[test]
    fn test_cache_first_publishes_stale_window_then_merge() {
        let (engine, source, cache) = engine(10);
        cache.store_posts(&[post(1), post(2)]);
        cache.store_timestamp("2024-03-01T00:00:00.000Z");
        // Primera llamada: solo importa el total. Segunda: incremental.
        source.queue_page(Ok(page_of(vec![post(1), post(2)], 25)));
        source.queue_page(Ok(page_of(vec![post(9)], 26)));

        let published = record_publishes(&engine);
        block_on(engine.load_posts(1, true));

        let published = published.borrow();
        // Fase intermedia: ventana cacheada visible, totales ya corregidos,
        // loading apagado mientras sigue el refresco.
        let stale = published
            .iter()
            .find(|s| ids(&s.posts) == vec![1, 2] && !s.loading)
            .expect("no se publicó la ventana cacheada");
        assert_eq!(stale.total_posts, 25);
        assert_eq!(stale.total_pages, 3);
        assert_eq!(stale.page, 1);

        // Fase final: merge con lo nuevo por delante.
        let last = published.last().unwrap();
        assert_eq!(ids(&last.posts), vec![9, 1, 2]);
        assert!(!last.loading);
        assert_eq!(ids(&cache.posts.borrow().clone().unwrap()), vec![9, 1, 2]);

        // Las dos llamadas: total sin min_date, incremental con él.
        assert_eq!(
            source.calls(),
            vec![
                Call::FetchPage {
                    page: 1,
                    min_date: None
                },
                Call::FetchPage {
                    page: 1,
                    min_date: Some("2024-03-01T00:00:00.000Z".to_string())
                },
            ]
        );
    }

    #[test]
    fn test_cache_first_empty_increment_is_idempotent() {
        let (engine, source, cache) = engine(10);
        let window = vec![post(1), post(2), post(3)];
        cache.store_posts(&window);
        cache.store_timestamp("2024-03-01T00:00:00.000Z");
        source.queue_page(Ok(page_of(window.clone(), 3)));
        source.queue_page(Ok(page_of(vec![], 3)));

        block_on(engine.load_posts(1, true));

        // Publicado y persistido byte-idéntico a la ventana previa
        assert_eq!(engine.snapshot().posts, window);
        assert_eq!(cache.posts.borrow().clone().unwrap(), window);
        // El timestamp sí se renueva aunque no hubiera nada nuevo
        assert_ne!(
            cache.timestamp.borrow().clone().unwrap(),
            "2024-03-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_cache_first_dedup_incoming_wins() {
        let (engine, source, cache) = engine(3);
        cache.store_posts(&[post(1), post(2), post(3)]);
        cache.store_timestamp("2024-03-01T00:00:00.000Z");
        let updated = Post {
            etiquetas: vec!["actualizado".to_string()],
            ..post(2)
        };
        source.queue_page(Ok(page_of(vec![], 3)));
        source.queue_page(Ok(page_of(vec![updated.clone()], 3)));

        block_on(engine.load_posts(1, true));

        let state = engine.snapshot();
        assert_eq!(ids(&state.posts), vec![2, 1, 3]);
        assert_eq!(state.posts[0], updated);
        assert_eq!(state.posts.len(), 3);
    }

    #[test]
    fn test_cache_window_truncated_to_limit() {
        let (engine, source, cache) = engine(3);
        cache.store_posts(&[post(1), post(2), post(3), post(4), post(5)]);
        cache.store_timestamp("2024-03-01T00:00:00.000Z");
        source.queue_page(Ok(page_of(vec![], 5)));
        source.queue_page(Ok(page_of(vec![], 5)));

        block_on(engine.load_posts(1, true));

        assert_eq!(ids(&engine.snapshot().posts), vec![1, 2, 3]);
        assert_eq!(ids(&cache.posts.borrow().clone().unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_two_skips_cache_path() {
        let (engine, source, cache) = engine(10);
        cache.store_posts(&[post(1)]);
        cache.store_timestamp("2024-03-01T00:00:00.000Z");
        source.queue_page(Ok(page_of(vec![post(11)], 25)));

        block_on(engine.load_posts(2, true));

        assert_eq!(
            source.calls(),
            vec![Call::FetchPage {
                page: 2,
                min_date: None
            }]
        );
        assert_eq!(ids(&engine.snapshot().posts), vec![11]);
    }

    #[test]
    fn test_page_beyond_last_keeps_totals() {
        let (engine, source, _cache) = engine(10);
        source.queue_page(Ok(page_of((1..=10).map(post).collect(), 25)));
        block_on(engine.load_posts(1, false));

        // El backend responde vacío para una página fuera de rango
        source.queue_page(Ok(page_of(vec![], 25)));
        block_on(engine.load_posts(4, false));

        let state = engine.snapshot();
        assert!(state.posts.is_empty());
        assert_eq!(state.page, 4);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.total_posts, 25);
    }

    #[test]
    fn test_go_to_page_invalid_input_is_noop() {
        let (engine, source, _cache) = engine(10);
        let before = engine.snapshot();

        block_on(engine.go_to_page("abc"));
        block_on(engine.go_to_page("0"));
        block_on(engine.go_to_page("-2"));

        assert!(source.calls().is_empty());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_go_to_page_valid_input_fetches_without_cache() {
        let (engine, source, cache) = engine(10);
        cache.store_posts(&[post(1)]);
        cache.store_timestamp("2024-03-01T00:00:00.000Z");
        source.queue_page(Ok(page_of(vec![post(1)], 1)));

        block_on(engine.go_to_page("1"));

        // Navegación explícita: directo a red aunque haya caché
        assert_eq!(
            source.calls(),
            vec![Call::FetchPage {
                page: 1,
                min_date: None
            }]
        );
    }

    #[test]
    fn test_read_error_is_swallowed_and_clears_loading() {
        let (engine, source, _cache) = engine(10);
        source.queue_page(Ok(page_of(vec![post(1)], 1)));
        block_on(engine.load_posts(1, false));
        let before = engine.snapshot();

        source.queue_page(Err(ApiError::Network("fetch falló".to_string())));
        block_on(engine.load_posts(2, false));

        let after = engine.snapshot();
        assert!(!after.loading);
        assert_eq!(after.posts, before.posts);
        assert_eq!(after.page, before.page);
        assert_eq!(after.total_posts, before.total_posts);
    }

    #[test]
    fn test_create_failure_propagates_without_reload() {
        let (engine, source, _cache) = engine(10);
        let error = ApiError::Server {
            status: 400,
            detail: "link_imagen inválido".to_string(),
        };
        *source.create_result.borrow_mut() = Some(Err(error.clone()));
        let before = engine.snapshot();

        let result = block_on(engine.create_post(&PostInput::default()));

        assert_eq!(result, Err(error));
        assert_eq!(engine.snapshot().posts, before.posts);
        assert_eq!(engine.snapshot().total_posts, before.total_posts);
        // Solo la llamada de creación, sin recarga parcial
        assert_eq!(source.calls(), vec![Call::Create]);
    }

    #[test]
    fn test_create_success_reloads_first_page_fresh() {
        let (engine, source, cache) = engine(10);
        *source.create_result.borrow_mut() = Some(Ok(post(7)));
        source.queue_page(Ok(page_of(vec![post(7), post(1)], 2)));

        let created = block_on(engine.create_post(&PostInput::default())).unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(
            source.calls(),
            vec![
                Call::Create,
                Call::FetchPage {
                    page: 1,
                    min_date: None
                }
            ]
        );
        assert_eq!(ids(&cache.posts.borrow().clone().unwrap()), vec![7, 1]);
    }

    #[test]
    fn test_delete_reloads_current_page_with_credential() {
        let (engine, source, _cache) = engine(10);
        source.queue_page(Ok(page_of(vec![post(11)], 25)));
        block_on(engine.load_posts(2, false));

        *source.delete_result.borrow_mut() = Some(Ok(()));
        source.queue_page(Ok(page_of(vec![post(12)], 24)));
        block_on(engine.delete_post(11, "ana")).unwrap();

        assert_eq!(
            source.calls()[1..].to_vec(),
            vec![
                Call::Delete {
                    id: 11,
                    usuario: "ana".to_string()
                },
                Call::FetchPage {
                    page: 2,
                    min_date: None
                }
            ]
        );
        assert_eq!(ids(&engine.snapshot().posts), vec![12]);
    }

    #[test]
    fn test_update_failure_propagates() {
        let (engine, source, _cache) = engine(10);
        let error = ApiError::Server {
            status: 403,
            detail: "No eres el dueño de este post".to_string(),
        };
        *source.update_result.borrow_mut() = Some(Err(error.clone()));

        let result = block_on(engine.update_post(5, &PostInput::default(), "luis"));

        assert_eq!(result, Err(error));
        assert_eq!(
            source.calls(),
            vec![Call::Update {
                id: 5,
                usuario: "luis".to_string()
            }]
        );
    }

    #[test]
    fn test_published_window_never_exceeds_limit() {
        let (engine, source, _cache) = engine(10);
        source.queue_page(Ok(page_of((1..=10).map(post).collect(), 100)));

        let published = record_publishes(&engine);
        block_on(engine.load_posts(1, false));

        assert!(published
            .borrow()
            .iter()
            .all(|s| s.posts.len() <= engine.limit() as usize));
    }
}
