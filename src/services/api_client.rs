// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::models::{DiscoveryPhoto, Post, PostInput, PostsPage};
use crate::state::PostSource;
use crate::utils::BACKEND_URL;

use super::ApiError;

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Extrae el `detail` del cuerpo de error; si no hay, usa el mensaje genérico.
async fn server_error(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => fallback.to_string(),
    };
    ApiError::Server { status, detail }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Cliente HTTP del backend de posts. Sin estado más allá de la URL base.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PostSource for ApiClient {
    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        min_date: Option<&str>,
    ) -> Result<PostsPage, ApiError> {
        let mut url = format!("{}/api/posts?page={}&limit={}", self.base_url, page, limit);
        if let Some(min_date) = min_date {
            url.push_str(&format!("&min_date={}", min_date));
        }

        let response = Request::get(&url).send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(server_error(response, "Error al cargar posts").await);
        }
        response.json::<PostsPage>().await.map_err(network_error)
    }

    async fn create(&self, data: &PostInput) -> Result<Post, ApiError> {
        let url = format!("{}/api/posts", self.base_url);
        let response = Request::post(&url)
            .json(data)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(server_error(response, "Error al crear post").await);
        }
        response.json::<Post>().await.map_err(network_error)
    }

    async fn update(&self, id: u64, data: &PostInput, usuario: &str) -> Result<Post, ApiError> {
        let url = format!("{}/api/posts/{}", self.base_url, id);
        let response = Request::put(&url)
            .header("X-User", usuario)
            .json(data)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(server_error(response, "Error al actualizar post").await);
        }
        response.json::<Post>().await.map_err(network_error)
    }

    async fn delete(&self, id: u64, usuario: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/posts/{}", self.base_url, id);
        let response = Request::delete(&url)
            .header("X-User", usuario)
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(server_error(response, "Error al eliminar post").await);
        }
        Ok(())
    }
}

/// Busca un post por ID (vista de búsqueda, no pasa por el motor).
pub async fn fetch_post(id: u64) -> Result<Post, ApiError> {
    let url = format!("{}/api/posts/{}", BACKEND_URL, id);
    let response = Request::get(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response, "Post no encontrado").await);
    }
    response.json::<Post>().await.map_err(network_error)
}

/// Fotos del feed de descubrimiento.
pub async fn fetch_discovery(count: u32) -> Result<Vec<DiscoveryPhoto>, ApiError> {
    let url = format!("{}/api/discovery?count={}", BACKEND_URL, count);
    let response = Request::get(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response, "Error al cargar discovery").await);
    }
    response
        .json::<Vec<DiscoveryPhoto>>()
        .await
        .map_err(network_error)
}
