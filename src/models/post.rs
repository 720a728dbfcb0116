use serde::{Deserialize, Serialize};

/// Post tal como lo devuelve el backend.
/// `fecha_alta` es un ISO-8601 opaco: el cliente solo lo muestra,
/// nunca calcula con él.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Post {
    pub id: u64,
    pub usuario: String,
    pub link_imagen: String,
    #[serde(default)]
    pub etiquetas: Vec<String>,
    pub fecha_alta: String,
}

/// Página de posts con el total global (para calcular totalPages).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct PostsPage {
    pub total: u64,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Cuerpo JSON para crear/actualizar un post.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct PostInput {
    pub usuario: String,
    pub link_imagen: String,
    pub etiquetas: Vec<String>,
}
