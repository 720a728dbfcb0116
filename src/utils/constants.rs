/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://127.0.0.1:8000 (por defecto)
/// - Producción: via BACKEND_URL env var (ver build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Posts por página (ventana fija del motor de sincronización)
pub const PAGE_SIZE: u32 = 10;

/// Fotos pedidas al feed de descubrimiento
pub const DISCOVERY_COUNT: u32 = 20;

// Claves de almacenamiento
pub const STORAGE_KEY_POSTS: &str = "posts";
pub const STORAGE_KEY_TIMESTAMP: &str = "posts_timestamp";
pub const STORAGE_KEY_USER: &str = "currentUser";
