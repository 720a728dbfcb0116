use thiserror::Error;

/// Errores del backend, en dos familias con destinos distintos:
/// las lecturas del motor los registran y los tragan, las escrituras
/// los devuelven al componente que inició la operación.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Fallo de transporte o respuesta no parseable.
    #[error("error de red: {0}")]
    Network(String),
    /// Respuesta no-2xx; `detail` viene del cuerpo JSON cuando existe.
    /// Un rechazo de propiedad (no-owner) llega por aquí igual que
    /// cualquier otro 4xx.
    #[error("{detail}")]
    Server { status: u16, detail: String },
}
