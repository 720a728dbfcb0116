use serde::Deserialize;

/// Foto del feed de descubrimiento (proxy de Unsplash en el backend).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DiscoveryPhoto {
    pub id: String,
    pub url: String,
    pub author: String,
    #[serde(default)]
    pub alt_description: Option<String>,
}
