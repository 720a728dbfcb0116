use yew::prelude::*;

use crate::models::DiscoveryPhoto;
use crate::services::fetch_discovery;
use crate::utils::DISCOVERY_COUNT;

/// Feed de descubrimiento: fotos curadas del proveedor externo,
/// independiente del motor de posts.
#[function_component(Discovery)]
pub fn discovery() -> Html {
    let photos = use_state(Vec::<DiscoveryPhoto>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload_tick = use_state(|| 0u32);

    {
        let photos = photos.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*reload_tick, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);
                match fetch_discovery(DISCOVERY_COUNT).await {
                    Ok(fetched) => {
                        log::info!("🖼️ Discovery: {} fotos cargadas", fetched.len());
                        photos.set(fetched);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando discovery: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_retry = {
        let reload_tick = reload_tick.clone();
        Callback::from(move |_: MouseEvent| reload_tick.set(*reload_tick + 1))
    };

    html! {
        <div class="discovery">
            <div class="discovery-header">
                <h2>{ "Descubrir" }</h2>
                <p>{ "Explora imágenes increíbles de Unsplash" }</p>
            </div>

            if *loading {
                <div class="discovery-grid">
                    {
                        (0..12).map(|i| html! {
                            <div class="discovery-skeleton" key={i}>
                                <div class="skeleton-pulse"></div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            } else if let Some(msg) = (*error).clone() {
                <div class="discovery-error">
                    <p>{ msg }</p>
                    <button class="btn-primary" onclick={on_retry}>{ "Reintentar" }</button>
                </div>
            } else {
                <div class="discovery-grid">
                    {
                        photos.iter().map(|photo| html! {
                            <div class="discovery-card" key={photo.id.clone()}>
                                <img
                                    src={photo.url.clone()}
                                    alt={photo.alt_description.clone().unwrap_or_else(|| "Foto de Unsplash".to_string())}
                                    loading="lazy"
                                />
                                <span class="discovery-author">{ format!("📷 {}", photo.author) }</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
