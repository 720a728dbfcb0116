use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Post;
use crate::services::fetch_post;

use super::PinCard;

#[derive(Properties, PartialEq)]
pub struct SearchByIdProps {
    pub on_edit: Callback<Post>,
}

/// Búsqueda puntual por ID. La validación numérica se resuelve aquí,
/// antes de cualquier llamada de red.
#[function_component(SearchById)]
pub fn search_by_id(props: &SearchByIdProps) -> Html {
    let search_id = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let found_post = use_state(|| None::<Post>);

    let oninput = {
        let search_id = search_id.clone();
        let error = error.clone();
        let found_post = found_post.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_id.set(input.value());
            error.set(None);
            found_post.set(None);
        })
    };

    let on_submit = {
        let search_id = search_id.clone();
        let loading = loading.clone();
        let error = error.clone();
        let found_post = found_post.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let raw = search_id.trim().to_string();
            if raw.is_empty() {
                error.set(Some("Por favor ingresa un ID".to_string()));
                return;
            }

            let id = match raw.parse::<u64>() {
                Ok(id) if id > 0 => id,
                _ => {
                    error.set(Some("El ID debe ser un número positivo".to_string()));
                    return;
                }
            };

            loading.set(true);
            error.set(None);
            found_post.set(None);

            let loading = loading.clone();
            let error = error.clone();
            let found_post = found_post.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_post(id).await {
                    Ok(post) => found_post.set(Some(post)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        })
    };

    let on_clear = {
        let search_id = search_id.clone();
        let error = error.clone();
        let found_post = found_post.clone();
        Callback::from(move |_: MouseEvent| {
            search_id.set(String::new());
            error.set(None);
            found_post.set(None);
        })
    };

    html! {
        <div class="search-by-id">
            <form onsubmit={on_submit} class="search-by-id-form">
                <div class="search-input-group">
                    <input
                        type="text"
                        value={(*search_id).clone()}
                        oninput={oninput}
                        placeholder="Ej: 1, 2, 3..."
                        class="search-input"
                    />
                    <button type="submit" class="search-btn" disabled={*loading}>
                        { if *loading { "…" } else { "🔍" } }
                    </button>
                    if !search_id.is_empty() || found_post.is_some() {
                        <button
                            type="button"
                            class="clear-btn"
                            onclick={on_clear}
                            title="Limpiar búsqueda"
                        >
                            { "✕" }
                        </button>
                    }
                </div>
                <div class="search-hint">{ "Ingresa un número entero (ID del pin)" }</div>
                if let Some(msg) = (*error).clone() {
                    <div class="search-error">{ msg }</div>
                }
            </form>

            if let Some(post) = (*found_post).clone() {
                <div class="search-result">
                    <h3>{ "Pin encontrado" }</h3>
                    <div class="search-result-card">
                        <PinCard post={post} on_edit={props.on_edit.clone()} />
                    </div>
                </div>
            }
        </div>
    }
}
