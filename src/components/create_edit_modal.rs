use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{UsePostsHandle, UseSessionHandle};
use crate::models::{Post, PostInput};

#[derive(Properties, PartialEq)]
pub struct CreateEditModalProps {
    pub on_close: Callback<()>,
    /// Post a editar; None = crear nuevo
    #[prop_or_default]
    pub edit_post: Option<Post>,
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[function_component(CreateEditModal)]
pub fn create_edit_modal(props: &CreateEditModalProps) -> Html {
    let session =
        use_context::<UseSessionHandle>().expect("CreateEditModal fuera del provider de sesión");
    let posts = use_context::<UsePostsHandle>().expect("CreateEditModal fuera del provider de posts");

    let is_edit = props.edit_post.is_some();

    let usuario = use_state(|| match &props.edit_post {
        Some(post) => post.usuario.clone(),
        None => session.current_user.clone().unwrap_or_default(),
    });
    let link_imagen = use_state(|| {
        props
            .edit_post
            .as_ref()
            .map(|p| p.link_imagen.clone())
            .unwrap_or_default()
    });
    let etiquetas = use_state(|| {
        props
            .edit_post
            .as_ref()
            .map(|p| p.etiquetas.join(", "))
            .unwrap_or_default()
    });
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let oninput_field = |field: UseStateHandle<String>, error: UseStateHandle<Option<String>>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
            error.set(None);
        })
    };

    let on_submit = {
        let usuario = usuario.clone();
        let link_imagen = link_imagen.clone();
        let etiquetas = etiquetas.clone();
        let loading = loading.clone();
        let error = error.clone();
        let engine = posts.engine.clone();
        let edit_post = props.edit_post.clone();
        let current_user = session.current_user.clone().unwrap_or_default();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = PostInput {
                usuario: usuario.trim().to_string(),
                link_imagen: link_imagen.trim().to_string(),
                etiquetas: split_tags(&etiquetas),
            };

            loading.set(true);
            error.set(None);

            let engine = engine.clone();
            let edit_post = edit_post.clone();
            let current_user = current_user.clone();
            let loading = loading.clone();
            let error = error.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &edit_post {
                    Some(post) => engine.update_post(post.id, &input, &current_user).await,
                    None => engine.create_post(&input).await,
                };

                loading.set(false);
                match result {
                    Ok(saved) => {
                        log::info!("✅ Post {} guardado", saved.id);
                        on_close.emit(());
                    }
                    // Error de escritura propagado: se muestra en el formulario
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let tags_preview = split_tags(&etiquetas);

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="create-modal" onclick={stop_propagation}>
                <div class="create-modal-header">
                    <h2>{ if is_edit { "Editar Pin" } else { "Crear Nuevo Pin" } }</h2>
                    <button class="create-modal-close" onclick={on_cancel.clone()}>{ "✕" }</button>
                </div>

                <form onsubmit={on_submit} class="create-modal-form">
                    if let Some(msg) = (*error).clone() {
                        <div class="create-modal-error">{ msg }</div>
                    }

                    <div class="form-field">
                        <label for="usuario">{ "Usuario" }</label>
                        <input
                            type="text"
                            id="usuario"
                            value={(*usuario).clone()}
                            oninput={oninput_field(usuario.clone(), error.clone())}
                            placeholder="Tu nombre de usuario"
                            required=true
                            disabled={is_edit}
                        />
                    </div>

                    <div class="form-field">
                        <label for="link_imagen">{ "URL de Imagen" }</label>
                        <input
                            type="url"
                            id="link_imagen"
                            value={(*link_imagen).clone()}
                            oninput={oninput_field(link_imagen.clone(), error.clone())}
                            placeholder="https://ejemplo.com/imagen.jpg"
                            required=true
                        />
                        if !link_imagen.is_empty() {
                            <div class="image-preview">
                                <img src={(*link_imagen).clone()} alt="Preview" />
                            </div>
                        }
                    </div>

                    <div class="form-field">
                        <label for="etiquetas">
                            { "Etiquetas" }
                            <span class="field-hint">{ " (separadas por comas)" }</span>
                        </label>
                        <input
                            type="text"
                            id="etiquetas"
                            value={(*etiquetas).clone()}
                            oninput={oninput_field(etiquetas.clone(), error.clone())}
                            placeholder="naturaleza, paisaje, montaña"
                        />
                        if !tags_preview.is_empty() {
                            <div class="tags-preview">
                                {
                                    tags_preview.iter().map(|tag| html! {
                                        <span class="tag-preview" key={tag.clone()}>{ tag }</span>
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    </div>

                    <div class="create-modal-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            onclick={on_cancel}
                            disabled={*loading}
                        >
                            { "Cancelar" }
                        </button>
                        <button type="submit" class="btn-primary" disabled={*loading}>
                            {
                                if *loading {
                                    if is_edit { "Guardando..." } else { "Creando..." }
                                } else if is_edit {
                                    "Guardar Cambios"
                                } else {
                                    "Crear Pin"
                                }
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
