use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::{UsePostsHandle, UseSessionHandle};
use crate::models::Post;

#[derive(Properties, PartialEq)]
pub struct PinCardProps {
    pub post: Post,
    pub on_edit: Callback<Post>,
}

#[function_component(PinCard)]
pub fn pin_card(props: &PinCardProps) -> Html {
    let session = use_context::<UseSessionHandle>().expect("PinCard fuera del provider de sesión");
    let posts = use_context::<UsePostsHandle>().expect("PinCard fuera del provider de posts");

    let confirm_delete = use_state(|| false);
    let deleting = use_state(|| false);

    let is_owner = session.is_owner(&props.post.usuario);

    let on_edit_click = {
        let on_edit = props.on_edit.clone();
        let post = props.post.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(post.clone()))
    };

    // Borrado en dos clics: el primero arma la confirmación y se desarma
    // solo a los 3 segundos, el segundo ejecuta.
    let on_delete_click = {
        let confirm_delete = confirm_delete.clone();
        let deleting = deleting.clone();
        let engine = posts.engine.clone();
        let post_id = props.post.id;
        let usuario = session.current_user.clone().unwrap_or_default();

        Callback::from(move |_: MouseEvent| {
            if !*confirm_delete {
                confirm_delete.set(true);
                let confirm_delete = confirm_delete.clone();
                Timeout::new(3_000, move || confirm_delete.set(false)).forget();
                return;
            }

            let engine = engine.clone();
            let usuario = usuario.clone();
            let deleting = deleting.clone();
            let confirm_delete = confirm_delete.clone();
            deleting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match engine.delete_post(post_id, &usuario).await {
                    Ok(()) => log::info!("🗑️ Post {} eliminado", post_id),
                    Err(e) => {
                        log::error!("❌ Error eliminando post {}: {}", post_id, e);
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(&format!("Error: {}", e));
                        }
                    }
                }
                deleting.set(false);
                confirm_delete.set(false);
            });
        })
    };

    html! {
        <div class="pin-card">
            <div class="pin-image-container">
                <img
                    src={props.post.link_imagen.clone()}
                    alt={format!("Pin de {}", props.post.usuario)}
                    loading="lazy"
                    class="pin-image"
                />
                if is_owner {
                    <div class="pin-actions">
                        <button class="pin-action-btn" onclick={on_edit_click} title="Editar">
                            { "✏️" }
                        </button>
                        <button
                            class={classes!("pin-action-btn", (*confirm_delete).then_some("delete-confirm"))}
                            onclick={on_delete_click}
                            disabled={*deleting}
                            title={if *confirm_delete { "Confirmar borrado" } else { "Eliminar" }}
                        >
                            { if *deleting { "…" } else if *confirm_delete { "¿Seguro?" } else { "🗑️" } }
                        </button>
                    </div>
                }
            </div>

            <div class="pin-info">
                <span class="pin-user">{ format!("@{}", props.post.usuario) }</span>
                <span class="pin-date">{ props.post.fecha_alta.clone() }</span>
                if !props.post.etiquetas.is_empty() {
                    <div class="pin-tags">
                        {
                            props.post.etiquetas.iter().map(|tag| html! {
                                <span class="pin-tag" key={tag.clone()}>{ tag }</span>
                            }).collect::<Html>()
                        }
                    </div>
                }
            </div>
        </div>
    }
}
