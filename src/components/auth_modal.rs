use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::UseSessionHandle;

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub on_close: Callback<()>,
}

/// "Autenticación" local: solo pide un nombre para mostrar.
#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let session = use_context::<UseSessionHandle>().expect("AuthModal fuera del provider de sesión");
    let username_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let login = session.login.clone();
        let on_close = props.on_close.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(input) = username_ref.cast::<HtmlInputElement>() {
                let username = input.value().trim().to_string();
                if username.is_empty() {
                    error.set(Some("Por favor ingresa un nombre de usuario".to_string()));
                    return;
                }
                log::info!("✅ Sesión iniciada como {}", username);
                login.emit(username);
                on_close.emit(());
            }
        })
    };

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="auth-modal" onclick={stop_propagation}>
                <h2>{ "¡Bienvenido a PinBoard!" }</h2>
                <p>{ "Elige un nombre de usuario para crear y gestionar tus pins" }</p>

                <form onsubmit={on_submit} class="auth-form">
                    <input
                        type="text"
                        ref={username_ref}
                        placeholder="Tu nombre de usuario"
                        class="auth-input"
                    />
                    if let Some(msg) = (*error).clone() {
                        <div class="auth-error">{ msg }</div>
                    }
                    <button type="submit" class="btn-primary">{ "Entrar" }</button>
                </form>
            </div>
        </div>
    }
}
