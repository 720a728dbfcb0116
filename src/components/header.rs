use yew::prelude::*;

use crate::hooks::UseSessionHandle;

use super::app::View;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_create_click: Callback<MouseEvent>,
    pub on_home_click: Callback<MouseEvent>,
    pub on_discovery_click: Callback<MouseEvent>,
    pub current_view: View,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_context::<UseSessionHandle>().expect("Header fuera del provider de sesión");
    let show_user_menu = use_state(|| false);

    let toggle_user_menu = {
        let show_user_menu = show_user_menu.clone();
        Callback::from(move |_: MouseEvent| show_user_menu.set(!*show_user_menu))
    };

    let on_logout = {
        let logout = session.logout.clone();
        let show_user_menu = show_user_menu.clone();
        Callback::from(move |_: MouseEvent| {
            show_user_menu.set(false);
            logout.emit(());
        })
    };

    let initial = session
        .current_user
        .as_ref()
        .and_then(|u| u.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    html! {
        <header class="header">
            <div class="header-left">
                <span class="header-logo" onclick={props.on_home_click.clone()}>{ "📌 PinBoard" }</span>
                <nav class="header-nav">
                    <button
                        class={classes!("header-nav-btn", (props.current_view == View::Home).then_some("active"))}
                        onclick={props.on_home_click.clone()}
                    >
                        { "Inicio" }
                    </button>
                    <button
                        class={classes!("header-nav-btn", (props.current_view == View::Discovery).then_some("active"))}
                        onclick={props.on_discovery_click.clone()}
                    >
                        { "Descubrir" }
                    </button>
                </nav>
            </div>

            <div class="header-right">
                <button class="header-create-btn" onclick={props.on_create_click.clone()}>
                    { "+ Crear" }
                </button>

                if session.current_user.is_some() {
                    <div class="user-menu-container">
                        <button class="user-avatar" onclick={toggle_user_menu}>
                            { initial }
                        </button>
                        if *show_user_menu {
                            <div class="user-menu">
                                <div class="user-menu-name">
                                    { session.current_user.clone().unwrap_or_default() }
                                </div>
                                <button class="user-menu-logout" onclick={on_logout}>
                                    { "Cerrar sesión" }
                                </button>
                            </div>
                        }
                    </div>
                }
            </div>
        </header>
    }
}
