use yew::prelude::*;

use crate::hooks::{use_posts, use_session, UsePostsHandle, UseSessionHandle};
use crate::models::Post;

use super::{
    AuthModal, CreateEditModal, Discovery, Header, MasonryGrid, Pagination, SearchById,
};

/// Vista activa de la app: tablero propio o feed de descubrimiento.
#[derive(Clone, Copy, PartialEq)]
pub enum View {
    Home,
    Discovery,
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let posts = use_posts();

    let show_auth_modal = use_state(|| false);
    let show_create_modal = use_state(|| false);
    let editing_post = use_state(|| None::<Post>);
    let current_view = use_state(|| View::Home);

    // Pedir nombre de usuario si no hay sesión
    {
        let show_auth_modal = show_auth_modal.clone();
        use_effect_with(session.current_user.clone(), move |user| {
            if user.is_none() {
                show_auth_modal.set(true);
            }
            || ()
        });
    }

    let on_create_click = {
        let show_create_modal = show_create_modal.clone();
        let show_auth_modal = show_auth_modal.clone();
        let logged_in = session.current_user.is_some();
        Callback::from(move |_: MouseEvent| {
            if logged_in {
                show_create_modal.set(true);
            } else {
                show_auth_modal.set(true);
            }
        })
    };

    let on_edit = {
        let editing_post = editing_post.clone();
        Callback::from(move |post: Post| editing_post.set(Some(post)))
    };

    let on_close_modals = {
        let show_create_modal = show_create_modal.clone();
        let editing_post = editing_post.clone();
        Callback::from(move |_| {
            show_create_modal.set(false);
            editing_post.set(None);
        })
    };

    let on_home_click = {
        let current_view = current_view.clone();
        Callback::from(move |_: MouseEvent| current_view.set(View::Home))
    };

    let on_discovery_click = {
        let current_view = current_view.clone();
        Callback::from(move |_: MouseEvent| current_view.set(View::Discovery))
    };

    let on_close_auth = {
        let show_auth_modal = show_auth_modal.clone();
        Callback::from(move |_| show_auth_modal.set(false))
    };

    html! {
        <ContextProvider<UseSessionHandle> context={session.clone()}>
        <ContextProvider<UsePostsHandle> context={posts.clone()}>
            <div class="app">
                <Header
                    on_create_click={on_create_click}
                    on_home_click={on_home_click}
                    on_discovery_click={on_discovery_click}
                    current_view={*current_view}
                />

                <main class="app-content">
                {
                    match *current_view {
                        View::Home => html! {
                            <>
                                <SearchById on_edit={on_edit.clone()} />
                                if posts.state.loading {
                                    <div class="loading-screen">
                                        <div class="loading-spinner"></div>
                                        <p>{ "Cargando pins..." }</p>
                                    </div>
                                } else {
                                    <>
                                        <MasonryGrid on_edit={on_edit.clone()} />
                                        <Pagination />
                                    </>
                                }
                            </>
                        },
                        View::Discovery => html! { <Discovery /> },
                    }
                }
                </main>

                if *show_auth_modal && session.current_user.is_none() {
                    <AuthModal on_close={on_close_auth} />
                }

                if *show_create_modal {
                    <CreateEditModal on_close={on_close_modals.clone()} />
                }

                if let Some(post) = (*editing_post).clone() {
                    <CreateEditModal on_close={on_close_modals} edit_post={post} />
                }
            </div>
        </ContextProvider<UsePostsHandle>>
        </ContextProvider<UseSessionHandle>>
    }
}
