use yew::prelude::*;

use crate::hooks::UsePostsHandle;
use crate::models::Post;

use super::PinCard;

#[derive(Properties, PartialEq)]
pub struct MasonryGridProps {
    pub on_edit: Callback<Post>,
}

/// Rejilla de pins. El efecto masonry es CSS puro (columnas), sin medir
/// el DOM desde aquí.
#[function_component(MasonryGrid)]
pub fn masonry_grid(props: &MasonryGridProps) -> Html {
    let posts = use_context::<UsePostsHandle>().expect("MasonryGrid fuera del provider de posts");

    if posts.state.posts.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{ "Todavía no hay pins. ¡Crea el primero!" }</p>
            </div>
        };
    }

    html! {
        <div class="masonry-grid">
            {
                posts.state.posts.iter().map(|post| html! {
                    <PinCard key={post.id} post={post.clone()} on_edit={props.on_edit.clone()} />
                }).collect::<Html>()
            }
        </div>
    }
}
