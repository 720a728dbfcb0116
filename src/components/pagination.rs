use yew::prelude::*;

use crate::hooks::UsePostsHandle;
use crate::state::{item_range, page_numbers, PageSlot};

#[function_component(Pagination)]
pub fn pagination() -> Html {
    let posts = use_context::<UsePostsHandle>().expect("Pagination fuera del provider de posts");

    let page = posts.state.page;
    let total_pages = posts.state.total_pages;
    let total_posts = posts.state.total_posts;

    // Sin posts no hay nada que paginar
    if total_posts == 0 {
        return Html::default();
    }

    let (start_item, end_item) = item_range(page, posts.limit, total_posts);

    let go_to = |target: u32| {
        let posts = posts.clone();
        Callback::from(move |_: MouseEvent| posts.go_to_page(target))
    };

    html! {
        <div class="pagination-container">
            <div class="pagination-info">
                <span class="pagination-info-text">
                    { "Mostrando " }<strong>{ format!("{}-{}", start_item, end_item) }</strong>
                    { " de " }<strong>{ total_posts }</strong>{ " pins" }
                </span>
                if total_pages > 1 {
                    <span class="pagination-pages-info">
                        { format!("(Página {} de {})", page, total_pages) }
                    </span>
                }
            </div>

            if total_pages > 1 {
                <div class="pagination">
                    <button
                        class="pagination-btn"
                        onclick={go_to(page.saturating_sub(1))}
                        disabled={page == 1}
                        aria-label="Página anterior"
                    >
                        { "‹ Anterior" }
                    </button>

                    <div class="pagination-numbers">
                        {
                            page_numbers(page, total_pages).into_iter().enumerate().map(|(i, slot)| {
                                match slot {
                                    PageSlot::Ellipsis => html! {
                                        <span key={format!("ellipsis-{}", i)} class="pagination-ellipsis">{ "…" }</span>
                                    },
                                    PageSlot::Num(n) => html! {
                                        <button
                                            key={n}
                                            class={classes!("pagination-number", (n == page).then_some("active"))}
                                            onclick={go_to(n)}
                                        >
                                            { n }
                                        </button>
                                    },
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <button
                        class="pagination-btn"
                        onclick={go_to(page + 1)}
                        disabled={page == total_pages}
                        aria-label="Página siguiente"
                    >
                        { "Siguiente ›" }
                    </button>
                </div>
            }
        </div>
    }
}
