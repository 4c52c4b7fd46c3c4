//! Previous/next and numbered page controls.

use leptos::prelude::*;

/// Page buttons over zero-based `pages`. Hidden when there is at most one
/// page. Labels are one-based.
#[component]
pub fn Pagination(
    #[prop(into)] pages: Signal<Vec<u32>>,
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] has_prev: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || pages.with(|p| p.len() > 1)>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__button"
                    type="button"
                    disabled=move || !has_prev.get()
                    on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                {move || {
                    pages
                        .get()
                        .into_iter()
                        .map(|page| {
                            let class = move || {
                                if current.get() == page {
                                    "pagination__button pagination__button--active"
                                } else {
                                    "pagination__button"
                                }
                            };
                            view! {
                                <button class=class type="button" on:click=move |_| on_change.run(page)>
                                    {page + 1}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__button"
                    type="button"
                    disabled=move || !has_next.get()
                    on:click=move |_| on_change.run(current.get_untracked() + 1)
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
