//! Rows-per-page selector and page navigation

use leptos::prelude::*;
use processos_common::ROWS_PER_PAGE_OPTIONS;

/// What the bar needs from the current page window
#[derive(Clone, PartialEq)]
pub struct PageInfo {
    pub page: usize,
    pub rows_per_page: usize,
    pub label: String,
    pub has_previous: bool,
    pub has_next: bool,
}

#[component]
pub fn PaginationBar<FP, FR>(info: Signal<PageInfo>, on_page: FP, on_rows_per_page: FR) -> impl IntoView
where
    FP: Fn(usize) + 'static + Clone + Send,
    FR: Fn(usize) + 'static + Clone + Send,
{
    let on_previous = on_page.clone();
    let on_next = on_page;

    view! {
        <div class="pagination-bar">
            <label for="rows-per-page">"Linhas por página:"</label>
            <select
                id="rows-per-page"
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<usize>() {
                        on_rows_per_page(value);
                    }
                }
            >
                {ROWS_PER_PAGE_OPTIONS
                    .into_iter()
                    .map(|n| view! {
                        <option value=n.to_string() selected=move || info.get().rows_per_page == n>
                            {n}
                        </option>
                    })
                    .collect_view()}
            </select>
            <span class="page-label">{move || info.get().label}</span>
            <button
                class="btn btn-tertiary btn-small"
                disabled=move || !info.get().has_previous
                on:click=move |_| {
                    let page = info.get_untracked().page;
                    on_previous(page.saturating_sub(1));
                }
            >
                "‹"
            </button>
            <button
                class="btn btn-tertiary btn-small"
                disabled=move || !info.get().has_next
                on:click=move |_| on_next(info.get_untracked().page + 1)
            >
                "›"
            </button>
        </div>
    }
}
