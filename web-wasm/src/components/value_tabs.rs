//! Value range tabs

use leptos::prelude::*;
use processos_common::ValueTab;

#[component]
pub fn ValueTabs<FS>(active: Signal<ValueTab>, counts: Signal<[usize; 4]>, on_select: FS) -> impl IntoView
where
    FS: Fn(ValueTab) + 'static + Clone + Send,
{
    view! {
        <nav class="tabs">
            {ValueTab::ALL
                .into_iter()
                .map(|tab| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class="tab"
                            class:active=move || active.get() == tab
                            on:click=move |_| on_select(tab)
                        >
                            {tab.label()}
                            <span class="badge">{move || counts.get()[tab.index()]}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
