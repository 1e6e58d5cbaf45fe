//! Bulk action bar shown above the table

use leptos::prelude::*;

#[component]
pub fn SelectionToolbar<FA, FC>(count: Signal<usize>, on_assign: FA, on_clear: FC) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
{
    let has_selection = move || count.get() > 0;

    view! {
        <div class="selection-toolbar" class:active=has_selection>
            <span>{move || format!("{} selecionado(s)", count.get())}</span>
            <button class="btn btn-primary btn-small" on:click=move |_| on_assign(())>
                "Adicionar à pasta"
            </button>
            <button
                class="btn btn-tertiary btn-small"
                disabled=move || count.get() == 0
                on:click=move |_| on_clear(())
            >
                "Limpar seleção"
            </button>
        </div>
    }
}
