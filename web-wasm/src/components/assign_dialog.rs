//! Folder picker for batch assignment

use leptos::prelude::*;
use processos_common::{AssignState, Folder};

#[component]
pub fn AssignDialog<FC, FX>(
    state: Signal<AssignState>,
    folders: Signal<Vec<Folder>>,
    selected: Signal<usize>,
    on_choose: FC,
    on_cancel: FX,
) -> impl IntoView
where
    FC: Fn(i64) + 'static + Clone + Send + Sync,
    FX: Fn(()) + 'static + Clone + Send + Sync,
{
    let submitting = move || matches!(state.get(), AssignState::Submitting { .. });
    let on_choose = StoredValue::new(on_choose);
    let on_cancel = StoredValue::new(on_cancel);

    view! {
        <Show when=move || state.get() != AssignState::Closed>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <h2>{move || format!("Adicionar {} processo(s) à pasta", selected.get())}</h2>
                    <Show
                        when=move || !folders.get().is_empty()
                        fallback=|| view! { <p class="text-muted">"Nenhuma pasta encontrada."</p> }
                    >
                        <ul class="folder-list">
                            <For
                                each=move || folders.get()
                                key=|folder| folder.id
                                children=move |folder: Folder| {
                                    let on_choose = on_choose.get_value();
                                    let folder_id = folder.id;
                                    let count = folder.processos.len();
                                    view! {
                                        <li>
                                            <button
                                                class="btn btn-secondary folder-btn"
                                                disabled=submitting
                                                on:click=move |_| on_choose(folder_id)
                                            >
                                                {folder.name}
                                                <span class="badge">{count}</span>
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                    <Show when=submitting>
                        <p class="progress-text">"Enviando..."</p>
                    </Show>
                    <div class="modal-actions">
                        <button
                            class="btn btn-tertiary"
                            disabled=submitting
                            on:click=move |_| on_cancel.get_value()(())
                        >
                            "Cancelar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
