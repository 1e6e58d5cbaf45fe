//! Loading spinner and fetch error panel

use leptos::prelude::*;
use processos_common::LoadPhase;

#[component]
pub fn LoadStatus<FR>(phase: Signal<LoadPhase>, on_retry: FR) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send,
{
    move || match phase.get() {
        LoadPhase::Idle | LoadPhase::Loading => view! {
            <div class="progress-container">
                <div class="spinner" />
                <p class="progress-text">"Carregando processos..."</p>
            </div>
        }
        .into_any(),
        LoadPhase::Failed(message) => {
            let on_retry = on_retry.clone();
            view! {
                <div class="alert alert-error">
                    <p>{message}</p>
                    <button class="btn btn-primary btn-small" on:click=move |_| on_retry(())>
                        "Tentar novamente"
                    </button>
                </div>
            }
            .into_any()
        }
        LoadPhase::Ready => ().into_any(),
    }
}
