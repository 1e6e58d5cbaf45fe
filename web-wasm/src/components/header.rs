//! Header component

use leptos::prelude::*;

#[component]
pub fn Header<FR, FS>(
    total: Signal<u64>,
    loading: Signal<bool>,
    on_refresh: FR,
    on_settings: FS,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send,
    FS: Fn(()) + 'static + Clone + Send,
{
    view! {
        <header class="header">
            <h1>"Processos"</h1>
            <span class="text-muted">{move || format!("{} processos cadastrados", total.get())}</span>
            <div class="header-actions">
                <button
                    class="btn btn-secondary btn-small"
                    disabled=move || loading.get()
                    on:click={
                        let on_refresh = on_refresh.clone();
                        move |_| on_refresh(())
                    }
                >
                    "Atualizar"
                </button>
                <button
                    class="btn btn-tertiary btn-small"
                    on:click={
                        let on_settings = on_settings.clone();
                        move |_| on_settings(())
                    }
                >
                    "Configurações"
                </button>
            </div>
        </header>
    }
}
