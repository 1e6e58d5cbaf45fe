//! API connection settings

use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FS, FC>(
    base_url: ReadSignal<String>,
    set_base_url: WriteSignal<String>,
    token: ReadSignal<String>,
    set_token: WriteSignal<String>,
    status: ReadSignal<String>,
    on_save: FS,
    on_clear_token: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="api-base-url">"URL da API"</label>
                    <input
                        type="url"
                        id="api-base-url"
                        placeholder="http://127.0.0.1:8000"
                        prop:value=move || base_url.get()
                        on:input=move |ev| {
                            set_base_url.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="api-token">"Token de acesso"</label>
                    <input
                        type="password"
                        id="api-token"
                        placeholder="Bearer token..."
                        prop:value=move || token.get()
                        on:input=move |ev| {
                            set_token.set(event_target_value(&ev));
                        }
                    />
                    <div class="api-actions">
                        <button
                            class="btn btn-primary btn-small"
                            on:click={
                                let on_save = on_save.clone();
                                move |_| on_save(())
                            }
                        >
                            "Salvar"
                        </button>
                        <button
                            class="btn btn-tertiary btn-small"
                            on:click={
                                let on_clear_token = on_clear_token.clone();
                                move |_| on_clear_token(())
                            }
                        >
                            "Sair"
                        </button>
                    </div>
                    <div class="api-key-status">
                        {move || status.get()}
                    </div>
                </div>
            </div>
        </div>
    }
}
