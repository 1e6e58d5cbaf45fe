//! Search box

use leptos::prelude::*;

#[component]
pub fn SearchBar<FI, FE>(value: Signal<String>, on_input: FI, on_enter: FE) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone + Send,
    FE: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="form-group search-bar">
            <input
                type="search"
                id="search"
                placeholder="Buscar por nome do réu ou número do processo..."
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_enter(());
                    }
                }
            />
        </div>
    }
}
