//! Transient notification with auto-hide

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use processos_common::{Notice, NOTICE_AUTO_HIDE_MS};

#[component]
pub fn Snackbar<FD>(notice: Signal<Option<Notice>>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(u64) + 'static + Clone + Send,
{
    {
        let on_dismiss = on_dismiss.clone();
        Effect::new(move |_| {
            if let Some(id) = notice.get().map(|n| n.id) {
                let on_dismiss = on_dismiss.clone();
                Timeout::new(NOTICE_AUTO_HIDE_MS, move || on_dismiss(id)).forget();
            }
        });
    }

    move || {
        notice.get().map(|n| {
            let on_dismiss = on_dismiss.clone();
            let id = n.id;
            view! {
                <div class=format!("snackbar snackbar-{}", n.level.as_str()) role="alert">
                    <span>{n.message}</span>
                    <button class="snackbar-close" on:click=move |_| on_dismiss(id)>"×"</button>
                </div>
            }
        })
    }
}
