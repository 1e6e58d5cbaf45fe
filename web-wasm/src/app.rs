//! Main application component
//!
//! All view state lives in one [`ViewController`] inside an `RwSignal`.
//! Components only read derived memos and report user intents back; every
//! network call is spawned here and its outcome handed to the controller.
//!
//! The filter and sort pipeline runs only when the controller's view key
//! changes. Keystrokes inside the debounce window touch the raw input alone.

use crate::api::client;
use crate::components::{
    assign_dialog::AssignDialog,
    header::Header,
    load_status::LoadStatus,
    pagination_bar::{PageInfo, PaginationBar},
    process_table::{ProcessTable, RowView},
    search_bar::SearchBar,
    selection_toolbar::SelectionToolbar,
    settings_panel::SettingsPanel,
    snackbar::Snackbar,
    value_tabs::ValueTabs,
};
use crate::storage;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use processos_common::{
    FetchTicket, LoadPhase, ProcessStatus, SortKey, ValueTab, ViewController,
};
use wasm_bindgen_futures::spawn_local;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(ViewController::new());

    // =============================================
    // Fetch cycle
    // =============================================

    let run_fetch = move |ticket: FetchTicket| {
        spawn_local(async move {
            let ctx = storage::request_context();
            let result = client::fetch_all(&ctx).await;
            if let Err(err) = &result {
                warn!("fetch #{} failed: {}", ticket.0, err);
            }
            controller.update(|c| {
                c.finish_fetch(ticket, result);
            });
        });
    };

    let refresh = move |_: ()| {
        if let Some(ticket) = controller.try_update(|c| c.begin_fetch()) {
            run_fetch(ticket);
        }
    };

    let navigate = move || {
        let hash = current_hash();
        if let Some(ticket) = controller.try_update(|c| c.navigate(hash)).flatten() {
            run_fetch(ticket);
        }
    };

    navigate();
    if let Some(window) = web_sys::window() {
        EventListener::new(&window, "hashchange", move |_| navigate()).forget();
    }

    // =============================================
    // Derived view
    // =============================================

    let phase = Memo::new(move |_| controller.with(|c| c.phase().clone()));
    let table_visible = move || phase.get() == LoadPhase::Ready;
    let loading = Signal::derive(move || phase.get() == LoadPhase::Loading);
    let total = Memo::new(move |_| controller.with(|c| c.total_count()));
    let search_input = Memo::new(move |_| controller.with(|c| c.state().search_input.clone()));
    let active_tab = Memo::new(move |_| controller.with(|c| c.state().active_tab));
    let revision = Memo::new(move |_| controller.with(|c| c.revision()));
    let tab_counts = Memo::new(move |_| {
        revision.track();
        controller.with_untracked(|c| c.tab_counts())
    });
    let sort = Memo::new(move |_| controller.with(|c| c.state().sort));

    let view_key = Memo::new(move |_| controller.with(|c| c.view_key()));
    let ordered_ids = Memo::new(move |_| {
        view_key.track();
        controller.with_untracked(|c| c.filtered_ids())
    });

    let header_check = Memo::new(move |_| {
        ordered_ids.with(|ids| controller.with(|c| c.header_check_of(ids)))
    });
    let selected_count = Memo::new(move |_| controller.with(|c| c.selected_count()));
    let assign_state = Memo::new(move |_| controller.with(|c| c.assign_state()));
    let folders = Memo::new(move |_| controller.with(|c| c.folders().to_vec()));
    let notice = Memo::new(move |_| controller.with(|c| c.current_notice().cloned()));

    let rows = Memo::new(move |_| {
        ordered_ids.with(|ids| controller.with(|c| {
            c.page_rows_of(ids)
                .into_iter()
                .map(|r| RowView {
                    record: r.clone(),
                    selected: c.is_selected(r.id),
                    pending: c.is_status_pending(r.id),
                })
                .collect::<Vec<_>>()
        }))
    });

    let page_info = Memo::new(move |_| {
        ordered_ids.with(|ids| controller.with(|c| {
            let window = c.page_window(ids);
            PageInfo {
                page: window.page,
                rows_per_page: window.rows_per_page,
                label: window.label(),
                has_previous: window.has_previous(),
                has_next: window.has_next(),
            }
        }))
    });

    // =============================================
    // Filters, sort, pagination
    // =============================================

    let on_search = move |input: String| {
        let now = now_ms();
        let delay = controller
            .try_update(|c| {
                c.set_search_input(input, now);
                c.search_deadline()
            })
            .flatten()
            .map(|deadline| deadline.saturating_sub(now))
            .unwrap_or(0);
        Timeout::new(delay as u32, move || {
            controller.maybe_update(|c| c.tick(now_ms()));
        })
        .forget();
    };
    let on_search_enter = move |_: ()| {
        controller.maybe_update(|c| c.flush_search());
    };
    let on_tab = move |tab: ValueTab| controller.update(|c| c.set_tab(tab));
    let on_sort = move |key: SortKey| controller.update(|c| c.sort_by(key));
    let on_page = move |page: usize| {
        controller.maybe_update(|c| c.set_page(page));
    };
    let on_rows_per_page = move |n: usize| controller.update(|c| c.set_rows_per_page(n));

    // =============================================
    // Selection and status
    // =============================================

    let on_toggle_row = move |id: i64| {
        controller.maybe_update(|c| c.toggle_row(id));
    };
    let on_toggle_all = move |flag: bool| controller.update(|c| c.select_all_visible(flag));
    let on_clear_selection = move |_: ()| controller.update(|c| c.select_all_visible(false));

    let on_status = move |id: i64, clicked: ProcessStatus| {
        let Some(patch) = controller.try_update(|c| c.click_status(id, clicked)).flatten() else {
            return;
        };
        spawn_local(async move {
            let ctx = storage::request_context();
            let result = client::patch_status(&ctx, &patch).await;
            controller.update(|c| {
                c.finish_status(patch, result);
            });
        });
    };

    // =============================================
    // Batch assignment
    // =============================================

    let on_open_assign = move |_: ()| {
        controller.update(|c| {
            c.open_assign();
        });
    };
    let on_cancel_assign = move |_: ()| {
        controller.maybe_update(|c| c.cancel_assign());
    };
    let on_choose_folder = move |folder_id: i64| {
        let Some(request) = controller.try_update(|c| c.choose_folder(folder_id)).flatten() else {
            return;
        };
        log!("adding {} processos to folder {}", request.processo_ids.len(), folder_id);
        spawn_local(async move {
            let ctx = storage::request_context();
            let result = client::add_processos(&ctx, &request).await;
            controller.update(|c| {
                c.finish_assign(result);
            });
        });
    };

    let on_dismiss = move |id: u64| {
        controller.maybe_update(|c| c.dismiss_notice(id));
    };

    // =============================================
    // Settings
    // =============================================

    let initial = storage::request_context();
    let (show_settings, set_show_settings) = signal(false);
    let (base_url, set_base_url) = signal(initial.base_url);
    let (token, set_token) = signal(initial.token.unwrap_or_default());
    let (settings_status, set_settings_status) = signal(String::new());

    let on_toggle_settings = move |_: ()| set_show_settings.update(|v| *v = !*v);
    let on_save_settings = move |_: ()| {
        match storage::save(&base_url.get_untracked(), &token.get_untracked()) {
            Ok(()) => {
                set_settings_status.set("Configurações salvas.".to_string());
                refresh(());
            }
            Err(message) => set_settings_status.set(message),
        }
    };
    let on_clear_token = move |_: ()| {
        storage::clear_token();
        set_token.set(String::new());
        set_settings_status.set("Token removido.".to_string());
    };

    view! {
        <div class="container">
            <Header
                total=total.into()
                loading=loading
                on_refresh=refresh
                on_settings=on_toggle_settings
            />

            <Show when=move || show_settings.get()>
                <SettingsPanel
                    base_url=base_url
                    set_base_url=set_base_url
                    token=token
                    set_token=set_token
                    status=settings_status
                    on_save=on_save_settings
                    on_clear_token=on_clear_token
                />
            </Show>

            <Show
                when=table_visible
                fallback=move || view! { <LoadStatus phase=phase.into() on_retry=refresh /> }
            >
                <ValueTabs active=active_tab.into() counts=tab_counts.into() on_select=on_tab />
                <SearchBar value=search_input.into() on_input=on_search on_enter=on_search_enter />
                <SelectionToolbar
                    count=selected_count.into()
                    on_assign=on_open_assign
                    on_clear=on_clear_selection
                />
                <ProcessTable
                    rows=rows.into()
                    sort=sort.into()
                    header_check=header_check.into()
                    on_sort=on_sort
                    on_toggle_row=on_toggle_row
                    on_toggle_all=on_toggle_all
                    on_status=on_status
                />
                <PaginationBar
                    info=page_info.into()
                    on_page=on_page
                    on_rows_per_page=on_rows_per_page
                />
            </Show>

            <AssignDialog
                state=assign_state.into()
                folders=folders.into()
                selected=selected_count.into()
                on_choose=on_choose_folder
                on_cancel=on_cancel_assign
            />

            <Snackbar notice=notice.into() on_dismiss=on_dismiss />
        </div>
    }
}
