//! Process table: sortable headers, row checkboxes and status controls

use leptos::prelude::*;
use processos_common::{HeaderCheck, ProcessRecord, ProcessStatus, SortDirection, SortKey, SortSpec};

const COLUMNS: [SortKey; 6] = [
    SortKey::Id,
    SortKey::NumeroProcesso,
    SortKey::NomeReu,
    SortKey::CpfCnpjReu,
    SortKey::ValorCausa,
    SortKey::Status,
];

/// One rendered row
#[derive(Clone, PartialEq)]
pub struct RowView {
    pub record: ProcessRecord,
    pub selected: bool,
    /// Status change awaiting the server
    pub pending: bool,
}

#[component]
pub fn ProcessTable<FS, FT, FA, FC>(
    rows: Signal<Vec<RowView>>,
    sort: Signal<SortSpec>,
    header_check: Signal<HeaderCheck>,
    on_sort: FS,
    on_toggle_row: FT,
    on_toggle_all: FA,
    on_status: FC,
) -> impl IntoView
where
    FS: Fn(SortKey) + 'static + Clone + Send + Sync,
    FT: Fn(i64) + 'static + Clone + Send + Sync,
    FA: Fn(bool) + 'static + Clone + Send + Sync,
    FC: Fn(i64, ProcessStatus) + 'static + Clone + Send + Sync,
{
    view! {
        <table class="process-table">
            <thead>
                <tr>
                    <th class="col-check">
                        <input
                            type="checkbox"
                            prop:checked=move || header_check.get() == HeaderCheck::Checked
                            prop:indeterminate=move || header_check.get() == HeaderCheck::Indeterminate
                            on:change=move |_| {
                                on_toggle_all(header_check.get_untracked() != HeaderCheck::Checked)
                            }
                        />
                    </th>
                    {COLUMNS
                        .into_iter()
                        .map(|key| {
                            let on_sort = on_sort.clone();
                            let indicator = move || match sort.get().direction_for(key) {
                                Some(SortDirection::Ascending) => " ▲",
                                Some(SortDirection::Descending) => " ▼",
                                None => "",
                            };
                            view! {
                                <th class="sortable" on:click=move |_| on_sort(key)>
                                    {key.label()}
                                    {indicator}
                                </th>
                            }
                        })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=|| view! {
                        <tr><td colspan="7" class="text-muted">"Nenhum processo encontrado."</td></tr>
                    }
                >
                    <For
                        each=move || rows.get()
                        key=|row| (row.record.id, row.record.status, row.selected, row.pending)
                        children={
                            let on_toggle_row = on_toggle_row.clone();
                            let on_status = on_status.clone();
                            move |row| {
                                view! {
                                    <ProcessRow
                                        row=row
                                        on_toggle_row=on_toggle_row.clone()
                                        on_status=on_status.clone()
                                    />
                                }
                            }
                        }
                    />
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn ProcessRow<FT, FC>(row: RowView, on_toggle_row: FT, on_status: FC) -> impl IntoView
where
    FT: Fn(i64) + 'static + Clone + Send + Sync,
    FC: Fn(i64, ProcessStatus) + 'static + Clone + Send + Sync,
{
    let id = row.record.id;
    let current = row.record.status;
    let pending = row.pending;

    view! {
        <tr class:selected=row.selected class:pending=pending>
            <td class="col-check">
                <input
                    type="checkbox"
                    prop:checked=row.selected
                    on:change=move |_| on_toggle_row(id)
                />
            </td>
            <td class="numeric">{id}</td>
            <td>{row.record.numero_processo}</td>
            <td>{row.record.nome_reu}</td>
            <td>{row.record.cpf_cnpj_reu}</td>
            <td class="numeric">{row.record.valor_causa}</td>
            <td class="status-cell">
                <div class="status-group">
                    {ProcessStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let on_status = on_status.clone();
                            view! {
                                <button
                                    class=format!("status-btn status-{}", status.as_str().to_lowercase())
                                    class:active=current == status
                                    on:click=move |_| on_status(id, status)
                                >
                                    {status.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    {pending.then(|| view! { <span class="spinner spinner-small" title="Salvando..." /> })}
                </div>
            </td>
        </tr>
    }
}
