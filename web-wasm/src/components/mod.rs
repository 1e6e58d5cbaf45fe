pub mod assign_dialog;
pub mod header;
pub mod load_status;
pub mod pagination_bar;
pub mod process_table;
pub mod search_bar;
pub mod selection_toolbar;
pub mod settings_panel;
pub mod snackbar;
pub mod value_tabs;

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::assign_dialog::AssignDialog;
    use super::process_table::{ProcessTable, RowView};
    use super::selection_toolbar::SelectionToolbar;
    use leptos::prelude::*;
    use processos_common::{
        AssignState, Folder, HeaderCheck, ProcessRecord, ProcessStatus, SortKey, SortSpec,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let div = document.create_element("div").expect("div");
        document
            .body()
            .expect("body")
            .append_child(&div)
            .expect("append");
        div.unchecked_into()
    }

    fn folder(id: i64, name: &str) -> Folder {
        Folder {
            id,
            name: name.to_string(),
            owner_id: None,
            processos: Vec::new(),
        }
    }

    #[wasm_bindgen_test]
    fn wasm_toolbar_is_active_with_selection() {
        let parent = container();
        let _handle = leptos::mount::mount_to(parent.clone(), || {
            view! {
                <SelectionToolbar
                    count=Signal::derive(|| 2usize)
                    on_assign=|_: ()| {}
                    on_clear=|_: ()| {}
                />
            }
        });

        let bar = parent
            .query_selector(".selection-toolbar")
            .expect("query")
            .expect("toolbar");
        assert!(bar.class_list().contains("active"));
        assert!(bar.text_content().unwrap_or_default().contains("2 selecionado(s)"));
    }

    #[wasm_bindgen_test]
    fn wasm_assign_dialog_lists_folders_when_open() {
        let parent = container();
        let _handle = leptos::mount::mount_to(parent.clone(), || {
            view! {
                <AssignDialog
                    state=Signal::derive(|| AssignState::Open)
                    folders=Signal::derive(|| vec![folder(1, "Casos Urgentes"), folder(2, "Arquivo")])
                    selected=Signal::derive(|| 3usize)
                    on_choose=|_: i64| {}
                    on_cancel=|_: ()| {}
                />
            }
        });

        let list = parent
            .query_selector(".folder-list")
            .expect("query")
            .expect("folder list");
        assert_eq!(list.child_element_count(), 2);
        assert!(list.text_content().unwrap_or_default().contains("Casos Urgentes"));
    }

    #[wasm_bindgen_test]
    fn wasm_assign_dialog_hidden_when_closed() {
        let parent = container();
        let _handle = leptos::mount::mount_to(parent.clone(), || {
            view! {
                <AssignDialog
                    state=Signal::derive(|| AssignState::Closed)
                    folders=Signal::derive(Vec::new)
                    selected=Signal::derive(|| 0usize)
                    on_choose=|_: i64| {}
                    on_cancel=|_: ()| {}
                />
            }
        });

        assert!(parent.query_selector(".modal").expect("query").is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_table_shows_id_column() {
        let row = RowView {
            record: ProcessRecord {
                id: 42,
                numero_processo: "0000042-45.2023.8.26.0100".to_string(),
                nome_reu: "Maria Silva".to_string(),
                cpf_cnpj_reu: String::new(),
                valor_causa: "150.000,00".to_string(),
                status: ProcessStatus::Pendente,
            },
            selected: false,
            pending: false,
        };
        let parent = container();
        let _handle = leptos::mount::mount_to(parent.clone(), move || {
            let rows = vec![row.clone()];
            view! {
                <ProcessTable
                    rows=Signal::derive(move || rows.clone())
                    sort=Signal::derive(SortSpec::default)
                    header_check=Signal::derive(|| HeaderCheck::Unchecked)
                    on_sort=|_: SortKey| {}
                    on_toggle_row=|_: i64| {}
                    on_toggle_all=|_: bool| {}
                    on_status=|_: i64, _: ProcessStatus| {}
                />
            }
        });

        let header = parent
            .query_selector("thead tr")
            .expect("query")
            .expect("header row");
        assert_eq!(header.child_element_count(), 7);
        let first = parent
            .query_selector("thead th.sortable")
            .expect("query")
            .expect("first column");
        assert!(first.text_content().unwrap_or_default().starts_with("ID"));
        let body = parent.query_selector("tbody").expect("query").expect("body");
        assert!(body.text_content().unwrap_or_default().contains("42"));
    }
}
