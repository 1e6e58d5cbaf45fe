//! Session tests against the in-memory API
//!
//! Exercises the fetch, list, status and assignment flows end to end

use processos_common::{
    NoticeLevel, ProcessRecord, ProcessStatus, SortDirection, SortKey, SortSpec, ValueTab,
    FETCH_ALL_LIMIT,
};
use processos_dashboard::error::DashboardError;
use processos_dashboard::mock::{MockApi, MockCall};
use processos_dashboard::render;
use processos_dashboard::session::{Session, ViewOptions};

fn record(id: i64, nome: &str, valor: &str) -> ProcessRecord {
    ProcessRecord {
        id,
        numero_processo: format!("{:07}-45.2023.8.26.0100", id),
        nome_reu: nome.to_string(),
        cpf_cnpj_reu: String::new(),
        valor_causa: valor.to_string(),
        status: ProcessStatus::Pendente,
    }
}

fn sample_api() -> MockApi {
    MockApi::new()
        .with_processo(record(1, "Maria Silva", "150.000,00"))
        .with_processo(record(2, "João Souza", "350.000,00"))
        .with_processo(record(3, "Ana Silva", "1.200.000,00"))
        .with_processo(record(4, "Carlos Lima", "900,00"))
        .with_folder(10, "Casos Urgentes")
}

async fn loaded(api: MockApi) -> Session<MockApi> {
    let mut session = Session::new(api);
    session.refresh().await.expect("refresh");
    session
}

fn ids(session: &Session<MockApi>) -> Vec<i64> {
    session.controller().visible_ids()
}

// =============================================
// Fetch
// =============================================

#[tokio::test]
async fn test_refresh_fetches_all_and_folders() {
    let session = loaded(sample_api()).await;

    assert_eq!(session.controller().records().len(), 4);
    assert_eq!(session.controller().folders().len(), 1);
    let calls = session.api().calls();
    assert!(calls.contains(&MockCall::ListProcessos { skip: 0, limit: FETCH_ALL_LIMIT }));
    assert!(calls.contains(&MockCall::ListFolders));
}

#[tokio::test]
async fn test_refresh_failure_hides_table() {
    let mut session = Session::new(sample_api().with_list_error(500, "boom"));
    let err = session.refresh().await.unwrap_err();

    assert!(matches!(err, DashboardError::FetchFailed(_)));
    assert!(!session.controller().table_visible());

    // the next attempt succeeds
    session.refresh().await.expect("retry");
    assert!(session.controller().table_visible());
}

// =============================================
// Listing
// =============================================

#[tokio::test]
async fn test_tabs_filter_by_value() {
    let mut session = loaded(sample_api()).await;

    let options = ViewOptions { tab: ValueTab::From100kTo300k, ..Default::default() };
    session.apply_view(&options).expect("view");
    assert_eq!(ids(&session), vec![1]);

    let options = ViewOptions { tab: ValueTab::Above500k, ..Default::default() };
    session.apply_view(&options).expect("view");
    assert_eq!(ids(&session), vec![3]);

    let options = ViewOptions { tab: ValueTab::All, ..Default::default() };
    session.apply_view(&options).expect("view");
    assert_eq!(ids(&session), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_search_and_sort() {
    let mut session = loaded(sample_api()).await;

    let options = ViewOptions {
        search: Some("silva".to_string()),
        sort: Some(SortSpec::new(SortKey::ValorCausa, SortDirection::Descending)),
        ..Default::default()
    };
    session.apply_view(&options).expect("view");
    assert_eq!(ids(&session), vec![3, 1]);
}

#[tokio::test]
async fn test_sort_by_parsed_value() {
    let mut session = loaded(sample_api()).await;

    let options = ViewOptions {
        sort: Some(SortSpec::new(SortKey::ValorCausa, SortDirection::Ascending)),
        ..Default::default()
    };
    session.apply_view(&options).expect("view");
    assert_eq!(ids(&session), vec![4, 1, 2, 3]);
}

#[tokio::test]
async fn test_page_out_of_range() {
    let mut session = loaded(sample_api()).await;

    let options = ViewOptions { page: 1, rows_per_page: Some(2), ..Default::default() };
    session.apply_view(&options).expect("view");
    assert_eq!(ids(&session), vec![3, 4]);

    let options = ViewOptions { page: 5, rows_per_page: Some(2), ..Default::default() };
    let err = session.apply_view(&options).unwrap_err();
    assert!(matches!(err, DashboardError::PageOutOfRange { page: 5, pages: 2 }));
}

#[tokio::test]
async fn test_render_table_footer() {
    let mut session = loaded(sample_api()).await;
    let options = ViewOptions { rows_per_page: Some(2), ..Default::default() };
    session.apply_view(&options).expect("view");

    let text = render::render_table(session.controller());
    assert!(text.contains("Maria Silva"));
    assert!(!text.contains("Ana Silva"));
    assert!(text.contains("1–2 de 4"));
    assert!(text.contains("página 1 de 2"));

    let json = render::render_json(session.controller()).expect("json");
    let parsed: Vec<ProcessRecord> = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed.len(), 2);
}

// =============================================
// Status
// =============================================

#[tokio::test]
async fn test_status_change_confirmed() {
    let mut session = loaded(sample_api()).await;

    let status = session.set_status(2, ProcessStatus::Aprovado).await.expect("status");
    assert_eq!(status, ProcessStatus::Aprovado);
    assert_eq!(session.api().status_of(2), Some(ProcessStatus::Aprovado));
    assert!(!session.controller().is_status_pending(2));
}

#[tokio::test]
async fn test_status_same_value_resets_to_pendente() {
    let mut session = loaded(sample_api()).await;

    session.set_status(1, ProcessStatus::Rejeitado).await.expect("first");
    let status = session.set_status(1, ProcessStatus::Rejeitado).await.expect("second");
    assert_eq!(status, ProcessStatus::Pendente);
    assert_eq!(session.api().status_of(1), Some(ProcessStatus::Pendente));
}

#[tokio::test]
async fn test_status_failure_rolls_back() {
    let mut session = loaded(sample_api().with_status_error(500, "indisponível")).await;

    let err = session.set_status(3, ProcessStatus::Aprovado).await.unwrap_err();
    assert!(matches!(err, DashboardError::StatusRejected { id: 3, .. }));
    let record = session.controller().record(3).expect("record");
    assert_eq!(record.status, ProcessStatus::Pendente);

    let notices = session.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
}

#[tokio::test]
async fn test_status_unknown_process() {
    let mut session = loaded(sample_api()).await;
    let err = session.set_status(99, ProcessStatus::Aprovado).await.unwrap_err();
    assert!(matches!(err, DashboardError::ProcessNotFound(99)));
}

// =============================================
// Assignment
// =============================================

#[tokio::test]
async fn test_assign_single_batch_call() {
    let mut session = loaded(sample_api()).await;

    let count = session.assign(10, &[3, 1]).await.expect("assign");
    assert_eq!(count, 2);
    assert_eq!(session.api().folder_members(10), vec![1, 3]);

    let batch_calls: Vec<MockCall> = session
        .api()
        .calls()
        .into_iter()
        .filter(|c| matches!(c, MockCall::AddProcessos { .. }))
        .collect();
    assert_eq!(
        batch_calls,
        vec![MockCall::AddProcessos { folder_id: 10, processo_ids: vec![1, 3] }]
    );

    assert_eq!(session.controller().selected_count(), 0);
    let notices = session.drain_notices();
    assert_eq!(notices[0].level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_assign_failure_keeps_selection() {
    let mut session = loaded(sample_api().with_assign_error(404, "Pasta não encontrada")).await;

    let err = session.assign(10, &[2]).await.unwrap_err();
    match err {
        DashboardError::AssignFailed(message) => assert_eq!(message, "Pasta não encontrada"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(session.controller().selection().ids(), vec![2]);
}

#[tokio::test]
async fn test_assign_empty_selection_is_rejected() {
    let mut session = loaded(sample_api()).await;

    let err = session.assign(10, &[]).await.unwrap_err();
    assert!(matches!(err, DashboardError::Core(processos_common::Error::Validation(_))));
    assert!(!session
        .api()
        .calls()
        .iter()
        .any(|c| matches!(c, MockCall::AddProcessos { .. })));
}

#[tokio::test]
async fn test_assign_unknown_folder_or_process() {
    let mut session = loaded(sample_api()).await;

    let err = session.assign(99, &[1]).await.unwrap_err();
    assert!(matches!(err, DashboardError::FolderNotFound(99)));

    let err = session.assign(10, &[1, 42]).await.unwrap_err();
    assert!(matches!(err, DashboardError::ProcessNotFound(42)));
}
