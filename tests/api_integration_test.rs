use processos_common::{RequestContext, FETCH_ALL_LIMIT};
use processos_dashboard::client::{HttpApi, ProcessApi};
use processos_dashboard::session::Session;

/// Runs against a live backend only when PROCESSOS_API_URL is set
#[tokio::test]
async fn live_api_listing_integration() {
    let base_url = match std::env::var("PROCESSOS_API_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("PROCESSOS_API_URL not set; skipping integration test");
            return;
        }
    };
    let token = std::env::var("PROCESSOS_API_TOKEN").ok();

    let api = HttpApi::new(RequestContext::new(base_url, token), 30).expect("client");

    let page = api
        .list_processos(0, FETCH_ALL_LIMIT)
        .await
        .expect("list processos");
    assert!(page.total_count >= page.data.len() as u64);

    let folders = api.list_folders().await.expect("list folders");

    let mut session = Session::new(api);
    let rows = session.refresh().await.expect("refresh");
    assert_eq!(rows, page.data.len());
    assert_eq!(session.controller().folders().len(), folders.len());
    assert!(session.controller().table_visible());
}
