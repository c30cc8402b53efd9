use pavilion_engine::{load_projects, FailureKind, FetchSettings, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_export(body: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_string(), "text/csv"))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn load_parses_the_fetched_export() {
    let server = serve_export("title,status\nA,Ongoing\nB,Completed", 200).await;
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let records = load_projects(&fetcher, &format!("{}/export", server.uri()))
        .await
        .expect("load ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field("title"), Some("A"));
    assert_eq!(records[1].field("status"), Some("Completed"));
}

#[tokio::test]
async fn an_empty_body_is_an_empty_sheet() {
    let server = serve_export("", 200).await;
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let err = load_projects(&fetcher, &format!("{}/export", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::EmptySheet);
}

#[tokio::test]
async fn a_header_with_no_data_rows_is_a_valid_empty_listing() {
    let server = serve_export("title,status\n", 200).await;
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let records = load_projects(&fetcher, &format!("{}/export", server.uri()))
        .await
        .expect("load ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn status_failures_propagate_unchanged() {
    let server = serve_export("irrelevant", 500).await;
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let err = load_projects(&fetcher, &format!("{}/export", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}
