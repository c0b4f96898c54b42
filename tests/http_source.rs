use dictpage::codes::{FilterCodes, FilterKind};
use dictpage::query::{Filters, QueryParams};
use dictpage::request::{HttpPageSource, PageSource};
use dictpage::Error;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params(start: u32) -> QueryParams {
    let filters = Filters {
        pos: FilterCodes::parse(FilterKind::Pos, "1,5").unwrap(),
        ..Filters::default()
    };
    let mut params = QueryParams::new("KEY", "가", 100, filters);
    params.start = start;
    params
}

fn source(server: &MockServer) -> HttpPageSource {
    HttpPageSource::new(format!("{}/api/search", server.uri())).unwrap()
}

#[tokio::test]
async fn sends_every_query_pair_and_returns_body_untouched() {
    let server = MockServer::start().await;
    let body = r#"{"channel":{"item":[{"word":"가"}]}}  "#;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("key", "KEY"))
        .and(query_param("q", "가"))
        .and(query_param("req_type", "json"))
        .and(query_param("start", "2"))
        .and(query_param("num", "100"))
        .and(query_param("method", "include"))
        .and(query_param("advanced", "y"))
        .and(query_param("pos", "1,5"))
        .and(query_param("region", "0"))
        .and(query_param("cat", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let got = source(&server).fetch_page(&params(2)).await.unwrap();

    assert_eq!(got, body);
}

#[tokio::test]
async fn server_error_is_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("start", "3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .expect(1)
        .mount(&server)
        .await;

    let err = source(&server).fetch_page(&params(3)).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { page: 3, status: 500 }));
    assert!(err.is_network());
}

#[tokio::test]
async fn not_found_is_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = source(&server).fetch_page(&params(1)).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { page: 1, status: 404 }));
}
