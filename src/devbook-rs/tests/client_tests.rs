use devbook_rs::{Client, ClientConfig, ClientError, EntriesOptions, Entry};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "/v1/extension/ext-1";

fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::new("ext-1", "secret").with_base_url(server.uri());
    Client::from_config(config).unwrap()
}

// ── search ──────────────────────────────────────────────────────

#[tokio::test]
async fn search_posts_query_with_default_paging() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/entry/query")))
        .and(header("Authorization", "ApiKey secret"))
        .and(query_param("pageSize", "10"))
        .and(query_param("pageNumber", "0"))
        .and(body_json(json!({"indexes": ["docs"], "query": "foo"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "1", "title": "t", "body": "b"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).search("docs", "foo").await.unwrap();
    assert_eq!(
        results,
        vec![Entry {
            id: Some("1".to_string()),
            title: "t".to_string(),
            body: "b".to_string(),
        }]
    );
}

#[tokio::test]
async fn search_sends_every_index_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/entry/query")))
        .and(body_json(json!({"indexes": ["a", "b"], "query": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let names = vec!["a".to_string(), "b".to_string()];
    let results = client_for(&server).search(names, "x").await.unwrap();
    assert!(results.is_empty());
}

// ── index / delete ──────────────────────────────────────────────

#[tokio::test]
async fn index_puts_entries_into_named_index() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{PREFIX}/entry")))
        .and(header("Authorization", "ApiKey secret"))
        .and(query_param("index", "docs"))
        .and(body_json(json!({"index": "docs", "entries": [{"title": "t", "body": "b"}]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .index("docs", &[Entry::new("t", "b")])
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_removes_index() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PREFIX}/entry")))
        .and(query_param("index", "docs"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete("docs").await.unwrap();
}

// ── reads ───────────────────────────────────────────────────────

#[tokio::test]
async fn entries_returns_page_and_forwards_cursor() {
    let server = MockServer::start().await;
    let first_page = json!({
        "entries": [{"id": "1", "title": "t", "body": "b"}, {"id": "2", "title": "u", "body": "c"}],
        "pageID": "abc"
    });
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/entry")))
        .and(query_param("index", "docs"))
        .and(query_param("pageSize", "2"))
        .and(query_param("pageID", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entries": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/entry")))
        .and(query_param("index", "docs"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first_page.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .entries_with_options(
            "docs",
            EntriesOptions {
                page_size: 2,
                page_id: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(serde_json::to_value(&page).unwrap(), first_page);

    let next = client
        .entries_with_options(
            "docs",
            EntriesOptions {
                page_size: 2,
                page_id: page.page_id,
            },
        )
        .await
        .unwrap();
    assert!(next.entries.is_empty());
    assert!(!next.has_more());
}

#[tokio::test]
async fn info_reads_extension_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PREFIX))
        .and(header("Authorization", "ApiKey secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"extensionID": "ext-1", "indexes": ["docs", "faq"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let info = client_for(&server).info().await.unwrap();
    assert_eq!(info.extension_id, "ext-1");
    assert_eq!(info.indexes, vec!["docs".to_string(), "faq".to_string()]);
}

// ── errors ──────────────────────────────────────────────────────

#[tokio::test]
async fn structured_error_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/entry")))
        .and(query_param("entryID", "missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": {"message": "not found"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .entry("docs", "missing")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not found");
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unstructured_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    match client_for(&server).info().await.unwrap_err() {
        ClientError::UnexpectedResponse { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Reserve a port, then free it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new("ext-1", "secret").with_base_url(format!("http://{addr}"));
    let client = Client::from_config(config).unwrap();

    let err = client.search("docs", "foo").await.unwrap_err();
    assert!(err.is_transport());

    let ClientError::Transport(inner) = err else {
        panic!("expected transport error");
    };
    let reqwest_err = inner.downcast_ref::<reqwest::Error>().unwrap();
    assert!(reqwest_err.is_connect());
}

#[tokio::test]
async fn extension_id_cannot_escape_its_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"extensionID": "other", "indexes": []})),
        )
        .expect(0)
        .mount(&server)
        .await;

    for extension_id in ["mine/../other", "ext?x=1", "ext#x"] {
        let config = ClientConfig::new(extension_id, "secret").with_base_url(server.uri());
        let err = Client::from_config(config).err().unwrap();
        assert!(matches!(err, ClientError::Config(_)), "{extension_id}: {err:?}");
    }
}

#[tokio::test]
async fn timeout_comes_from_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"extensionID": "ext-1", "indexes": []}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new("ext-1", "secret")
        .with_base_url(server.uri())
        .with_timeout_secs(1);
    let err = Client::from_config(config)
        .unwrap()
        .info()
        .await
        .unwrap_err();

    let ClientError::Transport(inner) = err else {
        panic!("expected transport error");
    };
    assert!(inner.downcast_ref::<reqwest::Error>().unwrap().is_timeout());
}
