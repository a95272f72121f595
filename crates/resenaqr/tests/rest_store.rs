use std::collections::VecDeque;
use std::sync::Arc;

use http::{Method, Response as HttpResponse, StatusCode};
use resenaqr::store::{RestLeadStore, StoreError};
use resenaqr::{HttpClient, Lead, LeadStore, TransportError};
use tokio::sync::Mutex;
use url::Url;

#[derive(Clone, Default)]
struct MockClient {
    // Queue of HTTP responses to pop for each send_http call
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    // Capture requests for assertions
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    async fn push(&self, resp: HttpResponse<Vec<u8>>) {
        self.queue.lock().await.push_back(resp);
    }
    async fn take_log(&self) -> Vec<http::Request<Vec<u8>>> {
        let mut log = self.log.lock().await;
        let out = std::mem::take(&mut *log);
        out
    }
}

impl HttpClient for MockClient {
    type Error = TransportError;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<Output = Result<http::Response<Vec<u8>>, Self::Error>> + Send
    {
        let log = self.log.clone();
        let queue = self.queue.clone();
        async move {
            log.lock().await.push(request);
            Ok(queue.lock().await.pop_front().expect("no queued response"))
        }
    }
}

fn store_with(client: MockClient) -> RestLeadStore<MockClient> {
    RestLeadStore::new()
        .client(client)
        .base_url(Url::parse("https://xyz.supabase.co").unwrap())
        .api_key("anon-key")
        .build()
}

fn lead() -> Lead {
    Lead::new()
        .phone("521234567890")
        .review_url("https://g.page/tu-negocio")
        .build()
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_posts_one_json_record() {
    let client = MockClient::default();
    client
        .push(
            HttpResponse::builder()
                .status(StatusCode::CREATED)
                .body(Vec::new())
                .unwrap(),
        )
        .await;

    let store = store_with(client.clone());
    store.insert(&lead()).await.expect("insert ok");

    let log = client.take_log().await;
    assert_eq!(log.len(), 1, "exactly one write, no retries");
    let req = &log[0];
    assert_eq!(req.method(), Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "https://xyz.supabase.co/rest/v1/qr_leads"
    );
    assert_eq!(
        req.headers().get("apikey").unwrap().to_str().unwrap(),
        "anon-key"
    );
    assert_eq!(
        req.headers()
            .get(http::header::AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap(),
        "Bearer anon-key"
    );
    assert_eq!(
        req.headers().get("Prefer").unwrap().to_str().unwrap(),
        "return=minimal"
    );
    let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "phone": "521234567890",
            "review_url": "https://g.page/tu-negocio"
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn error_body_message_is_surfaced_verbatim() {
    let client = MockClient::default();
    client
        .push(
            HttpResponse::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(
                    serde_json::to_vec(&serde_json::json!({
                        "message": "Invalid API key",
                        "hint": "Double check your Supabase `anon` or `service_role` API key."
                    }))
                    .unwrap(),
                )
                .unwrap(),
        )
        .await;

    let store = store_with(client);
    let err = store.insert(&lead()).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Http {
            status: StatusCode::UNAUTHORIZED,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Invalid API key");
}

#[tokio::test(flavor = "multi_thread")]
async fn undecodable_error_body_falls_back_to_the_status() {
    let client = MockClient::default();
    client
        .push(
            HttpResponse::builder()
                .status(StatusCode::SERVICE_UNAVAILABLE)
                .body(b"<html>upstream unhappy</html>".to_vec())
                .unwrap(),
        )
        .await;

    let store = store_with(client);
    let err = store.insert(&lead()).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503 Service Unavailable");
}

#[tokio::test(flavor = "multi_thread")]
async fn custom_table_lands_in_the_path() {
    let client = MockClient::default();
    client
        .push(
            HttpResponse::builder()
                .status(StatusCode::CREATED)
                .body(Vec::new())
                .unwrap(),
        )
        .await;

    let store = RestLeadStore::new()
        .client(client.clone())
        .base_url(Url::parse("https://xyz.supabase.co").unwrap())
        .api_key("anon-key")
        .table("leads_staging")
        .build();
    store.insert(&lead()).await.expect("insert ok");

    let log = client.take_log().await;
    assert_eq!(
        log[0].uri().to_string(),
        "https://xyz.supabase.co/rest/v1/leads_staging"
    );
}
