//! Integration tests for [`twilio_lookup::TwilioLookupClient`] against a mockito server.
//!
//! Covers: request shape (path, `fields` query, Basic auth), 2xx decoding, 404 as NotFound,
//! other statuses as `Status` with a truncated body, undecodable bodies, and transport failure.

use std::time::Duration;

use mockito::Matcher;
use tokio::net::TcpListener;
use twilio_lookup::{
    normalize, LookupConfig, LookupError, LookupResult, LookupService, TwilioLookupClient,
    DEFAULT_FIELDS,
};

const TEST_SID: &str = "ACtest0000000000000000000000000000";
const TEST_TOKEN: &str = "auth-token-secret";
/// base64("ACtest0000000000000000000000000000:auth-token-secret")
const TEST_BASIC_AUTH: &str =
    "Basic QUN0ZXN0MDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDphdXRoLXRva2VuLXNlY3JldA==";

fn client_for(server: &mockito::ServerGuard) -> TwilioLookupClient {
    let config = LookupConfig::new(TEST_SID, TEST_TOKEN)
        .with_base_url(format!("{}/v2/PhoneNumbers", server.url()));
    TwilioLookupClient::new(config).expect("client must build")
}

fn lookup_path() -> Matcher {
    Matcher::Regex(r"^/v2/PhoneNumbers/\+14155552671".to_string())
}

#[tokio::test]
async fn test_lookup_success_sends_auth_and_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", lookup_path())
        .match_query(Matcher::UrlEncoded(
            "fields".to_string(),
            DEFAULT_FIELDS.to_string(),
        ))
        .match_header("authorization", TEST_BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "country_code": "US",
                "phone_number": "+14155552671",
                "caller_name": null,
                "carrier": {"name": "Verizon", "type": "mobile"},
                "line_type_intelligence": {"type": "mobile", "carrier_name": "Verizon Wireless"}
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let number = normalize("+14155552671").unwrap();
    let result = client_for(&server).lookup(&number).await.unwrap();

    mock.assert_async().await;
    let info = result.info().expect("2xx must produce Found");
    assert_eq!(info.country(), Some("US"));
    assert_eq!(info.carrier_name(), Some("Verizon"));
    assert_eq!(info.network_type(), Some("mobile"));
    assert_eq!(info.name(), None);
    assert_eq!(info.caller_type(), None);
}

#[tokio::test]
async fn test_lookup_404_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", lookup_path())
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"code": 20404, "message": "The requested resource was not found"}"#)
        .create_async()
        .await;

    let number = normalize("+14155552671").unwrap();
    let result = client_for(&server).lookup(&number).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result, LookupResult::NotFound);
    assert!(result.info().is_none());
}

#[tokio::test]
async fn test_lookup_error_status_truncates_body() {
    let mut server = mockito::Server::new_async().await;
    let long_body = format!(r#"{{"code": 20003, "message": "{}"}}"#, "a".repeat(400));
    let _mock = server
        .mock("GET", lookup_path())
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(long_body.clone())
        .create_async()
        .await;

    let number = normalize("+14155552671").unwrap();
    let err = client_for(&server).lookup(&number).await.unwrap_err();

    match err {
        LookupError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body.chars().count(), 200);
            assert!(long_body.starts_with(&body));
        }
        other => panic!("expected Status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_server_error_short_body_kept_whole() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", lookup_path())
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let number = normalize("+14155552671").unwrap();
    let err = client_for(&server).lookup(&number).await.unwrap_err();

    assert_eq!(
        err,
        LookupError::Status {
            status: 503,
            body: "Service Unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn test_lookup_invalid_json_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", lookup_path())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let number = normalize("+14155552671").unwrap();
    let err = client_for(&server).lookup(&number).await.unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_lookup_unreachable_is_transport_error() {
    // Nothing listens on port 1.
    let config =
        LookupConfig::new(TEST_SID, TEST_TOKEN).with_base_url("http://127.0.0.1:1/v2/PhoneNumbers");
    let client = TwilioLookupClient::new(config).unwrap();

    let number = normalize("+14155552671").unwrap();
    let err = client.lookup(&number).await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)), "got {:?}", err);
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_lookup_silent_server_times_out() {
    // Accepts connections and never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accept = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = LookupConfig::new(TEST_SID, TEST_TOKEN)
        .with_base_url(format!("http://{}/v2/PhoneNumbers", addr))
        .with_timeout(Duration::from_secs(1));
    let client = TwilioLookupClient::new(config).unwrap();

    let number = normalize("+14155552671").unwrap();
    let err = client.lookup(&number).await.unwrap_err();

    assert_eq!(err, LookupError::Timeout { secs: 1 });
    assert!(err.is_timeout());
    accept.abort();
}
