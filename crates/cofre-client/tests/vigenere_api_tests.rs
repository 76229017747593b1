//! Wire-protocol tests for `VigenereClient` against a mock HTTP server

use cofre_client::{ClientError, VigenereClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> VigenereClient {
    VigenereClient::with_endpoint(&server.uri()).unwrap()
}

#[tokio::test]
async fn encrypt_posts_json_and_reads_texto_cifrado() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cifrar"))
        .and(body_json(json!({"texto": "hola", "clave": "sol"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"texto_cifrado": "zcza"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let out = client.encrypt("hola", "sol").await.unwrap();
    assert_eq!(out, "zcza");
}

#[tokio::test]
async fn decrypt_posts_json_and_reads_texto_descifrado() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/descifrar"))
        .and(body_json(json!({"texto": "zcza", "clave": "sol"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"texto_descifrado": "hola"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let out = client.decrypt("zcza", "sol").await.unwrap();
    assert_eq!(out, "hola");
}

#[tokio::test]
async fn non_200_with_error_body_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cifrar"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "clave vacía"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.encrypt("hola", "").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "clave vacía");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cifrar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.encrypt("hola", "sol").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn non_200_with_unstructured_body_still_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/descifrar"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.decrypt("x", "y").await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Api error, got {other:?}"),
    }
}
