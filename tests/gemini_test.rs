// Gemini client tests against a mock HTTP server

use mockito::{Matcher, Server};

use revu::errors::ReviewError;
use revu::providers::{GeminiClient, ReviewModel};

fn test_client(base_url: String) -> GeminiClient {
    GeminiClient::new("test-key".to_string(), "gemini-2.5-pro".to_string())
        .unwrap()
        .with_base_url(base_url)
}

#[tokio::test]
async fn test_generate_parses_candidate_text() {
    let mut server = Server::new_async().await;

    let body = serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": "### 1. Errors Found\n- none" }]
            },
            "finishReason": "STOP"
        }]
    });

    let mock = server
        .mock("POST", "/models/gemini-2.5-pro:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = test_client(server.url());
    let text = client.generate("review this").await.unwrap();

    assert_eq!(text, "### 1. Errors Found\n- none");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_sends_prompt_in_contents() {
    let mut server = Server::new_async().await;

    let body = serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "ok" }] },
            "finishReason": "STOP"
        }]
    });

    let mock = server
        .mock("POST", "/models/gemini-2.5-pro:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": "the full prompt" }]
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = test_client(server.url());
    client.generate("the full prompt").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_surfaces_http_error_as_upstream() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/models/gemini-2.5-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body(r#"{"error": {"message": "quota exceeded"}}"#)
        .create_async()
        .await;

    let client = test_client(server.url());
    let err = client.generate("review this").await.unwrap_err();

    match err {
        ReviewError::Upstream(detail) => assert!(detail.contains("429")),
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_rejects_empty_candidates() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/models/gemini-2.5-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let client = test_client(server.url());
    let err = client.generate("review this").await.unwrap_err();

    assert!(matches!(err, ReviewError::Upstream(_)));
}

#[tokio::test]
async fn test_generate_rejects_malformed_response() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/models/gemini-2.5-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let client = test_client(server.url());
    let err = client.generate("review this").await.unwrap_err();

    assert!(matches!(err, ReviewError::Upstream(_)));
}
