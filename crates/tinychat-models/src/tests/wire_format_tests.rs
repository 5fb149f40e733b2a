use crate::{ChatRequest, ChatResponse, ErrorBody, HealthResponse};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn request_without_conversation_id_omits_the_field() {
    let request = ChatRequest {
        message: "hello".to_string(),
        conversation_id: None,
        max_length: 150,
        temperature: 0.7,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("conversation_id").is_none());
    assert_eq!(value["message"], json!("hello"));
    assert_eq!(value["max_length"], json!(150));
    assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[test]
fn request_with_conversation_id_includes_it_verbatim() {
    let request = ChatRequest {
        message: "again".to_string(),
        conversation_id: Some("abc".to_string()),
        max_length: 200,
        temperature: 0.5,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["conversation_id"], "abc");
    assert_eq!(value["message"], "again");
}

#[test]
fn response_parses_minimal_body() {
    let body = r#"{"response": "hi", "conversation_id": "abc"}"#;
    let response: ChatResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.response, "hi");
    assert_eq!(response.conversation_id, "abc");
    assert!(response.timestamp.is_none());
    assert!(response.performance.is_none());
}

#[test]
fn response_parses_server_extras() {
    let body = r#"{
        "response": "hi",
        "conversation_id": "session_123",
        "timestamp": "2024-01-01T00:00:00",
        "performance": {"time_seconds": 1.25, "memory_usage": 512.0}
    }"#;
    let response: ChatResponse = serde_json::from_str(body).unwrap();

    let performance = response.performance.unwrap();
    assert_eq!(performance.time_seconds, Some(1.25));
    assert_eq!(performance.memory_usage, Some(512.0));
}

#[test]
fn error_body_requires_detail() {
    let parsed: ErrorBody = serde_json::from_str(r#"{"detail": "rate limited"}"#).unwrap();
    assert_eq!(parsed.detail, "rate limited");

    assert!(serde_json::from_str::<ErrorBody>("{}").is_err());
}

#[test]
fn health_response_tolerates_any_shape() {
    let full: HealthResponse = serde_json::from_str(
        r#"{"status": "OK", "model_loaded": true, "device": "cpu", "conversations": 3}"#,
    )
    .unwrap();
    assert_eq!(full.status.as_deref(), Some("OK"));
    assert_eq!(full.model_loaded, Some(true));
    assert_eq!(full.conversations, Some(3));

    let empty: HealthResponse = serde_json::from_str("{}").unwrap();
    assert!(empty.status.is_none());
    assert!(empty.device.is_none());
}
