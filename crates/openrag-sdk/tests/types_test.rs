use openrag_sdk::{
    ChatResponse, Conversation, ConversationDetail, IngestResponse, SearchResponse,
    SettingsResponse, StreamEvent,
};

#[test]
fn test_content_event_wire_shape() {
    let event: StreamEvent =
        serde_json::from_str(r#"{"type":"content","delta":"Hello"}"#).unwrap();

    match event {
        StreamEvent::Content { delta } => assert_eq!(delta, "Hello"),
        other => panic!("expected Content, got {other:?}"),
    }
}

#[test]
fn test_sources_event_wire_shape() {
    let json = r#"{
        "type": "sources",
        "sources": [
            {"filename": "report.pdf", "text": "chunk text", "score": 0.92, "page": 3, "mimetype": "application/pdf"}
        ]
    }"#;
    let event: StreamEvent = serde_json::from_str(json).unwrap();

    match event {
        StreamEvent::Sources { sources } => {
            assert_eq!(sources.len(), 1);
            assert_eq!(sources[0].filename, "report.pdf");
            assert_eq!(sources[0].page, Some(3));
        }
        other => panic!("expected Sources, got {other:?}"),
    }
}

#[test]
fn test_done_event_without_usage() {
    let event: StreamEvent = serde_json::from_str(r#"{"type":"done","chat_id":"c1"}"#).unwrap();

    match event {
        StreamEvent::Done { chat_id, usage } => {
            assert_eq!(chat_id.as_deref(), Some("c1"));
            assert!(usage.is_none());
        }
        other => panic!("expected Done, got {other:?}"),
    }
}

#[test]
fn test_done_event_null_chat_id() {
    let event: StreamEvent = serde_json::from_str(r#"{"type":"done","chat_id":null}"#).unwrap();

    match event {
        StreamEvent::Done { chat_id, .. } => assert!(chat_id.is_none()),
        other => panic!("expected Done, got {other:?}"),
    }
}

#[test]
fn test_unrecognized_event_type_decodes_to_unknown() {
    let event: StreamEvent =
        serde_json::from_str(r#"{"type":"progress","stage":"retrieval"}"#).unwrap();
    assert!(matches!(event, StreamEvent::Unknown));
}

#[test]
fn test_event_serialization_round_trip() {
    let event = StreamEvent::Content {
        delta: "hi".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""type":"content""#));
}

#[test]
fn test_chat_response_tolerates_extra_fields() {
    let json = r#"{
        "response": "answer",
        "chat_id": "c1",
        "sources": [],
        "model": "gpt-4",
        "latency_ms": 1200
    }"#;
    let response: ChatResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.response, "answer");
    assert_eq!(response.chat_id.as_deref(), Some("c1"));
}

#[test]
fn test_chat_response_minimal() {
    let response: ChatResponse = serde_json::from_str(r#"{"response": "hi"}"#).unwrap();

    assert!(response.chat_id.is_none());
    assert!(response.sources.is_empty());
}

#[test]
fn test_conversation_defaults() {
    let conversation: Conversation = serde_json::from_str(r#"{"chat_id": "c1"}"#).unwrap();

    assert_eq!(conversation.title, "");
    assert_eq!(conversation.message_count, 0);
}

#[test]
fn test_conversation_detail_with_usage() {
    let json = r#"{
        "chat_id": "c1",
        "title": "RAG questions",
        "messages": [
            {"role": "user", "content": "hi", "timestamp": "2026-01-01T00:00:00Z"},
            {"role": "assistant", "content": "hello",
             "usage": {"input_tokens": 4, "output_tokens": 8, "total_tokens": 12}}
        ]
    }"#;
    let detail: ConversationDetail = serde_json::from_str(json).unwrap();

    assert_eq!(detail.messages.len(), 2);
    assert!(detail.messages[0].usage.is_none());
    assert_eq!(detail.messages[1].usage.as_ref().unwrap().total_tokens, 12);
}

#[test]
fn test_ingest_response() {
    let json = r#"{"success": true, "document_id": "d7", "filename": "a.pdf", "chunks": 10}"#;
    let response: IngestResponse = serde_json::from_str(json).unwrap();

    assert!(response.success);
    assert_eq!(response.chunks, 10);
}

#[test]
fn test_search_response() {
    let json = r#"{"results": [{"filename": "a.md", "text": "...", "score": 0.5}]}"#;
    let response: SearchResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.results.len(), 1);
    assert!(response.results[0].page.is_none());
}

#[test]
fn test_settings_response_partial() {
    let json = r#"{"agent": {"llm_model": "gpt-4o"}, "knowledge": {"chunk_size": 512}}"#;
    let settings: SettingsResponse = serde_json::from_str(json).unwrap();

    assert_eq!(settings.agent.llm_model.as_deref(), Some("gpt-4o"));
    assert_eq!(settings.knowledge.chunk_size, Some(512));
    assert!(settings.knowledge.ocr.is_none());
}
