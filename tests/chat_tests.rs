mod common;

use common::{MockModel, proxy_event, response_body};
use folio::api::ChatResponder;
use folio::api::chat::GENERIC_FAILURE;
use folio::core::persona::Persona;
use serde_json::json;

#[tokio::test]
async fn test_question_is_answered_with_persona_prompt() {
    let persona = Persona::builtin();
    let responder = ChatResponder::new(MockModel::replying("Jestem asystentem AI."), persona.clone());

    let resp = responder
        .respond(&proxy_event(r#"{"message": "Kim jesteś?"}"#))
        .await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(response_body(&resp), json!({ "response": "Jestem asystentem AI." }));

    let model = responder.model().calls();
    assert_eq!(model.len(), 1);
    assert_eq!(
        model[0].prompt,
        format!("{}\n\nQuestion: Kim jesteś?", persona.text())
    );
    assert_eq!(model[0].max_tokens, 512);
    assert!((model[0].temperature - 0.5).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_response_headers_allow_cross_origin_posts() {
    let responder = ChatResponder::new(MockModel::replying("ok"), Persona::new("persona"));
    let resp = responder.respond(&proxy_event(r#"{"message":"hi"}"#)).await;

    let headers = &resp["headers"];
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(headers["Access-Control-Allow-Methods"], "POST,OPTIONS");
    assert_eq!(headers["Content-Type"], "application/json");
    let allowed = headers["Access-Control-Allow-Headers"].as_str().unwrap();
    for header in ["Content-Type", "Authorization", "X-Amz-Date"] {
        assert!(allowed.contains(header), "missing {header}");
    }
}

#[tokio::test]
async fn test_invalid_requests_return_500_without_calling_model() {
    let bodies = [
        "not json",
        r#"{"question": "Kim jesteś?"}"#,
        r#"{"message": "   "}"#,
        r#"{"message": 42}"#,
    ];

    for body in bodies {
        let responder = ChatResponder::new(MockModel::replying("unused"), Persona::new("p"));
        let resp = responder.respond(&proxy_event(body)).await;

        assert_eq!(resp["statusCode"], 500, "body: {body}");
        let parsed = response_body(&resp);
        assert!(parsed.get("error").is_some(), "body: {body}");
        assert!(parsed.get("response").is_none(), "body: {body}");
        assert!(responder.model().calls().is_empty());
    }
}

#[tokio::test]
async fn test_missing_body_returns_500() {
    let responder = ChatResponder::new(MockModel::replying("unused"), Persona::new("p"));
    let resp = responder.respond(&json!({ "httpMethod": "POST" })).await;
    assert_eq!(resp["statusCode"], 500);
}

#[tokio::test]
async fn test_model_failure_is_redacted_by_default() {
    let responder = ChatResponder::new(MockModel::failing("ThrottlingException"), Persona::new("p"));
    let resp = responder.respond(&proxy_event(r#"{"message":"hi"}"#)).await;

    assert_eq!(resp["statusCode"], 500);
    assert_eq!(response_body(&resp), json!({ "error": GENERIC_FAILURE }));
}

#[tokio::test]
async fn test_model_failure_detail_exposed_when_enabled() {
    let responder = ChatResponder::new(MockModel::failing("ThrottlingException"), Persona::new("p"))
        .with_error_details(true);
    let resp = responder.respond(&proxy_event(r#"{"message":"hi"}"#)).await;

    assert_eq!(resp["statusCode"], 500);
    let error = response_body(&resp)["error"].as_str().unwrap().to_string();
    assert!(error.contains("ThrottlingException"));
}

#[tokio::test]
async fn test_empty_completion_is_an_error() {
    let responder = ChatResponder::new(MockModel::replying("  \n"), Persona::new("p"));
    let resp = responder.respond(&proxy_event(r#"{"message":"hi"}"#)).await;
    assert_eq!(resp["statusCode"], 500);
}

#[tokio::test]
async fn test_base64_encoded_body_is_accepted() {
    let responder = ChatResponder::new(MockModel::replying("hello"), Persona::new("p"));
    // {"message":"hi"}
    let event = json!({
        "httpMethod": "POST",
        "body": "eyJtZXNzYWdlIjoiaGkifQ==",
        "isBase64Encoded": true
    });
    let resp = responder.respond(&event).await;
    assert_eq!(resp["statusCode"], 200);
}

#[tokio::test]
async fn test_preflight_skips_model() {
    let responder = ChatResponder::new(MockModel::replying("unused"), Persona::new("p"));
    let resp = responder.respond(&json!({ "httpMethod": "OPTIONS" })).await;

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["headers"]["Access-Control-Allow-Origin"], "*");
    assert!(responder.model().calls().is_empty());
}

#[tokio::test]
async fn test_lambda_entrypoint_wraps_answer() {
    let responder = ChatResponder::new(MockModel::replying("Cześć!"), Persona::new("p"));
    let event = lambda_runtime::LambdaEvent::new(
        proxy_event(r#"{"message":"hi"}"#),
        lambda_runtime::Context::default(),
    );

    let resp = responder.handle(event).await.unwrap();

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(response_body(&resp), json!({ "response": "Cześć!" }));
    assert_eq!(responder.model().calls().len(), 1);
}
