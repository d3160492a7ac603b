//! HTTP integration tests for the essay coaching endpoints.
//!
//! Each test drives the full router with a scripted AI double:
//! 1. Build the app with a MockAI queued with provider responses
//! 2. Send a request through tower's oneshot
//! 3. Assert on status, response JSON, and the prompts the AI saw
//!
//! No network, no API key: the mock stands in for OpenAI so the tests
//! exercise routing, validation, normalization, and error mapping.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::kernel::{MockAI, ServerDeps};
use server_core::server::build_app;

fn app_with(ai: MockAI) -> (Router, Arc<MockAI>) {
    let ai = Arc::new(ai);
    let deps = Arc::new(ServerDeps::new(ai.clone()));
    (build_app(deps), ai)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builder must not fail");

    let response = app.oneshot(request).await.expect("handler should respond");
    let status = response.status();
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be collected")
        .to_bytes();
    let value: Value =
        serde_json::from_slice(body_bytes.as_ref()).expect("response body must be json");
    (status, value)
}

#[tokio::test]
async fn health_reports_healthy() {
    let (app, _ai) = app_with(MockAI::new());
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("request builder must not fail");

    let response = app.oneshot(request).await.expect("handler should respond");

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be collected")
        .to_bytes();
    let value: Value = serde_json::from_slice(body_bytes.as_ref()).expect("body must be json");
    assert_eq!(value["status"], json!("healthy"));
    assert_eq!(value["provider"], json!("ok"));
}

#[tokio::test]
async fn generate_sample_returns_formatted_essay() {
    let (app, ai) = app_with(MockAI::new().with_response(
        "**Essay:**\n\nTechnology has transformed the way students learn today. \
         Online lectures reach learners in every corner of the world. \
         Teachers now adapt their material to individual needs. \
         This shift brings real challenges alongside its benefits. \
         Students must learn discipline without classroom structure. \
         Still, the advantages outweigh the drawbacks by a wide margin.",
    ));

    let (status, value) = post_json(
        app,
        "/generate_sample",
        json!({"prompt": "Does technology improve education?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["sample"]["heading"], json!("Generated TOEFL Essay"));
    let paragraphs = value["sample"]["paragraphs"]
        .as_array()
        .expect("paragraphs must be an array");
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[0]
        .as_str()
        .unwrap()
        .starts_with("Technology has transformed"));
    assert!(ai.was_called_with("Does technology improve education?"));
}

#[tokio::test]
async fn generate_sample_without_prompt_returns_400() {
    let (app, ai) = app_with(MockAI::new());

    let (status, value) = post_json(app, "/generate_sample", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], json!("Prompt is required"));
    assert_eq!(ai.call_count(), 0);
}

#[tokio::test]
async fn score_essay_returns_sectioned_report() {
    let (app, ai) = app_with(MockAI::new().with_response(
        "OVERALL SCORE: 4/5\n\nJUSTIFICATION:\n\
         The essay presents a clear position on the question. \
         Supporting examples ground every major claim. \
         Transitions guide the reader between ideas smoothly.",
    ));

    let (status, value) = post_json(
        app,
        "/score_essay",
        json!({
            "essay": "Technology improves education in several important ways.",
            "prompt": "Does technology improve education?",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["scoring"]["heading"], json!("Essay Scoring & Analysis"));
    let sections = value["scoring"]["sections"]
        .as_array()
        .expect("sections must be an array");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["title"], json!("OVERALL SCORE: 4/5"));
    assert_eq!(sections[0]["tone"], json!("high"));
    assert_eq!(sections[1]["title"], json!("JUSTIFICATION:"));
    assert!(sections[1].get("tone").is_none());
    assert_eq!(
        sections[1]["paragraphs"]
            .as_array()
            .expect("paragraphs must be an array")
            .len(),
        1,
    );
    assert!(ai.was_called_with("Technology improves education in several important ways."));
}

#[tokio::test]
async fn score_essay_with_missing_field_returns_400() {
    let (app, ai) = app_with(MockAI::new());

    let (status, value) = post_json(
        app,
        "/score_essay",
        json!({"essay": "An essay with no accompanying prompt."}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], json!("Essay text and prompt are required"));
    assert_eq!(ai.call_count(), 0);
}

#[tokio::test]
async fn analyze_writing_returns_completed_analysis() {
    let (app, _ai) = app_with(MockAI::new().with_json_response(&json!({
        "grammar_issues": [{
            "issue": "Run-on sentence",
            "text": "Students learn online they also study at home",
            "suggestion": "Split into two sentences",
            "position": 10,
            "severity": "medium",
            "explanation": "Two independent clauses joined without punctuation",
        }],
        "suggestions": ["Add a stronger conclusion"],
    })));

    let (status, value) = post_json(
        app,
        "/analyze_writing",
        json!({"essay": "Students benefit from online learning every single day."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let analysis = &value["analysis"];
    assert_eq!(analysis["grammar_issues"][0]["issue"], json!("Run-on sentence"));
    // One provided suggestion padded up to the floor of three
    let suggestions = analysis["suggestions"]
        .as_array()
        .expect("suggestions must be an array");
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0], json!("Add a stronger conclusion"));
    assert_eq!(
        analysis["overall_assessment"]["word_count_feedback"],
        json!("Current word count: 8 words"),
    );
}

#[tokio::test]
async fn analyze_writing_without_essay_returns_400() {
    let (app, ai) = app_with(MockAI::new());

    let (status, value) = post_json(app, "/analyze_writing", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], json!("Essay text is required"));
    assert_eq!(ai.call_count(), 0);
}

#[tokio::test]
async fn unusable_analysis_response_degrades_to_fallback() {
    let (app, _ai) = app_with(
        MockAI::new().with_response("I could not produce the analysis you asked for."),
    );

    let (status, value) = post_json(
        app,
        "/analyze_writing",
        json!({"essay": "Short essay. Two sentences."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let analysis = &value["analysis"];
    assert_eq!(
        analysis["overall_assessment"]["word_count_feedback"],
        json!("Current word count: 4 words - Consider expanding"),
    );
    assert_eq!(
        analysis["overall_assessment"]["essay_structure"],
        json!("Basic structure assessment: 2 sentences detected"),
    );
    assert_eq!(analysis["strengths"][0]["category"], json!("task_completion"));
}

#[tokio::test]
async fn provider_failure_returns_bad_gateway() {
    let (app, _ai) = app_with(MockAI::new().with_error("rate limited"));

    let (status, value) = post_json(
        app,
        "/generate_sample",
        json!({"prompt": "Does technology improve education?"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(value["error"], json!("AI provider request failed"));
}
