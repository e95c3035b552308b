//! Integration tests for the healthtip relay.
//!
//! All tests run against the mock completion provider, so no outbound
//! traffic ever leaves the test process.

use healthtip_service::config::{GenerationSettings, HealthtipConfig, OpenRouterSettings};
use healthtip_service::prompts::{PromptPayload, PromptTemplate};
use healthtip_service::services::providers::mock::MockCompletionProvider;
use healthtip_service::startup::Application;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

fn test_config(template: &str) -> HealthtipConfig {
    HealthtipConfig {
        common: service_core::config::Config { port: 0 },
        openrouter: OpenRouterSettings {
            api_key: "test-api-key".to_string(),
            base_url: "http://localhost:1/api/v1".to_string(),
            enabled: false,
        },
        generation: GenerationSettings {
            model: "mistralai/mistral-7b-instruct".to_string(),
            max_tokens: 150,
            temperature: 0.4,
        },
        template: PromptTemplate::by_name(template).expect("known template"),
    }
}

/// Spawn the application on a random port with a mock provider the test
/// keeps a handle on.
async fn spawn_app(template: &str) -> (u16, Arc<MockCompletionProvider>) {
    let mock = Arc::new(MockCompletionProvider::new());
    let app = Application::build_with_provider(test_config(template), mock.clone())
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (port, mock)
}

async fn post_healthtip(port: u16, body: serde_json::Value) -> reqwest::Response {
    Client::new()
        .post(format!("http://localhost:{}/healthtip", port))
        .json(&body)
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
async fn missing_input_returns_fallback_without_provider_call() {
    let (port, mock) = spawn_app("copstar").await;

    let response = post_healthtip(port, serde_json::json!({})).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["response"], "Please provide a symptom");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn whitespace_input_returns_fallback_without_provider_call() {
    let (port, mock) = spawn_app("copstar").await;

    let response = post_healthtip(port, serde_json::json!({ "user_prompt": "   \n\t " })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["response"], "Please provide a symptom");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn bmi_variant_uses_its_own_fallback_string() {
    let (port, mock) = spawn_app("bmi_advisor").await;

    let response = post_healthtip(port, serde_json::json!({ "user_prompt": "" })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["response"],
        "Please share your symptoms or your height and weight"
    );
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn chat_payload_carries_full_template_and_trimmed_input() {
    let (port, mock) = spawn_app("copstar").await;

    let response =
        post_healthtip(port, serde_json::json!({ "user_prompt": "  I have a fever  " })).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(mock.call_count(), 1);

    let template = PromptTemplate::by_name("copstar").expect("known template");
    match mock.last_payload().expect("provider was called") {
        PromptPayload::Chat { system, user } => {
            assert_eq!(system, template.system_text);
            assert_eq!(user, "I have a fever");
        }
        other => panic!("expected chat payload, got {:?}", other),
    }
}

#[tokio::test]
async fn completion_payload_ends_with_labeled_input() {
    let (port, mock) = spawn_app("symptom_simple").await;
    mock.set_reply("- Drink fluids\n- Rest well\n- Eat light food\n- Avoid cold items");

    let response = post_healthtip(port, serde_json::json!({ "user_prompt": "I have a fever" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let template = PromptTemplate::by_name("symptom_simple").expect("known template");
    match mock.last_payload().expect("provider was called") {
        PromptPayload::Completion { prompt } => {
            assert!(prompt.starts_with(template.system_text));
            assert!(prompt.ends_with("User Symptom: I have a fever"));
        }
        other => panic!("expected completion payload, got {:?}", other),
    }

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["response"],
        "- Drink fluids\n- Rest well\n- Eat light food\n- Avoid cold items"
    );
}

#[tokio::test]
async fn user_input_label_variant_ends_with_labeled_input() {
    let (port, mock) = spawn_app("bmi_completion").await;

    let response =
        post_healthtip(port, serde_json::json!({ "user_prompt": "180cm and 75kg" })).await;
    assert_eq!(response.status().as_u16(), 200);

    match mock.last_payload().expect("provider was called") {
        PromptPayload::Completion { prompt } => {
            assert!(prompt.ends_with("User Input: 180cm and 75kg"));
        }
        other => panic!("expected completion payload, got {:?}", other),
    }
}

#[tokio::test]
async fn reply_is_extracted_text_with_artifacts_stripped() {
    let (port, mock) = spawn_app("copstar").await;
    mock.set_reply("<s> - Drink fluids\n- Rest well\n- Eat light food\n- Avoid cold items </s>\n");

    let response = post_healthtip(port, serde_json::json!({ "user_prompt": "I have a fever" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["response"],
        "- Drink fluids\n- Rest well\n- Eat light food\n- Avoid cold items"
    );
}

#[tokio::test]
async fn provider_failure_returns_fallback_with_status_200() {
    let (port, mock) = spawn_app("copstar").await;
    mock.set_failing(true);

    let response = post_healthtip(port, serde_json::json!({ "user_prompt": "I have a fever" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["response"], "Unable to generate response.");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn config_load_resolves_template_and_rejects_unknown_names() {
    // Env-driven loading is exercised in one test to keep process-global
    // environment mutation out of the parallel tests above.
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0");
    std::env::set_var("HEALTHTIP_TEMPLATE", "bmi_advisor");

    let config = HealthtipConfig::load().expect("Failed to load config");
    assert_eq!(config.template.name, "bmi_advisor");
    assert_eq!(config.generation.model, "mistralai/mistral-7b-instruct");
    assert_eq!(config.generation.max_tokens, 150);
    assert!(!config.openrouter.enabled);

    std::env::set_var("HEALTHTIP_TEMPLATE", "no-such-template");
    let err = HealthtipConfig::load().expect_err("unknown template must fail");
    assert!(err.to_string().contains("no-such-template"));

    std::env::remove_var("HEALTHTIP_TEMPLATE");
}
