//! Liveness/readiness tests for the healthtip service.

use healthtip_service::config::{GenerationSettings, HealthtipConfig, OpenRouterSettings};
use healthtip_service::prompts::PromptTemplate;
use healthtip_service::services::providers::mock::MockCompletionProvider;
use healthtip_service::startup::Application;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

async fn spawn_app() -> u16 {
    let config = HealthtipConfig {
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
        template: PromptTemplate::by_name("copstar").expect("known template"),
    };

    let app = Application::build_with_provider(config, Arc::new(MockCompletionProvider::new()))
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "healthtip-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
