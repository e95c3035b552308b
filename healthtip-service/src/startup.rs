//! Application startup and lifecycle management.

use crate::build_router;
use crate::config::HealthtipConfig;
use crate::services::providers::mock::MockCompletionProvider;
use crate::services::providers::openrouter::{OpenRouterConfig, OpenRouterProvider};
use crate::services::CompletionProvider;
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: HealthtipConfig,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application, selecting the real provider when enabled and
    /// the mock otherwise (dev default: no credential, no outbound traffic).
    pub async fn build(config: HealthtipConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn CompletionProvider> = if config.openrouter.enabled {
            let provider = OpenRouterProvider::new(OpenRouterConfig {
                api_key: config.openrouter.api_key.clone(),
                base_url: config.openrouter.base_url.clone(),
            })
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

            tracing::info!(
                model = %config.generation.model,
                template = %config.template.name,
                "OpenRouter completion provider initialized"
            );
            Arc::new(provider)
        } else {
            tracing::info!(
                template = %config.template.name,
                "OpenRouter provider disabled, using mock completion provider"
            );
            Arc::new(MockCompletionProvider::new())
        };

        Self::build_with_provider(config, provider).await
    }

    /// Build with an externally supplied provider. Tests use this to keep a
    /// handle on the mock's call counter.
    pub async fn build_with_provider(
        config: HealthtipConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Healthtip service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState { config, provider },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
