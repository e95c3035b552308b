use crate::prompts::PromptTemplate;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct HealthtipConfig {
    pub common: core_config::Config,
    pub openrouter: OpenRouterSettings,
    pub generation: GenerationSettings,
    /// Active prompt variant, resolved from `HEALTHTIP_TEMPLATE` at load time.
    pub template: &'static PromptTemplate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterSettings {
    pub api_key: String,
    pub base_url: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl HealthtipConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let template_name = get_env("HEALTHTIP_TEMPLATE", Some("copstar"), is_prod)?;
        let template = PromptTemplate::by_name(&template_name).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!(
                "Unknown prompt template '{}'; known templates: {}",
                template_name,
                PromptTemplate::known_names().join(", ")
            ))
        })?;

        Ok(HealthtipConfig {
            common: common_config,
            openrouter: OpenRouterSettings {
                api_key: get_env("OPENROUTER_API_KEY", Some(""), is_prod)?,
                base_url: get_env(
                    "OPENROUTER_BASE_URL",
                    Some("https://openrouter.ai/api/v1"),
                    is_prod,
                )?,
                enabled: env::var("OPENROUTER_ENABLED")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .unwrap_or(false),
            },
            generation: GenerationSettings {
                model: get_env(
                    "HEALTHTIP_MODEL",
                    Some("mistralai/mistral-7b-instruct"),
                    is_prod,
                )?,
                max_tokens: get_env("HEALTHTIP_MAX_TOKENS", Some("150"), is_prod)?
                    .parse()
                    .unwrap_or(150),
                temperature: get_env("HEALTHTIP_TEMPERATURE", Some("0.4"), is_prod)?
                    .parse()
                    .unwrap_or(0.4),
            },
            template,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
