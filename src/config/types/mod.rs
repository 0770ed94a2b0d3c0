mod app;
mod logging;
mod provider;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

pub use app::WizardConfig;
pub use logging::LoggingConfig;
pub use provider::{ModelApi, ModelsConfig, ProviderDescriptor};

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
theme = "dark"

[models]
mode = "merge"

[models.providers.anthropic]
baseUrl = "https://api.anthropic.com"
api = "anthropic-messages"
apiKey = "sk-test"
models = ["claude-sonnet"]

[models.providers.custom]
baseUrl = "http://gateway.internal"
api = "my-dialect"
"#;

    #[test]
    fn parses_known_and_unknown_fields() {
        let config: WizardConfig = toml::from_str(SAMPLE).unwrap();
        let anthropic = config.provider("anthropic").unwrap();
        assert_eq!(anthropic.api, Some(ModelApi::AnthropicMessages));
        assert_eq!(anthropic.models, vec!["claude-sonnet".to_string()]);
        assert_eq!(
            anthropic.extra.get("apiKey").and_then(|v| v.as_str()),
            Some("sk-test")
        );
        let custom = config.provider("custom").unwrap();
        assert_eq!(custom.api, Some(ModelApi::Other("my-dialect".to_string())));
        assert!(custom.models.is_empty());
        assert_eq!(
            config.extra.get("theme").and_then(|v| v.as_str()),
            Some("dark")
        );
    }

    #[test]
    fn unknown_fields_survive_reserialization() {
        let config: WizardConfig = toml::from_str(SAMPLE).unwrap();
        let written = toml::to_string_pretty(&config).unwrap();
        let reread: WizardConfig = toml::from_str(&written).unwrap();
        assert_eq!(reread, config);
        assert!(written.contains("my-dialect"));
        assert!(written.contains("apiKey"));
    }

    #[test]
    fn with_provider_materializes_missing_sections() {
        let config = WizardConfig::default();
        let next = config.with_provider(
            "ollama",
            ProviderDescriptor::new("http://127.0.0.1:11434/v1", ModelApi::OpenaiCompletions),
        );
        assert!(config.models.is_none());
        let entry = next.provider("ollama").unwrap();
        assert_eq!(entry.base_url, "http://127.0.0.1:11434/v1");
        assert_eq!(entry.api, Some(ModelApi::OpenaiCompletions));
    }

    #[test]
    fn with_provider_keeps_siblings() {
        let config: WizardConfig = toml::from_str(SAMPLE).unwrap();
        let next = config.with_provider(
            "ollama",
            ProviderDescriptor::new("http://localhost:11434/v1", ModelApi::OpenaiCompletions),
        );
        assert_eq!(next.provider("anthropic"), config.provider("anthropic"));
        assert_eq!(next.provider("custom"), config.provider("custom"));
        assert_eq!(next.providers().count(), 3);
        assert_eq!(
            next.models.as_ref().unwrap().extra,
            config.models.as_ref().unwrap().extra
        );
    }

    #[test]
    fn descriptor_serializes_camel_case_and_empty_models() {
        let descriptor =
            ProviderDescriptor::new("http://127.0.0.1:11434/v1", ModelApi::OpenaiCompletions);
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "baseUrl": "http://127.0.0.1:11434/v1",
                "api": "openai-completions",
                "models": []
            })
        );
    }

    #[test]
    fn logging_falls_back_to_defaults() {
        let config = WizardConfig::default();
        let logging = config.logging();
        assert_eq!(logging.level(), "info");
        assert_eq!(logging.rotate_size(), 10 * 1024 * 1024);
        assert_eq!(logging.rotate_keep(), 5);
    }

    #[test]
    fn logging_writes_back_only_what_was_read() {
        let config: WizardConfig =
            toml::from_str("[logging]\nlevel = \"debug\"\nconsoleLevel = \"warn\"\n").unwrap();
        let logging = config.logging.as_ref().unwrap();
        assert_eq!(logging.level(), "debug");
        assert_eq!(logging.rotate_keep(), 5);

        let written = toml::to_string_pretty(&config).unwrap();
        assert!(written.contains("consoleLevel"));
        assert!(!written.contains("rotate_size"));
        assert!(!written.contains("rotate_keep"));
    }
}
