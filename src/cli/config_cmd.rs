use anyhow::{Context, Result, bail};

use crate::config::{Config, LlmProvider};

use super::args::ConfigArgs;
use super::util::mask_api_key;

pub(crate) fn handle_config(args: &ConfigArgs) -> Result<()> {
    let mut config = Config::load_file()?;

    if args.has_changes() {
        apply_config_args(&mut config, args)?;
        config.save()?;
        println!(
            "✅ Configuration saved to {}",
            Config::config_path()?.display()
        );
    }

    print_summary(&config)?;
    Ok(())
}

/// Applies command-line overrides. A provider switch happens first so an
/// explicit `--model` or `--base-url` on the same command wins over the new
/// provider's defaults.
pub(crate) fn apply_config_args(config: &mut Config, args: &ConfigArgs) -> Result<()> {
    if let Some(provider) = args.provider.as_deref() {
        let provider = provider
            .parse::<LlmProvider>()
            .with_context(|| format!("Unknown provider '{provider}' (use gemini or openrouter)"))?;
        config.set_provider(provider);
    }

    if let Some(api_key) = args.api_key.as_deref() {
        config.llm.api_key = api_key.trim().to_string();
    }

    if let Some(model) = args.model.as_deref() {
        let model = model.trim();
        if model.is_empty() {
            bail!("Model name cannot be empty");
        }
        config.model.name = model.to_string();
    }

    if let Some(timeout) = args.timeout {
        config.llm.timeout_secs = (timeout > 0).then_some(timeout);
    }

    if let Some(max_tokens) = args.max_tokens {
        if max_tokens == 0 {
            bail!("Max tokens must be greater than zero");
        }
        config.model.max_tokens = max_tokens;
    }

    if let Some(base_url) = args.base_url.as_deref() {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            bail!("Base URL cannot be empty");
        }
        config.llm.base_url = base_url.to_string();
    }

    Ok(())
}

fn print_summary(config: &Config) -> Result<()> {
    let timeout = config
        .llm
        .timeout_secs
        .map(|secs| format!("{secs}s"))
        .unwrap_or_else(|| "client default".to_string());

    println!("📋 Current configuration:");
    println!(
        "   Provider: {} ({})",
        config.llm.provider,
        config.llm.provider.display_name()
    );
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Base URL: {}", config.llm.base_url);
    println!("   Model: {}", config.model.name);
    println!("   Max Tokens: {}", config.model.max_tokens);
    println!("   Timeout: {timeout}");
    println!("   File: {}", Config::config_path()?.display());

    let key_var = config.llm.provider.api_key_env_var();
    if std::env::var(key_var).is_ok_and(|value| !value.trim().is_empty()) {
        println!("ℹ️  {key_var} is set and overrides the stored API key.");
    } else if config.llm.api_key.trim().is_empty() {
        println!(
            "⚠️  {} API key is not configured. Set {} or run `tripplan config --api-key <KEY>`.",
            config.llm.provider.display_name(),
            config.llm.provider.api_key_env_var()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::{EnvGuard, env_lock, write_config};
    use crate::config::{DEFAULT_OPENROUTER_BASE_URL, DEFAULT_OPENROUTER_MODEL};
    use tempfile::TempDir;

    fn fresh() -> Config {
        Config::builder().build().unwrap()
    }

    #[test]
    fn no_args_changes_nothing() {
        let mut config = fresh();
        let before = format!("{config:?}");

        apply_config_args(&mut config, &ConfigArgs::default()).unwrap();
        assert_eq!(format!("{config:?}"), before);
    }

    #[test]
    fn provider_switch_then_explicit_model() {
        let mut config = fresh();
        let args = ConfigArgs {
            provider: Some("openrouter".to_string()),
            model: Some("meta-llama/llama-3-8b-instruct".to_string()),
            api_key: Some(" sk-or-123 ".to_string()),
            ..ConfigArgs::default()
        };

        apply_config_args(&mut config, &args).unwrap();

        assert_eq!(config.llm.provider, LlmProvider::OpenRouter);
        assert_eq!(config.llm.base_url, DEFAULT_OPENROUTER_BASE_URL);
        assert_eq!(config.model.name, "meta-llama/llama-3-8b-instruct");
        assert_eq!(config.llm.api_key, "sk-or-123");
    }

    #[test]
    fn provider_switch_alone_uses_provider_model() {
        let mut config = fresh();
        let args = ConfigArgs {
            provider: Some("openrouter".to_string()),
            ..ConfigArgs::default()
        };

        apply_config_args(&mut config, &args).unwrap();
        assert_eq!(config.model.name, DEFAULT_OPENROUTER_MODEL);
    }

    #[test]
    fn zero_timeout_clears_it() {
        let mut config = fresh();
        apply_config_args(
            &mut config,
            &ConfigArgs {
                timeout: Some(45),
                ..ConfigArgs::default()
            },
        )
        .unwrap();
        assert_eq!(config.llm.timeout_secs, Some(45));

        apply_config_args(
            &mut config,
            &ConfigArgs {
                timeout: Some(0),
                ..ConfigArgs::default()
            },
        )
        .unwrap();
        assert_eq!(config.llm.timeout_secs, None);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = fresh();
        let unknown = ConfigArgs {
            provider: Some("cerebras".to_string()),
            ..ConfigArgs::default()
        };
        assert!(apply_config_args(&mut config, &unknown).is_err());

        let zero_tokens = ConfigArgs {
            max_tokens: Some(0),
            ..ConfigArgs::default()
        };
        assert!(apply_config_args(&mut config, &zero_tokens).is_err());

        let blank_url = ConfigArgs {
            base_url: Some("  ".to_string()),
            ..ConfigArgs::default()
        };
        assert!(apply_config_args(&mut config, &blank_url).is_err());
    }

    #[test]
    fn saving_does_not_persist_environment_key() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();
        write_config(&temp_home, r#"{ "llm": { "api_key": "file-key" } }"#);

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("GEMINI_API_KEY", Some("env-key")),
        ]);

        handle_config(&ConfigArgs {
            timeout: Some(30),
            ..ConfigArgs::default()
        })
        .unwrap();

        let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
        assert_eq!(json["llm"]["api_key"], "file-key");
        assert_eq!(json["llm"]["timeout_secs"], 30);
        assert!(!persisted.contains("env-key"));
    }
}
