use anyhow::Result;

use super::types::{Config, LlmProvider, LlmSettings, ModelSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) model: ModelSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            llm: LlmSettings::default(),
            model: ModelSettings::default(),
        }
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_model<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ModelSettings),
    {
        update(&mut self.model);
        self
    }

    /// Switches provider, resetting the endpoint and model to that provider's
    /// defaults. A no-op when the provider is unchanged.
    pub fn with_provider(mut self, provider: LlmProvider) -> Self {
        if self.llm.provider != provider {
            self.llm.provider = provider;
            self.llm.base_url = provider.default_base_url().to_string();
            self.model.name = provider.default_model().to_string();
        }
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            llm: self.llm,
            model: self.model,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
