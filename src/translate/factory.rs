use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tracing::info;
use crate::config::TranslationConfig;
use super::google::GoogleTranslator;
use super::interface::TranslateInterface;

/// Factory for creating translation providers
pub struct TranslateFactory;

impl TranslateFactory {
    /// Create the translator named by `translation_config.provider`
    ///
    /// Called once at startup; the returned handle is shared by every request.
    pub fn create_translator(
        translation_config: &TranslationConfig,
    ) -> Result<Arc<dyn TranslateInterface>> {
        info!("Initializing translation provider: {}", translation_config.provider);

        let timeout = translation_config.timeout_secs.map(Duration::from_secs);

        match translation_config.provider.as_str() {
            "google" => {
                let client = GoogleTranslator::new(translation_config.service_url.clone(), timeout)?;
                Ok(Arc::new(client))
            }
            other => Err(anyhow::anyhow!("Unknown translation provider: {}", other)),
        }
    }
}
