use std::collections::BTreeSet;
use std::sync::Arc;

use honyaku_config::translator::TranslatorConfig;
use honyaku_engine::{EngineMetadata, TranslationEngine};
use honyaku_types::{DownloadPolicy, Language, ModelInfo};

use crate::cache::TranslatorCache;
use crate::error::TranslateError;
use crate::models::ModelManager;

/// Facade over a translation engine.
///
/// Owns the translator cache and the model forwarder; callers hand it
/// two-letter language codes and get back one awaitable result per
/// call.
pub struct TranslationService {
    engine: Arc<dyn TranslationEngine>,
    translators: TranslatorCache,
    models: ModelManager,
    config: TranslatorConfig,
}

impl TranslationService {
    pub fn new(engine: Arc<dyn TranslationEngine>, config: TranslatorConfig) -> Self {
        Self {
            translators: TranslatorCache::new(),
            models: ModelManager::new(Arc::clone(&engine)),
            engine,
            config,
        }
    }

    /// Translate `text` between two language codes.
    ///
    /// Resolves both codes, fetches the cached translator for the pair,
    /// makes sure both models are present (fetching them under the
    /// prefetch policy if not), then invokes the engine. The steps run
    /// in exactly that order and any failure ends the call.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let source = resolve(source)?;
        let target = resolve(target)?;

        let translator = self
            .translators
            .get_or_create(self.engine.as_ref(), source, target)
            .await
            .map_err(|e| TranslateError::Translation {
                reason: e.to_string(),
            })?;

        translator
            .ensure_models(self.config.prefetch)
            .await
            .map_err(|e| TranslateError::ModelUnavailable {
                src: source,
                target,
                reason: e.to_string(),
            })?;

        tracing::debug!("translating {} chars {source}-{target}", text.len());
        translator
            .translate(text)
            .await
            .map_err(|e| TranslateError::Translation {
                reason: e.to_string(),
            })
    }

    /// Whether the model for `code` is present on device.
    pub async fn is_model_downloaded(&self, code: &str) -> Result<bool, TranslateError> {
        let language = resolve(code)?;
        self.models
            .is_downloaded(language)
            .await
            .map_err(|e| TranslateError::ModelCheck {
                language,
                reason: e.to_string(),
            })
    }

    /// Download the model for `code`. Without an explicit policy the
    /// configured default applies.
    pub async fn download_model(
        &self,
        code: &str,
        policy: Option<DownloadPolicy>,
    ) -> Result<(), TranslateError> {
        let language = resolve(code)?;
        let policy = policy.unwrap_or(self.config.download);
        self.models
            .download(language, policy)
            .await
            .map_err(|e| TranslateError::Download {
                language,
                reason: e.to_string(),
            })
    }

    /// Delete the downloaded model for `code`.
    pub async fn delete_model(&self, code: &str) -> Result<(), TranslateError> {
        let language = resolve(code)?;
        self.models
            .delete(language)
            .await
            .map_err(|e| TranslateError::Delete {
                language,
                reason: e.to_string(),
            })
    }

    /// Languages whose model is currently downloaded. Unordered set.
    pub async fn downloaded_models(&self) -> Result<BTreeSet<Language>, TranslateError> {
        self.models
            .downloaded_languages()
            .await
            .map_err(|e| TranslateError::ListModels {
                reason: e.to_string(),
            })
    }

    /// Per-language download state for every supported language.
    pub async fn model_info(&self) -> Result<Vec<ModelInfo>, TranslateError> {
        let downloaded = self.downloaded_models().await?;
        Ok(Language::ALL
            .iter()
            .map(|&language| ModelInfo {
                language,
                downloaded: downloaded.contains(&language),
            })
            .collect())
    }

    pub fn engine_metadata(&self) -> EngineMetadata {
        self.engine.metadata()
    }
}

/// Map a two-letter code to its language tag, or fail explicitly.
/// Unknown codes never silently fall back to a default language.
fn resolve(code: &str) -> Result<Language, TranslateError> {
    Language::from_code(code).ok_or_else(|| TranslateError::InvalidLanguage {
        code: code.to_string(),
    })
}
