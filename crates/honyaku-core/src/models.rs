use std::collections::BTreeSet;
use std::sync::Arc;

use honyaku_engine::{EngineError, TranslationEngine};
use honyaku_types::{DownloadPolicy, Language};
use tokio::task::{JoinError, JoinSet};

/// Forwards model lifecycle calls to the engine.
pub struct ModelManager {
    engine: Arc<dyn TranslationEngine>,
}

impl ModelManager {
    pub fn new(engine: Arc<dyn TranslationEngine>) -> Self {
        Self { engine }
    }

    pub async fn is_downloaded(&self, language: Language) -> Result<bool, EngineError> {
        self.engine.is_model_downloaded(language).await
    }

    pub async fn download(
        &self,
        language: Language,
        policy: DownloadPolicy,
    ) -> Result<(), EngineError> {
        tracing::debug!(
            "downloading model for {language} (cellular: {}, background: {})",
            policy.allow_cellular_access,
            policy.allow_background_downloading
        );
        self.engine.download_model(language, policy).await
    }

    pub async fn delete(&self, language: Language) -> Result<(), EngineError> {
        self.engine.delete_model(language).await
    }

    /// Query every supported language and collect those whose model is
    /// present.
    ///
    /// Fan-out/fan-in: the aggregate resolves only after every query
    /// completes. A language whose query fails counts as not downloaded
    /// rather than aborting the whole listing. The returned set carries
    /// no meaningful order.
    pub async fn downloaded_languages(&self) -> Result<BTreeSet<Language>, JoinError> {
        let mut queries = JoinSet::new();

        for language in Language::ALL {
            let engine = Arc::clone(&self.engine);
            queries.spawn(async move {
                match engine.is_model_downloaded(language).await {
                    Ok(downloaded) => downloaded.then_some(language),
                    Err(e) => {
                        tracing::debug!("model check failed for {language}: {e}");
                        None
                    }
                }
            });
        }

        let mut downloaded = BTreeSet::new();
        while let Some(result) = queries.join_next().await {
            if let Some(language) = result? {
                downloaded.insert(language);
            }
        }

        Ok(downloaded)
    }
}
