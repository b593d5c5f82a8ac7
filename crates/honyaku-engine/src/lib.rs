use std::sync::Arc;

use honyaku_types::{DownloadPolicy, Language};

/// Translation engine interface.
///
/// Implementations own the models and the translation itself; the layer
/// above only maps language codes, caches translators, and forwards
/// model lifecycle calls.
#[async_trait::async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Construct a translator bound to an ordered language pair.
    ///
    /// Construction may allocate model-adjacent resources; callers are
    /// expected to cache the returned handle rather than re-create it
    /// per request.
    async fn create_translator(
        &self,
        source: Language,
        target: Language,
    ) -> Result<Arc<dyn TranslatorHandle>, EngineError>;

    /// Whether the model for `language` is present on device.
    async fn is_model_downloaded(&self, language: Language) -> Result<bool, EngineError>;

    /// Fetch the model for `language` under the given conditions.
    async fn download_model(
        &self,
        language: Language,
        policy: DownloadPolicy,
    ) -> Result<(), EngineError>;

    /// Remove the downloaded model for `language`.
    async fn delete_model(&self, language: Language) -> Result<(), EngineError>;

    /// Engine metadata
    fn metadata(&self) -> EngineMetadata;
}

/// A translator bound to one (source, target) pair.
#[async_trait::async_trait]
pub trait TranslatorHandle: Send + Sync {
    /// The (source, target) pair this handle translates.
    fn languages(&self) -> (Language, Language);

    /// Fetch any missing models for the pair under the given conditions.
    async fn ensure_models(&self, policy: DownloadPolicy) -> Result<(), EngineError>;

    /// Translate `text` from the source to the target language.
    async fn translate(&self, text: &str) -> Result<String, EngineError>;
}

#[derive(Debug, Clone)]
pub struct EngineMetadata {
    pub name: String,
    pub on_device: bool,
    pub requires_network_for_models: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("model error: {0}")]
    Model(String),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("download rejected: {0}")]
    DownloadRejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
