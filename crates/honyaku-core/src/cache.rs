use std::collections::HashMap;
use std::sync::Arc;

use honyaku_engine::{EngineError, TranslationEngine, TranslatorHandle};
use honyaku_types::Language;
use tokio::sync::Mutex;

/// Translator handles keyed by ordered (source, target) pair.
///
/// Handles are constructed on first use and live for the process
/// lifetime; there is no eviction or invalidation path. The map is
/// guarded by a single async mutex held across construction, so
/// concurrent first-use requests for the same pair resolve to one
/// handle.
#[derive(Default)]
pub struct TranslatorCache {
    translators: Mutex<HashMap<(Language, Language), Arc<dyn TranslatorHandle>>>,
}

impl TranslatorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached handle for the pair, constructing it through
    /// the engine if this is the first request.
    pub async fn get_or_create(
        &self,
        engine: &dyn TranslationEngine,
        source: Language,
        target: Language,
    ) -> Result<Arc<dyn TranslatorHandle>, EngineError> {
        let mut translators = self.translators.lock().await;

        if let Some(handle) = translators.get(&(source, target)) {
            return Ok(Arc::clone(handle));
        }

        tracing::debug!("creating translator for {source}-{target}");
        let handle = engine.create_translator(source, target).await?;
        translators.insert((source, target), Arc::clone(&handle));

        Ok(handle)
    }

    /// Number of cached handles.
    pub async fn len(&self) -> usize {
        self.translators.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.translators.lock().await.is_empty()
    }
}
