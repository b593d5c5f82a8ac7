use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use honyaku_config::translator::TranslatorConfig;
use honyaku_engine::{EngineError, EngineMetadata, TranslationEngine, TranslatorHandle};
use honyaku_types::{DownloadPolicy, Language};

use crate::cache::TranslatorCache;
use crate::error::TranslateError;
use crate::service::TranslationService;

/// State shared between the engine double and the handles it vends, so
/// a test can assert on the full call sequence.
#[derive(Default)]
struct FakeState {
    downloaded: Mutex<HashSet<Language>>,
    calls: Mutex<Vec<String>>,
    policies: Mutex<Vec<DownloadPolicy>>,
    translators_created: AtomicUsize,
    fail_downloads: AtomicBool,
    fail_translations: AtomicBool,
    fail_checks_for: Mutex<HashSet<Language>>,
}

impl FakeState {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn fetch(&self, language: Language, policy: DownloadPolicy) -> Result<(), EngineError> {
        self.record(format!("download {language}"));
        self.policies.lock().unwrap().push(policy);
        if self.fail_downloads.load(Ordering::SeqCst) {
            return Err(EngineError::DownloadRejected("network unavailable".into()));
        }
        self.downloaded.lock().unwrap().insert(language);
        Ok(())
    }
}

struct FakeEngine {
    state: Arc<FakeState>,
}

impl FakeEngine {
    fn new() -> (Arc<Self>, Arc<FakeState>) {
        let state = Arc::new(FakeState::default());
        (
            Arc::new(Self {
                state: Arc::clone(&state),
            }),
            state,
        )
    }

    fn with_models(languages: &[Language]) -> (Arc<Self>, Arc<FakeState>) {
        let (engine, state) = Self::new();
        state.downloaded.lock().unwrap().extend(languages);
        (engine, state)
    }
}

struct FakeTranslator {
    source: Language,
    target: Language,
    state: Arc<FakeState>,
}

#[async_trait::async_trait]
impl TranslatorHandle for FakeTranslator {
    fn languages(&self) -> (Language, Language) {
        (self.source, self.target)
    }

    async fn ensure_models(&self, policy: DownloadPolicy) -> Result<(), EngineError> {
        for language in [self.source, self.target] {
            let missing = !self.state.downloaded.lock().unwrap().contains(&language);
            if missing {
                self.state.fetch(language, policy)?;
            }
        }
        Ok(())
    }

    async fn translate(&self, text: &str) -> Result<String, EngineError> {
        self.state.record("translate");
        if self.state.fail_translations.load(Ordering::SeqCst) {
            return Err(EngineError::Translation("no result".into()));
        }
        Ok(format!("<{}> {text}", self.target))
    }
}

#[async_trait::async_trait]
impl TranslationEngine for FakeEngine {
    async fn create_translator(
        &self,
        source: Language,
        target: Language,
    ) -> Result<Arc<dyn TranslatorHandle>, EngineError> {
        self.state.record(format!("create {source}-{target}"));
        self.state.translators_created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeTranslator {
            source,
            target,
            state: Arc::clone(&self.state),
        }))
    }

    async fn is_model_downloaded(&self, language: Language) -> Result<bool, EngineError> {
        if self.state.fail_checks_for.lock().unwrap().contains(&language) {
            return Err(EngineError::Model(format!("check failed for {language}")));
        }
        Ok(self.state.downloaded.lock().unwrap().contains(&language))
    }

    async fn download_model(
        &self,
        language: Language,
        policy: DownloadPolicy,
    ) -> Result<(), EngineError> {
        self.state.fetch(language, policy)
    }

    async fn delete_model(&self, language: Language) -> Result<(), EngineError> {
        self.state.record(format!("delete {language}"));
        self.state.downloaded.lock().unwrap().remove(&language);
        Ok(())
    }

    fn metadata(&self) -> EngineMetadata {
        EngineMetadata {
            name: "fake".to_string(),
            on_device: true,
            requires_network_for_models: false,
        }
    }
}

fn service(engine: Arc<FakeEngine>) -> TranslationService {
    TranslationService::new(engine, TranslatorConfig::default())
}

mod cache {
    use super::*;

    #[tokio::test]
    async fn same_pair_returns_same_handle() {
        let (engine, state) = FakeEngine::new();
        let cache = TranslatorCache::new();

        let first = cache
            .get_or_create(engine.as_ref(), Language::English, Language::Spanish)
            .await
            .unwrap();
        let second = cache
            .get_or_create(engine.as_ref(), Language::English, Language::Spanish)
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(state.translators_created.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn ordered_pairs_are_distinct() {
        let (engine, state) = FakeEngine::new();
        let cache = TranslatorCache::new();

        cache
            .get_or_create(engine.as_ref(), Language::English, Language::Spanish)
            .await
            .unwrap();
        cache
            .get_or_create(engine.as_ref(), Language::Spanish, Language::English)
            .await
            .unwrap();

        assert_eq!(state.translators_created.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_first_use_constructs_once() {
        let (engine, state) = FakeEngine::new();
        let cache = TranslatorCache::new();

        let a = cache.get_or_create(engine.as_ref(), Language::English, Language::German);
        let b = cache.get_or_create(engine.as_ref(), Language::English, Language::German);
        let (a, b) = tokio::join!(a, b);

        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(state.translators_created.load(Ordering::SeqCst), 1);
    }
}

mod translate {
    use super::*;

    #[tokio::test]
    async fn fetches_missing_models_then_translates() {
        let (engine, state) = FakeEngine::new();
        let service = service(engine);

        let result = service.translate("Hello", "en", "es").await.unwrap();

        assert!(!result.is_empty());
        assert!(result.contains("Hello"));
        assert_eq!(
            state.calls(),
            vec!["create en-es", "download en", "download es", "translate"]
        );
    }

    #[tokio::test]
    async fn implicit_fetch_is_wifi_only() {
        let (engine, state) = FakeEngine::new();
        let service = service(engine);

        service.translate("Hello", "en", "es").await.unwrap();

        let policies = state.policies.lock().unwrap();
        assert!(policies.iter().all(|p| !p.allow_cellular_access));
    }

    #[tokio::test]
    async fn downloaded_models_are_not_refetched() {
        let (engine, state) = FakeEngine::with_models(&[Language::English, Language::Spanish]);
        let service = service(engine);

        service.translate("Hello", "en", "es").await.unwrap();

        assert_eq!(state.calls(), vec!["create en-es", "translate"]);
    }

    #[tokio::test]
    async fn second_translate_reuses_cached_translator() {
        let (engine, state) = FakeEngine::new();
        let service = service(engine);

        service.translate("Hello", "en", "es").await.unwrap();
        service.translate("Goodbye", "en", "es").await.unwrap();

        let calls = state.calls();
        let creates = calls.iter().filter(|c| c.starts_with("create")).count();
        let downloads = calls.iter().filter(|c| c.starts_with("download")).count();
        let translates = calls.iter().filter(|c| *c == "translate").count();
        assert_eq!((creates, downloads, translates), (1, 2, 2));
    }

    #[tokio::test]
    async fn invalid_source_code_fails_fast() {
        let (engine, state) = FakeEngine::new();
        let service = service(engine);

        let err = service.translate("Hello", "xx", "es").await.unwrap_err();

        assert!(matches!(err, TranslateError::InvalidLanguage { .. }));
        assert_eq!(err.code(), "INVALID_LANGUAGE");
        assert!(state.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_target_code_fails_fast() {
        let (engine, state) = FakeEngine::new();
        let service = service(engine);

        let err = service.translate("Hello", "en", "zz").await.unwrap_err();
        assert_eq!(err.code(), "INVALID_LANGUAGE");
        assert!(state.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_model_fetch_stops_the_call() {
        let (engine, state) = FakeEngine::new();
        state.fail_downloads.store(true, Ordering::SeqCst);
        let service = service(engine);

        let err = service.translate("Hello", "en", "es").await.unwrap_err();

        assert!(matches!(err, TranslateError::ModelUnavailable { .. }));
        assert_eq!(err.code(), "TRANSLATION_ERROR");
        // No translation was attempted after the failed fetch.
        assert!(!state.calls().contains(&"translate".to_string()));
    }

    #[tokio::test]
    async fn engine_translation_failure_propagates() {
        let (engine, state) = FakeEngine::with_models(&[Language::English, Language::Spanish]);
        state.fail_translations.store(true, Ordering::SeqCst);
        let service = service(engine);

        let err = service.translate("Hello", "en", "es").await.unwrap_err();

        assert!(matches!(err, TranslateError::Translation { .. }));
        assert_eq!(err.code(), "TRANSLATION_ERROR");
    }
}

mod models {
    use super::*;

    #[tokio::test]
    async fn list_after_download_includes_language() {
        let (engine, _state) = FakeEngine::new();
        let service = service(engine);

        service.download_model("es", None).await.unwrap();

        let downloaded = service.downloaded_models().await.unwrap();
        assert!(downloaded.contains(&Language::Spanish));
    }

    #[tokio::test]
    async fn list_after_delete_excludes_language() {
        let (engine, _state) = FakeEngine::with_models(&[Language::Spanish, Language::French]);
        let service = service(engine);

        service.delete_model("es").await.unwrap();

        let downloaded = service.downloaded_models().await.unwrap();
        assert!(!downloaded.contains(&Language::Spanish));
        assert!(downloaded.contains(&Language::French));
    }

    #[tokio::test]
    async fn empty_store_lists_empty_set() {
        let (engine, _state) = FakeEngine::new();
        let service = service(engine);

        let downloaded = service.downloaded_models().await.unwrap();
        assert!(downloaded.is_empty());
    }

    #[tokio::test]
    async fn check_failure_counts_as_not_downloaded() {
        let (engine, state) = FakeEngine::with_models(&[Language::Icelandic, Language::Danish]);
        state
            .fail_checks_for
            .lock()
            .unwrap()
            .insert(Language::Icelandic);
        let service = service(engine);

        let downloaded = service.downloaded_models().await.unwrap();

        assert!(!downloaded.contains(&Language::Icelandic));
        assert!(downloaded.contains(&Language::Danish));
    }

    #[tokio::test]
    async fn status_check_rejects_unknown_code() {
        let (engine, _state) = FakeEngine::new();
        let service = service(engine);

        let err = service.is_model_downloaded("xx").await.unwrap_err();
        assert_eq!(err.code(), "INVALID_LANGUAGE");
    }

    #[tokio::test]
    async fn download_failure_carries_download_code() {
        let (engine, state) = FakeEngine::new();
        state.fail_downloads.store(true, Ordering::SeqCst);
        let service = service(engine);

        let err = service.download_model("es", None).await.unwrap_err();
        assert_eq!(err.code(), "MODEL_DOWNLOAD_ERROR");
    }

    #[tokio::test]
    async fn explicit_policy_passes_through_unchanged() {
        let (engine, state) = FakeEngine::new();
        let service = service(engine);

        let policy = DownloadPolicy {
            allow_cellular_access: true,
            allow_background_downloading: false,
        };
        service.download_model("fr", Some(policy)).await.unwrap();

        let recorded = state.policies.lock().unwrap();
        assert!(recorded[0].allow_cellular_access);
        assert!(!recorded[0].allow_background_downloading);
    }

    #[tokio::test]
    async fn default_download_policy_disallows_cellular() {
        let (engine, state) = FakeEngine::new();
        let service = service(engine);

        service.download_model("fr", None).await.unwrap();

        let recorded = state.policies.lock().unwrap();
        assert!(!recorded[0].allow_cellular_access);
        assert!(recorded[0].allow_background_downloading);
    }

    #[tokio::test]
    async fn model_info_covers_every_language() {
        let (engine, _state) = FakeEngine::with_models(&[Language::English]);
        let service = service(engine);

        let info = service.model_info().await.unwrap();

        assert_eq!(info.len(), Language::ALL.len());
        let english = info
            .iter()
            .find(|m| m.language == Language::English)
            .unwrap();
        assert!(english.downloaded);
        assert_eq!(info.iter().filter(|m| m.downloaded).count(), 1);
    }
}
