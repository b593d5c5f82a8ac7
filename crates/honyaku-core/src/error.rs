use honyaku_types::Language;

/// Failures surfaced by [`crate::TranslationService`].
///
/// Every error is terminal for the call that raised it; there are no
/// automatic retries. `code()` is the machine-readable kind, `Display`
/// the human-readable message.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("invalid language code: {code}")]
    InvalidLanguage { code: String },

    #[error("model unavailable for {src}-{target}: {reason}")]
    ModelUnavailable {
        src: Language,
        target: Language,
        reason: String,
    },

    #[error("translation failed: {reason}")]
    Translation { reason: String },

    #[error("model check failed for {language}: {reason}")]
    ModelCheck { language: Language, reason: String },

    #[error("model download failed for {language}: {reason}")]
    Download { language: Language, reason: String },

    #[error("model delete failed for {language}: {reason}")]
    Delete { language: Language, reason: String },

    #[error("failed to list downloaded models: {reason}")]
    ListModels { reason: String },
}

impl TranslateError {
    /// Machine-readable error kind.
    pub fn code(&self) -> &'static str {
        match self {
            TranslateError::InvalidLanguage { .. } => "INVALID_LANGUAGE",
            TranslateError::ModelUnavailable { .. } | TranslateError::Translation { .. } => {
                "TRANSLATION_ERROR"
            }
            TranslateError::ModelCheck { .. } => "MODEL_CHECK_ERROR",
            TranslateError::Download { .. } => "MODEL_DOWNLOAD_ERROR",
            TranslateError::Delete { .. } => "MODEL_DELETE_ERROR",
            TranslateError::ListModels { .. } => "GET_MODELS_ERROR",
        }
    }
}
