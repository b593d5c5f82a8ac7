use std::env;

use honyaku_types::DownloadPolicy;
use serde::{Deserialize, Serialize};

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "es".to_string()
}

fn default_prefetch() -> DownloadPolicy {
    DownloadPolicy::wifi_only()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Initial source language code for the demo app
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    /// Initial target language code for the demo app
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Conditions for explicit model downloads when the caller passes none
    #[serde(default)]
    pub download: DownloadPolicy,
    /// Conditions for model fetches triggered implicitly before a
    /// translation; stricter than `download` by default (Wi-Fi only)
    #[serde(default = "default_prefetch")]
    pub prefetch: DownloadPolicy,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            download: DownloadPolicy::default(),
            prefetch: default_prefetch(),
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let source_lang = env::var("SOURCE_LANG").unwrap_or_else(|_| default_source_lang());
        let target_lang = env::var("TARGET_LANG").unwrap_or_else(|_| default_target_lang());

        let allow_cellular = env::var("ALLOW_CELLULAR_DOWNLOADS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let download = DownloadPolicy {
            allow_cellular_access: allow_cellular,
            allow_background_downloading: true,
        };

        Self {
            source_lang,
            target_lang,
            download,
            prefetch: default_prefetch(),
        }
    }
}
