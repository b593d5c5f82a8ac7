use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Conditions handed to the engine when it fetches a language model.
///
/// The layer passes the policy through unchanged; enforcement is the
/// engine's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadPolicy {
    pub allow_cellular_access: bool,
    pub allow_background_downloading: bool,
}

impl Default for DownloadPolicy {
    fn default() -> Self {
        Self {
            allow_cellular_access: false,
            allow_background_downloading: true,
        }
    }
}

impl DownloadPolicy {
    /// The policy applied to model fetches triggered implicitly before a
    /// translation: Wi-Fi only, background allowed.
    pub fn wifi_only() -> Self {
        Self {
            allow_cellular_access: false,
            allow_background_downloading: true,
        }
    }
}

/// Download state of one language model, for display.
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    pub language: Language,
    pub downloaded: bool,
}
