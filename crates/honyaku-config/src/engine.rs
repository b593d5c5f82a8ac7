use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_network_profile() -> String {
    "wifi".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory the reference engine stores downloaded models in
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
    /// Simulated network the reference engine sees: "wifi" or "cellular"
    #[serde(default = "default_network_profile")]
    pub network_profile: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
            network_profile: default_network_profile(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        let model_dir = env::var("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        let network_profile =
            env::var("NETWORK_PROFILE").unwrap_or_else(|_| default_network_profile());

        Self {
            model_dir,
            network_profile,
        }
    }
}
