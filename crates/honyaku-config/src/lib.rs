use serde::{Deserialize, Serialize};

use self::engine::EngineConfig;
use self::translator::TranslatorConfig;

pub mod engine;
pub mod translator;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub engine: EngineConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            translator: TranslatorConfig::new(),
            engine: EngineConfig::new(),
        }
    }
}
