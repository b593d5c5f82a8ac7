use std::io;
use std::path::PathBuf;

use honyaku_types::Language;
use serde::{Deserialize, Serialize};

/// On-disk model store: one `<code>.model` file per downloaded
/// language.
#[derive(Clone)]
pub struct ModelStore {
    root: PathBuf,
}

/// Contents of a model file.
#[derive(Serialize, Deserialize)]
struct ModelRecord {
    language: String,
    engine: String,
    format_version: u32,
}

impl ModelStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn model_path(&self, language: Language) -> PathBuf {
        self.root.join(format!("{}.model", language.code()))
    }

    pub async fn contains(&self, language: Language) -> io::Result<bool> {
        tokio::fs::try_exists(self.model_path(language)).await
    }

    pub async fn install(&self, language: Language) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        let record = ModelRecord {
            language: language.code().to_string(),
            engine: "offline".to_string(),
            format_version: 1,
        };
        let bytes = serde_json::to_vec_pretty(&record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        tokio::fs::write(self.model_path(language), bytes).await
    }

    /// Remove the model file. Removing a model that is not installed is
    /// not an error.
    pub async fn remove(&self, language: Language) -> io::Result<()> {
        match tokio::fs::remove_file(self.model_path(language)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
