mod events;
mod language;
mod policy;

pub use events::AppEvent;
pub use language::Language;
pub use policy::{DownloadPolicy, ModelInfo};
