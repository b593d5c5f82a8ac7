pub mod cache;
pub mod error;
pub mod models;
pub mod service;

pub use cache::TranslatorCache;
pub use error::TranslateError;
pub use models::ModelManager;
pub use service::TranslationService;

#[cfg(test)]
mod tests;
