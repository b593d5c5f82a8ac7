use crate::policy::ModelInfo;

/// Events exchanged between the demo app's input, backend, and render
/// loops.
#[derive(Debug, Clone)]
pub enum AppEvent {
    TextInput(String),
    SetSourceLanguage(String),
    SetTargetLanguage(String),
    ListModels,
    ListLanguages,
    DownloadModel(String),
    DeleteModel(String),
    ShowTranslation {
        text: String,
        from_lang: String,
        to_lang: String,
    },
    ShowModels(Vec<ModelInfo>),
    ShowLanguages(Vec<ModelInfo>),
    ModelStatusUpdate {
        status: String,
        downloading: bool,
    },
    ShowError(String),
    ShowHelp,
    Shutdown,
}
