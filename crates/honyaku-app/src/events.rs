use std::sync::Arc;

use honyaku_core::{TranslateError, TranslationService};
use honyaku_types::{AppEvent, Language};
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    service: Arc<TranslationService>,
    input_rx: AsyncReceiver<AppEvent>,
    ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let metadata = service.engine_metadata();
    tracing::info!("engine: {} (on-device: {})", metadata.name, metadata.on_device);

    loop {
        let event = input_rx.recv().await?;

        if matches!(event, AppEvent::Shutdown) {
            ui_tx.send(AppEvent::Shutdown).await?;
            return Ok(());
        }

        handle_event(&state, &service, &ui_tx, event).await?;
    }
}

async fn handle_event(
    state: &AppState,
    service: &TranslationService,
    ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            let (from_lang, to_lang) = {
                let config = state.config.read().await;
                (
                    config.translator.source_lang.clone(),
                    config.translator.target_lang.clone(),
                )
            };

            match service.translate(&text, &from_lang, &to_lang).await {
                Ok(translated) => {
                    ui_tx
                        .send(AppEvent::ShowTranslation {
                            text: translated,
                            from_lang,
                            to_lang,
                        })
                        .await?
                }
                Err(e) => ui_tx.send(error_event(e)).await?,
            }
        }
        AppEvent::SetSourceLanguage(code) => {
            set_language(state, service, ui_tx, code, true).await?;
        }
        AppEvent::SetTargetLanguage(code) => {
            set_language(state, service, ui_tx, code, false).await?;
        }
        AppEvent::DownloadModel(code) => {
            ui_tx
                .send(AppEvent::ModelStatusUpdate {
                    status: format!("downloading model for {code}"),
                    downloading: true,
                })
                .await?;

            match service.download_model(&code, None).await {
                Ok(()) => {
                    ui_tx
                        .send(AppEvent::ModelStatusUpdate {
                            status: format!("model for {code} downloaded"),
                            downloading: false,
                        })
                        .await?
                }
                Err(e) => ui_tx.send(error_event(e)).await?,
            }
        }
        AppEvent::DeleteModel(code) => match service.delete_model(&code).await {
            Ok(()) => {
                ui_tx
                    .send(AppEvent::ModelStatusUpdate {
                        status: format!("model for {code} deleted"),
                        downloading: false,
                    })
                    .await?
            }
            Err(e) => ui_tx.send(error_event(e)).await?,
        },
        AppEvent::ListModels => match service.model_info().await {
            Ok(info) => {
                let downloaded = info.into_iter().filter(|m| m.downloaded).collect();
                ui_tx.send(AppEvent::ShowModels(downloaded)).await?;
            }
            Err(e) => ui_tx.send(error_event(e)).await?,
        },
        AppEvent::ListLanguages => match service.model_info().await {
            Ok(info) => ui_tx.send(AppEvent::ShowLanguages(info)).await?,
            Err(e) => ui_tx.send(error_event(e)).await?,
        },
        // Render-only events pass straight through.
        event @ (AppEvent::ShowHelp | AppEvent::ShowError(_)) => ui_tx.send(event).await?,
        _ => {}
    }

    Ok(())
}

/// Update one side of the language pair, then nudge the user if the
/// model for it is missing.
async fn set_language(
    state: &AppState,
    service: &TranslationService,
    ui_tx: &AsyncSender<AppEvent>,
    code: String,
    source: bool,
) -> anyhow::Result<()> {
    if Language::from_code(&code).is_none() {
        ui_tx
            .send(AppEvent::ShowError(format!("invalid language code: {code}")))
            .await?;
        return Ok(());
    }

    {
        let mut config = state.config.write().await;
        if source {
            config.translator.source_lang = code.clone();
        } else {
            config.translator.target_lang = code.clone();
        }
    }

    let which = if source { "source" } else { "target" };
    ui_tx
        .send(AppEvent::ModelStatusUpdate {
            status: format!("{which} language set to {code}"),
            downloading: false,
        })
        .await?;

    match service.is_model_downloaded(&code).await {
        Ok(true) => {}
        Ok(false) => {
            ui_tx
                .send(AppEvent::ModelStatusUpdate {
                    status: format!(
                        "model for {code} is not downloaded; run :download {code} or translate to fetch it"
                    ),
                    downloading: false,
                })
                .await?
        }
        Err(e) => ui_tx.send(error_event(e)).await?,
    }

    Ok(())
}

fn error_event(e: TranslateError) -> AppEvent {
    AppEvent::ShowError(format!("{e} [{}]", e.code()))
}
