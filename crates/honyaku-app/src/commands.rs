use honyaku_config::translator::TranslatorConfig;
use honyaku_core::{TranslateError, TranslationService};
use honyaku_types::DownloadPolicy;

use crate::cli::Command;

/// One-shot subcommand dispatch.
pub async fn run(
    command: Command,
    service: &TranslationService,
    config: &TranslatorConfig,
) -> anyhow::Result<()> {
    match command {
        Command::Translate { text, from, to } => {
            let from = from.unwrap_or_else(|| config.source_lang.clone());
            let to = to.unwrap_or_else(|| config.target_lang.clone());
            let translated = service
                .translate(&text, &from, &to)
                .await
                .map_err(into_anyhow)?;
            println!("{translated}");
        }
        Command::Models => {
            let downloaded = service.downloaded_models().await.map_err(into_anyhow)?;
            if downloaded.is_empty() {
                println!("no models downloaded");
            }
            for language in downloaded {
                println!("{}  {}", language.code(), language.name());
            }
        }
        Command::Status { language } => {
            let downloaded = service
                .is_model_downloaded(&language)
                .await
                .map_err(into_anyhow)?;
            let status = if downloaded {
                "downloaded"
            } else {
                "not downloaded"
            };
            println!("{language}: {status}");
        }
        Command::Download {
            language,
            cellular,
            no_background,
        } => {
            let policy = DownloadPolicy {
                allow_cellular_access: cellular,
                allow_background_downloading: !no_background,
            };
            service
                .download_model(&language, Some(policy))
                .await
                .map_err(into_anyhow)?;
            println!("model for {language} downloaded");
        }
        Command::Delete { language } => {
            service.delete_model(&language).await.map_err(into_anyhow)?;
            println!("model for {language} deleted");
        }
        Command::Languages => {
            for info in service.model_info().await.map_err(into_anyhow)? {
                let marker = if info.downloaded { "  [downloaded]" } else { "" };
                println!("{}  {}{}", info.language.code(), info.language.name(), marker);
            }
        }
    }

    Ok(())
}

fn into_anyhow(e: TranslateError) -> anyhow::Error {
    anyhow::anyhow!("{e} [{}]", e.code())
}
