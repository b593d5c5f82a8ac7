use std::io::BufRead;

use honyaku_types::AppEvent;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

/// Read stdin lines and forward them to the app loop as events.
pub async fn input_loop(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let reader = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if cancel.is_cancelled() {
                break;
            }

            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("stdin read failed: {e}");
                    break;
                }
            };

            let Some(event) = parse_line(&line) else {
                continue;
            };
            let quit = matches!(event, AppEvent::Shutdown);

            let tx = event_tx.clone();
            tokio::spawn(async move {
                if let Err(e) = tx.send(event).await {
                    tracing::error!("failed to send input event: {e}");
                }
            });

            if quit {
                break;
            }
        }
    });

    reader.await?;
    Ok(())
}

/// Turn one input line into an event. Lines starting with ':' are
/// commands, anything else is text to translate.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if !line.starts_with(':') {
        return Some(AppEvent::TextInput(line.to_string()));
    }

    let mut parts = line.splitn(2, ' ');
    let command = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match command {
        ":quit" | ":q" => Some(AppEvent::Shutdown),
        ":help" => Some(AppEvent::ShowHelp),
        ":models" => Some(AppEvent::ListModels),
        ":languages" => Some(AppEvent::ListLanguages),
        ":download" if !arg.is_empty() => Some(AppEvent::DownloadModel(arg.to_string())),
        ":delete" if !arg.is_empty() => Some(AppEvent::DeleteModel(arg.to_string())),
        ":from" if !arg.is_empty() => Some(AppEvent::SetSourceLanguage(arg.to_string())),
        ":to" if !arg.is_empty() => Some(AppEvent::SetTargetLanguage(arg.to_string())),
        _ => Some(AppEvent::ShowError(format!("unknown command: {line}"))),
    }
}
