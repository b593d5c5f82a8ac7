use honyaku_types::AppEvent;
use kanal::AsyncReceiver;

/// Render loop: prints app events to the terminal.
pub async fn render_loop(ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = ui_rx.recv().await?;

        match event {
            AppEvent::ShowTranslation {
                text,
                from_lang,
                to_lang,
            } => println!("[{from_lang} -> {to_lang}] {text}"),
            AppEvent::ShowModels(models) => {
                if models.is_empty() {
                    println!("no models downloaded");
                }
                for model in models {
                    println!("{}  {}", model.language.code(), model.language.name());
                }
            }
            AppEvent::ShowLanguages(languages) => {
                for info in languages {
                    let marker = if info.downloaded { "  [downloaded]" } else { "" };
                    println!("{}  {}{}", info.language.code(), info.language.name(), marker);
                }
            }
            AppEvent::ModelStatusUpdate { status, .. } => println!("* {status}"),
            AppEvent::ShowError(message) => eprintln!("error: {message}"),
            AppEvent::ShowHelp => print_help(),
            AppEvent::Shutdown => return Ok(()),
            _ => {}
        }
    }
}

fn print_help() {
    println!("  <text>            translate with the current language pair");
    println!("  :from <code>      set the source language");
    println!("  :to <code>        set the target language");
    println!("  :models           list downloaded models");
    println!("  :languages        list every supported language");
    println!("  :download <code>  download a language model");
    println!("  :delete <code>    delete a language model");
    println!("  :help             show this help");
    println!("  :quit             exit");
}
