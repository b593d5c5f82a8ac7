use honyaku_types::AppEvent;

use crate::io::parse_line;

#[test]
fn plain_text_becomes_text_input() {
    match parse_line("Hello, how are you today?") {
        Some(AppEvent::TextInput(text)) => assert_eq!(text, "Hello, how are you today?"),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn blank_lines_are_ignored() {
    assert!(parse_line("").is_none());
    assert!(parse_line("   ").is_none());
}

#[test]
fn quit_aliases() {
    assert!(matches!(parse_line(":quit"), Some(AppEvent::Shutdown)));
    assert!(matches!(parse_line(":q"), Some(AppEvent::Shutdown)));
}

#[test]
fn commands_with_arguments() {
    assert!(matches!(
        parse_line(":download es"),
        Some(AppEvent::DownloadModel(code)) if code == "es"
    ));
    assert!(matches!(
        parse_line(":delete fr"),
        Some(AppEvent::DeleteModel(code)) if code == "fr"
    ));
    assert!(matches!(
        parse_line(":from ja"),
        Some(AppEvent::SetSourceLanguage(code)) if code == "ja"
    ));
    assert!(matches!(
        parse_line(":to de"),
        Some(AppEvent::SetTargetLanguage(code)) if code == "de"
    ));
}

#[test]
fn listing_commands() {
    assert!(matches!(parse_line(":models"), Some(AppEvent::ListModels)));
    assert!(matches!(
        parse_line(":languages"),
        Some(AppEvent::ListLanguages)
    ));
    assert!(matches!(parse_line(":help"), Some(AppEvent::ShowHelp)));
}

#[test]
fn command_without_required_argument_is_unknown() {
    assert!(matches!(
        parse_line(":download"),
        Some(AppEvent::ShowError(_))
    ));
}

#[test]
fn unknown_command_reports_error() {
    match parse_line(":frobnicate") {
        Some(AppEvent::ShowError(message)) => assert!(message.contains(":frobnicate")),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert!(matches!(
        parse_line("  :download es  "),
        Some(AppEvent::DownloadModel(code)) if code == "es"
    ));
}
