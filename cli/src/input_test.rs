use super::*;

#[test]
fn plain_keys_map_to_shortcuts() {
    assert_eq!(parse_command("v"), Some(InputCommand::Shortcut(Shortcut::ToggleView)));
    assert_eq!(parse_command("R\n"), Some(InputCommand::Shortcut(Shortcut::Reload)));
    assert_eq!(parse_command("shift+V"), Some(InputCommand::Shortcut(Shortcut::ToggleView)));
}

#[test]
fn command_modifiers_disable_shortcuts() {
    assert_eq!(parse_command("ctrl+v"), None);
    assert_eq!(parse_command("meta+r"), None);
    assert_eq!(parse_command("Alt+R"), None);
    assert_eq!(parse_command("ctrl+q"), None);
}

#[test]
fn glue_keys() {
    assert_eq!(parse_command("h"), Some(InputCommand::ToggleVisibility));
    assert_eq!(parse_command("Q"), Some(InputCommand::Quit));
}

#[test]
fn noise_is_ignored() {
    assert_eq!(parse_command(""), None);
    assert_eq!(parse_command("reload"), None);
    assert_eq!(parse_command("x"), None);
    assert_eq!(parse_command("hyper+v"), None);
}
