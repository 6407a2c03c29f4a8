use super::*;

#[test]
fn v_and_r_map_in_either_case() {
    assert_eq!(shortcut_for('v', Modifiers::NONE), Some(Shortcut::ToggleView));
    assert_eq!(shortcut_for('V', Modifiers::NONE), Some(Shortcut::ToggleView));
    assert_eq!(shortcut_for('r', Modifiers::NONE), Some(Shortcut::Reload));
    assert_eq!(shortcut_for('R', Modifiers::NONE), Some(Shortcut::Reload));
}

#[test]
fn shift_alone_does_not_block() {
    let shift = Modifiers { shift: true, ..Modifiers::NONE };
    assert_eq!(shortcut_for('V', shift), Some(Shortcut::ToggleView));
}

#[test]
fn command_modifiers_disable_bindings() {
    for modifiers in [
        Modifiers { ctrl: true, ..Modifiers::NONE },
        Modifiers { meta: true, ..Modifiers::NONE },
        Modifiers { alt: true, ..Modifiers::NONE },
    ] {
        assert_eq!(shortcut_for('v', modifiers), None);
        assert_eq!(shortcut_for('r', modifiers), None);
    }
}

#[test]
fn other_keys_are_unbound() {
    assert_eq!(shortcut_for('x', Modifiers::NONE), None);
    assert_eq!(shortcut_for(' ', Modifiers::NONE), None);
}

#[test]
fn shortcut_table_lists_bound_keys() {
    for row in SHORTCUTS {
        let key = row.key.chars().next().expect("key");
        assert!(shortcut_for(key, Modifiers::NONE).is_some(), "{} should be bound", row.key);
    }
}
