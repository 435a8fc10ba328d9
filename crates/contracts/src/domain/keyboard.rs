use crate::shared::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
}

/// Map a `KeyboardEvent.key` to a card move.
///
/// Arrow keys follow reading direction, so they are mirrored for Arabic:
/// `ArrowLeft` moves forward in RTL.
pub fn nav_command_for_key(key: &str, language: Language) -> Option<NavCommand> {
    let rtl = language.is_rtl();
    match key {
        "ArrowLeft" if rtl => Some(NavCommand::Next),
        "ArrowLeft" => Some(NavCommand::Previous),
        "ArrowRight" if rtl => Some(NavCommand::Previous),
        "ArrowRight" => Some(NavCommand::Next),
        _ => None,
    }
}

/// Arrow keys typed into a form field belong to the field, not the cards.
pub fn is_editable_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_arrows() {
        assert_eq!(
            nav_command_for_key("ArrowLeft", Language::English),
            Some(NavCommand::Previous)
        );
        assert_eq!(
            nav_command_for_key("ArrowRight", Language::English),
            Some(NavCommand::Next)
        );
    }

    #[test]
    fn test_rtl_arrows_are_mirrored() {
        assert_eq!(
            nav_command_for_key("ArrowLeft", Language::Arabic),
            Some(NavCommand::Next)
        );
        assert_eq!(
            nav_command_for_key("ArrowRight", Language::Arabic),
            Some(NavCommand::Previous)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in ["Tab", "Enter", "ArrowUp", "a", ""] {
            assert_eq!(nav_command_for_key(key, Language::English), None);
            assert_eq!(nav_command_for_key(key, Language::Arabic), None);
        }
    }

    #[test]
    fn test_editable_targets() {
        assert!(is_editable_target("INPUT", false));
        assert!(is_editable_target("TEXTAREA", false));
        assert!(is_editable_target("select", false));
        assert!(is_editable_target("DIV", true));
        assert!(!is_editable_target("BUTTON", false));
        assert!(!is_editable_target("BODY", false));
    }
}
