use crate::model::scene::{QUIT_COMMAND, QUIT_OPTION};

/// What the player asked for this turn, classified once so prompt
/// selection and precondition checks dispatch on a tag instead of
/// re-inspecting the raw string.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    Quit,
    UseItem(String),
    MenuChoice(String),
    Freeform(String),
}

impl PlayerAction {
    /// Classifies raw player input against the current scene's options.
    /// Both the bare quit command and the full quit option end the
    /// session. The `use <item>` prefix is matched case-insensitively.
    pub fn classify(raw: &str, options: &[String]) -> Self {
        let trimmed = raw.trim();
        if trimmed == QUIT_COMMAND || trimmed == QUIT_OPTION {
            return PlayerAction::Quit;
        }
        if let Some(prefix) = trimmed.get(..4) {
            if prefix.eq_ignore_ascii_case("use ") {
                let item = trimmed[4..].trim();
                if !item.is_empty() {
                    return PlayerAction::UseItem(item.to_string());
                }
            }
        }
        if options.iter().any(|o| o == trimmed) {
            return PlayerAction::MenuChoice(trimmed.to_string());
        }
        PlayerAction::Freeform(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["1. Open the hatch".into(), QUIT_OPTION.into()]
    }

    #[test]
    fn quit_matches_command_and_option() {
        assert_eq!(PlayerAction::classify("q", &options()), PlayerAction::Quit);
        assert_eq!(PlayerAction::classify("q. Quit", &options()), PlayerAction::Quit);
        assert_eq!(PlayerAction::classify(" q ", &options()), PlayerAction::Quit);
    }

    #[test]
    fn use_prefix_is_case_insensitive() {
        assert_eq!(
            PlayerAction::classify("use torch", &options()),
            PlayerAction::UseItem("torch".into())
        );
        assert_eq!(
            PlayerAction::classify("USE torch", &options()),
            PlayerAction::UseItem("torch".into())
        );
    }

    #[test]
    fn bare_use_is_freeform() {
        assert_eq!(
            PlayerAction::classify("use ", &options()),
            PlayerAction::Freeform("use".into())
        );
        assert_eq!(
            PlayerAction::classify("useless flailing", &options()),
            PlayerAction::Freeform("useless flailing".into())
        );
    }

    #[test]
    fn exact_option_match_is_menu_choice() {
        assert_eq!(
            PlayerAction::classify("1. Open the hatch", &options()),
            PlayerAction::MenuChoice("1. Open the hatch".into())
        );
        assert_eq!(
            PlayerAction::classify("open the hatch", &options()),
            PlayerAction::Freeform("open the hatch".into())
        );
    }
}
