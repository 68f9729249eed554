use serde::{Deserialize, Serialize};

/// Option string that ends the session. The generator is required to
/// include it verbatim in every scene it produces.
pub const QUIT_OPTION: &str = "q. Quit";

/// Short form the player may type instead of the full quit option.
pub const QUIT_COMMAND: &str = "q";

/// Where the player currently is: narrative text plus the choices
/// offered for the next turn. Immutable once constructed; the engine
/// replaces it wholesale each turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    description: String,
    options: Vec<String>,
}

impl Scene {
    /// Builds a scene, enforcing the invariants every scene must hold:
    /// a non-empty description and an option list containing the quit
    /// directive. Returns None when the inputs cannot satisfy them.
    pub fn new(description: impl Into<String>, options: Vec<String>) -> Option<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return None;
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return None;
        }
        if !options.iter().any(|o| o == QUIT_OPTION) {
            return None;
        }
        Some(Self { description, options })
    }

    /// The void scene installed when the seed turn cannot reach the
    /// generator. Its only option is the quit directive, so the session
    /// is always left in a state the player can exit.
    pub fn fallback() -> Self {
        Self {
            description: "Something went wrong. You're in a void. Try quitting and restarting."
                .to_string(),
            options: vec![QUIT_OPTION.to_string()],
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_requires_description_and_quit_option() {
        assert!(Scene::new("", vec![QUIT_OPTION.into()]).is_none());
        assert!(Scene::new("A cave.", vec!["1. Go north".into()]).is_none());
        assert!(Scene::new("A cave.", vec!["1. Go north".into(), "".into()]).is_none());

        let scene = Scene::new("A cave.", vec!["1. Go north".into(), QUIT_OPTION.into()]);
        assert!(scene.is_some());
    }

    #[test]
    fn fallback_offers_only_quit() {
        let scene = Scene::fallback();
        assert_eq!(scene.options(), &[QUIT_OPTION.to_string()]);
        assert!(!scene.description().is_empty());
    }
}
