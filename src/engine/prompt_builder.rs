use crate::model::action::PlayerAction;
use crate::model::scene::{Scene, QUIT_OPTION};

/// Builds the text sent to the generator.
/// This module is intentionally dumb: it only formats strings.
/// No parsing, no networking, no engine logic.
pub fn build_seed_prompt(theme: &str) -> String {
    let mut prompt = String::new();

    push_role_line(&mut prompt, theme);
    prompt.push_str("This is the starting point. ");
    push_contract(
        &mut prompt,
        "initial scene description",
        "array of items to add, if any",
    );
    prompt.push_str("Keep it immersive.\n");

    prompt
}

/// Builds the prompt for one turn. The wording differs per action kind
/// but the demanded JSON contract is identical in all three.
pub fn build_turn_prompt(
    theme: &str,
    scene: &Scene,
    action: &PlayerAction,
    inventory: &[String],
) -> String {
    let mut prompt = String::new();

    push_role_line(&mut prompt, theme);
    push_situation(&mut prompt, scene, inventory);

    match action {
        PlayerAction::UseItem(item) => {
            prompt.push_str(&format!("They chose to use the item: '{}'.\n", item));
            prompt.push_str(
                "Interpret this action creatively against the current scene and inventory. ",
            );
            push_contract(
                &mut prompt,
                "new scene description",
                "array of items to add or remove, e.g., '-torch' to remove torch",
            );
        }
        PlayerAction::MenuChoice(choice) => {
            prompt.push_str(&format!("They chose the predefined option: '{}'.\n", choice));
            push_contract(
                &mut prompt,
                "new scene description",
                "array of items to add, if any",
            );
        }
        PlayerAction::Freeform(text) => {
            prompt.push_str(&format!("They entered a custom action: '{}'.\n", text));
            prompt.push_str(
                "Interpret this action creatively in the context of the current scene and theme. ",
            );
            push_contract(
                &mut prompt,
                "new scene description based on the action",
                "array of items to add, if any",
            );
        }
        // Quit never reaches the generator; the engine handles it first.
        PlayerAction::Quit => {}
    }

    prompt.push_str("Keep it immersive.\n");

    prompt
}

fn push_role_line(prompt: &mut String, theme: &str) {
    prompt.push_str(&format!(
        "You are the narrator of a text adventure game. The adventure theme is: '{}'.\n",
        theme
    ));
}

fn push_situation(prompt: &mut String, scene: &Scene, inventory: &[String]) {
    prompt.push_str(&format!("The player is at: '{}'. ", scene.description()));
    prompt.push_str(&format!("Their inventory is: [{}].\n", inventory.join(", ")));
}

fn push_contract(prompt: &mut String, description_hint: &str, updates_hint: &str) {
    prompt.push_str(&format!(
        "Provide a JSON response with 'description' ({}), \
'options' (array of 2-3 options including '{}'), \
and 'inventoryUpdates' ({}).\n",
        description_hint, QUIT_OPTION, updates_hint
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(
            "A torchlit corridor.",
            vec!["1. Go deeper".into(), QUIT_OPTION.into()],
        )
        .unwrap()
    }

    #[test]
    fn seed_prompt_names_theme_and_contract() {
        let prompt = build_seed_prompt("Sunken City");
        assert!(prompt.contains("'Sunken City'"));
        assert!(prompt.contains("starting point"));
        assert!(prompt.contains("'description'"));
        assert!(prompt.contains("'options'"));
        assert!(prompt.contains(QUIT_OPTION));
        assert!(prompt.contains("'inventoryUpdates'"));
    }

    #[test]
    fn turn_variants_word_the_action_differently() {
        let inv = vec!["torch".to_string()];

        let use_item = build_turn_prompt(
            "Sunken City",
            &scene(),
            &PlayerAction::UseItem("torch".into()),
            &inv,
        );
        let menu = build_turn_prompt(
            "Sunken City",
            &scene(),
            &PlayerAction::MenuChoice("1. Go deeper".into()),
            &inv,
        );
        let freeform = build_turn_prompt(
            "Sunken City",
            &scene(),
            &PlayerAction::Freeform("lick the wall".into()),
            &inv,
        );

        assert!(use_item.contains("use the item: 'torch'"));
        assert!(use_item.contains("'-torch' to remove"));
        assert!(menu.contains("predefined option: '1. Go deeper'"));
        assert!(freeform.contains("custom action: 'lick the wall'"));

        for prompt in [&use_item, &menu, &freeform] {
            assert!(prompt.contains("The player is at: 'A torchlit corridor.'"));
            assert!(prompt.contains("[torch]"));
            assert!(prompt.contains(QUIT_OPTION));
        }
    }
}
