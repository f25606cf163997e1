//! Recipe Text Parser — splits a free-text completion into title, description,
//! ingredients, and steps.
//!
//! Pure and infallible: text that doesn't match the expected shape yields
//! empty fields, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Everything between `Ingredients:` and the first following `Steps:`/`Directions:`.
static INGREDIENTS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Ingredients:(.*?)(?:Steps:|Directions:)").expect("Invalid ingredients regex")
});

/// Everything after the first `Steps:`/`Directions:` to the end of the text.
static STEPS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:Steps|Directions):\s*(.+)").expect("Invalid steps regex")
});

/// Step numbering such as `1.`, `12)`, used as a delimiter.
static STEP_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.)]\s*").expect("Invalid step marker regex"));

const TITLE_PREFIX: &str = "Title: ";
const DESCRIPTION_PREFIX: &str = "Description: ";
const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

/// The four display fields extracted from one completion.
/// "Not found" is an empty string or empty list, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl ParsedRecipe {
    /// Steps as displayed in the results view: `"1. Mix"`, `"2. Cook"`, ...
    pub fn numbered_steps(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(idx, step)| format!("{}. {}", idx + 1, step.trim()))
            .collect()
    }

    /// True when neither an ingredients nor a steps section was recognised.
    pub fn is_missing_sections(&self) -> bool {
        self.ingredients.is_empty() && self.steps.is_empty()
    }
}

/// Parses a raw completion. Same input, same output.
pub fn parse(raw_text: &str) -> ParsedRecipe {
    ParsedRecipe {
        title: extract_title(raw_text),
        description: extract_description(raw_text),
        ingredients: extract_ingredients(raw_text),
        steps: extract_steps(raw_text),
    }
}

fn extract_title(raw_text: &str) -> String {
    let first_line = raw_text.split('\n').next().unwrap_or_default();
    first_line
        .strip_prefix(TITLE_PREFIX)
        .unwrap_or(first_line)
        .trim()
        .to_string()
}

/// Lines 2 and 3 of the text, prefix-stripped individually.
fn extract_description(raw_text: &str) -> String {
    raw_text
        .split('\n')
        .skip(1)
        .take(2)
        .map(|line| line.strip_prefix(DESCRIPTION_PREFIX).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// One entry per line of the ingredients section. Blank lines inside the
/// section are kept as empty entries, and only the first entry gets the
/// `"- "` prefix; existing renderers depend on both.
fn extract_ingredients(raw_text: &str) -> Vec<String> {
    let Some(section) = INGREDIENTS_REGEX
        .captures(raw_text)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    let section = section.as_str().trim();
    if section.is_empty() {
        return Vec::new();
    }

    let mut ingredients: Vec<String> = section.split('\n').map(strip_bullet).collect();
    if let Some(first) = ingredients.first_mut() {
        *first = format!("- {first}");
    }
    ingredients
}

fn strip_bullet(line: &str) -> String {
    let line = line.trim_start();
    line.strip_prefix(BULLET_MARKERS)
        .unwrap_or(line)
        .trim()
        .to_string()
}

fn extract_steps(raw_text: &str) -> Vec<String> {
    STEPS_REGEX
        .captures(raw_text)
        .and_then(|caps| caps.get(1))
        .map(|section| split_steps(section.as_str()))
        .unwrap_or_default()
}

/// Splits on step numbering and drops the numbering and empty fragments.
fn split_steps(section: &str) -> Vec<String> {
    STEP_MARKER_REGEX
        .split(section.trim())
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PANCAKES: &str = "Title: Pancakes\nDescription: Fluffy\nmore\nIngredients:\n- flour\n- milk\nSteps:\n1. Mix\n2. Cook";

    // Shaped like a typical chat-model reply, including blank separator lines.
    const SHRIMP_PASTA: &str = "Title: Garlic Butter Shrimp Pasta
Description: A quick weeknight pasta tossed in garlic butter.
Ready in about 20 minutes.

Ingredients:
- 8 oz linguine
- 1 lb shrimp, peeled

- 3 cloves garlic, minced

Steps:
1. Boil the linguine until al dente.
2. Sear the shrimp in butter, then add the garlic.
3. Toss the pasta with the shrimp and serve.";

    #[test]
    fn test_parse_empty_text_is_all_empty() {
        assert_eq!(parse(""), ParsedRecipe::default());
    }

    #[test]
    fn test_parse_pancakes() {
        let recipe = parse(PANCAKES);
        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.description, "Fluffy\nmore");
        assert_eq!(recipe.ingredients, vec!["- flour", "milk"]);
        assert_eq!(recipe.steps, vec!["Mix", "Cook"]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(SHRIMP_PASTA), parse(SHRIMP_PASTA));
    }

    #[test]
    fn test_parse_realistic_reply_keeps_blank_ingredient_lines() {
        let recipe = parse(SHRIMP_PASTA);
        assert_eq!(recipe.title, "Garlic Butter Shrimp Pasta");
        assert_eq!(
            recipe.description,
            "A quick weeknight pasta tossed in garlic butter.\nReady in about 20 minutes."
        );
        assert_eq!(
            recipe.ingredients,
            vec![
                "- 8 oz linguine",
                "1 lb shrimp, peeled",
                "",
                "3 cloves garlic, minced"
            ]
        );
        assert_eq!(
            recipe.steps,
            vec![
                "Boil the linguine until al dente.",
                "Sear the shrimp in butter, then add the garlic.",
                "Toss the pasta with the shrimp and serve."
            ]
        );
    }

    #[test]
    fn test_directions_marker_parses_like_steps() {
        let with_steps = PANCAKES.to_string();
        let with_directions = PANCAKES.replace("Steps:", "Directions:");
        assert_eq!(parse(&with_directions), parse(&with_steps));
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let recipe = parse("Omelette\n\n\nINGREDIENTS:\n* eggs\n* salt\nDIRECTIONS:\n1) Whisk\n2) Fry");
        assert_eq!(recipe.ingredients, vec!["- eggs", "salt"]);
        assert_eq!(recipe.steps, vec!["Whisk", "Fry"]);
    }

    #[test]
    fn test_no_ingredients_marker_still_extracts_steps() {
        let recipe = parse("Title: Toast\nCrunchy.\n\nSteps:\n1. Toast the bread\n2. Butter it");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.steps, vec!["Toast the bread", "Butter it"]);
    }

    #[test]
    fn test_ingredients_without_steps_marker_are_not_extracted() {
        let recipe = parse("Title: Salad\nGreen.\n\nIngredients:\n- lettuce\n- tomato");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert!(recipe.is_missing_sections());
    }

    #[test]
    fn test_empty_ingredients_section_yields_no_entries() {
        let recipe = parse("Title: Water\n\n\nIngredients:\n  \nSteps:\n1. Pour");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.steps, vec!["Pour"]);
    }

    #[test]
    fn test_bullet_glyphs_are_stripped() {
        let recipe = parse("Cake\n\n\nIngredients:\n• sugar\n   * butter\n- eggs\nflour\nSteps: 1. Cream");
        assert_eq!(recipe.ingredients, vec!["- sugar", "butter", "eggs", "flour"]);
        assert_eq!(recipe.steps, vec!["Cream"]);
    }

    #[test]
    fn test_first_ingredient_gets_prefix_even_without_bullet() {
        let recipe = parse("Rice\n\n\nIngredients:\n1 cup rice\n2 cups water\nSteps:\n1. Simmer");
        assert_eq!(recipe.ingredients, vec!["- 1 cup rice", "2 cups water"]);
    }

    #[test]
    fn test_split_steps_with_parenthesis_numbering() {
        assert_eq!(
            split_steps("1) First\n2) Second\n3) Third"),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn test_split_steps_without_numbering_is_one_step() {
        assert_eq!(
            split_steps("Mix everything and bake."),
            vec!["Mix everything and bake."]
        );
    }

    #[test]
    fn test_steps_marker_with_nothing_after_is_empty() {
        assert!(parse("Title: Nothing\nSteps:").steps.is_empty());
        assert!(parse("Title: Nothing\nSteps:   \n\n").steps.is_empty());
    }

    #[test]
    fn test_title_without_prefix_is_trimmed_first_line() {
        let recipe = parse("  Chocolate Chip Cookies  \nChewy.");
        assert_eq!(recipe.title, "Chocolate Chip Cookies");
        assert_eq!(recipe.description, "Chewy.");
    }

    #[test]
    fn test_single_line_has_empty_description() {
        let recipe = parse("Title: Tea");
        assert_eq!(recipe.title, "Tea");
        assert_eq!(recipe.description, "");
    }

    #[test]
    fn test_description_prefix_stripped_only_at_line_start() {
        let recipe = parse("Title: Soup\nDescription: Hearty\nDescription: Warm\nDescription: ignored");
        assert_eq!(recipe.description, "Hearty\nWarm");
    }

    #[test]
    fn test_numbered_steps_start_at_one() {
        let recipe = parse(PANCAKES);
        assert_eq!(recipe.numbered_steps(), vec!["1. Mix", "2. Cook"]);
    }

    #[test]
    fn test_parsed_recipe_serializes_all_fields() {
        let json = serde_json::to_value(ParsedRecipe::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "",
                "description": "",
                "ingredients": [],
                "steps": []
            })
        );
    }
}
