//! Recipe Generation — orchestrates one generation request.
//!
//! Flow: validate prompt → completion call → parse → return.
//! Nothing is kept between requests.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm_client::prompts::RECIPE_PROMPT_TEMPLATE;
use crate::llm_client::{CompletionService, ServiceError};
use crate::recipe::parser::{parse, ParsedRecipe};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("prompt is empty")]
    EmptyInput,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Builds the user message for a trimmed, non-empty prompt.
pub fn build_user_prompt(user_input: &str) -> String {
    RECIPE_PROMPT_TEMPLATE.replace("{user_input}", user_input)
}

/// Generates and parses one recipe.
///
/// Blank prompts are rejected before the completion service is called.
/// Parsing cannot fail; a reply in an unexpected shape comes back with empty fields.
pub async fn submit(
    completion: &dyn CompletionService,
    generation_id: Uuid,
    user_prompt: &str,
) -> Result<ParsedRecipe, GenerateError> {
    let user_input = user_prompt.trim();
    if user_input.is_empty() {
        return Err(GenerateError::EmptyInput);
    }

    info!(%generation_id, "Generating recipe");

    let raw = completion.generate(&build_user_prompt(user_input)).await?;
    let recipe = parse(&raw);

    if recipe.is_missing_sections() {
        warn!(
            %generation_id,
            "Completion had no recognisable ingredients or steps section"
        );
    }

    info!(
        %generation_id,
        ingredients = recipe.ingredients.len(),
        steps = recipe.steps.len(),
        "Recipe generated"
    );

    Ok(recipe)
}
