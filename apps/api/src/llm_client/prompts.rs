// Prompt constants for recipe generation.

/// System instruction sent with every completion request.
pub const RECIPE_SYSTEM: &str = "You are a recipe generator assistant. \
    Provide recipes with a title, description, ingredients, and steps based on the user's prompt.";

/// User message template. Replace `{user_input}` before sending.
pub const RECIPE_PROMPT_TEMPLATE: &str = "Generate a recipe for: {user_input}";
