//! Axum route handlers for the Recipe API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recipe::generator::submit;
use crate::recipe::parser::{parse, ParsedRecipe};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub recipe: ParsedRecipe,
    pub numbered_steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub recipe: ParsedRecipe,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recipes/generate
///
/// Sends the prompt to the completion service and returns the parsed recipe.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let generation_id = Uuid::new_v4();
    let recipe = submit(state.completion.as_ref(), generation_id, &request.prompt).await?;
    let numbered_steps = recipe.numbered_steps();

    Ok(Json(GenerateResponse {
        generation_id,
        recipe,
        numbered_steps,
    }))
}

/// POST /api/v1/recipes/parse
///
/// Parses an already-generated completion without calling the service.
pub async fn handle_parse(Json(request): Json<ParseRequest>) -> Json<ParseResponse> {
    Json(ParseResponse {
        recipe: parse(&request.text),
    })
}
