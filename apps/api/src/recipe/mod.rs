// Recipe generation: completion call, text parsing, HTTP handlers.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod parser;
