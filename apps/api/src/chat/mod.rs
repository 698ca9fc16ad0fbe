// Chat assistant: request validation, system directive, streaming relay.
// All upstream calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod relay;
