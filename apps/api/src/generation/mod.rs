// Generation core: category/tone model, instruction table, prompt resolver,
// and the /api/generate handler. All provider calls go through llm_client —
// no direct OpenAI calls here.

pub mod handlers;
pub mod prompts;
pub mod resolver;
pub mod tone;
