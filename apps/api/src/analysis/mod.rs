// Resume analysis: prompt templates, prompt rendering, and the handlers that
// send rendered prompts to the completion service.
// All completion calls go through llm_client.

pub mod builder;
pub mod handlers;
pub mod prompts;
