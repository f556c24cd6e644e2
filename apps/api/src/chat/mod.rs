// Chat: answers recruiter questions from the document corpus and profile.
// Implements: relevance matching, prompt assembly, completion, post-processing.
// All LLM calls go through llm_client, no direct Anthropic calls here.

pub mod handlers;
pub mod post_process;
pub mod presets;
pub mod prompt;
pub mod prompts;
pub mod relevance;
pub mod service;
