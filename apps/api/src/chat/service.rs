//! Chat pipeline — orchestrates one recruiter question end to end.
//!
//! Flow: validate → credential check → load corpus + relevance →
//!       build prompt → completion → post-process.
//!
//! Documents are re-read for every question; nothing is cached between requests.

use std::path::PathBuf;

use anyhow::anyhow;
use tracing::{debug, info};

use crate::chat::post_process::post_process;
use crate::chat::prompt::build_prompt;
use crate::chat::prompts::SYSTEM_PROMPT_VERSION;
use crate::chat::relevance::{analyze, DEFAULT_MAX_ITEMS};
use crate::documents::loader::load_corpus;
use crate::errors::AppError;
use crate::llm_client::MODEL;
use crate::state::AppState;

pub async fn answer_question(state: &AppState, question: &str) -> Result<String, AppError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    // Checked before any document IO or external call.
    let llm = state.llm.clone().ok_or(AppError::Configuration)?;

    let corpus = load_corpus_blocking(state.config.documents_dir.clone()).await?;
    let relevance = analyze(&state.profile.portfolio, question, DEFAULT_MAX_ITEMS);
    debug!(
        "Relevance: {} portfolio matches, contact_requested={}",
        relevance.matched_items.len(),
        relevance.contact_requested
    );

    let prompt = build_prompt(&state.profile, question, &corpus, &relevance.matched_items);

    info!(
        "Requesting completion (model: {MODEL}, prompt version: {SYSTEM_PROMPT_VERSION}, corpus: {} chars)",
        corpus.len()
    );
    let raw_answer = llm
        .complete(
            &prompt.system_instructions,
            &prompt.user_message,
            state.config.max_output_tokens,
        )
        .await
        .map_err(|e| AppError::Llm(format!("Chat completion failed: {e}")))?;

    let answer = post_process(
        &raw_answer,
        relevance.contact_requested,
        &relevance.matched_items,
        &state.profile.contact,
    );

    if answer.is_empty() {
        return Err(AppError::Llm("Model answer was blank".to_string()));
    }

    Ok(answer)
}

/// Runs the document loader on the blocking pool.
async fn load_corpus_blocking(dir: PathBuf) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || load_corpus(&dir))
        .await
        .map_err(|e| AppError::Internal(anyhow!("Document loading task failed: {e}")))
}
