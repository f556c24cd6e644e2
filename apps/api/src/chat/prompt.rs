//! Prompt Builder — merges the question, document corpus and matched portfolio
//! items into the system instructions and user message sent to the model.
//!
//! No truncation or token budgeting happens here.

use crate::chat::prompts::{
    CONTEXT_LABEL, NO_DOCUMENTS_PLACEHOLDER, PORTFOLIO_LABEL, QUESTION_LABEL,
    SYSTEM_PROMPT_TEMPLATE,
};
use crate::models::profile::{PortfolioItem, ProfileRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system_instructions: String,
    pub user_message: String,
}

pub fn build_system_instructions(profile: &ProfileRecord) -> String {
    SYSTEM_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{competences}", &profile.competences.join(", "))
        .replace("{strengths}", &profile.strengths.join(", "))
}

/// Question line, then the corpus, then the portfolio section if anything matched.
pub fn build_user_message(question: &str, corpus: &str, matched_items: &[&PortfolioItem]) -> String {
    let corpus = if corpus.trim().is_empty() {
        NO_DOCUMENTS_PLACEHOLDER
    } else {
        corpus
    };

    let mut message = format!("{QUESTION_LABEL} {question}\n\n{CONTEXT_LABEL}\n{corpus}");

    if !matched_items.is_empty() {
        message.push_str("\n\n");
        message.push_str(PORTFOLIO_LABEL);
        for item in matched_items {
            message.push_str(&format!(
                "\n- {} (competenze: {})",
                item.title,
                item.skills.join(", ")
            ));
        }
    }

    message
}

pub fn build_prompt(
    profile: &ProfileRecord,
    question: &str,
    corpus: &str,
    matched_items: &[&PortfolioItem],
) -> Prompt {
    Prompt {
        system_instructions: build_system_instructions(profile),
        user_message: build_user_message(question, corpus, matched_items),
    }
}
