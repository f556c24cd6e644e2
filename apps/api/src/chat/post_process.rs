//! Response Post-Processor — deterministic cleanup of the model's answer.
//!
//! Order: normalize bullets → contact block → portfolio block → collapse blank lines.
//! Total: every input produces an answer string.

use std::sync::OnceLock;

use regex::Regex;

use crate::chat::prompts::{CONTACT_BLOCK_HEADER, LINKEDIN_LABEL, PORTFOLIO_BLOCK_HEADER};
use crate::models::profile::{Contact, PortfolioItem};

/// The single canonical list marker.
pub const BULLET: &str = "- ";

fn list_marker_regex() -> &'static Regex {
    static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
    LIST_MARKER.get_or_init(|| {
        // `*`, `+` or `N.` at line start, then horizontal whitespace.
        Regex::new(r"(?m)^[ \t]*(?:[*+]|\d+\.)[ \t]+").unwrap()
    })
}

fn blank_run_regex() -> &'static Regex {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// Rewrites `* x`, `+ x` and `1. x` list lines to `- x`. Regex-level and
/// approximate: a line starting with `*` used for emphasis and followed by a
/// space is rewritten too.
pub fn normalize_bullets(text: &str) -> String {
    list_marker_regex().replace_all(text, BULLET).into_owned()
}

/// Collapses runs of 3+ newlines to exactly two, then trims the whole string.
pub fn collapse_blank_lines(text: &str) -> String {
    blank_run_regex().replace_all(text, "\n\n").trim().to_string()
}

pub fn contact_block(contact: &Contact) -> String {
    format!(
        "{CONTACT_BLOCK_HEADER}\n{BULLET}Email: {}\n{BULLET}Telefono: {}\n{BULLET}[{LINKEDIN_LABEL}]({})",
        contact.email, contact.phone, contact.linkedin_url
    )
}

pub fn portfolio_block(items: &[&PortfolioItem]) -> String {
    let mut block = PORTFOLIO_BLOCK_HEADER.to_string();
    for item in items {
        block.push_str(&format!("\n{BULLET}[{}]({})", item.title, item.url));
    }
    block
}

pub fn post_process(
    raw_answer: &str,
    contact_requested: bool,
    matched_items: &[&PortfolioItem],
    contact: &Contact,
) -> String {
    let mut answer = normalize_bullets(raw_answer);

    if contact_requested {
        answer.push_str("\n\n");
        answer.push_str(&contact_block(contact));
    }

    if !matched_items.is_empty() {
        answer.push_str("\n\n");
        answer.push_str(&portfolio_block(matched_items));
    }

    collapse_blank_lines(&answer)
}
