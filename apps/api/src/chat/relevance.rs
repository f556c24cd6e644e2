//! Relevance Matcher — picks portfolio items and detects contact intent from the question.
//!
//! Pure keyword matching, no LLM calls. Matching is first-N in declared order:
//! categories in `PortfolioCategory::ORDER`, items as declared, stop at `max_items`.

use crate::models::profile::{Portfolio, PortfolioItem};

/// Default cap on suggested portfolio items.
pub const DEFAULT_MAX_ITEMS: usize = 2;

/// Italian stems for contact, call, phone, email, interview, meet, talk, discuss.
const CONTACT_KEYWORDS: &[&str] = &[
    "contatt",
    "chiamar",
    "chiamat",
    "telefon",
    "email",
    "e-mail",
    "colloquio",
    "incontr",
    "parliamo",
    "sentirci",
    "discuter",
    "discutiamo",
];

/// What the question asks for, derived purely from its text.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceResult<'a> {
    pub matched_items: Vec<&'a PortfolioItem>,
    pub contact_requested: bool,
}

pub fn analyze<'a>(portfolio: &'a Portfolio, question: &str, max_items: usize) -> RelevanceResult<'a> {
    RelevanceResult {
        matched_items: find_relevant_portfolio(portfolio, question, max_items),
        contact_requested: is_contact_intent(question),
    }
}

/// Returns at most `max_items` items whose skill tags appear in the question, or
/// whose title contains one of the question's whitespace-delimited tokens.
pub fn find_relevant_portfolio<'a>(
    portfolio: &'a Portfolio,
    question: &str,
    max_items: usize,
) -> Vec<&'a PortfolioItem> {
    if max_items == 0 {
        return Vec::new();
    }

    let question_lower = question.to_lowercase();
    let tokens: Vec<&str> = question_lower.split_whitespace().collect();

    let mut matched = Vec::new();
    for item in portfolio.iter_ordered() {
        if item_matches(item, &question_lower, &tokens) {
            matched.push(item);
            if matched.len() == max_items {
                break;
            }
        }
    }
    matched
}

fn item_matches(item: &PortfolioItem, question_lower: &str, tokens: &[&str]) -> bool {
    let skill_hit = item
        .skills
        .iter()
        .filter(|s| !s.is_empty())
        .any(|s| question_lower.contains(&s.to_lowercase()));
    if skill_hit {
        return true;
    }

    let title_lower = item.title.to_lowercase();
    tokens.iter().any(|t| title_lower.contains(t))
}

/// Case-insensitive substring test against the contact keyword stems.
pub fn is_contact_intent(question: &str) -> bool {
    let question_lower = question.to_lowercase();
    CONTACT_KEYWORDS.iter().any(|kw| question_lower.contains(kw))
}
