use std::sync::LazyLock;

use rand::{Rng, seq::SliceRandom};
use regex::Regex;

use crate::domain::llm::entities::ChatMessage;

pub const MAX_SUGGESTIONS: usize = 5;

const SYSTEM_PROMPT: &str =
    "You are a helpful cooking assistant. Provide clear, practical cooking advice.";

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•\d.)]+\s*").expect("valid list marker regex"));

pub fn suggestion_messages(ingredients: Option<&[String]>) -> Vec<ChatMessage> {
    let prompt = match ingredients {
        Some(ingredients) => format!(
            "Suggest exactly 5 delicious meals that can be cooked using some or all of these ingredients: {}. \
             Just list the meal names, one per line, no extra text or numbering.",
            ingredients.join(", ")
        ),
        None => "Suggest exactly 5 popular, delicious meals that people love to cook at home. \
                 Just list the meal names, one per line, no extra text or numbering."
            .to_string(),
    };

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)]
}

/// Turns newline-separated model output into at most five meal names.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Random subset of the cached pool, shuffled then truncated.
pub fn sample_suggestions<R: Rng + ?Sized>(mut pool: Vec<String>, rng: &mut R) -> Vec<String> {
    pool.shuffle(rng);
    pool.truncate(MAX_SUGGESTIONS);
    pool
}
