mod blocks;
mod checker;
mod verdict;

pub use blocks::Block;
pub use checker::{HanziChecker, Switches};
pub use verdict::{Query, Verdict};

use once_cell::sync::Lazy;
use wasm_minimal_protocol::*;

initiate_protocol!();

// Default-configured checker behind the plain-text entry points. Plugin
// calls are stateless, so custom switches/overrides go through `classify`.
static CHECKER: Lazy<HanziChecker> = Lazy::new(HanziChecker::new);

/// Input: UTF-8 text. Output: b"true" iff its first character is Chinese.
#[wasm_func]
pub fn check(input: &[u8]) -> Vec<u8> {
    let text = std::str::from_utf8(input).unwrap_or("");
    bool_bytes(CHECKER.check(text))
}

/// Input: UTF-8 text. Output: b"true" iff it contains a Chinese character.
#[wasm_func]
pub fn any(input: &[u8]) -> Vec<u8> {
    let text = std::str::from_utf8(input).unwrap_or("");
    bool_bytes(CHECKER.any(text))
}

/// Input: UTF-8 text. Output: b"true" iff it is non-empty and all Chinese.
#[wasm_func]
pub fn all(input: &[u8]) -> Vec<u8> {
    let text = std::str::from_utf8(input).unwrap_or("");
    bool_bytes(CHECKER.all(text))
}

/// Input: UTF-8 text.
/// Output: JSON array, e.g. b"[{\"char\":\"中\",\"chinese\":true}, ...]"
#[wasm_func]
pub fn check_series(input: &[u8]) -> Vec<u8> {
    let text = std::str::from_utf8(input).unwrap_or("");
    verdict_json(&CHECKER, text)
}

/// Input: a JSON query, e.g.
/// b"{\"text\":\"中a\",\"switches\":{\"general\":false},\"extra\":\"a\"}"
/// Output: the same per-character JSON array as `check_series`, computed
/// under the query's switches and overrides.
#[wasm_func]
pub fn classify(input: &[u8]) -> Vec<u8> {
    let Ok(query) = serde_json::from_slice::<Query>(input) else {
        return b"[]".to_vec();
    };
    verdict_json(&query.checker(), &query.text)
}

fn bool_bytes(value: bool) -> Vec<u8> {
    if value { b"true".to_vec() } else { b"false".to_vec() }
}

fn verdict_json(checker: &HanziChecker, text: &str) -> Vec<u8> {
    let verdicts: Vec<Verdict> = text
        .chars()
        .map(|ch| Verdict {
            chr: ch.to_string(),
            chinese: checker.check_char(ch),
        })
        .collect();

    serde_json::to_string(&verdicts)
        .unwrap_or_else(|_| "[]".to_string())
        .into_bytes()
}
