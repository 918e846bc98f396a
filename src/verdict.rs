use serde::{Deserialize, Serialize};

use crate::checker::{HanziChecker, Switches};

/// One per-character classification result, as emitted by the plugin's
/// `check_series` and `classify` entry points.
#[derive(Debug, Serialize, Clone)]
pub struct Verdict {
    #[serde(rename = "char")]
    pub chr: String,
    pub chinese: bool,
}

/// A one-shot classification request for the plugin boundary. Plugin calls
/// are stateless, so the switch and override state travels with the text.
///
/// A character listed in both `extra` and `exclude` ends up excluded:
/// `exclude` is applied last, same as calling `add_extra` then `exclude_chr`.
#[derive(Debug, Deserialize)]
pub struct Query {
    pub text: String,
    #[serde(default)]
    pub switches: Switches,
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub exclude: String,
}

impl Query {
    /// Build the checker this query describes.
    pub fn checker(&self) -> HanziChecker {
        let mut checker = HanziChecker::new();
        checker.switches = self.switches.clone();
        checker.add_extra(&self.extra);
        checker.exclude_chr(&self.exclude);
        checker
    }
}
