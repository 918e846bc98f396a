use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::blocks::Block;

/// Per-block enable flags, one named field per entry of [`Block::ALL`].
/// Everything starts enabled; flip a field off and that block's characters
/// stop counting as Chinese on the next query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Switches {
    pub general: bool,
    pub extension_a: bool,
    pub extension_b: bool,
    pub extension_c: bool,
    pub extension_d: bool,
    pub extension_e: bool,
    pub extension_f: bool,
    pub extension_g: bool,
    pub extension_h: bool,
    pub compatibility: bool,
    pub compatibility_supplement: bool,
    pub kangxi_radical: bool,
    pub radical_supplement: bool,
    pub stroke: bool,
    pub zero: bool,
}

impl Default for Switches {
    fn default() -> Self {
        Switches {
            general: true,
            extension_a: true,
            extension_b: true,
            extension_c: true,
            extension_d: true,
            extension_e: true,
            extension_f: true,
            extension_g: true,
            extension_h: true,
            compatibility: true,
            compatibility_supplement: true,
            kangxi_radical: true,
            radical_supplement: true,
            stroke: true,
            zero: true,
        }
    }
}

impl Switches {
    /// Every block disabled.
    pub fn none() -> Self {
        Switches {
            general: false,
            extension_a: false,
            extension_b: false,
            extension_c: false,
            extension_d: false,
            extension_e: false,
            extension_f: false,
            extension_g: false,
            extension_h: false,
            compatibility: false,
            compatibility_supplement: false,
            kangxi_radical: false,
            radical_supplement: false,
            stroke: false,
            zero: false,
        }
    }

    pub fn enabled(&self, block: Block) -> bool {
        match block {
            Block::General => self.general,
            Block::ExtensionA => self.extension_a,
            Block::ExtensionB => self.extension_b,
            Block::ExtensionC => self.extension_c,
            Block::ExtensionD => self.extension_d,
            Block::ExtensionE => self.extension_e,
            Block::ExtensionF => self.extension_f,
            Block::ExtensionG => self.extension_g,
            Block::ExtensionH => self.extension_h,
            Block::Compatibility => self.compatibility,
            Block::CompatibilitySupplement => self.compatibility_supplement,
            Block::KangxiRadical => self.kangxi_radical,
            Block::RadicalSupplement => self.radical_supplement,
            Block::Stroke => self.stroke,
            Block::Zero => self.zero,
        }
    }
}

/// Decides whether characters are Chinese.
///
/// A character is Chinese when it falls in an enabled [`Block`], unless the
/// per-character overrides say otherwise: `add_extra` admits characters no
/// block covers, `exclude_chr` vetoes characters a block does. The two
/// override sets stay disjoint: inserting a character into one removes it
/// from the other, so the most recent call wins.
#[derive(Debug, Clone, Default)]
pub struct HanziChecker {
    pub switches: Switches,
    extra: HashSet<char>,
    exclude: HashSet<char>,
}

impl HanziChecker {
    pub fn new() -> Self {
        HanziChecker::default()
    }

    /// Treat every character of `chars` as Chinese, overriding block
    /// membership and any earlier `exclude_chr`. Empty input is a no-op.
    pub fn add_extra(&mut self, chars: &str) {
        for ch in chars.chars() {
            self.exclude.remove(&ch);
            self.extra.insert(ch);
        }
    }

    /// Stop treating every character of `chars` as Chinese, overriding block
    /// membership and any earlier `add_extra`. Empty input is a no-op.
    pub fn exclude_chr(&mut self, chars: &str) {
        for ch in chars.chars() {
            self.extra.remove(&ch);
            self.exclude.insert(ch);
        }
    }

    /// The per-character rule: extra wins, then exclude, then the first
    /// enabled block whose range contains `ch`.
    pub fn check_char(&self, ch: char) -> bool {
        if self.extra.contains(&ch) {
            return true;
        }
        if self.exclude.contains(&ch) {
            return false;
        }
        Block::ALL
            .into_iter()
            .any(|block| self.switches.enabled(block) && block.contains(ch))
    }

    /// True if the first character of `s` is Chinese. Trailing characters
    /// are ignored; the empty string is not Chinese.
    pub fn check(&self, s: &str) -> bool {
        match s.chars().next() {
            Some(ch) => self.check_char(ch),
            None => false,
        }
    }

    /// True if at least one character of `s` is Chinese.
    pub fn any(&self, s: &str) -> bool {
        s.chars().any(|ch| self.check_char(ch))
    }

    /// True if `s` is non-empty and every character is Chinese.
    /// The empty string fails; "all Chinese" is not vacuously true here.
    pub fn all(&self, s: &str) -> bool {
        !s.is_empty() && s.chars().all(|ch| self.check_char(ch))
    }

    /// One verdict per character of `s`, in input order.
    pub fn check_series(&self, s: &str) -> Vec<bool> {
        s.chars().map(|ch| self.check_char(ch)).collect()
    }
}
