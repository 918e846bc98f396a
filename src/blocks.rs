/// The Unicode sub-blocks this crate counts as Chinese: the CJK Unified
/// Ideographs block, its extensions A–H, the compatibility ideographs and
/// their supplement, radicals, strokes, and the ideographic zero 〇.
///
/// Punctuation has no block here, so 「」、。 and friends are never Chinese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    General,
    ExtensionA,
    ExtensionB,
    ExtensionC,
    ExtensionD,
    ExtensionE,
    ExtensionF,
    ExtensionG,
    ExtensionH,
    Compatibility,
    CompatibilitySupplement,
    KangxiRadical,
    RadicalSupplement,
    Stroke,
    Zero,
}

impl Block {
    /// Every block, in table order. Queries scan this array front to back,
    /// so classification results are deterministic.
    pub const ALL: [Block; 15] = [
        Block::General,
        Block::ExtensionA,
        Block::ExtensionB,
        Block::ExtensionC,
        Block::ExtensionD,
        Block::ExtensionE,
        Block::ExtensionF,
        Block::ExtensionG,
        Block::ExtensionH,
        Block::Compatibility,
        Block::CompatibilitySupplement,
        Block::KangxiRadical,
        Block::RadicalSupplement,
        Block::Stroke,
        Block::Zero,
    ];

    /// Half-open code-point interval `[start, end)` covered by this block.
    pub const fn range(self) -> (u32, u32) {
        match self {
            Block::General => (0x4E00, 0x9FFF + 1), // CJK Unified Ideographs
            Block::ExtensionA => (0x3400, 0x4DBF + 1),
            Block::ExtensionB => (0x20000, 0x2A6DF + 1), // B–H need extra fonts to render
            Block::ExtensionC => (0x2A700, 0x2B73F + 1),
            Block::ExtensionD => (0x2B740, 0x2B81F + 1),
            Block::ExtensionE => (0x2B820, 0x2CEAF + 1),
            Block::ExtensionF => (0x2CEB0, 0x2EBEF + 1),
            Block::ExtensionG => (0x30000, 0x3134F + 1),
            Block::ExtensionH => (0x31350, 0x323AF + 1),
            Block::Compatibility => (0xF900, 0xFAFF + 1),
            Block::CompatibilitySupplement => (0x2F800, 0x2FA1F + 1),
            Block::KangxiRadical => (0x2F00, 0x2FDF + 1),
            Block::RadicalSupplement => (0x2E80, 0x2EFF + 1),
            Block::Stroke => (0x31C0, 0x31EF + 1), // CJK Strokes
            Block::Zero => (0x3007, 0x3007 + 1),   // ideographic zero 〇
        }
    }

    pub fn contains(self, ch: char) -> bool {
        let (start, end) = self.range();
        let code = ch as u32;
        start <= code && code < end
    }

    /// The block containing `ch`, if any. Blocks are disjoint, so at most
    /// one can match.
    pub fn of(ch: char) -> Option<Block> {
        Block::ALL.into_iter().find(|block| block.contains(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_well_formed() {
        for block in Block::ALL {
            let (start, end) = block.range();
            assert!(start < end, "empty range for {block:?}");
        }
    }

    #[test]
    fn blocks_are_disjoint() {
        for (i, a) in Block::ALL.iter().enumerate() {
            for b in &Block::ALL[i + 1..] {
                let (a0, a1) = a.range();
                let (b0, b1) = b.range();
                assert!(a1 <= b0 || b1 <= a0, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn both_ends_of_every_block_belong_to_it() {
        for block in Block::ALL {
            let (start, end) = block.range();
            let first = char::from_u32(start).unwrap();
            let last = char::from_u32(end - 1).unwrap();
            assert_eq!(Block::of(first), Some(block), "start of {block:?}");
            assert_eq!(Block::of(last), Some(block), "end of {block:?}");
        }
    }

    #[test]
    fn of_finds_the_owning_block() {
        assert_eq!(Block::of('中'), Some(Block::General));
        assert_eq!(Block::of('〇'), Some(Block::Zero));
        assert_eq!(Block::of('\u{20BA9}'), Some(Block::ExtensionB)); // 𠮩
    }

    #[test]
    fn of_misses_ordinary_text() {
        for ch in ['a', '0', ' ', 'é', '！', '、'] {
            assert_eq!(Block::of(ch), None, "not a hanzi block: {ch:?}");
        }
    }
}
