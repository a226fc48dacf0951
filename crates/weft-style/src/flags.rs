//! Style-category flags
//!
//! Every style category (padding, spacing, font color, ...) owns one bit in
//! a 64-bit space split across two 32-bit words. A node's resolution pass
//! folds the flags of applied attributes into a [`Field`] so later passes can
//! ask "has this category already been set?" without scanning the list again.
//!
//! Bit assignments are a closed, hand-numbered table. They must never be
//! renumbered once published.

/// Which of the two 32-bit words a flag lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    First,
    Second,
}

/// A single style-category identifier: a word plus a one-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flag {
    word: Word,
    mask: u32,
}

/// Two-word bitset recording which style categories are set on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Field(u32, u32);

/// Build the flag for category index `i`.
///
/// Indexes 0..=31 land in the first word, 32..=63 in the second. The
/// category table is closed, so an index past 63 is a contract violation
/// and panics rather than clamping.
pub const fn flag(i: u32) -> Flag {
    assert!(i < 64, "flag index out of the closed 0..=63 category table");
    if i > 31 {
        Flag {
            word: Word::Second,
            mask: 1 << (i - 32),
        }
    } else {
        Flag {
            word: Word::First,
            mask: 1 << i,
        }
    }
}

impl Field {
    /// The empty field, created per node before its attribute fold.
    pub const NONE: Field = Field(0, 0);

    /// Returns a new field with `flag`'s bit set. Pure; `self` is unchanged.
    #[must_use]
    pub fn add(self, flag: Flag) -> Field {
        match flag.word {
            Word::First => Field(self.0 | flag.mask, self.1),
            Word::Second => Field(self.0, self.1 | flag.mask),
        }
    }

    /// True iff `flag`'s exact bit pattern is present.
    ///
    /// This is an equality-after-AND check on the stored mask, matching the
    /// published flag encoding.
    pub fn present(self, flag: Flag) -> bool {
        match flag.word {
            Word::First => self.0 & flag.mask == flag.mask,
            Word::Second => self.1 & flag.mask == flag.mask,
        }
    }

    /// Word-wise union of two fields.
    #[must_use]
    pub fn merge(self, other: Field) -> Field {
        Field(self.0 | other.0, self.1 | other.1)
    }
}

// The category table. Order is load-bearing: these indexes are part of the
// generated class-name surface and must stay stable.
pub const TRANSPARENCY: Flag = flag(0);
pub const PADDING: Flag = flag(1);
pub const SPACING: Flag = flag(2);
pub const FONT_SIZE: Flag = flag(3);
pub const FONT_FAMILY: Flag = flag(4);
pub const WIDTH: Flag = flag(5);
pub const HEIGHT: Flag = flag(6);
pub const BG_COLOR: Flag = flag(7);
pub const BG_IMAGE: Flag = flag(8);
pub const BG_GRADIENT: Flag = flag(9);
pub const BORDER_STYLE: Flag = flag(10);
pub const FONT_ALIGNMENT: Flag = flag(11);
pub const FONT_WEIGHT: Flag = flag(12);
pub const FONT_COLOR: Flag = flag(13);
pub const WORD_SPACING: Flag = flag(14);
pub const LETTER_SPACING: Flag = flag(15);
pub const BORDER_ROUND: Flag = flag(16);
pub const TEXT_SHADOWS: Flag = flag(17);
pub const SHADOWS: Flag = flag(18);
pub const OVERFLOW: Flag = flag(19);
pub const CURSOR: Flag = flag(20);
pub const SCALE: Flag = flag(21);
pub const ROTATE: Flag = flag(22);
pub const MOVE_X: Flag = flag(23);
pub const MOVE_Y: Flag = flag(24);
pub const BORDER_WIDTH: Flag = flag(25);
pub const BORDER_COLOR: Flag = flag(26);
pub const Y_ALIGN: Flag = flag(27);
pub const X_ALIGN: Flag = flag(28);
pub const FOCUS: Flag = flag(29);
pub const ACTIVE: Flag = flag(30);
pub const HOVER: Flag = flag(31);
pub const GRID_TEMPLATE: Flag = flag(32);
pub const GRID_POSITION: Flag = flag(33);
pub const HEIGHT_CONTENT: Flag = flag(34);
pub const HEIGHT_FILL: Flag = flag(35);
pub const WIDTH_CONTENT: Flag = flag(36);
pub const WIDTH_FILL: Flag = flag(37);
pub const ALIGN_RIGHT: Flag = flag(38);
pub const ALIGN_BOTTOM: Flag = flag(39);
pub const CENTER_X: Flag = flag(40);
pub const CENTER_Y: Flag = flag(41);
pub const WIDTH_BETWEEN: Flag = flag(42);
pub const HEIGHT_BETWEEN: Flag = flag(43);
pub const BEHIND: Flag = flag(44);
pub const HEIGHT_TEXT_AREA_CONTENT: Flag = flag(45);
pub const FONT_VARIANT: Flag = flag(46);
pub const MOVE_Z: Flag = flag(47);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_roundtrip_all_indexes() {
        for i in 0..64 {
            let f = flag(i);
            let field = Field::NONE.add(f);
            assert!(field.present(f), "flag {i} not present after add");

            for j in 0..64 {
                if j != i {
                    assert!(
                        !field.present(flag(j)),
                        "flag {j} spuriously present after adding {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_word_split_boundary() {
        let last_first = flag(31);
        let first_second = flag(32);
        let field = Field::NONE.add(last_first);
        assert!(field.present(last_first));
        assert!(!field.present(first_second));
    }

    #[test]
    fn test_merge_commutative_and_associative() {
        let a = Field::NONE.add(PADDING).add(GRID_TEMPLATE);
        let b = Field::NONE.add(SPACING).add(HOVER);
        let c = Field::NONE.add(FONT_VARIANT);

        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
    }

    #[test]
    fn test_merge_preserves_both_words() {
        let a = Field::NONE.add(PADDING); // first word
        let b = Field::NONE.add(BEHIND); // second word
        let merged = a.merge(b);
        assert!(merged.present(PADDING));
        assert!(merged.present(BEHIND));
    }

    #[test]
    fn test_add_is_pure() {
        let empty = Field::NONE;
        let _ = empty.add(WIDTH);
        assert_eq!(empty, Field::NONE);
    }

    #[test]
    fn test_named_flags_are_distinct() {
        let named = [
            TRANSPARENCY,
            PADDING,
            SPACING,
            FONT_SIZE,
            FONT_FAMILY,
            WIDTH,
            HEIGHT,
            BG_COLOR,
            BORDER_ROUND,
            TEXT_SHADOWS,
            SHADOWS,
            SCALE,
            ROTATE,
            MOVE_X,
            MOVE_Y,
            MOVE_Z,
            BORDER_WIDTH,
            Y_ALIGN,
            X_ALIGN,
            FOCUS,
            ACTIVE,
            HOVER,
            GRID_TEMPLATE,
            GRID_POSITION,
            FONT_VARIANT,
        ];
        for (i, a) in named.iter().enumerate() {
            for b in &named[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
