//! Emoji occurrence counting.
//!
//! A character counts as an emoji when its code point falls into one of three
//! Unicode blocks:
//!
//! | Block | Range |
//! |-------|-------|
//! | Emoticons (faces, people gestures) | U+1F600 – U+1F64F |
//! | Miscellaneous Symbols and Pictographs | U+1F300 – U+1F5FF |
//! | Transport and Map Symbols | U+1F680 – U+1F6FF |
//!
//! This is an approximation, not a Unicode emoji classifier. Emoji from other
//! blocks (`🤔` U+1F914, `❤` U+2764, flags) are not counted, and multi-code-point
//! sequences count once per in-range code point (a skin tone modifier is in
//! range, a zero-width joiner is not).
//!
//! ```
//! use chatlens::core::emoji::count_emoji;
//!
//! assert_eq!(count_emoji("Great! 😀😀"), 2);
//! assert_eq!(count_emoji("🤔"), 0);
//! ```

use std::ops::RangeInclusive;

/// The inclusive code point ranges that are counted.
pub const EMOJI_RANGES: [RangeInclusive<char>; 3] = [
    '\u{1F600}'..='\u{1F64F}',
    '\u{1F300}'..='\u{1F5FF}',
    '\u{1F680}'..='\u{1F6FF}',
];

/// Returns `true` if `c` lies in one of [`EMOJI_RANGES`].
pub fn is_counted_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|range| range.contains(&c))
}

/// Counts the characters of `text` that lie in [`EMOJI_RANGES`].
pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|&c| is_counted_emoji(c)).count()
}
