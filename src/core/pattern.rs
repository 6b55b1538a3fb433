//! Feedback evaluation and pattern representation
//!
//! A pattern encodes the feedback for a guess using base-3 encoding:
//! - 0 = Miss (no unconsumed occurrence of the letter remains in the target)
//! - 1 = Present (letter occurs elsewhere in the target)
//! - 2 = Hit (letter matches the target at the same position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. Two patterns are equal exactly
//! when their tile sequences are equal, so the value doubles as a grouping key.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Hit,
    Present,
    Miss,
}

impl Tile {
    const fn digit(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Miss,
        }
    }

    /// Lowercase label used in logs and wire output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Present => "present",
            Self::Miss => "miss",
        }
    }

    /// Square emoji for terminal rendering
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the five tiles as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All hits (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all hits)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Encode a tile sequence
    #[must_use]
    pub fn from_tiles(tiles: [Tile; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for tile in tiles {
            pattern += tile.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode back to the positional tile sequence
    #[must_use]
    pub fn tiles(self) -> [Tile; WORD_LENGTH] {
        let mut tiles = [Tile::Miss; WORD_LENGTH];
        let mut val = self.0;
        for tile in &mut tiles {
            *tile = Tile::from_digit(val % 3);
            val /= 3;
        }
        tiles
    }

    /// Score `guess` against `target`
    ///
    /// Hits are marked first and consume their target letter. Every remaining
    /// position then consumes the leftmost unconsumed occurrence of its letter
    /// in the target, if any, and becomes `Present`. A letter guessed twice
    /// against a target holding it once therefore yields exactly one non-miss.
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::{Pattern, Tile, Word};
    ///
    /// let guess = Word::new("abbey").unwrap();
    /// let target = Word::new("label").unwrap();
    ///
    /// assert_eq!(
    ///     Pattern::score(&guess, &target).tiles(),
    ///     [Tile::Present, Tile::Miss, Tile::Hit, Tile::Hit, Tile::Miss]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut tiles = [Tile::Miss; WORD_LENGTH];
        let mut remaining: [Option<u8>; WORD_LENGTH] = target.chars().map(Some);

        // Allow: Index needed to pair guess[i] with remaining[i] and tiles[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                tiles[i] = Tile::Hit;
                remaining[i] = None;
            }
        }

        for i in 0..WORD_LENGTH {
            if tiles[i] == Tile::Hit {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                tiles[i] = Tile::Present;
                *slot = None;
            }
        }

        Self::from_tiles(tiles)
    }

    /// Count the number of hit tiles
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Hit).count()
    }

    /// Count the number of present tiles
    #[must_use]
    pub fn count_presents(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for hit
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for miss
    ///
    /// # Examples
    /// ```
    /// use wordle_host::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut tiles = [Tile::Miss; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' | '🟩' => Tile::Hit,
                'Y' | 'y' | '🟨' => Tile::Present,
                '-' | '_' | '⬜' => Tile::Miss,
                _ => return None,
            };
        }

        Some(Self::from_tiles(tiles))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tiles().iter().map(|t| t.emoji()).collect()
    }

    /// Comma-separated tile labels, e.g. `miss,hit,hit,miss,hit`
    #[must_use]
    pub fn labels(self) -> String {
        self.tiles()
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Tile::{Hit, Miss, Present};
    use proptest::prelude::*;

    fn score(guess: &str, target: &str) -> [Tile; 5] {
        Pattern::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).tiles()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.tiles(), [Hit; 5]);
        assert_eq!(Pattern::PERFECT.count_hits(), 5);
        assert_eq!(Pattern::PERFECT.count_presents(), 0);
    }

    #[test]
    fn pattern_all_miss() {
        assert_eq!(score("abcde", "fghij"), [Miss; 5]);
    }

    #[test]
    fn pattern_real_example() {
        // R is a miss because SLATE has no R
        assert_eq!(score("crane", "slate"), [Miss, Miss, Hit, Miss, Hit]);
    }

    #[test]
    fn pattern_duplicate_guess_letter_single_in_target() {
        // A(present) B(miss: the only remaining B was consumed by the hit) B(hit) E(hit) Y(miss)
        assert_eq!(score("abbey", "label"), [Present, Miss, Hit, Hit, Miss]);
    }

    #[test]
    fn pattern_duplicate_hit_takes_priority_over_earlier_present() {
        // First O would be present, but the second O's hit claims target[3] first
        // and target[2] is still available for the first O.
        assert_eq!(score("robot", "floor"), [Present, Present, Miss, Hit, Miss]);
    }

    #[test]
    fn pattern_duplicate_only_first_copy_is_present() {
        // SPEED vs ABIDE: one E in target, so only the leftmost unmatched E is present
        assert_eq!(score("speed", "abide"), [Miss, Miss, Present, Miss, Present]);
    }

    #[test]
    fn pattern_three_copies_against_two() {
        assert_eq!(score("eeeab", "xexey"), [Present, Hit, Miss, Miss, Miss]);
    }

    #[test]
    fn pattern_tiles_roundtrip_through_value() {
        let tiles = [Present, Hit, Hit, Miss, Present];
        let pattern = Pattern::from_tiles(tiles);
        // 1 + 2×3 + 2×9 + 0×27 + 1×81 = 106
        assert_eq!(pattern.value(), 106);
        assert_eq!(pattern.tiles(), tiles);
    }

    #[test]
    fn pattern_labels_and_display() {
        let pattern = Pattern::from_tiles([Miss, Hit, Hit, Miss, Hit]);
        assert_eq!(pattern.labels(), "miss,hit,hit,miss,hit");
        assert_eq!(pattern.to_string(), "miss,hit,hit,miss,hit");
        assert_eq!(pattern.to_emoji(), "⬜🟩🟩⬜🟩");
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.tiles(), [Hit, Present, Hit, Miss, Miss]);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GYGGYX").is_none());
        assert!(Pattern::from_str("GYG").is_none());
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::score(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn every_embedded_word_scores_perfect_against_itself() {
        for &text in crate::wordlists::WORDS {
            let w = Word::new(text).unwrap();
            assert!(Pattern::score(&w, &w).is_perfect(), "{text}");
        }
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn score_self_is_perfect(word in word_strategy()) {
            prop_assert_eq!(Pattern::score(&word, &word), Pattern::PERFECT);
        }

        #[test]
        fn non_miss_tiles_never_exceed_target_letter_count(
            guess in word_strategy(),
            target in word_strategy(),
        ) {
            let tiles = Pattern::score(&guess, &target).tiles();
            for letter in b'a'..=b'e' {
                let in_target = target.chars().iter().filter(|&&c| c == letter).count();
                let in_guess = guess.chars().iter().filter(|&&c| c == letter).count();
                let credited = guess
                    .chars()
                    .iter()
                    .zip(tiles)
                    .filter(|&(&c, t)| c == letter && t != Tile::Miss)
                    .count();
                prop_assert_eq!(credited, in_target.min(in_guess));
            }
        }

        #[test]
        fn hits_match_positions_exactly(guess in word_strategy(), target in word_strategy()) {
            let tiles = Pattern::score(&guess, &target).tiles();
            for (i, tile) in tiles.iter().enumerate() {
                prop_assert_eq!(*tile == Tile::Hit, guess.char_at(i) == target.char_at(i));
            }
        }
    }
}
