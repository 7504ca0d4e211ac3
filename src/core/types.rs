// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ARPABET symbol, e.g. "K", "TH" or "AE1". Vowel symbols may carry
/// a trailing stress digit: 0 = unstressed, 1 = primary, 2 = secondary.
pub type Phoneme = String;

/// One syllable of a pronunciation, split into its three slots.
/// Concatenating onset, nucleus and coda of every syllable in order yields
/// the input phoneme sequence back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Consonants preceding the vowel. May be empty.
    pub onset: Vec<Phoneme>,
    /// The vowel, possibly extended by a liaised R or a leading glide.
    /// Never empty.
    pub nucleus: Vec<Phoneme>,
    /// Consonants following the vowel. May be empty.
    pub coda: Vec<Phoneme>,
}

impl Syllable {
    /// All segments of the syllable, in onset, nucleus, coda order.
    pub fn segments(&self) -> impl Iterator<Item = &Phoneme> + '_ {
        self.onset
            .iter()
            .chain(self.nucleus.iter())
            .chain(self.coda.iter())
    }
}

impl fmt::Display for Syllable {
    /// `onset-nucleus-coda` with segments space-separated inside each slot,
    /// e.g. "M-IH1-N", or "-AH0-" for a bare vowel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.onset.join(" "),
            self.nucleus.join(" "),
            self.coda.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph(symbols: &[&str]) -> Vec<Phoneme> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_joins_slots_with_dashes() {
        let syl = Syllable {
            onset: ph(&["S", "T", "R"]),
            nucleus: ph(&["AH0"]),
            coda: ph(&["L"]),
        };
        assert_eq!(syl.to_string(), "S T R-AH0-L");
    }

    #[test]
    fn test_display_keeps_empty_slots_visible() {
        let syl = Syllable {
            onset: vec![],
            nucleus: ph(&["AH0"]),
            coda: vec![],
        };
        assert_eq!(syl.to_string(), "-AH0-");
    }

    #[test]
    fn test_segments_order() {
        let syl = Syllable {
            onset: ph(&["K"]),
            nucleus: ph(&["Y", "UW0"]),
            coda: ph(&["T"]),
        };
        let flat: Vec<Phoneme> = syl.segments().cloned().collect();
        assert_eq!(flat, ph(&["K", "Y", "UW0", "T"]));
    }
}
