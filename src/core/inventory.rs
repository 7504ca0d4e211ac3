// src/core/inventory.rs
//
// Fixed ARPABET classification tables used by the syllabifier. These are
// lookup predicates over string symbols, no state involved.

/// Removes the trailing stress digit from a vowel symbol, if present.
/// Consonants and already-bare vowels pass through unchanged.
pub fn strip_stress(phoneme: &str) -> &str {
    match phoneme.as_bytes().last() {
        Some(b'0' | b'1' | b'2') => &phoneme[..phoneme.len() - 1],
        _ => phoneme,
    }
}

/// True for the fifteen ARPABET vowel symbols, with or without a stress
/// digit. Everything else (consonants, unknown symbols) is false.
pub fn is_vowel(phoneme: &str) -> bool {
    matches!(
        strip_stress(phoneme),
        "AA" | "AE" | "AH" | "AO" | "AW" | "AY" | "EH" | "ER" | "EY" | "IH" | "IY" | "OW"
            | "OY" | "UH" | "UW"
    )
}

/// True for the stressed lax vowels. Only these trigger the Alaska rule;
/// the unstressed forms and the tense vowels never do.
pub fn is_lax(phoneme: &str) -> bool {
    matches!(
        phoneme,
        "IH1" | "IH2" | "EH1" | "EH2" | "AE1" | "AE2" | "AH1" | "AH2" | "UH1" | "UH2"
    )
}

/// True for consonant pairs admissible as a two-segment medial onset.
/// This is a curated whitelist of the clusters worth maximizing between
/// vowels, not a complete inventory of English onsets.
pub fn is_licit_medial_onset2(first: &str, second: &str) -> bool {
    matches!(
        (first, second),
        ("P", "R")
            | ("T", "R")
            | ("K", "R")
            | ("B", "R")
            | ("D", "R")
            | ("G", "R")
            | ("F", "R")
            | ("TH", "R")
            | ("P", "L")
            | ("K", "L")
            | ("B", "L")
            | ("G", "L")
            | ("F", "L")
            | ("S", "L")
            | ("K", "W")
            | ("G", "W")
            | ("S", "W")
            | ("S", "P")
            | ("S", "T")
            | ("S", "K")
            | ("HH", "Y") // "clerihew"
            | ("R", "W") // "octroi"
    )
}

/// True for consonant triples admissible as a three-segment medial onset.
/// Checked only after the trailing pair already passed the two-segment test.
pub fn is_licit_medial_onset3(first: &str, second: &str, third: &str) -> bool {
    matches!((first, second, third), ("S", "T", "R") | ("T", "R", "W"))
}
