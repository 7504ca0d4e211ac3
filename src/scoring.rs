// src/scoring.rs
use crate::core::errors::SyllabifyError;
use crate::core::syllabifier::syllabify;
use crate::core::types::{Phoneme, Syllable};

/// Velar consonants.
fn is_dorsal(phoneme: &str) -> bool {
    matches!(phoneme, "K" | "G" | "NG")
}

/// Liquid consonants.
fn is_liquid(phoneme: &str) -> bool {
    matches!(phoneme, "L" | "R")
}

/// Fricatives and affricates, voiced or voiceless, per the published
/// tables. JH is absent there and stays absent here.
fn is_fricative_or_affricate(phoneme: &str) -> bool {
    matches!(
        phoneme,
        "F" | "TH" | "S" | "SH" | "CH" | "V" | "DH" | "Z" | "ZH"
    )
}

/// The voiced subset of the fricatives and affricates.
fn is_voiced_fricative_or_affricate(phoneme: &str) -> bool {
    matches!(phoneme, "V" | "DH" | "Z" | "ZH")
}

/// True for vowel symbols with rhotic coloring, i.e. ER and its stressed
/// variants. A liaised bare R in a nucleus is a consonant, not one of these.
fn is_rhotic_vowel(phoneme: &str) -> bool {
    phoneme.as_bytes().get(1) == Some(&b'R')
}

/// Computes the Word Complexity Measure of Stoel-Gammon (2010), a
/// point-accumulation score over word shape, stress placement, clusters and
/// sound classes. Higher means harder to produce.
///
/// The word is syllabified with the Alaska rule active; an unsyllabifiable
/// pronunciation propagates its error.
pub fn wcm(pron: &[Phoneme]) -> Result<u32, SyllabifyError> {
    let syllables = syllabify(pron, true)?;
    let mut score = 0u32;

    // Word patterns: length beyond a disyllable.
    if syllables.len() > 2 {
        score += 1;
    }
    // Word patterns: stress off the first syllable. As published this only
    // inspects the final segment of the first nucleus for a primary-stress
    // mark, so a nucleus extended by a liaised R always takes the point.
    // Kept as-is for parity with the published rulebook.
    if syllables.len() > 1 && !first_nucleus_carries_primary_stress(&syllables) {
        score += 1;
    }
    // Syllable structures: a word-final consonant, and every tautosyllabic
    // cluster.
    if syllables.last().map_or(false, |s| !s.coda.is_empty()) {
        score += 1;
    }
    for syllable in &syllables {
        if syllable.onset.len() > 1 {
            score += 1;
        }
        if syllable.coda.len() > 1 {
            score += 1;
        }
    }
    // Sound classes, scored over onsets and codas. A segment can take
    // several points, e.g. Z is both a fricative and voiced. Rhotic vowels
    // score in the nucleus.
    for syllable in &syllables {
        for phoneme in syllable.onset.iter().chain(&syllable.coda) {
            if is_dorsal(phoneme) {
                score += 1;
            }
            if is_liquid(phoneme) {
                score += 1;
            }
            if is_fricative_or_affricate(phoneme) {
                score += 1;
            }
            if is_voiced_fricative_or_affricate(phoneme) {
                score += 1;
            }
        }
        for vowel in &syllable.nucleus {
            if is_rhotic_vowel(vowel) {
                score += 1;
            }
        }
    }
    Ok(score)
}

fn first_nucleus_carries_primary_stress(syllables: &[Syllable]) -> bool {
    syllables[0]
        .nucleus
        .last()
        .map_or(false, |v| v.ends_with('1'))
}
