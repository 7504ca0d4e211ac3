// src/clusters.rs
use crate::core::types::Syllable;

/// Dorsal stops that can close the left-hand coda. NG never does.
fn is_dorsal_stop(phoneme: &str) -> bool {
    matches!(phoneme, "K" | "G")
}

/// Labial obstruents that can open the right-hand onset.
fn is_labial_obstruent(phoneme: &str) -> bool {
    matches!(phoneme, "P" | "B" | "F" | "V")
}

/// True when some adjacent syllable pair joins a coda ending in a dorsal
/// stop to an onset starting with a labial obstruent, as in break.fast or
/// bag.pipe. One hit is enough; words are reported once.
pub fn has_dorsal_labial_juncture(syllables: &[Syllable]) -> bool {
    syllables.windows(2).any(|pair| {
        pair[0].coda.last().map_or(false, |c| is_dorsal_stop(c))
            && pair[1].onset.first().map_or(false, |o| is_labial_obstruent(o))
    })
}
