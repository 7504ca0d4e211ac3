// src/core/errors.rs
use thiserror::Error;

use crate::core::types::Phoneme;

/// Failure modes of syllabification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyllabifyError {
    /// The pronunciation contains no vowel, so no syllable can be formed.
    #[error("pronunciation has no vowel nucleus: {0:?}")]
    NoSyllabicNucleus(Vec<Phoneme>),

    /// The finished syllabification does not flatten back to its input.
    /// The splitting rules only move segments between adjacent slots, so
    /// this indicates a defect in the splitter, not a bad pronunciation.
    #[error("syllabification does not rebuild its input: got {reconstruction:?}, expected {input:?}")]
    ReconstructionMismatch {
        input: Vec<Phoneme>,
        reconstruction: Vec<Phoneme>,
    },
}
