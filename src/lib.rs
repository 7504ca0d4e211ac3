// src/lib.rs

pub mod clusters;
pub mod core;
pub mod dictionary;
pub mod persistence;
pub mod scoring;

pub use crate::core::errors::SyllabifyError;
pub use crate::core::syllabifier::{destress, pretty, syllabify};
pub use crate::core::types::{Phoneme, Syllable};
