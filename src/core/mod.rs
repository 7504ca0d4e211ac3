// src/core/mod.rs
pub mod errors;
pub mod inventory;
pub mod syllabifier;
pub mod types;
