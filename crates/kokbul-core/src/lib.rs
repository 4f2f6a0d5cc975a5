//! Shared types for the kokbul Turkish morphological analyzer.
//!
//! - [`alphabet`] -- Turkish alphabet classification, vowel harmony, case folding
//! - [`category`] -- lexical category tags (noun / verb)
//! - [`analysis`] -- decomposition candidates and deterministic result sets

pub mod alphabet;
pub mod analysis;
pub mod category;
