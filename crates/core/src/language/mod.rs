//! Dictionary text and phrase text handling.

pub mod dictionary;
pub mod tokenize;
