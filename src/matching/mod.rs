//! Fuzzy matching and lookup utilities.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
