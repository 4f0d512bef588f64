//! Fuzzy matching implementation for contact lookup.
//!
//! This module powers the `search` command with:
//! - Exact matching on phone numbers (digit-normalized)
//! - Fuzzy name matching via substring containment and Levenshtein distance
//! - Confidence scoring (0-100 scale)

use crate::models::AddressBook;

/// A match result naming a contact and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The matched contact's name
    pub name: String,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records matching the query.
    ///
    /// A query whose digits equal one of a record's phone numbers is an
    /// exact match (confidence 100). Otherwise the query is scored against
    /// the record's name; scores below `min_confidence` are dropped.
    ///
    /// # Returns
    /// A vector of MatchResult sorted by confidence (highest first, ties by
    /// name) and truncated to `max_results`.
    pub fn find_matches(
        &self,
        query: &str,
        book: &AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = Vec::new();

        for record in book.iter() {
            // Exact phone match takes priority
            if self.match_phone(query, record) {
                results.push(MatchResult {
                    name: record.name().to_string(),
                    confidence: 100,
                    match_type: MatchType::ExactPhone,
                });
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, record.name()) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        name: record.name().to_string(),
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        // Sort by confidence (highest first), then by name
        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });

        results.truncate(max_results);

        results
    }

    /// Whether the query's digits equal one of the record's phones.
    fn match_phone(&self, query: &str, record: &crate::models::Record) -> bool {
        let normalized_query = Self::normalize_phone(query);
        if normalized_query.is_empty() {
            return false;
        }

        record
            .phones()
            .iter()
            .any(|p| Self::normalize_phone(p.as_str()) == normalized_query)
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-100) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact
    /// phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        // Exact match
        if query == target {
            return 95; // Reserve 100 for exact phone matches
        }

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query.len() as f64 / target.len() as f64;
            return (85.0 * ratio + 10.0) as u8; // 85-95 range for contains matches
        }

        if query.contains(target) {
            return 85;
        }

        // Levenshtein distance-based fuzzy matching
        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.len().max(target.len());

        if distance as f64 / max_len as f64 > 0.5 {
            // Too many differences
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8 // Scale to 0-85 range
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let len1 = s1.chars().count();
        let len2 = s2.chars().count();

        if len1 == 0 {
            return len2;
        }
        if len2 == 0 {
            return len1;
        }

        let mut matrix: Vec<Vec<usize>> = vec![vec![0; len2 + 1]; len1 + 1];

        for (i, row) in matrix.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in matrix[0].iter_mut().enumerate() {
            *cell = j;
        }

        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        for (i, c1) in s1_chars.iter().enumerate() {
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1)
                    .min(matrix[i + 1][j] + 1)
                    .min(matrix[i][j] + cost);
            }
        }

        matrix[len1][len2]
    }

    /// Normalize a phone number for comparison.
    ///
    /// Extracts only digits and takes the last 10 (handles country codes).
    pub fn normalize_phone(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > 10 {
            digits[digits.len() - 10..].to_string()
        } else {
            digits
        }
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ContactMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn book_with(entries: &[(&str, &[&str])]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phones) in entries {
            let mut record = Record::new(*name).unwrap();
            for phone in *phones {
                record.add_phone(phone).unwrap();
            }
            book.add_record(record);
        }
        book
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(
            ContactMatcher::normalize_phone("+14155551234"),
            "4155551234"
        );
        assert_eq!(ContactMatcher::normalize_phone("5551234567"), "5551234567");
        assert_eq!(ContactMatcher::normalize_phone("no digits"), "");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(ContactMatcher::normalize_name("  John   Doe "), "john doe");
        assert_eq!(ContactMatcher::normalize_name("JOHN"), "john");
    }

    #[test]
    fn test_exact_phone_match_scores_100() {
        let book = book_with(&[("John", &["+14155551234"]), ("Jane", &["5551234567"])]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("4155551234", &book, 5, 30);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "John");
        assert_eq!(results[0].confidence, 100);
        assert_eq!(results[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_exact_name_match_scores_95() {
        let book = book_with(&[("John", &[])]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("john", &book, 5, 30);
        assert_eq!(results[0].confidence, 95);
        assert_eq!(results[0].match_type, MatchType::FuzzyName);
    }

    #[test]
    fn test_partial_name_matches_by_containment() {
        let book = book_with(&[("Johnathan", &[]), ("Beatrice", &[])]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("john", &book, 5, 30);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Johnathan");
        assert_eq!(results[0].match_type, MatchType::FuzzyName);
    }

    #[test]
    fn test_typo_still_matches() {
        let book = book_with(&[("Margaret", &[])]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("margret", &book, 5, 30);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Margaret");
    }

    #[test]
    fn test_min_confidence_filters() {
        let book = book_with(&[("Margaret", &[])]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("margret", &book, 5, 90);
        assert!(results.is_empty());
    }

    #[test]
    fn test_unrelated_query_finds_nothing() {
        let book = book_with(&[("John", &[]), ("Jane", &[])]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("xyzzy", &book, 5, 30);
        assert!(results.is_empty());
    }

    #[test]
    fn test_max_results_truncates() {
        let book = book_with(&[
            ("Anna", &[]),
            ("Annabel", &[]),
            ("Annika", &[]),
            ("Joanna", &[]),
        ]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("anna", &book, 2, 30);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_results_sorted_by_confidence_then_name() {
        let book = book_with(&[("Annabel", &[]), ("Anna", &[])]);
        let matcher = ContactMatcher::new();

        let results = matcher.find_matches("anna", &book, 5, 30);
        assert_eq!(results[0].name, "Anna");
        assert_eq!(results[1].name, "Annabel");
    }
}
