//! Affiliation classification.
//!
//! Keyword-absence heuristic: an affiliation is non-academic when none of the
//! academic indicator substrings appear in it. The bias is toward
//! over-inclusion: anything unrecognized, including an empty string, counts
//! as non-academic. Government labs and non-profits are known false
//! positives.

/// Substrings that mark an affiliation as academic, matched case-insensitively
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "school of",
    "institute of",
    "academic",
    "hospital",
    "research center",
    "laboratory",
];

/// True if the affiliation contains none of the default academic keywords.
pub fn is_non_academic(affiliation: &str) -> bool {
    is_non_academic_with(affiliation, ACADEMIC_KEYWORDS)
}

/// Keyword set made explicit so the rule list can be extended and tested
/// independently. Total over any input string.
pub fn is_non_academic_with(affiliation: &str, academic_keywords: &[&str]) -> bool {
    let lower = affiliation.to_lowercase();
    !academic_keywords.iter().any(|kw| lower.contains(kw))
}
