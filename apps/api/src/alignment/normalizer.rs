//! Text normalization for free-text job titles and course names.
//!
//! Both normalizers share the same first pass (lower-case, keep only `a-z` and
//! whitespace) but strip different noise tokens afterwards. Job titles lose
//! seniority/qualifier words; course strings lose degree prefixes. A course
//! named "Lead Auditing" keeps "lead".

/// Whole-word seniority and qualifier tokens removed from job titles.
///
/// "jr" / "sr" are not in this list.
pub const SENIORITY_TOKENS: &[&str] = &[
    "junior",
    "senior",
    "lead",
    "ii",
    "iii",
    "iv",
    "v",
    "specialist",
    "officer",
];

/// Degree prefixes removed from course strings, tried in this order at every
/// token position. Multi-word phrases are matched as whole token sequences.
pub const DEGREE_PREFIXES: &[&[&str]] = &[
    &["bs"],
    &["bsc"],
    &["bachelor", "of", "science", "in"],
    &["bachelor", "in"],
    &["bachelor"],
];

/// Normalizes a job title. `None` or blank input yields an empty string.
pub fn normalize_title(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    // split/join collapses internal whitespace runs as well as trimming, so
    // "software  engineer" and "software engineer" resolve to the same bucket
    strip_to_letters(text)
        .split_whitespace()
        .filter(|token| !SENIORITY_TOKENS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a course name. `None` or blank input yields an empty string.
pub fn normalize_course(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let stripped = strip_to_letters(text);
    let tokens: Vec<&str> = stripped.split_whitespace().collect();
    let mut kept = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        match DEGREE_PREFIXES
            .iter()
            .find(|prefix| tokens[i..].starts_with(prefix))
        {
            Some(prefix) => i += prefix.len(),
            None => {
                kept.push(tokens[i]);
                i += 1;
            }
        }
    }

    kept.join(" ")
}

/// Lower-cases and drops every character that is not `a-z` or whitespace.
fn strip_to_letters(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_and_blank_titles_are_empty() {
        assert_eq!(normalize_title(None), "");
        assert_eq!(normalize_title(Some("")), "");
        assert_eq!(normalize_title(Some("   ")), "");
    }

    #[test]
    fn test_title_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize_title(Some("Software-Developer (Remote) #2!")),
            "softwaredeveloper remote"
        );
        assert_eq!(normalize_title(Some("C++ Programmer")), "c programmer");
    }

    #[test]
    fn test_title_removes_seniority_tokens() {
        assert_eq!(
            normalize_title(Some("Senior Software Engineer")),
            "software engineer"
        );
        assert_eq!(normalize_title(Some("Lead Developer III")), "developer");
        assert_eq!(normalize_title(Some("IT Support Specialist")), "it support");
        assert_eq!(normalize_title(Some("Police Officer")), "police");
    }

    #[test]
    fn test_title_only_strips_whole_words() {
        // "leader" and "vice" contain stop tokens but are not stop tokens
        assert_eq!(normalize_title(Some("Team Leader")), "team leader");
        assert_eq!(normalize_title(Some("Vice President")), "vice president");
    }

    #[test]
    fn test_title_keeps_jr_abbreviation() {
        assert_eq!(
            normalize_title(Some("Jr. Software Developer")),
            "jr software developer"
        );
        assert_eq!(normalize_title(Some("Sr. Accountant")), "sr accountant");
    }

    #[test]
    fn test_title_collapses_internal_whitespace() {
        assert_eq!(
            normalize_title(Some("  Software   Senior  Engineer ")),
            "software engineer"
        );
    }

    #[test]
    fn test_title_drops_non_ascii_letters() {
        assert_eq!(normalize_title(Some("Café Manager")), "caf manager");
    }

    #[test]
    fn test_course_removes_degree_prefixes() {
        assert_eq!(
            normalize_course(Some("Bachelor of Science in Accountancy")),
            "accountancy"
        );
        assert_eq!(
            normalize_course(Some("BS in Information Technology")),
            "in information technology"
        );
        assert_eq!(normalize_course(Some("BSc Nursing")), "nursing");
        assert_eq!(normalize_course(Some("Bachelor in Music")), "music");
        assert_eq!(
            normalize_course(Some("Bachelor of Secondary Education")),
            "of secondary education"
        );
    }

    #[test]
    fn test_course_keeps_abbreviations_and_seniority_words() {
        assert_eq!(normalize_course(Some("BSIT")), "bsit");
        assert_eq!(normalize_course(Some("Lead Auditing")), "lead auditing");
    }

    #[test]
    fn test_course_none_and_prefix_only_are_empty() {
        assert_eq!(normalize_course(None), "");
        assert_eq!(normalize_course(Some("B.S.")), "");
        assert_eq!(normalize_course(Some("Bachelor")), "");
    }
}
