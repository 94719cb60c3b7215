//! Role synonym table — maps normalized job titles onto canonical role buckets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::alignment::knowledge_base::KnowledgeBaseError;
use crate::alignment::normalizer::normalize_title;

/// One bucket as it appears in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleBucketConfig {
    pub bucket: String,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone)]
struct RoleBucket {
    name: String,
    synonyms: HashSet<String>,
}

/// Ordered bucket list. Lookup walks buckets in definition order and the first
/// bucket containing the title wins.
#[derive(Debug, Clone, Default)]
pub struct RoleSynonymTable {
    buckets: Vec<RoleBucket>,
}

impl RoleSynonymTable {
    /// Builds the table, rejecting blank or duplicate bucket names and synonyms
    /// that are not already in `normalize_title` form.
    pub fn new(config: Vec<RoleBucketConfig>) -> Result<Self, KnowledgeBaseError> {
        let mut seen = HashSet::new();
        let mut buckets = Vec::with_capacity(config.len());

        for entry in config {
            let name = entry.bucket.trim().to_string();
            if name.is_empty() {
                return Err(KnowledgeBaseError::BlankBucket);
            }
            if !seen.insert(name.clone()) {
                return Err(KnowledgeBaseError::DuplicateBucket(name));
            }

            let mut synonyms = HashSet::with_capacity(entry.synonyms.len());
            for synonym in entry.synonyms {
                if synonym.is_empty() || normalize_title(Some(synonym.as_str())) != synonym {
                    return Err(KnowledgeBaseError::SynonymNotNormalized {
                        bucket: name,
                        synonym,
                    });
                }
                synonyms.insert(synonym);
            }

            buckets.push(RoleBucket { name, synonyms });
        }

        Ok(Self { buckets })
    }

    /// Returns the bucket whose synonym set contains `normalized_title` exactly,
    /// or `normalized_title` itself when no bucket claims it.
    pub fn resolve_role<'a>(&'a self, normalized_title: &'a str) -> &'a str {
        self.buckets
            .iter()
            .find(|bucket| bucket.synonyms.contains(normalized_title))
            .map(|bucket| bucket.name.as_str())
            .unwrap_or(normalized_title)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str, synonyms: &[&str]) -> RoleBucketConfig {
        RoleBucketConfig {
            bucket: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolves_synonym_to_bucket() {
        let table = RoleSynonymTable::new(vec![bucket(
            "developer",
            &["software developer", "software engineer"],
        )])
        .unwrap();
        assert_eq!(table.resolve_role("software engineer"), "developer");
    }

    #[test]
    fn test_unknown_title_is_its_own_role() {
        let table =
            RoleSynonymTable::new(vec![bucket("developer", &["software developer"])]).unwrap();
        assert_eq!(table.resolve_role("barista"), "barista");
    }

    #[test]
    fn test_exact_match_only() {
        let table =
            RoleSynonymTable::new(vec![bucket("developer", &["software developer"])]).unwrap();
        assert_eq!(
            table.resolve_role("jr software developer"),
            "jr software developer"
        );
        assert_eq!(table.resolve_role("software"), "software");
    }

    #[test]
    fn test_first_bucket_in_definition_order_wins() {
        let table = RoleSynonymTable::new(vec![
            bucket("analyst", &["systems analyst"]),
            bucket("systems", &["systems analyst"]),
        ])
        .unwrap();
        assert_eq!(table.resolve_role("systems analyst"), "analyst");
    }

    #[test]
    fn test_empty_table_passes_titles_through() {
        let table = RoleSynonymTable::default();
        assert!(table.is_empty());
        assert_eq!(table.resolve_role("nurse"), "nurse");
    }

    #[test]
    fn test_rejects_duplicate_bucket() {
        let err = RoleSynonymTable::new(vec![
            bucket("nurse", &["rn"]),
            bucket("nurse", &["staff nurse"]),
        ])
        .unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::DuplicateBucket(name) if name == "nurse"));
    }

    #[test]
    fn test_rejects_blank_bucket() {
        let err = RoleSynonymTable::new(vec![bucket("  ", &["rn"])]).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::BlankBucket));
    }

    #[test]
    fn test_rejects_synonym_not_in_normalized_form() {
        let err = RoleSynonymTable::new(vec![bucket("developer", &["Senior Developer"])])
            .unwrap_err();
        assert!(matches!(
            err,
            KnowledgeBaseError::SynonymNotNormalized { synonym, .. } if synonym == "Senior Developer"
        ));
    }

    #[test]
    fn test_rejects_synonym_that_loses_stop_tokens() {
        // "it specialist" normalizes to "it" and could never be looked up
        let err = RoleSynonymTable::new(vec![bucket("it support", &["it specialist"])])
            .unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::SynonymNotNormalized { .. }));
    }
}
