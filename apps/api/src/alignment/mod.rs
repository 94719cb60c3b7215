// Career Alignment Scoring Engine
// Implements: text normalization, synonym resolution, course matching, role scoring.
// The engine is pure and synchronous; only `handlers` touches axum.

pub mod course_matcher;
pub mod defaults;
pub mod handlers;
pub mod knowledge_base;
pub mod normalizer;
pub mod report;
pub mod scorer;
pub mod similarity;
pub mod synonyms;

// Re-export the public API consumed by main, state and the handlers.
pub use knowledge_base::KnowledgeBase;
pub use scorer::{AlignmentEngine, AlignmentScorer};
