//! Diabetes risk assessment engine.
//!
//! Notes are normalized and tokenized, tokens are matched against the
//! trigger vocabulary, and the resulting count is classified together with
//! the patient's age and gender.
//!
//! ```text
//! notes ──tokenize──▶ tokens ──count_triggers──▶ n ──classify(age, gender, n)──▶ RiskLevel
//! ```

pub mod classifier;
pub mod normalizer;
pub mod risk_assessment;
pub mod risk_level;
pub mod trigger_matcher;
pub mod vocabulary;

pub use classifier::{
    classify, classify_factors, matching_rule, Classification, RiskFactors, RiskRule, RISK_RULES,
};
pub use normalizer::{normalize, tokenize};
pub use risk_assessment::{note_tokens, RiskAssessment};
pub use risk_level::RiskLevel;
pub use trigger_matcher::{count_triggers, matched_triggers};
pub use vocabulary::{diabetes_triggers, TriggerTerm, TriggerVocabulary};
