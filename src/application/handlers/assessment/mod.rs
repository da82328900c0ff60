//! Assessment handlers - Diabetes risk queries.

mod assess_risk;

pub use assess_risk::{AssessRiskHandler, AssessRiskQuery};
