use serde::{Deserialize, Serialize};

/// Diabetes risk level, in increasing order of severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// No sign of risk
    #[default]
    None,
    /// Limited risk
    Borderline,
    /// Clear risk
    InDanger,
    /// Early onset expected
    EarlyOnset,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Borderline => write!(f, "BORDERLINE"),
            Self::InDanger => write!(f, "INDANGER"),
            Self::EarlyOnset => write!(f, "EARLYONSET"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_names() {
        let names: Vec<String> = [
            RiskLevel::None,
            RiskLevel::Borderline,
            RiskLevel::InDanger,
            RiskLevel::EarlyOnset,
        ]
        .iter()
        .map(|level| serde_json::to_string(level).unwrap())
        .collect();
        assert_eq!(
            names,
            vec!["\"NONE\"", "\"BORDERLINE\"", "\"INDANGER\"", "\"EARLYONSET\""]
        );
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(RiskLevel::None < RiskLevel::Borderline);
        assert!(RiskLevel::Borderline < RiskLevel::InDanger);
        assert!(RiskLevel::InDanger < RiskLevel::EarlyOnset);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(RiskLevel::default(), RiskLevel::None);
    }
}
