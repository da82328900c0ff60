//! Trigger vocabulary: clinical terms whose presence in notes raises the
//! diabetes risk score.

use once_cell::sync::Lazy;

use super::normalizer::normalize;

/// Clinical terms scanned for in patient notes, as written by clinicians.
pub const DIABETES_TRIGGER_LABELS: [&str; 12] = [
    "Hémoglobine A1C",
    "Microalbumine",
    "Taille",
    "Poids",
    "Fumeur",
    "Fumeuse",
    "Anormal",
    "Cholestérol",
    "Vertiges",
    "Rechute",
    "Réaction",
    "Anticorps",
];

static DIABETES_TRIGGERS: Lazy<TriggerVocabulary> =
    Lazy::new(|| TriggerVocabulary::from_labels(&DIABETES_TRIGGER_LABELS));

/// Returns the process-wide diabetes trigger vocabulary.
pub fn diabetes_triggers() -> &'static TriggerVocabulary {
    &DIABETES_TRIGGERS
}

/// A trigger term with its normalized matching form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerTerm {
    label: String,
    normalized: String,
}

impl TriggerTerm {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let normalized = normalize(&label);
        Self { label, normalized }
    }

    /// The term as written in the vocabulary.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The term after normalization; this is what tokens are compared to.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// An immutable, ordered set of trigger terms.
///
/// Terms that normalize to the same string are kept once, so every entry
/// is distinct for matching purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerVocabulary {
    terms: Vec<TriggerTerm>,
}

impl TriggerVocabulary {
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut terms: Vec<TriggerTerm> = Vec::with_capacity(labels.len());
        for label in labels {
            let term = TriggerTerm::new(label.as_ref());
            if term.normalized().is_empty() {
                continue;
            }
            if !terms.iter().any(|t| t.normalized() == term.normalized()) {
                terms.push(term);
            }
        }
        Self { terms }
    }

    pub fn terms(&self) -> &[TriggerTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diabetes_vocabulary_has_twelve_terms() {
        assert_eq!(diabetes_triggers().len(), 12);
    }

    #[test]
    fn terms_are_pre_normalized() {
        let normalized: Vec<&str> = diabetes_triggers()
            .terms()
            .iter()
            .map(TriggerTerm::normalized)
            .collect();
        assert!(normalized.contains(&"hemoglobine a1c"));
        assert!(normalized.contains(&"cholesterol"));
        assert!(normalized.contains(&"reaction"));
    }

    #[test]
    fn labels_keep_accented_spelling() {
        assert_eq!(diabetes_triggers().terms()[0].label(), "Hémoglobine A1C");
    }

    #[test]
    fn duplicate_normalized_forms_are_collapsed() {
        let vocabulary = TriggerVocabulary::from_labels(&["Réaction", "REACTION", "reaction"]);
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.terms()[0].label(), "Réaction");
    }

    #[test]
    fn blank_labels_are_skipped() {
        let vocabulary = TriggerVocabulary::from_labels(&["", "Poids"]);
        assert_eq!(vocabulary.len(), 1);
    }
}
