//! Counts trigger terms present in a patient's note tokens.
//!
//! A term is present when any token is a prefix of it or it is a prefix of
//! any token. This tolerates plural and inflection variants ("vertige" vs
//! "vertiges") and also lets short words hit long terms ("po" matches
//! "poids").

use super::vocabulary::{TriggerTerm, TriggerVocabulary};

/// Returns the vocabulary terms found in `tokens`, in vocabulary order.
///
/// Tokens are expected to be normalized already (see
/// [`tokenize`](super::normalizer::tokenize)). Empty tokens never match.
pub fn matched_triggers<'v, S: AsRef<str>>(
    tokens: &[S],
    vocabulary: &'v TriggerVocabulary,
) -> Vec<&'v TriggerTerm> {
    vocabulary
        .terms()
        .iter()
        .filter(|term| {
            tokens
                .iter()
                .any(|token| is_prefix_match(token.as_ref(), term.normalized()))
        })
        .collect()
}

/// Number of distinct vocabulary terms found in `tokens`.
///
/// Never exceeds `vocabulary.len()`.
pub fn count_triggers<S: AsRef<str>>(tokens: &[S], vocabulary: &TriggerVocabulary) -> usize {
    matched_triggers(tokens, vocabulary).len()
}

fn is_prefix_match(token: &str, term: &str) -> bool {
    !token.is_empty() && (term.starts_with(token) || token.starts_with(term))
}
