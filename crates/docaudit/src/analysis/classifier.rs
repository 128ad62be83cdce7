use regex::Regex;
use serde::Serialize;

use super::rules::CLASSIFICATION_RULES;
use super::DocumentType;

/// Confidence reported when no type scores at all.
///
/// Heuristic with no derivation behind it; kept fixed so stored results
/// stay comparable.
pub const NO_SIGNAL_CONFIDENCE: f64 = 0.90;

/// Saturation constant of the `score / (score + K)` confidence curve.
const CONFIDENCE_DAMPING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub document_type: DocumentType,
    pub confidence: f64,
    /// Number of the winning type's patterns that matched.
    pub score: usize,
}

/// Picks the document type whose pattern set matches the text best.
pub fn classify(text: &str) -> Classification {
    classify_with(text, &CLASSIFICATION_RULES)
}

/// Scores `text` against an ordered rule table. The first type reaching
/// the maximum score wins ties.
pub(crate) fn classify_with(text: &str, rules: &[(DocumentType, Vec<Regex>)]) -> Classification {
    let mut best: Option<(DocumentType, usize)> = None;

    for (document_type, patterns) in rules {
        let score = patterns.iter().filter(|re| re.is_match(text)).count();
        tracing::debug!(document_type = %document_type, score, "scored document type");

        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((*document_type, score));
        }
    }

    match best {
        Some((document_type, score)) if score > 0 => Classification {
            document_type,
            confidence: round2(score as f64 / (score as f64 + CONFIDENCE_DAMPING)),
            score,
        },
        _ => Classification {
            document_type: DocumentType::Other,
            confidence: NO_SIGNAL_CONFIDENCE,
            score: 0,
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
