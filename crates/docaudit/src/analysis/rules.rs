//! Static pattern tables driving classification, auditing, extraction and
//! recommendations.
//!
//! Tables are ordered slices: declaration order decides classifier
//! tie-breaks and the order of reported missing fields. Everything is
//! compiled once on first use and shared read-only afterwards.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::DocumentType;

/// Numeric or written-out calendar date, e.g. `2024-03-01`, `03/01/2024`,
/// `March 1, 2024`.
macro_rules! date_value {
    () => {
        r"([0-9]{1,4}[/.\-][0-9]{1,2}[/.\-][0-9]{1,4}|[a-z]+\.?\s+[0-9]{1,2},?\s+[0-9]{4})"
    };
}

/// Money amount with optional currency symbol; the number is group 1.
macro_rules! money_value {
    () => {
        r"(?:[$€£]\s*)?([0-9][0-9,]*(?:\.[0-9]{1,2})?)"
    };
}

/// Section markers that end a multi-line `bill_to` block when they start a
/// new line: ship to, bill from, from, invoice, date, due date, amount,
/// total, subtotal, tax, description, payment, terms.
macro_rules! section_markers {
    () => {
        r"ship\s+to|bill\s+from|from|invoice|date|due\s+date|amount|total|subtotal|tax|description|payment|terms"
    };
}

type PatternTable = &'static [(DocumentType, &'static [&'static str])];
type FieldTable = &'static [(DocumentType, &'static [(&'static str, &'static str)])];

const CLASSIFICATION_PATTERNS: PatternTable = &[
    (
        DocumentType::Invoice,
        &[
            r"\binvoice\b",
            r"\binvoice\s*(?:number\b|no\b\.?|#)",
            r"\bbill(?:ed)?\s+to\b",
            r"\bdue\s+date\b",
        ],
    ),
    (
        DocumentType::Contract,
        &[
            r"\bcontract\b",
            r"\bagreement\b",
            r"\bpart(?:y|ies)\b",
            r"\bterms\s+and\s+conditions\b",
        ],
    ),
    (
        DocumentType::Report,
        &[
            r"\breport\b",
            r"\bsummary\b",
            r"\bfindings\b",
            r"\bconclusions?\b",
        ],
    ),
];

const EXPECTED_FIELD_PATTERNS: FieldTable = &[
    (
        DocumentType::Invoice,
        &[
            ("invoice_number", r"\binvoice\s*(?:number\b|no\b\.?|#)"),
            ("amount", r"\b(?:amount|total|balance)\b"),
            ("due_date", r"\b(?:due\s+date|payment\s+due)\b"),
            ("tax", r"\b(?:tax|vat|gst)\b"),
            ("bill_to", r"\bbill(?:ed)?\s+to\b"),
            (
                "bill_from",
                r"\bbill(?:ed)?\s+from\b|\bfrom\s*:|\bremit\s+to\b|\b(?:seller|vendor|supplier)\b",
            ),
        ],
    ),
    (
        DocumentType::Contract,
        &[
            ("parties", r"\b(?:between|part(?:y|ies))\b"),
            ("effective_date", r"\beffective\s+(?:date|as\s+of)\b"),
            ("term", r"\b(?:term|duration)\b"),
            ("signature", r"\b(?:signatures?|signed\s+by)\b"),
            ("governing_law", r"\bgoverning\s+law\b|\bgoverned\s+by\b"),
        ],
    ),
];

const EXTRACTION_PATTERNS: FieldTable = &[
    (
        DocumentType::Invoice,
        &[
            (
                "invoice_number",
                r"\binvoice\s*(?:number\b|no\b\.?|#)\s*[:#]?\s*([a-z0-9][a-z0-9\-/]*)",
            ),
            (
                "amount",
                concat!(
                    r"\b(?:amount\s+due|total\s+due|balance\s+due|grand\s+total|total(?:\s+amount)?|amount)\s*:?\s*",
                    money_value!()
                ),
            ),
            (
                "due_date",
                concat!(r"\b(?:due\s+date|payment\s+due)\s*:?\s*", date_value!()),
            ),
            (
                "tax",
                r"\b(?:tax|vat|gst)(?:\s*\([^)\n]*\))?\s*:?\s*(?:[$€£]\s*)?([0-9][0-9,]*(?:\.[0-9]{1,2})?%?)",
            ),
            (
                "bill_to",
                // A marker on the very next line means an empty block; that
                // branch matches without setting group 1.
                concat!(
                    r"\bbill(?:ed)?\s+to[ \t]*:?[ \t]*(?:\n[ \t]*(?:",
                    section_markers!(),
                    r")\b|\n?([\s\S]+?)(?:\n[ \t]*(?:",
                    section_markers!(),
                    r")\b|\z))"
                ),
            ),
            (
                "bill_from",
                r"\b(?:bill(?:ed)?\s+from|from)\s*:[ \t]*([^\n]+)",
            ),
        ],
    ),
    (
        DocumentType::Contract,
        &[
            ("parties", r"\bbetween\s+([^\n.;]+?\s+and\s+[^\n.;(]+)"),
            (
                "effective_date",
                concat!(r"\beffective\s+(?:date|as\s+of)\s*:?\s*", date_value!()),
            ),
            (
                "term",
                r"\bterm\b[^\n]*?\b([0-9]+\s+(?:days?|weeks?|months?|years?))\b",
            ),
            (
                "governing_law",
                r"\bgoverned\s+by\s+the\s+laws?\s+of\s+(?:the\s+)?([a-z][a-z ]*?)(?:[.,;\n]|\z)",
            ),
        ],
    ),
    (
        DocumentType::Report,
        &[
            ("title", r"\b(?:report\s+)?title\s*:[ \t]*([^\n]+)"),
            ("author", r"\b(?:prepared\s+by|author)\s*:?[ \t]*([^\n]+)"),
            (
                "report_date",
                concat!(r"\b(?:report\s+)?date\s*:?\s*", date_value!()),
            ),
            ("period", r"\b(?:reporting\s+)?period\s*:[ \t]*([^\n]+)"),
        ],
    ),
];

const RECOMMENDATION_TEMPLATES: &[(&str, &str)] = &[
    (
        "invoice_number",
        "Add a unique invoice number so the document can be referenced and tracked.",
    ),
    (
        "amount",
        "State the total amount due, including currency, so the payer knows what to pay.",
    ),
    (
        "due_date",
        "Include a payment due date to set clear expectations for when payment is required.",
    ),
    (
        "tax",
        "Itemize applicable taxes (e.g. VAT or sales tax) or state that no tax applies.",
    ),
    (
        "bill_to",
        "Add a \"Bill To\" section with the customer's name and billing address.",
    ),
    (
        "bill_from",
        "Identify the issuer with a \"Bill From\" section containing your business name and address.",
    ),
    (
        "parties",
        "Name all parties to the agreement with their full legal names.",
    ),
    (
        "effective_date",
        "Specify the effective date on which the agreement takes effect.",
    ),
    (
        "term",
        "Define the term or duration of the agreement, including renewal conditions.",
    ),
    (
        "signature",
        "Add signature blocks for every party, with printed names and dates.",
    ),
    (
        "governing_law",
        "Include a governing law clause naming the jurisdiction whose laws apply.",
    ),
];

/// A named field paired with its compiled pattern.
#[derive(Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub regex: Regex,
}

pub type CompiledPatterns = Vec<(DocumentType, Vec<Regex>)>;
pub type CompiledFields = Vec<(DocumentType, Vec<FieldRule>)>;

pub static CLASSIFICATION_RULES: LazyLock<CompiledPatterns> = LazyLock::new(|| {
    CLASSIFICATION_PATTERNS
        .iter()
        .map(|(ty, patterns)| (*ty, patterns.iter().map(|p| compile(p)).collect()))
        .collect()
});

pub static EXPECTED_FIELDS: LazyLock<CompiledFields> =
    LazyLock::new(|| compile_fields(EXPECTED_FIELD_PATTERNS));

pub static EXTRACTION_RULES: LazyLock<CompiledFields> =
    LazyLock::new(|| compile_fields(EXTRACTION_PATTERNS));

/// Looks up the rule set for `document_type` in a compiled field table.
pub fn fields_for(table: &CompiledFields, document_type: DocumentType) -> Option<&[FieldRule]> {
    table
        .iter()
        .find(|(ty, _)| *ty == document_type)
        .map(|(_, rules)| rules.as_slice())
}

/// Fixed remediation text for a field, if one is defined.
pub fn recommendation_template(field: &str) -> Option<&'static str> {
    RECOMMENDATION_TEMPLATES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, text)| *text)
}

fn compile_fields(table: FieldTable) -> CompiledFields {
    table
        .iter()
        .map(|(ty, fields)| {
            let rules = fields
                .iter()
                .map(|(name, pattern)| FieldRule {
                    name: *name,
                    regex: compile(pattern),
                })
                .collect();
            (*ty, rules)
        })
        .collect()
}

/// Compiles a built-in pattern. All table patterns match case-insensitively.
fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        assert_eq!(CLASSIFICATION_RULES.len(), CLASSIFICATION_PATTERNS.len());
        assert_eq!(EXPECTED_FIELDS.len(), EXPECTED_FIELD_PATTERNS.len());
        assert_eq!(EXTRACTION_RULES.len(), EXTRACTION_PATTERNS.len());
    }

    #[test]
    fn test_classification_order_is_declaration_order() {
        let order: Vec<DocumentType> = CLASSIFICATION_RULES.iter().map(|(ty, _)| *ty).collect();
        assert_eq!(
            order,
            vec![
                DocumentType::Invoice,
                DocumentType::Contract,
                DocumentType::Report
            ]
        );
    }

    #[test]
    fn test_other_has_no_rules() {
        assert!(fields_for(&EXPECTED_FIELDS, DocumentType::Other).is_none());
        assert!(fields_for(&EXTRACTION_RULES, DocumentType::Other).is_none());
        assert!(fields_for(&EXPECTED_FIELDS, DocumentType::Report).is_none());
        assert!(fields_for(&EXTRACTION_RULES, DocumentType::Report).is_some());
    }

    #[test]
    fn test_every_expected_field_has_a_template() {
        for (_, fields) in EXPECTED_FIELD_PATTERNS {
            for (name, _) in *fields {
                assert!(
                    recommendation_template(name).is_some(),
                    "no template for '{}'",
                    name
                );
            }
        }
    }

    #[test]
    fn test_extraction_patterns_have_a_capture_group() {
        for (ty, rules) in EXTRACTION_RULES.iter() {
            for rule in rules {
                assert!(
                    rule.regex.captures_len() >= 2,
                    "{}::{} has no capture group",
                    ty,
                    rule.name
                );
            }
        }
    }
}
