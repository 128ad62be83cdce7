use std::collections::BTreeMap;

use super::rules::{fields_for, FieldRule, EXTRACTION_RULES};
use super::DocumentType;

/// Captures literal field values for `document_type` from `text`.
///
/// Each field uses the first match of its pattern and takes capture
/// group 1, whitespace-collapsed. Fields that don't match, or whose capture
/// is blank, are left out of the map entirely.
pub fn extract_fields(text: &str, document_type: DocumentType) -> BTreeMap<String, String> {
    match fields_for(&EXTRACTION_RULES, document_type) {
        Some(rules) => extract_with(text, rules),
        None => BTreeMap::new(),
    }
}

fn extract_with(text: &str, rules: &[FieldRule]) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    for rule in rules {
        let Some(caps) = rule.regex.captures(text) else {
            continue;
        };
        let Some(matched) = caps.get(1) else {
            continue;
        };

        let value = collapse_whitespace(matched.as_str());
        if value.is_empty() {
            continue;
        }

        tracing::debug!(field = rule.name, "extracted field");
        fields.insert(rule.name.to_string(), value);
    }

    fields
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
