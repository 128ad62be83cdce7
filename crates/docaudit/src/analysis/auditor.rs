use super::rules::{fields_for, EXPECTED_FIELDS};
use super::DocumentType;

/// Lists the expected fields of `document_type` whose marker does not
/// appear anywhere in `text`, in table order.
///
/// Types without an expected-field schema are never flagged.
pub fn audit_missing_fields(text: &str, document_type: DocumentType) -> Vec<String> {
    let Some(fields) = fields_for(&EXPECTED_FIELDS, document_type) else {
        return Vec::new();
    };

    fields
        .iter()
        .filter(|field| !field.regex.is_match(text))
        .map(|field| field.name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_missing_fields_in_table_order() {
        let text = "Invoice Number: INV-2024-001\nAmount Due: $500.00";
        assert_eq!(
            audit_missing_fields(text, DocumentType::Invoice),
            vec!["due_date", "tax", "bill_to", "bill_from"]
        );
    }

    #[test]
    fn test_complete_invoice_has_nothing_missing() {
        let text = "Invoice No. 7\nFrom: Widget Co\nBill To: Acme\nTotal: 20.00\nVAT: 4.00\nDue Date: 2024-05-01";
        assert!(audit_missing_fields(text, DocumentType::Invoice).is_empty());
    }

    #[test]
    fn test_invoice_notes_is_not_an_invoice_number() {
        let missing = audit_missing_fields(
            "Invoice Notes: thanks for your business",
            DocumentType::Invoice,
        );
        assert_eq!(missing[0], "invoice_number");
    }

    #[test]
    fn test_contract_fields() {
        let text = "This agreement is made between A and B. Effective date: 2024-01-01.";
        assert_eq!(
            audit_missing_fields(text, DocumentType::Contract),
            vec!["term", "signature", "governing_law"]
        );
    }

    #[test]
    fn test_types_without_schema_never_flag() {
        for text in ["", "nothing relevant", "Invoice Number: 1"] {
            assert!(audit_missing_fields(text, DocumentType::Report).is_empty());
            assert!(audit_missing_fields(text, DocumentType::Other).is_empty());
        }
    }

    #[test]
    fn test_empty_text_flags_every_invoice_field() {
        assert_eq!(audit_missing_fields("", DocumentType::Invoice).len(), 6);
    }
}
