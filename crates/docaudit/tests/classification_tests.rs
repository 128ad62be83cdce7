//! Table-driven tests for document classification.

use docaudit::{classify, DocumentType, NO_SIGNAL_CONFIDENCE};

struct ClassificationTestCase {
    name: &'static str,
    text: &'static str,
    expected_type: DocumentType,
    expected_confidence: f64,
}

const CLASSIFICATION_TESTS: &[ClassificationTestCase] = &[
    ClassificationTestCase {
        name: "invoice_all_patterns",
        text: "Invoice\nInvoice No. 77\nBill to: Acme\nDue Date: 2024-04-01",
        expected_type: DocumentType::Invoice,
        expected_confidence: 0.57,
    },
    ClassificationTestCase {
        name: "invoice_lowercase_keywords",
        text: "due date and bill to",
        expected_type: DocumentType::Invoice,
        expected_confidence: 0.40,
    },
    ClassificationTestCase {
        name: "contract_three_patterns",
        text: "This Agreement is entered into by the parties under the following terms and conditions.",
        expected_type: DocumentType::Contract,
        expected_confidence: 0.50,
    },
    ClassificationTestCase {
        name: "report_all_patterns",
        text: "Quarterly Report\nExecutive Summary\nFindings: stable\nConclusion: none",
        expected_type: DocumentType::Report,
        expected_confidence: 0.57,
    },
    ClassificationTestCase {
        name: "higher_score_beats_earlier_type",
        text: "invoice for the contract agreement",
        expected_type: DocumentType::Contract,
        expected_confidence: 0.40,
    },
    ClassificationTestCase {
        name: "tie_goes_to_earlier_type",
        text: "See the attached report and the contract.",
        expected_type: DocumentType::Contract,
        expected_confidence: 0.25,
    },
    ClassificationTestCase {
        name: "keyword_inside_word_ignored",
        text: "reporting on invoiced contractors",
        expected_type: DocumentType::Other,
        expected_confidence: NO_SIGNAL_CONFIDENCE,
    },
    ClassificationTestCase {
        name: "no_signal",
        text: "Hello world",
        expected_type: DocumentType::Other,
        expected_confidence: NO_SIGNAL_CONFIDENCE,
    },
    ClassificationTestCase {
        name: "empty_text",
        text: "",
        expected_type: DocumentType::Other,
        expected_confidence: NO_SIGNAL_CONFIDENCE,
    },
];

#[test]
fn test_classification_table() {
    for test_case in CLASSIFICATION_TESTS {
        let result = classify(test_case.text);

        assert_eq!(
            result.document_type, test_case.expected_type,
            "Test '{}': Expected type {:?}, got {:?}",
            test_case.name, test_case.expected_type, result.document_type
        );
        assert_eq!(
            result.confidence, test_case.expected_confidence,
            "Test '{}': Expected confidence {}, got {}",
            test_case.name, test_case.expected_confidence, result.confidence
        );
    }
}

#[test]
fn test_confidence_stays_in_range() {
    for test_case in CLASSIFICATION_TESTS {
        let result = classify(test_case.text);
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "Test '{}': confidence {} out of range",
            test_case.name,
            result.confidence
        );
    }
}
