//! Shared fixtures for docaudit integration tests.
//!
//! - in-memory and file-backed analyzers
//! - a tiny PDF builder so extraction runs without binary assets

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use docaudit::{Analyzer, Config, Database, ExtractorRegistry, SqliteAnalysisStore};
use lopdf::{dictionary, Document, Object, Stream};

/// Invoice carrying every expected field.
pub const FULL_INVOICE: &str = "INVOICE
Invoice Number: INV-7
Bill From: Acme Supplies Ltd
Bill To: Jane Doe
12 Main St
Springfield
Due Date: 2024-04-15
Tax: $45.00
Total: $545.00";

pub const SERVICE_AGREEMENT: &str = "SERVICE AGREEMENT
This Agreement is made between Acme Corp and Beta LLC.
Effective Date: 2024-01-01
Term: 12 months
This Agreement shall be governed by the laws of the State of Delaware.
Signed by both parties.";

pub fn memory_analyzer() -> Analyzer {
    memory_analyzer_with_limit(docaudit::processor::DEFAULT_MAX_DOCUMENT_BYTES)
}

pub fn memory_analyzer_with_limit(max_document_bytes: usize) -> Analyzer {
    let db = Database::open_in_memory().expect("in-memory database");
    Analyzer::new(
        Arc::new(ExtractorRegistry::new(max_document_bytes)),
        Arc::new(SqliteAnalysisStore::new(db)),
    )
}

pub fn file_analyzer(db_path: &Path) -> Analyzer {
    let config = Config {
        database_path: Some(db_path.display().to_string()),
        ..Default::default()
    };
    Analyzer::from_config(&config).expect("file-backed analyzer")
}

fn escape_pdf_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Single-page PDF with one text object per line.
pub fn build_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut content = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = 742 - (i as i64) * 14;
        content.push_str(&format!(
            "BT\n/F1 10 Tf\n50 {} Td\n({}) Tj\nET\n",
            y,
            escape_pdf_string(line)
        ));
    }
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Resources" => resources_id,
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize pdf");
    buffer
}
