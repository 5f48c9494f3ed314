//! Integration tests for document loading.

use std::io::Write;

use kon_loader::{
    LoadError, LoadOptions, load_document, load_document_with, parse_kon_string,
    parse_kon_string_with,
};
use kon_parser::{KonValue, NumberUnit, ParseError};

const QUIET: LoadOptions = LoadOptions { warn_issues: false };

#[test]
fn test_parse_string() {
    let doc = parse_kon_string("size = 12 pt\nname = \"kon\"").unwrap();
    assert!(doc.source_path.is_empty());
    assert_eq!(doc.elements.len(), 2);
    assert_eq!(
        doc.elements[0].value,
        KonValue::integer(12, NumberUnit::Named("pt".to_string()))
    );
    assert_eq!(doc.tokens, ["size", "=", "12", "pt", "\n", "name", "=", "\"kon\""]);
}

#[test]
fn test_issues_are_collected() {
    let doc = parse_kon_string_with("a (x = 1, x = 2)", QUIET).unwrap();
    assert_eq!(doc.issues.len(), 1);
    assert_eq!(doc.elements[0].attribute("x"), Some(&KonValue::integer(2, NumberUnit::Pure)));
}

#[test]
fn test_parse_error_is_wrapped() {
    let err = parse_kon_string("a = \"open").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Parse(ParseError::UnterminatedLiteral { .. })
    ));
    assert!(err.to_string().starts_with("Parse error:"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server (port = 8080) {{\n  host = \"localhost\"\n}}").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let doc = load_document_with(&path, QUIET).unwrap();
    assert_eq!(doc.source_path, path);
    let server = &doc.elements[0];
    assert_eq!(
        server.attribute("port"),
        Some(&KonValue::integer(8080, NumberUnit::Pure))
    );
    assert_eq!(
        server.child("host").map(|h| &h.value),
        Some(&KonValue::string("localhost"))
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.kon");
    let err = load_document(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().contains("missing.kon"));
}
