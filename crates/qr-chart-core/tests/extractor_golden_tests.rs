//! Golden tests for the identifier extractor.
//!
//! These tests pin the extraction contract: encoding precedence, key
//! precedence, and silent fallthrough on malformed payloads.

use proptest::prelude::*;
use qr_chart_core::{extract_identifier, Extractor, PatientDirectory, PayloadKind};

/// One pinned extraction case.
struct GoldenCase {
    id: &'static str,
    input: Option<&'static str>,
    expected: Option<&'static str>,
    expected_kind: Option<PayloadKind>,
}

fn golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "null-input",
            input: None,
            expected: None,
            expected_kind: None,
        },
        GoldenCase {
            id: "empty-input",
            input: Some(""),
            expected: None,
            expected_kind: None,
        },
        GoldenCase {
            id: "whitespace-input",
            input: Some("   "),
            expected: None,
            expected_kind: None,
        },
        GoldenCase {
            id: "json-id",
            input: Some(r#"{"id":"P1001"}"#),
            expected: Some("P1001"),
            expected_kind: Some(PayloadKind::Structured),
        },
        GoldenCase {
            id: "json-patient-id",
            input: Some(r#"{"patientId":"P2002"}"#),
            expected: Some("P2002"),
            expected_kind: Some(PayloadKind::Structured),
        },
        GoldenCase {
            id: "json-id-beats-patient-id",
            input: Some(r#"{"id":"P1001","patientId":"P2002"}"#),
            expected: Some("P1001"),
            expected_kind: Some(PayloadKind::Structured),
        },
        GoldenCase {
            id: "url-id",
            input: Some("https://example.com/x?id=P1001"),
            expected: Some("P1001"),
            expected_kind: Some(PayloadKind::Link),
        },
        GoldenCase {
            id: "url-patient-id",
            input: Some("https://example.com/x?patientId=P2002"),
            expected: Some("P2002"),
            expected_kind: Some(PayloadKind::Link),
        },
        GoldenCase {
            id: "url-id-beats-patient-id",
            input: Some("https://example.com/x?patientId=P2002&id=P1001"),
            expected: Some("P1001"),
            expected_kind: Some(PayloadKind::Link),
        },
        GoldenCase {
            id: "raw-fallback",
            input: Some("P1001"),
            expected: Some("P1001"),
            expected_kind: Some(PayloadKind::RawText),
        },
        GoldenCase {
            id: "malformed-json-is-raw",
            input: Some("not json {{{"),
            expected: Some("not json {{{"),
            expected_kind: Some(PayloadKind::RawText),
        },
        GoldenCase {
            id: "json-without-fields-is-raw",
            input: Some(r#"{"foo":"bar"}"#),
            expected: Some(r#"{"foo":"bar"}"#),
            expected_kind: Some(PayloadKind::RawText),
        },
        GoldenCase {
            id: "url-without-params-is-raw",
            input: Some("https://example.com/x"),
            expected: Some("https://example.com/x"),
            expected_kind: Some(PayloadKind::RawText),
        },
        GoldenCase {
            id: "padded-raw-is-trimmed",
            input: Some("  P1001\n"),
            expected: Some("P1001"),
            expected_kind: Some(PayloadKind::RawText),
        },
    ]
}

#[test]
fn test_golden_cases() {
    let extractor = Extractor::new();

    for case in golden_cases() {
        let result = extractor.extract(case.input);

        assert_eq!(
            result.as_ref().map(|e| e.identifier.as_str()),
            case.expected,
            "Case {}: identifier mismatch",
            case.id
        );
        assert_eq!(
            result.as_ref().map(|e| e.kind),
            case.expected_kind,
            "Case {}: payload kind mismatch",
            case.id
        );

        // The free-function contract agrees with the extractor.
        assert_eq!(
            extract_identifier(case.input).as_deref(),
            case.expected,
            "Case {}: helper mismatch",
            case.id
        );
    }
}

#[test]
fn test_extraction_feeds_directory_lookup() {
    let directory = PatientDirectory::demo();

    let id = extract_identifier(Some(r#"{"id":"P1001"}"#));
    let record = directory.lookup(id.as_deref()).unwrap();
    assert_eq!(record.identifier, "P1001");

    let id = extract_identifier(Some("https://example.com/x?patientId=P2002"));
    let record = directory.lookup(id.as_deref()).unwrap();
    assert_eq!(record.identifier, "P2002");

    assert!(directory.lookup(extract_identifier(Some("P9999")).as_deref()).is_none());
    assert!(directory.lookup(extract_identifier(None).as_deref()).is_none());
}

proptest! {
    // Extraction is pure: same input, same output, never a panic.
    #[test]
    fn prop_extract_is_idempotent(input in ".{0,200}") {
        let first = extract_identifier(Some(&input));
        let second = extract_identifier(Some(&input));
        prop_assert_eq!(&first, &second);

        // Non-blank input always yields an identifier.
        if !input.trim().is_empty() {
            prop_assert!(first.is_some());
        } else {
            prop_assert!(first.is_none());
        }
    }
}
