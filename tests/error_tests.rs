// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode integration tests for rejected inputs.
//!
//! Tests cover:
//! - Every error kind in the taxonomy
//! - Error locality: the reported position points at the offending
//!   character or token, not at the start of input
//! - Strictness against JSON supersets (trailing commas, comments,
//!   unquoted keys, concatenated values)

use strictjson::{decode, decode_with_options, DecodeError, DecodeOptions, Position};

fn fail(text: &str) -> DecodeError {
    match decode(text) {
        Ok(value) => panic!("expected decode({text:?}) to fail, got {value}"),
        Err(err) => err,
    }
}

// ============================================================================
// Lexical Errors
// ============================================================================

#[test]
fn test_unterminated_string() {
    assert_eq!(
        fail("\"never closed"),
        DecodeError::unterminated_string(Position::new(1, 1))
    );
}

#[test]
fn test_unterminated_string_points_at_its_own_quote() {
    let err = fail("{\"a\": \"open");
    assert_eq!(err, DecodeError::unterminated_string(Position::new(1, 7)));
}

#[test]
fn test_invalid_escape() {
    let err = fail(r#""\q""#);
    assert_eq!(err, DecodeError::invalid_escape("\\q", Position::new(1, 2)));
}

#[test]
fn test_lone_surrogate_escape() {
    assert!(matches!(
        fail(r#""\uDEAD""#),
        DecodeError::InvalidEscape { .. }
    ));
}

#[test]
fn test_control_char_in_string() {
    let err = fail("\"tab\there\"");
    assert_eq!(
        err,
        DecodeError::control_char_in_string(0x09, Position::new(1, 5))
    );
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        fail("@"),
        DecodeError::unexpected_character('@', Position::new(1, 1))
    );
}

#[test]
fn test_bom_is_a_lexer_error() {
    assert_eq!(
        fail("\u{FEFF}{}"),
        DecodeError::unexpected_character('\u{FEFF}', Position::new(1, 1))
    );
}

#[test]
fn test_keyword_with_identifier_tail() {
    assert_eq!(
        fail("truex"),
        DecodeError::unexpected_character('x', Position::new(1, 5))
    );
}

#[test]
fn test_leading_zero_number() {
    assert_eq!(
        fail("01"),
        DecodeError::invalid_number("01", Position::new(1, 1))
    );
}

#[test]
fn test_incomplete_number_literals() {
    assert!(matches!(fail("1."), DecodeError::InvalidNumber { .. }));
    assert!(matches!(fail("-"), DecodeError::InvalidNumber { .. }));
    assert!(matches!(fail("5e"), DecodeError::InvalidNumber { .. }));
    assert!(matches!(fail("5e-"), DecodeError::InvalidNumber { .. }));
}

#[test]
fn test_nan_and_infinity_are_not_literals() {
    assert!(matches!(
        fail("NaN"),
        DecodeError::UnexpectedCharacter { character: 'N', .. }
    ));
    assert!(matches!(
        fail("Infinity"),
        DecodeError::UnexpectedCharacter { character: 'I', .. }
    ));
}

// ============================================================================
// Grammar Errors
// ============================================================================

#[test]
fn test_missing_colon() {
    let err = fail(r#"{ "a", "b" }"#);
    assert_eq!(
        err,
        DecodeError::unexpected_token("':'", "','", Position::new(1, 6))
    );
}

#[test]
fn test_error_locality_points_at_closing_brace() {
    // The error is at the '}' token, not at the start of input.
    let err = fail("{\"a\": }");
    assert_eq!(
        err,
        DecodeError::unexpected_token("a value", "'}'", Position::new(1, 7))
    );
}

#[test]
fn test_object_key_not_string() {
    let err = fail("{1: 2}");
    assert_eq!(
        err,
        DecodeError::object_key_not_string("number", Position::new(1, 2))
    );
    let err = fail("{null: 2}");
    assert_eq!(
        err,
        DecodeError::object_key_not_string("'null'", Position::new(1, 2))
    );
}

#[test]
fn test_unquoted_key_is_rejected() {
    // Unquoted keys lex as a keyword mismatch or unexpected character.
    assert!(fail("{a: 1}").position() == Position::new(1, 2));
}

#[test]
fn test_trailing_comma_in_array() {
    let err = fail("[1,2,]");
    assert_eq!(
        err,
        DecodeError::unexpected_token("a value", "']'", Position::new(1, 6))
    );
}

#[test]
fn test_trailing_comma_in_object() {
    let err = fail(r#"{"a": 1,}"#);
    assert_eq!(
        err,
        DecodeError::object_key_not_string("'}'", Position::new(1, 9))
    );
}

#[test]
fn test_mismatched_closing_delimiters() {
    assert!(matches!(fail("[1}"), DecodeError::UnexpectedToken { .. }));
    assert!(matches!(fail(r#"{"a": 1]"#), DecodeError::UnexpectedToken { .. }));
}

#[test]
fn test_premature_eof() {
    assert!(matches!(fail("["), DecodeError::UnexpectedToken { .. }));
    assert!(matches!(fail("{"), DecodeError::UnexpectedToken { .. }));
    assert!(matches!(fail("[1,"), DecodeError::UnexpectedToken { .. }));
    assert!(matches!(fail(r#"{"a":"#), DecodeError::UnexpectedToken { .. }));
    assert!(matches!(fail(""), DecodeError::UnexpectedToken { .. }));
}

#[test]
fn test_comments_are_rejected() {
    // The '/' is unlexable, so it surfaces as soon as the scanner reaches it.
    assert!(matches!(
        fail("[1] // neat"),
        DecodeError::UnexpectedCharacter { character: '/', .. }
    ));
    assert!(matches!(
        fail("// neat\n[1]"),
        DecodeError::UnexpectedCharacter { character: '/', .. }
    ));
}

// ============================================================================
// Trailing Content
// ============================================================================

#[test]
fn test_concatenated_values() {
    let err = fail("{}{}");
    assert_eq!(
        err,
        DecodeError::trailing_content("'{'", Position::new(1, 3))
    );
}

#[test]
fn test_two_scalars() {
    let err = fail("1 2");
    assert_eq!(
        err,
        DecodeError::trailing_content("number", Position::new(1, 3))
    );
}

#[test]
fn test_trailing_content_across_lines() {
    let err = fail("[1]\nnull");
    assert_eq!(
        err,
        DecodeError::trailing_content("'null'", Position::new(2, 1))
    );
}

// ============================================================================
// Depth Guard
// ============================================================================

#[test]
fn test_depth_limit_exceeded() {
    let options = DecodeOptions::new().max_depth(4);
    let err = match decode_with_options("[[[[[1]]]]]", options) {
        Ok(value) => panic!("expected depth failure, got {value}"),
        Err(err) => err,
    };
    assert_eq!(
        err,
        DecodeError::depth_limit_exceeded(4, Position::new(1, 5))
    );
}

#[test]
fn test_default_depth_limit_bounds_pathological_input() {
    let text: String = std::iter::repeat('[').take(100_000).collect();
    assert!(matches!(
        decode(&text),
        Err(DecodeError::DepthLimitExceeded { limit, .. }) if limit == strictjson::DEFAULT_MAX_DEPTH
    ));
}

// ============================================================================
// Error Reporting Surface
// ============================================================================

#[test]
fn test_multiline_error_position() {
    let err = fail("{\n  \"a\": 1,\n  \"b\" 2\n}");
    assert_eq!(err.position(), Position::new(3, 7));
    assert_eq!(
        err,
        DecodeError::unexpected_token("':'", "number", Position::new(3, 7))
    );
}

#[test]
fn test_display_includes_position() {
    let message = fail("{\"a\": }").to_string();
    assert!(message.contains("line 1, column 7"), "message: {message}");
}

#[test]
fn test_log_fields_carry_position() {
    let fields = fail("@").log_fields();
    assert!(fields.contains(&("line", "1".to_string())));
    assert!(fields.contains(&("column", "1".to_string())));
}
