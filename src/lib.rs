// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Strictjson
//!
//! Strict RFC 8259 JSON text decoder.
//!
//! This library converts a raw character sequence into an owned value tree
//! while validating syntax and reporting precise line/column error
//! positions. It accepts strict JSON only: no comments, no trailing commas,
//! no unquoted keys, no `NaN`/`Infinity` literals.
//!
//! ## Architecture
//!
//! Text flows one way through two phases:
//! - `decode/lexer` - Lexical scanner producing a lazy, position-tagged
//!   token sequence
//! - `decode/parser` - LL(1) recursive-descent parser building the
//!   [`JsonValue`] tree
//! - `core/` - The value model, error taxonomy, and position type shared
//!   by both phases
//!
//! The parser never looks back at raw characters; the scanner never sees
//! structural recursion.
//!
//! ## Example: Decoding
//!
//! ```
//! # fn main() -> strictjson::Result<()> {
//! use strictjson::{decode, JsonValue};
//!
//! let value = decode(r#"{"name": "strata", "ports": [80, 443]}"#)?;
//! assert_eq!(value.get("name").and_then(JsonValue::as_str), Some("strata"));
//! assert_eq!(
//!     value.get("ports").and_then(|ports| ports.get_index(1)).and_then(JsonValue::as_i64),
//!     Some(443),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Error Positions
//!
//! ```
//! use strictjson::{decode, DecodeError};
//!
//! let err = decode("{\"a\": }").unwrap_err();
//! assert!(matches!(err, DecodeError::UnexpectedToken { .. }));
//! assert_eq!(err.position().column, 7);
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{DecodeError, JsonObject, JsonValue, Number, Position, Result};

// Decode pipeline
pub mod decode;

// Re-export the decode surface
pub use crate::decode::{decode, decode_with_options, DecodeOptions, JsonDecoder, DEFAULT_MAX_DEPTH};
