// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON decode pipeline.
//!
//! Text flows one way through two phases: the scanner in [`lexer`] turns
//! characters into position-tagged tokens, and the recursive-descent parser
//! in [`parser`] turns tokens into a [`JsonValue`] tree. The thin entry
//! points here wire the phases together.

pub mod cursor;
pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind, TokenTag};

use tracing::trace;

use crate::core::{JsonValue, Result as CoreResult};

/// Default maximum number of simultaneously open containers.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for a decode call.
///
/// # Default
///
/// `max_depth` defaults to [`DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Maximum number of simultaneously open object/array frames.
    ///
    /// Nesting past this limit fails with `DepthLimitExceeded` instead of
    /// risking call-stack exhaustion on pathological input.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum container nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// JSON decoder with reusable configuration.
///
/// The decoder holds only options: it is cheap to clone, keeps no state
/// between calls, and any number of `decode` calls may run concurrently on
/// the same instance.
///
/// # Example
///
/// ```
/// use strictjson::JsonDecoder;
///
/// # fn main() -> strictjson::Result<()> {
/// let decoder = JsonDecoder::new();
/// let decoded = decoder.decode(r#"{"x": 1, "y": 2}"#)?;
/// assert!(decoded.is_object());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    options: DecodeOptions,
}

impl JsonDecoder {
    /// Create a decoder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the given options.
    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decode a JSON text into a value tree.
    ///
    /// The input must hold exactly one JSON value, surrounding whitespace
    /// aside. The first violation aborts the call with a typed error
    /// carrying its line/column position.
    pub fn decode(&self, text: &str) -> CoreResult<JsonValue> {
        trace!(len = text.len(), "decoding JSON text");
        Parser::new(text, &self.options)?.parse_document()
    }
}

/// Decode a JSON text with default options.
///
/// # Example
///
/// ```
/// use strictjson::decode;
///
/// # fn main() -> strictjson::Result<()> {
/// let value = decode("[1, 2, 3]")?;
/// assert_eq!(value.as_array().map(|elements| elements.len()), Some(3));
/// # Ok(())
/// # }
/// ```
pub fn decode(text: &str) -> CoreResult<JsonValue> {
    JsonDecoder::new().decode(text)
}

/// Decode a JSON text with the given options.
pub fn decode_with_options(text: &str, options: DecodeOptions) -> CoreResult<JsonValue> {
    JsonDecoder::with_options(options).decode(text)
}
