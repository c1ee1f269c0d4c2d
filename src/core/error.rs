// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for strictjson.
//!
//! Provides error types for JSON decode operations:
//! - Lexical violations (strings, escapes, characters, numbers)
//! - Grammar violations (token mismatches, non-string keys, trailing content)
//! - Resource guards (container nesting depth)

use std::fmt;

use crate::core::Position;

/// Errors that can occur while decoding JSON text.
///
/// Every variant carries the [`Position`] of the first character at which
/// the violation was detected. Errors abort the decode call immediately;
/// there is no partial-result recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// End of input reached while a string literal was open
    UnterminatedString {
        /// Position of the opening quote
        position: Position,
    },

    /// Unrecognized escape sequence inside a string literal
    InvalidEscape {
        /// The offending sequence, backslash included
        escape: String,
        /// Position of the backslash
        position: Position,
    },

    /// Raw control character appeared unescaped inside a string literal
    ControlCharInString {
        /// Code point of the control character (always < 0x20)
        codepoint: u32,
        /// Position of the control character
        position: Position,
    },

    /// Character matched no lexical production
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Position of the character
        position: Position,
    },

    /// Number literal violated the JSON number grammar
    InvalidNumber {
        /// The lexeme consumed up to and including the point of failure
        lexeme: String,
        /// Position of the literal's first character
        position: Position,
    },

    /// Lookahead token kind does not match what the grammar rule requires
    UnexpectedToken {
        /// What the grammar rule required
        expected: String,
        /// What the lookahead actually was
        found: String,
        /// Position of the lookahead token
        position: Position,
    },

    /// Object entry's key position held a non-string token
    ObjectKeyNotString {
        /// Kind of the token found in key position
        found: String,
        /// Position of that token
        position: Position,
    },

    /// A complete value was decoded but input remained before end of input
    TrailingContent {
        /// Kind of the first surplus token
        found: String,
        /// Position of that token
        position: Position,
    },

    /// Container nesting exceeded the configured depth limit
    DepthLimitExceeded {
        /// The configured limit
        limit: usize,
        /// Position of the container opener that would exceed it
        position: Position,
    },
}

impl DecodeError {
    /// Create an unterminated string error.
    pub fn unterminated_string(position: Position) -> Self {
        DecodeError::UnterminatedString { position }
    }

    /// Create an invalid escape error.
    pub fn invalid_escape(escape: impl Into<String>, position: Position) -> Self {
        DecodeError::InvalidEscape {
            escape: escape.into(),
            position,
        }
    }

    /// Create a control-character-in-string error.
    pub fn control_char_in_string(codepoint: u32, position: Position) -> Self {
        DecodeError::ControlCharInString {
            codepoint,
            position,
        }
    }

    /// Create an unexpected character error.
    pub fn unexpected_character(character: char, position: Position) -> Self {
        DecodeError::UnexpectedCharacter {
            character,
            position,
        }
    }

    /// Create an invalid number error.
    pub fn invalid_number(lexeme: impl Into<String>, position: Position) -> Self {
        DecodeError::InvalidNumber {
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Create an unexpected token error.
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: Position,
    ) -> Self {
        DecodeError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            position,
        }
    }

    /// Create a non-string object key error.
    pub fn object_key_not_string(found: impl Into<String>, position: Position) -> Self {
        DecodeError::ObjectKeyNotString {
            found: found.into(),
            position,
        }
    }

    /// Create a trailing content error.
    pub fn trailing_content(found: impl Into<String>, position: Position) -> Self {
        DecodeError::TrailingContent {
            found: found.into(),
            position,
        }
    }

    /// Create a depth limit exceeded error.
    pub fn depth_limit_exceeded(limit: usize, position: Position) -> Self {
        DecodeError::DepthLimitExceeded { limit, position }
    }

    /// Get the input position at which the violation was detected.
    pub fn position(&self) -> Position {
        match self {
            DecodeError::UnterminatedString { position }
            | DecodeError::InvalidEscape { position, .. }
            | DecodeError::ControlCharInString { position, .. }
            | DecodeError::UnexpectedCharacter { position, .. }
            | DecodeError::InvalidNumber { position, .. }
            | DecodeError::UnexpectedToken { position, .. }
            | DecodeError::ObjectKeyNotString { position, .. }
            | DecodeError::TrailingContent { position, .. }
            | DecodeError::DepthLimitExceeded { position, .. } => *position,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = match self {
            DecodeError::UnterminatedString { .. } => vec![],
            DecodeError::InvalidEscape { escape, .. } => {
                vec![("escape", escape.clone())]
            }
            DecodeError::ControlCharInString { codepoint, .. } => {
                vec![("codepoint", format!("U+{codepoint:04X}"))]
            }
            DecodeError::UnexpectedCharacter { character, .. } => {
                vec![("character", character.to_string())]
            }
            DecodeError::InvalidNumber { lexeme, .. } => {
                vec![("lexeme", lexeme.clone())]
            }
            DecodeError::UnexpectedToken {
                expected, found, ..
            } => vec![("expected", expected.clone()), ("found", found.clone())],
            DecodeError::ObjectKeyNotString { found, .. } => {
                vec![("found", found.clone())]
            }
            DecodeError::TrailingContent { found, .. } => {
                vec![("found", found.clone())]
            }
            DecodeError::DepthLimitExceeded { limit, .. } => {
                vec![("limit", limit.to_string())]
            }
        };
        let position = self.position();
        fields.push(("line", position.line.to_string()));
        fields.push(("column", position.column.to_string()));
        fields
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnterminatedString { position } => {
                write!(f, "Unterminated string starting at {position}")
            }
            DecodeError::InvalidEscape { escape, position } => {
                write!(f, "Invalid escape sequence '{escape}' at {position}")
            }
            DecodeError::ControlCharInString {
                codepoint,
                position,
            } => write!(
                f,
                "Unescaped control character U+{codepoint:04X} in string at {position}"
            ),
            DecodeError::UnexpectedCharacter {
                character,
                position,
            } => write!(f, "Unexpected character '{character}' at {position}"),
            DecodeError::InvalidNumber { lexeme, position } => {
                write!(f, "Malformed number literal '{lexeme}' at {position}")
            }
            DecodeError::UnexpectedToken {
                expected,
                found,
                position,
            } => write!(f, "Expected {expected} but found {found} at {position}"),
            DecodeError::ObjectKeyNotString { found, position } => {
                write!(f, "Object key must be a string but found {found} at {position}")
            }
            DecodeError::TrailingContent { found, position } => {
                write!(f, "Trailing {found} after the top-level value at {position}")
            }
            DecodeError::DepthLimitExceeded { limit, position } => {
                write!(f, "Nesting depth limit of {limit} exceeded at {position}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for strictjson operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
