// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoded JSON value tree.
//!
//! Provides the tagged-union result type handed to callers of `decode`.
//! All variants are serde-serializable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type alias for a decoded JSON object as key -> value mapping.
///
/// Keys keep the order in which they were first encountered in the input.
pub type JsonObject = IndexMap<String, JsonValue>;

/// Decoded JSON value.
///
/// The tree is finite, acyclic, and exclusively owned by its root: a decode
/// call builds the whole tree and hands it over as the sole owned result.
///
/// # Design Principles
///
/// - **Serde support**: All variants are serializable for downstream processing
/// - **Owned types**: Uses owned `String` and `Vec` for clarity and simplicity
/// - **Order preserving**: Object entries keep source order
/// - **Lexical number fidelity**: Integer and real literals stay distinct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsonValue {
    /// The `null` literal
    Null,
    /// The `true` or `false` literal
    Bool(bool),
    /// A number literal
    Number(Number),
    /// A string literal, escapes already resolved
    String(String),
    /// An array, element order = source order
    Array(Vec<JsonValue>),
    /// An object, entry order = source order of first key occurrence
    Object(JsonObject),
}

/// Decoded JSON number.
///
/// Retains the lexical distinction of the literal it was decoded from: a
/// literal with no decimal point and no exponent is `Integer`, anything
/// else is `Float`. `Integer(1)` and `Float(1.0)` compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Literal with no decimal point and no exponent
    Integer(i64),
    /// Literal with a decimal point or an exponent
    Float(f64),
}

impl Number {
    /// Check if this number came from an integer literal.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Check if this number came from a fractional or exponential literal.
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Get the integer value, if this is an integer literal.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(v) => Some(*v),
            Number::Float(_) => None,
        }
    }

    /// Get the numeric value as f64, converting integers losslessly where
    /// the f64 mantissa allows.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(v) => *v as f64,
            Number::Float(v) => *v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl JsonValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Check if this value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Check if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Check if this value is a number decoded from an integer literal.
    pub fn is_integer(&self) -> bool {
        matches!(self, JsonValue::Number(Number::Integer(_)))
    }

    /// Check if this value is a number decoded from a fractional or
    /// exponential literal.
    pub fn is_float(&self) -> bool {
        matches!(self, JsonValue::Number(Number::Float(_)))
    }

    /// Check if this value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Check if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Check if this value is a container type (array or object).
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    // ========================================================================
    // Type Conversion Methods
    // ========================================================================

    /// Try to get the boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as i64 (integer literals only).
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number()?.as_i64()
    }

    /// Try to get the value as f64 (any number literal).
    pub fn as_f64(&self) -> Option<f64> {
        Some(self.as_number()?.as_f64())
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Try to get a mutable reference to the inner array.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Try to get the inner object.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to get a mutable reference to the inner object.
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an object entry by key.
    ///
    /// Returns `None` if this value is not an object or the key is absent.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key)
    }

    /// Look up an array element by index.
    ///
    /// Returns `None` if this value is not an array or the index is out of
    /// bounds.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array()?.get(index)
    }

    // ========================================================================
    // Diagnostics Helpers
    // ========================================================================

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => write!(f, "null"),
            JsonValue::Bool(v) => write!(f, "{v}"),
            JsonValue::Number(n) => write!(f, "{n}"),
            JsonValue::String(s) => write!(f, "\"{s}\""),
            JsonValue::Array(elements) => write!(f, "[{} elements]", elements.len()),
            JsonValue::Object(entries) => write!(f, "{{{} entries}}", entries.len()),
        }
    }
}
