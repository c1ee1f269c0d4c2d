// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Recursive-descent parser turning the token sequence into a value tree.
//!
//! The grammar is LL(1): one token of lookahead decides every rule. All
//! token consumption funnels through [`Parser::expect`], so each grammar
//! procedure reads as a sequence of `expect` calls and recursive `value`
//! calls. Container nesting is bounded by the configured depth limit.

use tracing::{debug, warn};

use crate::core::{DecodeError, JsonObject, JsonValue, Number, Position, Result as CoreResult};
use crate::decode::lexer::Lexer;
use crate::decode::token::{Token, TokenKind, TokenTag};
use crate::decode::DecodeOptions;

/// Recursive-descent parser over the scanner's token sequence.
///
/// Holds exactly one lookahead token. Tokens are pulled from the scanner on
/// demand and consumed strictly in order; none is ever re-read.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Token,
    /// Number of currently open object/array frames
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `text`, priming the lookahead with the first
    /// token.
    pub fn new(text: &'a str, options: &DecodeOptions) -> CoreResult<Self> {
        let mut lexer = Lexer::new(text);
        let lookahead = lexer.next_token()?;
        Ok(Self {
            lexer,
            lookahead,
            depth: 0,
            max_depth: options.max_depth,
        })
    }

    /// Parse one complete JSON text: a single value followed by end of
    /// input. Anything after the value is rejected as trailing content.
    pub fn parse_document(&mut self) -> CoreResult<JsonValue> {
        let value = self.value()?;
        if self.lookahead.kind.tag() != TokenTag::Eof {
            return Err(DecodeError::trailing_content(
                self.lookahead.kind.name(),
                self.lookahead.position,
            ));
        }
        Ok(value)
    }

    /// Consume the lookahead and pull the next token, returning the
    /// consumed one.
    fn advance(&mut self) -> CoreResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Consume the lookahead if its kind matches `expected`.
    ///
    /// The single choke point for token consumption: a mismatch reports the
    /// expected and actual kinds at the lookahead's position.
    fn expect(&mut self, expected: TokenTag) -> CoreResult<Token> {
        if self.lookahead.kind.tag() == expected {
            self.advance()
        } else {
            Err(DecodeError::unexpected_token(
                expected.name(),
                self.lookahead.kind.name(),
                self.lookahead.position,
            ))
        }
    }

    /// Consume the lookahead, which the caller has checked to be a string
    /// token, and return its decoded content.
    fn take_string(&mut self) -> CoreResult<(String, Position)> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Str(content) => Ok((content, token.position)),
            kind => Err(DecodeError::unexpected_token(
                TokenTag::Str.name(),
                kind.name(),
                token.position,
            )),
        }
    }

    /// value -> object | array | string | number | true | false | null
    fn value(&mut self) -> CoreResult<JsonValue> {
        match self.lookahead.kind.tag() {
            TokenTag::LeftBrace => self.object(),
            TokenTag::LeftBracket => self.array(),
            TokenTag::Null => {
                self.advance()?;
                Ok(JsonValue::Null)
            }
            TokenTag::True => {
                self.advance()?;
                Ok(JsonValue::Bool(true))
            }
            TokenTag::False => {
                self.advance()?;
                Ok(JsonValue::Bool(false))
            }
            TokenTag::Str => {
                let (content, _) = self.take_string()?;
                Ok(JsonValue::String(content))
            }
            TokenTag::Number => {
                let token = self.advance()?;
                match token.kind {
                    TokenKind::Number(lexeme) => {
                        Ok(JsonValue::Number(convert_number(&lexeme, token.position)?))
                    }
                    kind => Err(DecodeError::unexpected_token(
                        TokenTag::Number.name(),
                        kind.name(),
                        token.position,
                    )),
                }
            }
            _ => Err(DecodeError::unexpected_token(
                "a value",
                self.lookahead.kind.name(),
                self.lookahead.position,
            )),
        }
    }

    /// object -> '{' '}' | '{' string ':' value (',' string ':' value)* '}'
    fn object(&mut self) -> CoreResult<JsonValue> {
        let open = self.expect(TokenTag::LeftBrace)?;
        self.enter_frame(open.position)?;
        let mut entries = JsonObject::new();

        if self.lookahead.kind.tag() == TokenTag::RightBrace {
            self.expect(TokenTag::RightBrace)?;
            self.exit_frame();
            return Ok(JsonValue::Object(entries));
        }

        loop {
            match self.lookahead.kind.tag() {
                TokenTag::Str => {}
                TokenTag::Eof => {
                    return Err(DecodeError::unexpected_token(
                        TokenTag::Str.name(),
                        TokenTag::Eof.name(),
                        self.lookahead.position,
                    ))
                }
                other => {
                    return Err(DecodeError::object_key_not_string(
                        other.name(),
                        self.lookahead.position,
                    ))
                }
            }
            let (key, key_position) = self.take_string()?;
            self.expect(TokenTag::Colon)?;
            let value = self.value()?;
            if entries.contains_key(&key) {
                debug!(
                    key = %key,
                    line = key_position.line,
                    column = key_position.column,
                    "duplicate object key, later value overwrites the earlier one"
                );
            }
            entries.insert(key, value);

            if self.lookahead.kind.tag() == TokenTag::RightBrace {
                self.expect(TokenTag::RightBrace)?;
                break;
            }
            self.expect(TokenTag::Comma)?;
        }

        self.exit_frame();
        Ok(JsonValue::Object(entries))
    }

    /// array -> '[' ']' | '[' value (',' value)* ']'
    fn array(&mut self) -> CoreResult<JsonValue> {
        let open = self.expect(TokenTag::LeftBracket)?;
        self.enter_frame(open.position)?;
        let mut elements = Vec::new();

        if self.lookahead.kind.tag() == TokenTag::RightBracket {
            self.expect(TokenTag::RightBracket)?;
            self.exit_frame();
            return Ok(JsonValue::Array(elements));
        }

        loop {
            elements.push(self.value()?);
            if self.lookahead.kind.tag() == TokenTag::RightBracket {
                self.expect(TokenTag::RightBracket)?;
                break;
            }
            self.expect(TokenTag::Comma)?;
        }

        self.exit_frame();
        Ok(JsonValue::Array(elements))
    }

    fn enter_frame(&mut self, position: Position) -> CoreResult<()> {
        if self.depth == self.max_depth {
            return Err(DecodeError::depth_limit_exceeded(self.max_depth, position));
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_frame(&mut self) {
        self.depth -= 1;
    }
}

/// Convert a raw number lexeme into a [`Number`].
///
/// A lexeme with no decimal point and no exponent marker is integral,
/// anything else fractional. An integral lexeme that overflows `i64` falls
/// back to the float representation: the lexer admits arbitrarily long
/// digit runs, so overflow is reachable from valid JSON.
fn convert_number(lexeme: &str, position: Position) -> CoreResult<Number> {
    let integral = !lexeme
        .bytes()
        .any(|b| matches!(b, b'.' | b'e' | b'E'));
    if integral {
        match lexeme.parse::<i64>() {
            Ok(value) => return Ok(Number::Integer(value)),
            Err(_) => {
                warn!(
                    lexeme = %lexeme,
                    line = position.line,
                    column = position.column,
                    "integer literal overflows i64, decoding as float"
                );
            }
        }
    }
    match lexeme.parse::<f64>() {
        Ok(value) => Ok(Number::Float(value)),
        // Cannot occur for lexemes the scanner produced; mapped rather
        // than asserted so the library never panics on caller input.
        Err(_) => Err(DecodeError::invalid_number(lexeme, position)),
    }
}
