// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Lexical scanner turning JSON text into a lazy token sequence.
//!
//! The scanner handles:
//! - Whitespace runs (space, tab, CR, LF), skipped without emitting tokens
//! - Structural tokens (`{` `}` `[` `]` `,` `:`)
//! - String literals with the full RFC 8259 escape set, including `\uXXXX`
//!   and UTF-16 surrogate pairs
//! - Keyword literals `true`, `false`, `null` with boundary checks
//! - Number literals per the strict JSON number grammar
//!
//! Tokens are produced on demand via [`Lexer::next_token`]; the final token
//! is always `Eof`, exactly once.

use crate::core::{DecodeError, Position, Result as CoreResult};
use crate::decode::cursor::TextCursor;
use crate::decode::token::{Token, TokenKind, TokenTag};

/// Single-pass lexical scanner over JSON text.
///
/// # Example
///
/// ```
/// use strictjson::decode::lexer::Lexer;
/// use strictjson::decode::token::TokenKind;
///
/// # fn main() -> strictjson::Result<()> {
/// let mut lexer = Lexer::new("[true]");
/// assert_eq!(lexer.next_token()?.kind, TokenKind::LeftBracket);
/// assert_eq!(lexer.next_token()?.kind, TokenKind::True);
/// assert_eq!(lexer.next_token()?.kind, TokenKind::RightBracket);
/// assert_eq!(lexer.next_token()?.kind, TokenKind::Eof);
/// # Ok(())
/// # }
/// ```
pub struct Lexer<'a> {
    cursor: TextCursor<'a>,
    /// Set once `Eof` or an error has been produced; fuses the iterator
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a scanner positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            cursor: TextCursor::new(text),
            finished: false,
        }
    }

    /// Scan and return the next token.
    ///
    /// Whitespace before the token is skipped. At end of input this returns
    /// an `Eof` token carrying the final position; the parser stops pulling
    /// after that.
    pub fn next_token(&mut self) -> CoreResult<Token> {
        self.skip_whitespace();
        let position = self.cursor.position();
        let ch = match self.cursor.peek() {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenKind::Eof, position)),
        };

        let kind = match ch {
            '{' => {
                self.cursor.bump();
                TokenKind::LeftBrace
            }
            '}' => {
                self.cursor.bump();
                TokenKind::RightBrace
            }
            '[' => {
                self.cursor.bump();
                TokenKind::LeftBracket
            }
            ']' => {
                self.cursor.bump();
                TokenKind::RightBracket
            }
            ',' => {
                self.cursor.bump();
                TokenKind::Comma
            }
            ':' => {
                self.cursor.bump();
                TokenKind::Colon
            }
            '"' => self.scan_string(position)?,
            't' => self.scan_keyword("true", TokenKind::True, position)?,
            'f' => self.scan_keyword("false", TokenKind::False, position)?,
            'n' => self.scan_keyword("null", TokenKind::Null, position)?,
            c if c == '-' || c.is_ascii_digit() => self.scan_number(position)?,
            other => return Err(DecodeError::unexpected_character(other, position)),
        };
        Ok(Token::new(kind, position))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.cursor.bump();
        }
    }

    /// Scan a string literal. `start` is the position of the opening quote.
    ///
    /// End of input anywhere inside the literal, escape sequences included,
    /// reports `UnterminatedString` at the opening quote.
    fn scan_string(&mut self, start: Position) -> CoreResult<TokenKind> {
        self.cursor.bump();
        let mut content = String::new();
        loop {
            let position = self.cursor.position();
            let ch = match self.cursor.bump() {
                Some(ch) => ch,
                None => return Err(DecodeError::unterminated_string(start)),
            };
            match ch {
                '"' => return Ok(TokenKind::Str(content)),
                '\\' => content.push(self.scan_escape(start, position)?),
                c if (c as u32) < 0x20 => {
                    return Err(DecodeError::control_char_in_string(c as u32, position))
                }
                c => content.push(c),
            }
        }
    }

    /// Scan one escape sequence, the leading backslash already consumed.
    ///
    /// `string_start` is the opening quote (for end-of-input reporting),
    /// `escape_start` the backslash.
    fn scan_escape(&mut self, string_start: Position, escape_start: Position) -> CoreResult<char> {
        let ch = match self.cursor.bump() {
            Some(ch) => ch,
            None => return Err(DecodeError::unterminated_string(string_start)),
        };
        match ch {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.scan_unicode_escape(string_start, escape_start),
            other => Err(DecodeError::invalid_escape(
                format!("\\{other}"),
                escape_start,
            )),
        }
    }

    /// Scan the `XXXX` of a `\uXXXX` escape, combining surrogate pairs.
    ///
    /// A high surrogate must be immediately followed by another `\uXXXX`
    /// holding a low surrogate; lone or mismatched surrogates are invalid.
    fn scan_unicode_escape(
        &mut self,
        string_start: Position,
        escape_start: Position,
    ) -> CoreResult<char> {
        let units = self.scan_hex4(string_start, escape_start)?;
        match units {
            0xD800..=0xDBFF => {
                if !(self.cursor.eat('\\') && self.cursor.eat('u')) {
                    return Err(DecodeError::invalid_escape(
                        format!("\\u{units:04X}"),
                        escape_start,
                    ));
                }
                let low = self.scan_hex4(string_start, escape_start)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(DecodeError::invalid_escape(
                        format!("\\u{units:04X}\\u{low:04X}"),
                        escape_start,
                    ));
                }
                let code = 0x10000 + ((units - 0xD800) << 10) + (low - 0xDC00);
                char::from_u32(code).ok_or_else(|| {
                    DecodeError::invalid_escape(format!("\\u{units:04X}\\u{low:04X}"), escape_start)
                })
            }
            0xDC00..=0xDFFF => Err(DecodeError::invalid_escape(
                format!("\\u{units:04X}"),
                escape_start,
            )),
            code => char::from_u32(code).ok_or_else(|| {
                DecodeError::invalid_escape(format!("\\u{code:04X}"), escape_start)
            }),
        }
    }

    /// Scan exactly four hex digits into a code unit.
    fn scan_hex4(&mut self, string_start: Position, escape_start: Position) -> CoreResult<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let ch = match self.cursor.bump() {
                Some(ch) => ch,
                None => return Err(DecodeError::unterminated_string(string_start)),
            };
            let digit = match ch.to_digit(16) {
                Some(digit) => digit,
                None => {
                    return Err(DecodeError::invalid_escape(
                        format!("\\u{ch}"),
                        escape_start,
                    ))
                }
            };
            value = value * 16 + digit;
        }
        Ok(value)
    }

    /// Scan a keyword literal by prefix match.
    ///
    /// The match is only accepted at an identifier boundary: `truex` is
    /// rejected at the `x`, not split into `true` plus garbage.
    fn scan_keyword(
        &mut self,
        literal: &'static str,
        kind: TokenKind,
        start: Position,
    ) -> CoreResult<TokenKind> {
        for expected in literal.chars() {
            let position = self.cursor.position();
            match self.cursor.bump() {
                Some(ch) if ch == expected => {}
                Some(ch) => return Err(DecodeError::unexpected_character(ch, position)),
                None => {
                    // Input ended inside the keyword; the partial prefix
                    // matched no production, so its first character is the
                    // offender.
                    let first = literal.chars().next().unwrap_or('\0');
                    return Err(DecodeError::unexpected_character(first, start));
                }
            }
        }
        if let Some(next) = self.cursor.peek() {
            if next.is_alphanumeric() || next == '_' {
                return Err(DecodeError::unexpected_character(
                    next,
                    self.cursor.position(),
                ));
            }
        }
        Ok(kind)
    }

    /// Scan a number literal, longest valid match, retaining the raw lexeme.
    ///
    /// Grammar: optional `-`, then `0` or a nonzero digit followed by
    /// digits, then optional `.` + digits, then optional `e`/`E` + optional
    /// sign + digits. A digit right after a leading `0` is rejected here
    /// rather than being split into two number tokens.
    fn scan_number(&mut self, start: Position) -> CoreResult<TokenKind> {
        let mut lexeme = String::new();
        if self.cursor.eat('-') {
            lexeme.push('-');
        }

        match self.cursor.peek() {
            Some('0') => {
                self.cursor.bump();
                lexeme.push('0');
                if let Some(digit) = self.cursor.peek() {
                    if digit.is_ascii_digit() {
                        lexeme.push(digit);
                        return Err(DecodeError::invalid_number(lexeme, start));
                    }
                }
            }
            Some(c) if c.is_ascii_digit() => {
                self.scan_digits(&mut lexeme);
            }
            _ => return Err(DecodeError::invalid_number(lexeme, start)),
        }

        if self.cursor.eat('.') {
            lexeme.push('.');
            if !self.scan_digits(&mut lexeme) {
                return Err(DecodeError::invalid_number(lexeme, start));
            }
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            // peek() returned Some, so bump() cannot fail here
            if let Some(marker) = self.cursor.bump() {
                lexeme.push(marker);
            }
            if self.cursor.eat('+') {
                lexeme.push('+');
            } else if self.cursor.eat('-') {
                lexeme.push('-');
            }
            if !self.scan_digits(&mut lexeme) {
                return Err(DecodeError::invalid_number(lexeme, start));
            }
        }

        Ok(TokenKind::Number(lexeme))
    }

    /// Consume a run of ASCII digits into `lexeme`, reporting whether any
    /// digit was consumed.
    fn scan_digits(&mut self, lexeme: &mut String) -> bool {
        let mut any = false;
        while let Some(c) = self.cursor.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.cursor.bump();
            lexeme.push(c);
            any = true;
        }
        any
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = CoreResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        match &item {
            Ok(token) if token.kind.tag() == TokenTag::Eof => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(item)
    }
}
