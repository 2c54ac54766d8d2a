//! Text-consumption cursor used by the DDL recognizer.
//!
//! The cursor owns the script text and hands out trimmed fragments as they are
//! consumed from the front of the buffer. It knows nothing about DDL; the
//! recognizer in `ddl_parser` decides what to consume and in which order.
//!
//! Implicit behaviour:
//! - carriage returns are dropped and runs of spaces/tabs collapse to a single
//!   space, once, at construction
//! - leading whitespace is skipped before every match
//! - every consumed fragment is trimmed, with newlines (and the indentation
//!   following them) folded into a single space

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("Invalid whitespace regex"));

static NEWLINE_WITH_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*").expect("Invalid newline regex"));

static NEXT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+").expect("Invalid identifier regex"));

/// Mutable view over the unparsed remainder of a script.
///
/// The buffer itself never changes after construction; consumption only moves
/// `pos` forward, so the remaining text shrinks monotonically.
#[derive(Debug, Clone)]
pub struct Cursor {
    text: String,
    pos: usize,
}

impl Cursor {
    /// Create a cursor over `text`, normalizing line endings and horizontal
    /// whitespace.
    pub fn new(text: &str) -> Self {
        let text = text.replace('\r', "");
        let text = REPEATED_WHITESPACE.replace_all(&text, " ").into_owned();
        Self { text, pos: 0 }
    }

    /// The unconsumed part of the buffer.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.text[self.pos..]
    }

    /// Remaining length in bytes; zero means the cursor is exhausted.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of the cursor within the normalized buffer.
    ///
    /// Together with [`Cursor::peek_from`] this lets a caller report the text
    /// of a statement after the statement has been (partly) consumed.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Skip whitespace and newlines at the head of the buffer.
    pub fn skip_leading_whitespace(&mut self) {
        let remaining = self.remaining();
        let skipped = remaining.len() - remaining.trim_start().len();
        self.pos += skipped;
    }

    /// Try to consume `literal` (exact, case-sensitive) after skipping leading
    /// whitespace. On mismatch nothing besides that whitespace is consumed.
    pub fn consume(&mut self, literal: &str) -> bool {
        self.skip_leading_whitespace();
        if literal.is_empty() || !self.remaining().starts_with(literal) {
            return false;
        }
        let consumed = self.take(literal.len());
        consumed == trim(literal)
    }

    /// Consume everything before the first occurrence of `delimiter` and
    /// return it trimmed. The delimiter itself stays in the buffer.
    ///
    /// Returns `None`, consuming nothing, when the delimiter does not occur.
    pub fn consume_up_to(&mut self, delimiter: &str) -> Option<String> {
        let end = self.remaining().find(delimiter)?;
        Some(self.take(end))
    }

    /// Consume the rest of the buffer, trimmed.
    pub fn consume_rest(&mut self) -> String {
        self.take(self.len())
    }

    /// Consume an identifier: one or more uppercase ASCII letters or digits,
    /// followed by whitespace, a `;` terminator or the end of the buffer.
    ///
    /// The following whitespace character is consumed with the identifier; a
    /// terminator is left in place. Returns `None` when no identifier starts
    /// at the (whitespace-skipped) head of the buffer; never returns an empty
    /// string.
    pub fn consume_id(&mut self) -> Option<String> {
        self.skip_leading_whitespace();
        let remaining = self.remaining();
        let id_len = NEXT_ID.find(remaining)?.end();
        let consumed = match remaining[id_len..].chars().next() {
            None | Some(';') => id_len,
            Some(boundary) if boundary.is_whitespace() => id_len + boundary.len_utf8(),
            Some(_) => return None,
        };
        Some(self.take(consumed))
    }

    /// Consume a list of `KEY VALUE` tokens up to `terminator`, then the
    /// terminator itself.
    ///
    /// Tokens are split on `separator` and paired positionally; empty tokens
    /// are skipped, a trailing unpaired token is dropped and a repeated key
    /// keeps its last value.
    /// Returns `None`, consuming nothing, when the terminator does not occur.
    pub fn consume_dictionary(
        &mut self,
        terminator: &str,
        separator: char,
    ) -> Option<BTreeMap<String, String>> {
        let region = self.consume_up_to(terminator)?;
        self.consume(terminator);

        let tokens: Vec<&str> = region
            .split(separator)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();
        let dictionary = tokens
            .chunks_exact(2)
            .map(|pair| (pair[0].to_string(), pair[1].to_string()))
            .collect();
        Some(dictionary)
    }

    /// Return up to `amount` characters from the head of the buffer without
    /// consuming or trimming them.
    pub fn peek(&self, amount: usize) -> &str {
        self.peek_from(self.pos, amount)
    }

    /// Like [`Cursor::peek`], but starting at an earlier `offset` obtained
    /// from [`Cursor::offset`].
    pub fn peek_from(&self, offset: usize, amount: usize) -> &str {
        let start = offset.min(self.text.len());
        let tail = &self.text[start..];
        let end = tail
            .char_indices()
            .nth(amount)
            .map(|(idx, _)| idx)
            .unwrap_or(tail.len());
        &tail[..end]
    }

    /// Drop `amount` bytes from the head and return them trimmed.
    fn take(&mut self, amount: usize) -> String {
        let amount = amount.min(self.len());
        let start = self.pos;
        self.pos += amount;
        trim(&self.text[start..self.pos])
    }
}

/// Strip leading/trailing whitespace and fold each newline, together with the
/// indentation after it, into a single space.
fn trim(text: &str) -> String {
    NEWLINE_WITH_WHITESPACE
        .replace_all(text.trim(), " ")
        .into_owned()
}
