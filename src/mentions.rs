//! Decoding of the serialized `mentions` column.
//!
//! The record source stores mentions as a list literal:
//!
//! ```text
//! []
//! ['alice', 'bob']
//! ["carol"]
//! ```
//!
//! [`decode`] accepts exactly that grammar: a bracketed, comma-separated list
//! of single- or double-quoted strings with backslash escapes and an optional
//! trailing comma. Anything else is a [`MentionsError`]; nothing is evaluated.
//!
//! # Examples
//!
//! ```
//! use sentiview::mentions::{decode, encode};
//!
//! let handles = decode("['alice', \"bob\"]")?;
//! assert_eq!(handles, vec!["alice", "bob"]);
//! assert_eq!(encode(&handles), "['alice', 'bob']");
//!
//! assert!(decode("alice, bob").is_err());
//! # Ok::<(), sentiview::mentions::MentionsError>(())
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a mentions field could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MentionsError {
    /// The field is empty or whitespace-only.
    #[error("empty mentions field")]
    Empty,

    /// The field does not start with `[`.
    #[error("expected '[' at position {0}")]
    MissingOpenBracket(usize),

    /// A quoted handle is never closed.
    #[error("unterminated string starting at position {0}")]
    UnterminatedString(usize),

    /// The list is never closed with `]`.
    #[error("unterminated list")]
    UnterminatedList,

    /// A character that is not allowed at this point.
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Byte offset into the trimmed input
        position: usize,
    },

    /// Non-whitespace input follows the closing `]`.
    #[error("trailing input after ']' at position {0}")]
    TrailingInput(usize),
}

/// Decoded form of a post's mentions field.
///
/// A post whose field failed to decode keeps the raw text so it can be
/// reported; such posts are left out of mention counts but stay eligible for
/// every other view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Mentions {
    /// Well-formed list of handles (possibly empty).
    Decoded(Vec<String>),
    /// Raw field content that did not decode.
    Malformed(String),
}

impl Mentions {
    /// Decodes a raw field, keeping the raw text on failure.
    pub fn from_raw(raw: &str) -> Self {
        match decode(raw) {
            Ok(handles) => Mentions::Decoded(handles),
            Err(_) => Mentions::Malformed(raw.to_string()),
        }
    }

    /// Returns the handles if the field decoded.
    pub fn handles(&self) -> Option<&[String]> {
        match self {
            Mentions::Decoded(handles) => Some(handles),
            Mentions::Malformed(_) => None,
        }
    }

    /// Returns `true` if the field failed to decode.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Mentions::Malformed(_))
    }
}

impl Default for Mentions {
    fn default() -> Self {
        Mentions::Decoded(Vec::new())
    }
}

impl From<Vec<String>> for Mentions {
    fn from(handles: Vec<String>) -> Self {
        Mentions::Decoded(handles)
    }
}

/// Decodes a serialized mentions list into its handles.
pub fn decode(raw: &str) -> Result<Vec<String>, MentionsError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(MentionsError::Empty);
    }

    let mut chars = input.char_indices().peekable();
    match chars.next() {
        Some((_, '[')) => {}
        Some((pos, _)) => return Err(MentionsError::MissingOpenBracket(pos)),
        None => return Err(MentionsError::Empty),
    }

    let mut handles = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            Some((_, ']')) => break,
            Some((pos, quote @ ('\'' | '"'))) => {
                handles.push(read_quoted(&mut chars, quote, pos)?);
                skip_whitespace(&mut chars);
                match chars.next() {
                    Some((_, ',')) => {}
                    Some((_, ']')) => break,
                    Some((position, ch)) => {
                        return Err(MentionsError::UnexpectedChar { ch, position });
                    }
                    None => return Err(MentionsError::UnterminatedList),
                }
            }
            Some((position, ch)) => return Err(MentionsError::UnexpectedChar { ch, position }),
            None => return Err(MentionsError::UnterminatedList),
        }
    }

    skip_whitespace(&mut chars);
    if let Some((pos, _)) = chars.next() {
        return Err(MentionsError::TrailingInput(pos));
    }

    Ok(handles)
}

/// Serializes handles into the single-quoted list form the source uses.
pub fn encode(handles: &[String]) -> String {
    let items: Vec<String> = handles
        .iter()
        .map(|h| format!("'{}'", h.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", items.join(", "))
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}

fn read_quoted(
    chars: &mut Peekable<CharIndices<'_>>,
    quote: char,
    start: usize,
) -> Result<String, MentionsError> {
    let mut out = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, 'n')) => out.push('\n'),
                Some((_, 't')) => out.push('\t'),
                Some((_, escaped)) => out.push(escaped),
                None => break,
            },
            c if c == quote => return Ok(out),
            c => out.push(c),
        }
    }
    Err(MentionsError::UnterminatedString(start))
}
