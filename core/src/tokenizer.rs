// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Splitting of schedule cells into lines and normalized word tokens.

use std::fmt;

const RANGE_SEPARATOR: &str = "-";

/// A normalized word of a schedule line, free of `-` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token looks like a `DD.MM.YY` date literal.
    #[must_use]
    pub fn is_date_like(&self) -> bool {
        self.0.contains('.')
    }

    /// Exact, case-sensitive comparison with a keyword.
    #[must_use]
    pub fn is(&self, keyword: &str) -> bool {
        self.0 == keyword
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One line of a schedule cell together with its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine<'a> {
    /// The line as it appears in the cell, trimmed.
    pub raw: &'a str,

    /// Normalized tokens of the line.
    pub tokens: Vec<Token>,
}

impl TokenizedLine<'_> {
    /// Token texts, for diagnostics.
    #[must_use]
    pub fn token_strings(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }
}

/// Tokenizes every line of a schedule cell.
///
/// A missing cell yields no lines at all.
#[must_use]
pub fn tokenize_cell(cell: Option<&str>) -> Vec<TokenizedLine<'_>> {
    let Some(text) = cell else {
        return Vec::new();
    };

    split_lines(text)
        .map(|raw| TokenizedLine {
            raw,
            tokens: tokenize(raw),
        })
        .collect()
}

/// Splits a cell on embedded line breaks, dropping blank lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Splits a line on whitespace and normalizes each word.
///
/// Lone `-` range separators are removed, and every remaining word has its
/// dashes stripped. Words that end up empty are dropped.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    line.split_whitespace()
        .filter(|word| *word != RANGE_SEPARATOR)
        .map(|word| word.replace(RANGE_SEPARATOR, "").trim().to_owned())
        .filter(|word| !word.is_empty())
        .map(Token)
        .collect()
}
