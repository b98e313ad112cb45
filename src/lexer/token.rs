use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Fixed keyword vocabulary: language keywords, built-in type names and
    /// a few standard-library names the toy grammar treats as keywords.
    /// Initialized once at first use, read-only afterwards.
    static ref KEYWORDS: HashSet<&'static str> = [
        "int", "float", "if", "else", "while", "return", "string", "do",
        "void", "cout", "endl", "for", "#include", "using", "namespace",
        "std", "iostream", "fstream", "vector",
    ]
    .into_iter()
    .collect();
}

/// A single classified token from the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The category assigned to the lexeme
    pub category: TokenCategory,
    /// Exact source text of the token; string literals keep only the inner
    /// content, without the surrounding quotes
    pub lexeme: String,
}

impl Token {
    /// Creates a new token with the given category and lexeme
    pub fn new(category: TokenCategory, lexeme: String) -> Self {
        Token { category, lexeme }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Value: {}", self.category, self.lexeme)
    }
}

/// All token categories produced by the scanner
///
/// Declaration order is the display order used by [`TokenReport`].
///
/// [`TokenReport`]: crate::report::TokenReport
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TokenCategory {
    /// Reserved word from the fixed keyword table, or a `#` directive
    Keyword,
    /// Alphabetic-led word not in the keyword table
    Identifier,
    /// Numeric literal (integer or decimal form) or string literal content
    Literal,
    /// Single-character operator, or `<<` / `>>`
    Operator,
    /// One of `( ) { } , ;`
    Separator,
    /// Any character no other branch claims
    Unknown,
}

impl TokenCategory {
    /// Check whether a word is in the fixed keyword table
    pub fn keyword(lexeme: &str) -> bool {
        KEYWORDS.contains(lexeme)
    }

    /// Upper-case category name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Literal => "LITERAL",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Separator => "SEPARATOR",
            TokenCategory::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
