//! Token reporting
//!
//! The reporting layer consumes the scanner's output: it loads source
//! files, and groups token lexemes by category for the two-column summary
//! display.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::lexer::{ScanResult, Scanner, Token, TokenCategory};

/// Loads a source file and runs the scanner over its contents.
///
/// The only failure path in the crate: an unreadable file aborts the run
/// before the scanner is ever constructed.
pub fn scan_file(path: impl AsRef<Path>) -> Result<ScanResult> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Scanner::new(&text).tokenize())
}

/// Lexemes grouped by category
///
/// Duplicates within a category collapse; the same lexeme may still appear
/// under two different categories. Iteration order is deterministic: the
/// category enum's declaration order, then lexeme sort order.
#[derive(Debug, Clone, Default)]
pub struct TokenReport {
    groups: BTreeMap<TokenCategory, BTreeSet<String>>,
}

impl TokenReport {
    /// Builds a report from a token sequence
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut groups: BTreeMap<TokenCategory, BTreeSet<String>> = BTreeMap::new();
        for token in tokens {
            groups
                .entry(token.category)
                .or_default()
                .insert(token.lexeme.clone());
        }
        TokenReport { groups }
    }

    /// True when no tokens were recorded
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sorted, deduplicated lexemes recorded under one category
    pub fn lexemes(&self, category: TokenCategory) -> impl Iterator<Item = &str> {
        self.groups
            .get(&category)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

impl fmt::Display for TokenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15}{:<15}", "Category", "Tokens")?;
        writeln!(f, "{}", "-".repeat(35))?;
        for (category, lexemes) in &self.groups {
            write!(f, "{:<15}", category.name())?;
            for lexeme in lexemes {
                write!(f, "{}   ", lexeme)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
