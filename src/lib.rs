//! # clex - Lexical Analyzer for a C-like Toy Language
//!
//! A small lexical analyzer that scans raw source text of a C-like language
//! in a single left-to-right pass, classifying each maximal lexeme into a
//! fixed set of token categories and producing a "cleaned" reconstruction of
//! the input with comments stripped.
//!
//! ## Quick Start
//!
//! ```rust
//! use clex::{Scanner, TokenCategory};
//!
//! let result = Scanner::new("int x = 42;").tokenize();
//!
//! let categories: Vec<TokenCategory> =
//!     result.tokens.iter().map(|t| t.category).collect();
//! assert_eq!(
//!     categories,
//!     vec![
//!         TokenCategory::Keyword,
//!         TokenCategory::Identifier,
//!         TokenCategory::Operator,
//!         TokenCategory::Literal,
//!         TokenCategory::Separator,
//!     ]
//! );
//! assert_eq!(result.cleaned, "int x = 42;");
//! ```
//!
//! ## Architecture
//!
//! The crate follows a simple one-way pipeline:
//!
//! ```text
//! Source Text → Scanner → (Tokens, Cleaned Text) → TokenReport → Display
//! ```
//!
//! ### Main Components
//!
//! - [`Scanner`] - One-pass tokenizer; consumes itself per scan
//! - [`Token`] / [`TokenCategory`] - Classified lexemes and the closed
//!   category set
//! - [`TokenReport`] - Groups lexemes by category for display
//! - [`scan_file`] - File-loading convenience for the reporting layer
//!
//! ## Robustness
//!
//! The scanner has no failure outcome. Arbitrary byte input - not just
//! well-formed source - maps every character to whitespace, comment text,
//! or a token; unrecognized characters become [`TokenCategory::Unknown`]
//! and unterminated strings are recovered as partial literals. Only file
//! loading can fail, with [`Error::Io`].

pub mod error;
pub mod lexer;
pub mod report;

pub use error::{Error, Result};
pub use lexer::{ScanResult, Scanner, Token, TokenCategory};
pub use report::{scan_file, TokenReport};

/// Version of the clex crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
