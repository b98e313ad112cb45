use serde::{Deserialize, Serialize};
use tracing::debug;

use super::token::{Token, TokenCategory};

/// Whitespace recognized by the grammar: space, tab, newline, carriage return
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// ASCII letters only; the grammar has no Unicode identifiers
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Single-character operators of the grammar
fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '=' | '<' | '>' | '^' | '/')
}

fn is_separator(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | ',' | ';')
}

/// Output of a completed scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Reconstruction of the input with comments removed and string
    /// literals re-wrapped in quotes
    pub cleaned: String,
}

/// One-pass scanner for C-like source text
///
/// Walks the input left to right exactly once, classifying each maximal
/// lexeme into a [`TokenCategory`] and accumulating the cleaned text as a
/// byproduct. The scanner never fails: unrecognized characters become
/// `Unknown` tokens and unterminated strings are recovered as partial
/// literals.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Cleaned reconstruction of the input, comments stripped
    cleaned: String,
    /// Start position of the current lexeme
    start: usize,
    /// Current position in source
    current: usize,
}

impl Scanner {
    /// Creates a new scanner over the given source text
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            cleaned: String::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans the entire input and returns the token sequence plus the
    /// cleaned text.
    ///
    /// Consumes the scanner: a scan is a one-shot operation, and a fresh
    /// `Scanner` is needed for each input.
    pub fn tokenize(mut self) -> ScanResult {
        debug!(chars = self.source.len(), "scan start");

        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        debug!(tokens = self.tokens.len(), "scan complete");
        ScanResult {
            tokens: self.tokens,
            cleaned: self.cleaned,
        }
    }

    /// Dispatches on the current character, running exactly one branch per
    /// iteration. Priority: whitespace, comments, directives, then the
    /// general token classes.
    fn scan_token(&mut self) {
        let c = self.peek();

        // Whitespace passes through to the cleaned text untouched.
        if is_whitespace(c) {
            self.advance();
            self.cleaned.push(c);
            return;
        }

        // Comments outrank everything else, including directives, so a `#`
        // inside a comment is never tokenized.
        if c == '/' && self.peek_next() == '*' {
            self.skip_block_comment();
            return;
        }
        if c == '/' && self.peek_next() == '/' {
            self.skip_line_comment();
            return;
        }

        // A `#` followed by an alphanumeric run is one atomic directive
        // token; `#include` matches the keyword table spelling.
        if c == '#' && is_alphanumeric(self.peek_next()) {
            self.scan_directive();
            return;
        }

        if is_alpha(c) {
            self.scan_word();
        } else if is_digit(c) {
            self.scan_number();
        } else if c == '<' && self.peek_next() == '<' {
            self.advance();
            self.advance();
            self.add_token(TokenCategory::Operator);
        } else if c == '>' && self.peek_next() == '>' {
            self.advance();
            self.advance();
            self.add_token(TokenCategory::Operator);
        } else if is_operator(c) {
            self.advance();
            self.add_token(TokenCategory::Operator);
        } else if is_separator(c) {
            self.advance();
            self.add_token(TokenCategory::Separator);
        } else if c == '"' {
            self.scan_string();
        } else {
            self.advance();
            self.add_token(TokenCategory::Unknown);
        }
    }

    /// Skip a `/* ... */` comment. Nothing is emitted and nothing reaches
    /// the cleaned text; an unclosed comment runs to end of input.
    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    /// Skip a `//` comment up to (not including) the next newline. The
    /// newline itself is handled as whitespace on the next iteration, so it
    /// survives into the cleaned text.
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Scan `#` plus its alphanumeric run as a single `Keyword` token.
    ///
    /// Directives are keywords by fiat, whether or not the spelling is in
    /// the keyword table.
    fn scan_directive(&mut self) {
        self.advance(); // '#'
        while is_alphanumeric(self.peek()) {
            self.advance();
        }
        self.add_token(TokenCategory::Keyword);
    }

    /// Scan a maximal alphanumeric run and classify it against the keyword
    /// table. Underscore is not part of a word: `foo_bar` scans as two
    /// words around an `Unknown('_')`.
    fn scan_word(&mut self) {
        self.advance();
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let category = if TokenCategory::keyword(&lexeme) {
            TokenCategory::Keyword
        } else {
            TokenCategory::Identifier
        };
        self.cleaned.push_str(&lexeme);
        self.tokens.push(Token::new(category, lexeme));
    }

    /// Scan a run of digits with at most one decimal point. A second `.`
    /// terminates the run without being consumed; the next iteration
    /// reprocesses it.
    fn scan_number(&mut self) {
        let mut has_decimal = false;
        while is_digit(self.peek()) || self.peek() == '.' {
            if self.peek() == '.' {
                if has_decimal {
                    break;
                }
                has_decimal = true;
            }
            self.advance();
        }
        self.add_token(TokenCategory::Literal);
    }

    /// Scan a string literal. The token keeps only the inner content: the
    /// quotes are dropped, and a `\` suppresses close detection for the
    /// character after it without itself reaching the content.
    ///
    /// Recovery paths, neither of which is an error:
    /// - input ends before a closing quote: the partial content collected
    ///   so far becomes the literal;
    /// - the content is empty (`""`): no token is emitted, but the quote
    ///   pair still reaches the cleaned text.
    fn scan_string(&mut self) {
        self.advance(); // opening '"'

        let mut content = String::new();
        let mut escaped = false;
        while !self.is_at_end() {
            let c = self.peek();
            if c == '"' && !escaped {
                self.advance(); // closing quote, excluded from the lexeme
                break;
            }
            if c == '\\' && !escaped {
                escaped = true;
                self.advance();
                continue;
            }
            content.push(c);
            escaped = false;
            self.advance();
        }

        self.cleaned.push('"');
        self.cleaned.push_str(&content);
        self.cleaned.push('"');

        if !content.is_empty() {
            self.tokens.push(Token::new(TokenCategory::Literal, content));
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    /// Push a token whose lexeme is the span scanned since `start`, and
    /// mirror the lexeme into the cleaned text.
    fn add_token(&mut self, category: TokenCategory) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.cleaned.push_str(&lexeme);
        self.tokens.push(Token::new(category, lexeme));
    }
}
