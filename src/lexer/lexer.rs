use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TEXT_HANDLER, MK_TOKEN,
};

use super::{
    stats::Statistics,
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

/// Handlers receive the text their pattern matched at the cursor and are
/// responsible for advancing past it.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

macro_rules! pattern {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("\\A(?:", $regex, ")")).unwrap(),
            handler: $handler,
        }
    };
}

lazy_static! {
    /// Rules in priority order; the first one matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern!(r"\(\*(?s:.*?)(?:\*\)|\z)", block_comment_handler),
        pattern!(r"--[^\n]*", line_comment_handler),
        pattern!(r"[ \f\r\t\x0B]+", skip_handler),
        pattern!(r"\n+", skip_handler),
        pattern!(r#""(?:\\\n|[^"\x00\n])*""#, string_handler),
        pattern!(r"[0-9]+", integer_handler),
        pattern!(r"(?i-u:true)(?-u:\b)", MK_TEXT_HANDLER!(TokenKind::True)),
        pattern!(r"(?i-u:false)(?-u:\b)", MK_TEXT_HANDLER!(TokenKind::False)),
        pattern!(r"[a-zA-Z][a-zA-Z0-9_]*", symbol_handler),
        pattern!(r"<-", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "<-")),
        pattern!(r"<=", MK_DEFAULT_HANDLER!(TokenKind::LessOrEqual, "<=")),
        pattern!(r"=>", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "=>")),
        pattern!(r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern!(r"-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        pattern!(r"\*", MK_DEFAULT_HANDLER!(TokenKind::Times, "*")),
        pattern!(r"/", MK_DEFAULT_HANDLER!(TokenKind::Divide, "/")),
        pattern!(r"=", MK_DEFAULT_HANDLER!(TokenKind::Equals, "=")),
        pattern!(r"<", MK_DEFAULT_HANDLER!(TokenKind::LessThan, "<")),
        pattern!(r":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern!(r"\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern!(r",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern!(r";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern!(r"@", MK_DEFAULT_HANDLER!(TokenKind::At, "@")),
        pattern!(r"~", MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~")),
        pattern!(r"\{", MK_DEFAULT_HANDLER!(TokenKind::LBracket, "{")),
        pattern!(r"\}", MK_DEFAULT_HANDLER!(TokenKind::RBracket, "}")),
        pattern!(r"\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, "(")),
        pattern!(r"\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, ")")),
    ];
}

/// Scan state for a single buffer.
///
/// Borrows the statistics and diagnostics of the owning `Scanner`, so
/// everything recorded here outlives the scan.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    pub(crate) line: u32,
    file: Rc<String>,
    statistics: &'a mut Statistics,
    diagnostics: &'a mut Vec<Error>,
}

impl<'a> Lexer<'a> {
    fn new(
        source: &'a str,
        file: Rc<String>,
        statistics: &'a mut Statistics,
        diagnostics: &'a mut Vec<Error>,
    ) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            file,
            statistics,
            diagnostics,
        }
    }

    /// Moves the cursor past `matched`, counting the newlines it spans.
    pub fn advance(&mut self, matched: &str) {
        self.pos += matched.len();
        self.line += matched.bytes().filter(|byte| *byte == b'\n').count() as u32;
    }

    /// Moves the cursor `n` bytes without touching the line counter.
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn report(&mut self, error: ErrorImpl) {
        warn!(target: "cool_lexer::lexer", file = %self.file, offset = self.pos, "{}", error);
        let position = self.position();
        self.diagnostics.push(Error::new(error, position));
    }

    /// Runs the first rule that matches at the cursor. Returns the token it
    /// produced, if any.
    fn step(&mut self) -> Option<Token> {
        let remaining = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                return (pattern.handler)(self, found.as_str());
            }
        }

        self.skip_illegal();
        None
    }

    fn skip_illegal(&mut self) {
        let Some(character) = self.at() else {
            return;
        };

        if character == '"' {
            self.report(ErrorImpl::UnterminatedString { line: self.line });
        } else {
            self.report(ErrorImpl::IllegalCharacter {
                character,
                line: self.line,
            });
        }

        let mut buffer = [0; 4];
        self.advance(character.encode_utf8(&mut buffer));
    }
}

fn block_comment_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    // "(*)" opens a comment without closing it
    if matched.len() < 4 || !matched.ends_with("*)") {
        lexer.report(ErrorImpl::UnterminatedComment { line: lexer.line });
    }

    // block comments leave the line counter where the comment opened
    lexer.statistics.record_comment();
    lexer.advance_n(matched.len());
    None
}

fn line_comment_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.statistics.record_comment();
    lexer.advance(matched);
    None
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance(matched);
    None
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = MK_TOKEN!(
        TokenKind::String,
        TokenValue::Text(String::from(matched)),
        lexer.line,
        lexer.span_of(matched.len())
    );

    lexer.statistics.record_string();
    lexer.advance(matched);
    Some(token)
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = match matched.parse::<i64>() {
        Ok(value) => {
            lexer.statistics.record_integer();
            Some(MK_TOKEN!(
                TokenKind::Integer,
                TokenValue::Integer(value),
                lexer.line,
                lexer.span_of(matched.len())
            ))
        }
        Err(_) => {
            lexer.report(ErrorImpl::NumberParseError {
                token: String::from(matched),
                line: lexer.line,
            });
            None
        }
    };

    lexer.advance(matched);
    token
}

/// Classifies an identifier-shaped word.
///
/// Keywords are recognised in any letter case, so `If` is IF while `If1`,
/// which is not a keyword, is a TYPE.
pub fn classify(word: &str) -> TokenKind {
    if word == "self" {
        return TokenKind::SelfKw;
    }
    if word == "SELF_TYPE" {
        return TokenKind::Type;
    }
    if let Some(kind) = RESERVED_LOOKUP.get(word.to_ascii_lowercase().as_str()) {
        return *kind;
    }

    if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::Type
    } else {
        TokenKind::Id
    }
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    // any capitalised word counts as a type sighting, even when the keyword
    // table decides its kind
    if matched.starts_with(|c: char| c.is_ascii_uppercase()) {
        lexer.statistics.record_type(matched);
    }

    let kind = classify(matched);

    let token = MK_TOKEN!(
        kind,
        TokenValue::Text(String::from(matched)),
        lexer.line,
        lexer.span_of(matched.len())
    );
    lexer.advance(matched);
    Some(token)
}

/// Lazy token stream over one buffer. Dropping it early simply stops the
/// scan; whatever was recorded so far stays in the scanner.
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    produced: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    /// Line the cursor is currently on. Newlines inside block comments are
    /// not counted.
    pub fn line(&self) -> u32 {
        self.lexer.line
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.lexer.at_eof() {
            if let Some(token) = self.lexer.step() {
                trace!(
                    target: "cool_lexer::lexer",
                    kind = %token.kind,
                    line = token.line,
                    offset = token.span.start.0,
                    "produced token"
                );
                self.produced += 1;
                return Some(token);
            }
        }

        if !self.finished {
            self.finished = true;
            debug!(
                target: "cool_lexer::lexer",
                file = %self.lexer.file,
                tokens = self.produced,
                lines = self.lexer.line,
                "finished scan"
            );
        }
        None
    }
}

/// Owns the statistics and diagnostics that accumulate across every buffer
/// it scans.
#[derive(Debug, Default)]
pub struct Scanner {
    statistics: Statistics,
    diagnostics: Vec<Error>,
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner::default()
    }

    /// Continues counting on top of an existing snapshot.
    pub fn with_statistics(statistics: Statistics) -> Scanner {
        Scanner {
            statistics,
            diagnostics: vec![],
        }
    }

    pub fn scan<'a>(&'a mut self, source: &'a str) -> Tokens<'a> {
        self.scan_named(source, "shell")
    }

    pub fn scan_named<'a>(&'a mut self, source: &'a str, file: &str) -> Tokens<'a> {
        debug!(target: "cool_lexer::lexer", file, bytes = source.len(), "starting scan");

        Tokens {
            lexer: Lexer::new(
                source,
                Rc::new(String::from(file)),
                &mut self.statistics,
                &mut self.diagnostics,
            ),
            produced: 0,
            finished: false,
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Hands back the accumulated statistics and starts counting afresh.
    pub fn take_statistics(&mut self) -> Statistics {
        std::mem::take(&mut self.statistics)
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn reset(&mut self) {
        self.statistics = Statistics::default();
        self.diagnostics.clear();
    }
}

/// Scans a single buffer with fresh state.
pub fn tokenize(source: &str) -> (Vec<Token>, Statistics, Vec<Error>) {
    let mut scanner = Scanner::new();
    let tokens = scanner.scan(source).collect::<Vec<Token>>();

    (tokens, scanner.take_statistics(), scanner.take_diagnostics())
}
