use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{ast::types::LiteralValue, errors::errors::Error, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenPayload, RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP};

pub type WordHandler = fn(&str, Span) -> Result<Token, Error>;

pub struct WordPattern {
    regex: Regex,
    handler: WordHandler,
}

lazy_static! {
    // Tried in order, after the reserved words.
    static ref WORD_PATTERNS: Vec<WordPattern> = vec![
        WordPattern { regex: Regex::new("^[0-9]+\\.[0-9]+$").unwrap(), handler: float_handler },
        WordPattern { regex: Regex::new("^[0-9]+$").unwrap(), handler: integer_handler },
        WordPattern { regex: Regex::new("^[A-Za-z][A-Za-z0-9_]*$").unwrap(), handler: identifier_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
        self.column += n as u32;
    }

    /// Consumes a line break of `width` characters (`\r\n` is one break of width 2).
    pub fn new_line(&mut self, width: usize) {
        self.pos += width;
        self.line += 1;
        self.column = 0;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    fn find_from(&self, predicate: fn(char) -> bool) -> Option<usize> {
        self.source[self.pos..]
            .iter()
            .position(|c| predicate(*c))
            .map(|offset| self.pos + offset)
    }

    fn remainder(&self) -> String {
        self.source[self.pos..].iter().collect()
    }
}

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\t' || is_line_break(c) || SINGLE_CHAR_LOOKUP.contains_key(&c)
}

fn single_char_handler(lexer: &mut Lexer, kind: TokenKind, value: char) {
    lexer.push(MK_TOKEN!(kind, value.to_string(), MK_SPAN!(lexer.position(), 1)));
    lexer.advance_n(1);
}

fn comment_handler(lexer: &mut Lexer) -> Result<(), Error> {
    match lexer.find_from(is_line_break) {
        // The line break itself is left for the main loop to count
        Some(end) => {
            let length = end - lexer.pos;
            lexer.advance_n(length);
            Ok(())
        }
        None => Err(Error::syntax(
            "a comment must be terminated by a line break",
            lexer.position(),
        )),
    }
}

fn word_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let Some(end) = lexer.find_from(is_delimiter) else {
        return Err(Error::syntax(
            format!(
                "`{}` is not terminated, make sure every statement ends with a semicolon",
                lexer.remainder().trim_end()
            ),
            lexer.position(),
        ));
    };

    let length = end - lexer.pos;
    if length == 0 {
        return Err(Error::syntax("expected a word", lexer.position()));
    }

    let word: String = lexer.source[lexer.pos..end].iter().collect();
    let token = classify_word(&word, MK_SPAN!(lexer.position(), length))?;

    lexer.push(token);
    lexer.advance_n(length);
    Ok(())
}

/// Turns a word into a keyword, literal or identifier token.
pub fn classify_word(word: &str, span: Span) -> Result<Token, Error> {
    if let Some((kind, payload)) = RESERVED_LOOKUP.get(word) {
        return Ok(MK_TOKEN!(*kind, String::from(word), span, payload.clone()));
    }

    for pattern in WORD_PATTERNS.iter() {
        if pattern.regex.is_match(word) {
            return (pattern.handler)(word, span);
        }
    }

    Err(Error::syntax(
        format!("`{}` is not a keyword, literal or identifier", word),
        span.start,
    ))
}

fn float_handler(word: &str, span: Span) -> Result<Token, Error> {
    let value = word
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            Error::syntax(
                format!("float literal `{}` is out of range", word),
                span.start.clone(),
            )
        })?;

    Ok(MK_TOKEN!(
        TokenKind::LiteralValue,
        String::from(word),
        span,
        TokenPayload::Literal(LiteralValue::Float(value))
    ))
}

fn integer_handler(word: &str, span: Span) -> Result<Token, Error> {
    let value = word.parse::<i32>().map_err(|_| {
        Error::syntax(
            format!("integer literal `{}` does not fit in 32 bits", word),
            span.start.clone(),
        )
    })?;

    Ok(MK_TOKEN!(
        TokenKind::LiteralValue,
        String::from(word),
        span,
        TokenPayload::Literal(LiteralValue::Integer(value))
    ))
}

fn identifier_handler(word: &str, span: Span) -> Result<Token, Error> {
    Ok(MK_TOKEN!(
        TokenKind::Identifier,
        String::from(word),
        span,
        TokenPayload::Identifier(String::from(word))
    ))
}

/// Scans the source character by character into raw tokens. Two-character
/// operators are still separate tokens at this point.
pub fn scan(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some(current) = lex.at() {
        match current {
            ' ' | '\t' => lex.advance_n(1),
            '\r' => {
                let width = if lex.peek() == Some('\n') { 2 } else { 1 };
                lex.new_line(width);
            }
            '\n' => lex.new_line(1),
            '/' if lex.peek() == Some('/') => comment_handler(&mut lex)?,
            _ => match SINGLE_CHAR_LOOKUP.get(&current) {
                Some(kind) => single_char_handler(&mut lex, *kind, current),
                None => word_handler(&mut lex)?,
            },
        }
    }

    Ok(lex.tokens)
}

/// Merges `= =`, `< =`, `> =` and `! =` token pairs into one two-character operator.
pub fn coalesce_operators(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        let next_kind = tokens.peek().map(|next| next.kind);
        let merged_kind = match (token.kind, next_kind) {
            (TokenKind::Equal, Some(TokenKind::Equal)) => Some(TokenKind::Equals),
            (TokenKind::Less, Some(TokenKind::Equal)) => Some(TokenKind::LessEquals),
            (TokenKind::Greater, Some(TokenKind::Equal)) => Some(TokenKind::GreaterEquals),
            (TokenKind::Not, Some(TokenKind::Equal)) => Some(TokenKind::NotEquals),
            _ => None,
        };

        match (merged_kind, tokens.next_if(|_| merged_kind.is_some())) {
            (Some(kind), Some(next)) => result.push(MK_TOKEN!(
                kind,
                format!("{}{}", token.value, next.value),
                Span {
                    start: token.span.start,
                    end: next.span.end,
                }
            )),
            _ => result.push(token),
        }
    }

    result
}

/// Attaches precedence and arity to every operator token.
pub fn enrich_operators(tokens: &mut [Token]) {
    for token in tokens.iter_mut() {
        if let Some((precedence, arity)) = token.kind.operator_metadata() {
            token.payload = TokenPayload::Operator { precedence, arity };
        }
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let tokens = scan(source, file)?;
    let mut tokens = coalesce_operators(tokens);
    enrich_operators(&mut tokens);

    tracing::debug!("tokenized {} tokens", tokens.len());
    for token in tokens.iter() {
        token.debug();
    }

    Ok(tokens)
}
