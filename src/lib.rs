#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::analyze,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location in a source file. Lines start at 1, columns at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Splits source text on `\n`, `\r` and `\r\n`, the same line breaks the lexer counts.
fn split_lines(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let mut lines = vec![];
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&source[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&source[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }

    lines.push(&source[start..]);
    lines
}

/// Returns the line number, the text of the line and the column for a position.
pub fn get_line_at_position(source: &str, position: &Position) -> Option<(usize, String, usize)> {
    let line_number = position.line as usize;
    if line_number == 0 {
        return None;
    }

    split_lines(source)
        .get(line_number - 1)
        .map(|line| (line_number, line.to_string(), position.column as usize))
}

/// Renders an error as a diagnostic pointing at its source location.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: SyntaxError (missing semicolon)
        -> mean.co
          |
        3 | declare c : int = 3
          | ------------------^
    */

    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position.file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position) else {
        rendered.push_str(&format!("   {}\n", error));
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(start).collect(), start)
}

/// Runs the whole front end over a source text: tokenize, parse, then analyze.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - The name reported in positions, `shell` when absent
///
/// # Returns
///
/// The resolved and type-annotated program, or the first error encountered.
pub fn check_source(source: String, file: Option<String>) -> Result<Program, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));

    let result = tokenize(source, file)
        .and_then(|tokens| parse(tokens, Rc::clone(&file_name)))
        .and_then(|mut program| {
            analyze(&mut program)?;
            Ok(program)
        });

    match &result {
        Ok(program) => tracing::debug!(
            "{} checked: {} statements",
            file_name,
            program.statements().len()
        ),
        Err(error) if error.is_internal() => tracing::error!(
            "{}: internal compiler error, please report this as a bug: {}",
            file_name,
            error
        ),
        Err(error) => tracing::debug!("{}: {}", file_name, error),
    }

    result
}
