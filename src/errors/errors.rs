use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn syntax(message: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                message: message.into(),
            },
            position,
        )
    }

    pub fn type_error(message: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::TypeError {
                message: message.into(),
            },
            position,
        )
    }

    pub fn internal(message: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::CompilerError {
                message: message.into(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::UndeclaredIdentifier { .. } => "UndeclaredIdentifier",
            ErrorImpl::UninitializedVariable { .. } => "UninitializedVariable",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::TypeError { .. } => "TypeError",
            ErrorImpl::CompilerError { .. } => "CompilerError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SyntaxError { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UndeclaredIdentifier { identifier } => ErrorTip::Suggestion(format!(
                "Identifier `{}` must be declared before it is used",
                identifier
            )),
            ErrorImpl::UninitializedVariable { identifier } => ErrorTip::Suggestion(format!(
                "Assign a value to `{}` or read it from stdin before using it",
                identifier
            )),
            ErrorImpl::DuplicateDeclaration {
                identifier,
                first_declared_at,
            } => ErrorTip::Suggestion(format!(
                "Identifier `{}` was already declared on line {}",
                identifier, first_declared_at
            )),
            ErrorImpl::TypeError { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::CompilerError { .. } => ErrorTip::None,
        }
    }

    pub fn severity(&self) -> Severity {
        match &self.internal_error {
            ErrorImpl::CompilerError { .. } => Severity::Internal,
            _ => Severity::User,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.severity() == Severity::Internal
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}: {}",
            self.get_error_name(),
            self.position.line,
            self.position.column,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

/// Whether an error was caused by the program being compiled or by the compiler itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    User,
    Internal,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("syntax error: {message}")]
    SyntaxError { message: String },
    #[error("the identifier `{identifier}` is being used without having been declared")]
    UndeclaredIdentifier { identifier: String },
    #[error("the variable `{identifier}` is being used without having been initialized")]
    UninitializedVariable { identifier: String },
    #[error("duplicate declaration of identifier `{identifier}`, first declared on line {first_declared_at}")]
    DuplicateDeclaration {
        identifier: String,
        first_declared_at: u32,
    },
    #[error("type error: {message}")]
    TypeError { message: String },
    #[error("internal compiler error: {message}")]
    CompilerError { message: String },
}
