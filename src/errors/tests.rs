//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Severity};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test.co".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::syntax("missing semicolon", position(1, 0));

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::SyntaxError {
            message: "missing semicolon".to_string()
        }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            identifier: "foo".to_string(),
        },
        position(4, 12),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 12);
    assert_eq!(error.get_position().file.as_str(), "test.co");
}

#[test]
fn test_uninitialized_variable_error() {
    let error = Error::new(
        ErrorImpl::UninitializedVariable {
            identifier: "x".to_string(),
        },
        position(2, 7),
    );

    assert_eq!(error.get_error_name(), "UninitializedVariable");
}

#[test]
fn test_duplicate_declaration_error() {
    let error = Error::new(
        ErrorImpl::DuplicateDeclaration {
            identifier: "x".to_string(),
            first_declared_at: 1,
        },
        position(2, 0),
    );

    assert_eq!(error.get_error_name(), "DuplicateDeclaration");
    assert_eq!(
        error.get_tip().to_string(),
        "Identifier `x` was already declared on line 1"
    );
}

#[test]
fn test_type_error() {
    let error = Error::type_error("left operand of `+` must be numeric", position(1, 0));

    assert_eq!(error.get_error_name(), "TypeError");
    assert!(!error.is_internal());
}

#[test]
fn test_compiler_error_is_internal() {
    let error = Error::internal("operator without arity", position(1, 0));

    assert_eq!(error.get_error_name(), "CompilerError");
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.severity(), Severity::Internal);
    assert!(error.is_internal());
}

#[test]
fn test_user_errors_are_not_internal() {
    let errors = vec![
        Error::syntax("x", position(1, 0)),
        Error::type_error("x", position(1, 0)),
        Error::new(
            ErrorImpl::UndeclaredIdentifier {
                identifier: "x".to_string(),
            },
            position(1, 0),
        ),
    ];

    for error in errors {
        assert_eq!(error.severity(), Severity::User);
    }
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            identifier: "y".to_string(),
        },
        position(1, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`y`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            identifier: "b".to_string(),
        },
        position(3, 5),
    );

    assert_eq!(
        error.to_string(),
        "UndeclaredIdentifier at line 3, column 5: the identifier `b` is being used without having been declared"
    );
}
