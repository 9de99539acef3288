//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a single-line Span from a start position and a length
//!
//! Both are only used by the lexer, which builds every token through them.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
/// * `$payload` - The TokenPayload, `TokenPayload::None` when omitted
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Semicolon, ";".to_string(), span);
/// let token = MK_TOKEN!(TokenKind::Identifier, "x".to_string(), span, TokenPayload::Identifier("x".to_string()));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::MK_TOKEN!($kind, $value, $span, TokenPayload::None)
    };
    ($kind:expr, $value:expr, $span:expr, $payload:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            payload: $payload,
        }
    };
}

/// Creates a Span covering `$length` characters on the line of `$start`.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(lexer.position(), word.chars().count());
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $length:expr) => {{
        let start: Position = $start;
        Span {
            end: Position::new(
                start.line,
                start.column + $length as u32,
                Rc::clone(&start.file),
            ),
            start,
        }
    }};
}
