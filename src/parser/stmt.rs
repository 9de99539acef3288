use crate::{
    ast::{ast::{NodeId, NodeKind}, statements::Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser};

pub fn parse_variable_declaration_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.expect(TokenKind::Declaration)?;

    let identifier_token =
        parser.expect_error(TokenKind::Identifier, "expected identifier during variable declaration")?;
    let identifier = parser.add_leaf(&identifier_token)?;

    let has_colon = parser.current_token_kind() == Some(TokenKind::Colon);
    if has_colon {
        parser.advance();
    }

    let type_keyword = match parser.current_token_kind() {
        Some(TokenKind::TypeKeyword) if has_colon => {
            let token = parser.expect(TokenKind::TypeKeyword)?;
            Some(parser.add_leaf(&token)?)
        }
        Some(TokenKind::TypeKeyword) => {
            return Err(Error::syntax(
                format!("expected `:` before the type of `{}`", identifier_token.value),
                parser.get_position(),
            ))
        }
        _ => None,
    };

    let expression = if parser.current_token_kind() == Some(TokenKind::Equal) {
        parser.advance();
        Some(parse_expression(parser)?)
    } else {
        None
    };

    if type_keyword.is_none() && expression.is_none() {
        return Err(Error::syntax(
            format!(
                "declaration of `{}` has no explicit type and no expression to infer a type from",
                identifier_token.value
            ),
            start_token.span.start.clone(),
        ));
    }

    Ok(parser.add_node(
        NodeKind::Statement(Statement::VariableDeclaration {
            identifier,
            type_keyword,
            expression,
        }),
        start_token.span.start,
    ))
}

pub fn parse_variable_assignment_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let identifier_token = parser.expect(TokenKind::Identifier)?;
    let identifier = parser.add_leaf(&identifier_token)?;

    let message = format!("expected `:=` after `{}`", identifier_token.value);
    parser.expect_error(TokenKind::Colon, &message)?;
    parser.expect_error(TokenKind::Equal, &message)?;

    let expression = parse_expression(parser)?;

    Ok(parser.add_node(
        NodeKind::Statement(Statement::VariableAssignment {
            identifier,
            expression,
        }),
        identifier_token.span.start,
    ))
}

pub fn parse_standard_input_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.expect(TokenKind::StandardInput)?;

    let identifier_token = parser.expect_error(TokenKind::Identifier, "expected identifier after `stdin`")?;
    let identifier = parser.add_leaf(&identifier_token)?;

    Ok(parser.add_node(
        NodeKind::Statement(Statement::ReadInput { identifier }),
        start_token.span.start,
    ))
}

pub fn parse_standard_output_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.expect(TokenKind::StandardOutput)?;

    let expression = parse_expression(parser)?;

    Ok(parser.add_node(
        NodeKind::Statement(Statement::WriteOutput { expression }),
        start_token.span.start,
    ))
}
