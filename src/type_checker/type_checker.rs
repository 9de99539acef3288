use crate::{
    ast::{
        ast::{Leaf, NodeId, Program},
        scope::Symbol,
        statements::Statement,
        types::PrimitiveType,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::expr::type_check_expr;

/// Analyzes every statement of the program in source order.
///
/// Symbol tables are filled in and every expression node is tagged with
/// its inferred type. The first error stops the analysis.
pub fn analyze(program: &mut Program) -> Result<(), Error> {
    let statements = program.statements().to_vec();
    tracing::debug!("analyzing {} statements", statements.len());

    for statement in statements {
        type_check_stmt(program, statement)?;
    }

    if let Some(symbols) = program.symbols(program.code_block()) {
        for symbol in symbols.iter() {
            tracing::trace!(
                "`{}: {}` declared on line {}",
                symbol.identifier,
                symbol.ty,
                symbol.declared_at_line
            );
        }
    }

    Ok(())
}

pub fn type_check_stmt(program: &mut Program, id: NodeId) -> Result<(), Error> {
    let position = program.get(id).position.clone();
    let Some(statement) = program.statement(id).copied() else {
        return Err(Error::internal(
            format!("node {} is not a statement", id.0),
            position,
        ));
    };

    match statement {
        Statement::VariableDeclaration {
            identifier,
            type_keyword,
            expression,
        } => {
            let name = identifier_name(program, identifier)?;

            let (ty, initialized) = match (type_keyword, expression) {
                (Some(type_keyword), Some(expression)) => {
                    let declared = type_keyword_type(program, type_keyword)?;
                    let inferred = type_check_expr(program, expression)?;
                    if declared != inferred {
                        return Err(Error::type_error(
                            format!(
                                "type mismatch between the declared type of variable `{}` ({}) and the type of its expression ({})",
                                name, declared, inferred
                            ),
                            program.get(expression).position.clone(),
                        ));
                    }
                    (declared, true)
                }
                (None, Some(expression)) => (type_check_expr(program, expression)?, true),
                (Some(type_keyword), None) => (type_keyword_type(program, type_keyword)?, false),
                (None, None) => {
                    return Err(Error::internal(
                        format!("declaration of `{}` has neither a type nor an expression", name),
                        position,
                    ))
                }
            };

            register_symbol(
                program,
                id,
                Symbol {
                    identifier: name,
                    ty,
                    initialized,
                    declared_at_line: position.line,
                },
                position.clone(),
            )
        }
        Statement::VariableAssignment {
            identifier,
            expression,
        } => {
            let name = identifier_name(program, identifier)?;
            let identifier_position = program.get(identifier).position.clone();
            let (scope, symbol) = lookup_symbol(program, id, &name, identifier_position)?;

            let inferred = type_check_expr(program, expression)?;
            if symbol.ty != inferred {
                return Err(Error::type_error(
                    format!(
                        "type mismatch between the type of variable `{}` ({}) and the type of the expression ({})",
                        name, symbol.ty, inferred
                    ),
                    program.get(expression).position.clone(),
                ));
            }

            mark_initialized(program, scope, &name, position)
        }
        Statement::ReadInput { identifier } => {
            let name = identifier_name(program, identifier)?;
            let identifier_position = program.get(identifier).position.clone();
            let (scope, _) = lookup_symbol(program, id, &name, identifier_position)?;

            mark_initialized(program, scope, &name, position)
        }
        Statement::WriteOutput { expression } => {
            type_check_expr(program, expression).map(|_| ())
        }
    }
}

/// Registers a symbol in the scope enclosing `from`.
pub fn register_symbol(
    program: &mut Program,
    from: NodeId,
    symbol: Symbol,
    current_position: Position,
) -> Result<(), Error> {
    let scope = program.enclosing_scope(from)?;
    tracing::trace!(
        "declaring `{}: {}` in scope {}",
        symbol.identifier,
        symbol.ty,
        scope.0
    );

    match program.symbols_mut(scope) {
        Some(symbols) => symbols.register(symbol, current_position),
        None => Err(Error::internal(
            format!("node {} owns no symbol table", scope.0),
            current_position,
        )),
    }
}

/// Resolves an identifier along the scope chain starting at `from`.
///
/// # Returns
///
/// The scope holding the symbol and a copy of the symbol, or
/// UndeclaredIdentifier when no scope up to the root declares it.
pub fn lookup_symbol(
    program: &Program,
    from: NodeId,
    identifier: &str,
    current_position: Position,
) -> Result<(NodeId, Symbol), Error> {
    match program.lookup_symbol(from, identifier)? {
        Some((scope, symbol)) => Ok((scope, symbol.clone())),
        None => Err(Error::new(
            ErrorImpl::UndeclaredIdentifier {
                identifier: identifier.to_string(),
            },
            current_position,
        )),
    }
}

fn mark_initialized(
    program: &mut Program,
    scope: NodeId,
    identifier: &str,
    current_position: Position,
) -> Result<(), Error> {
    let marked = program
        .symbols_mut(scope)
        .map(|symbols| symbols.mark_initialized(identifier))
        .unwrap_or(false);

    if marked {
        Ok(())
    } else {
        Err(Error::internal(
            format!("resolved symbol `{}` vanished from scope {}", identifier, scope.0),
            current_position,
        ))
    }
}

fn identifier_name(program: &Program, id: NodeId) -> Result<String, Error> {
    match program.leaf(id) {
        Some(Leaf::Identifier(name)) => Ok(name.clone()),
        _ => Err(Error::internal(
            format!("node {} is not an identifier", id.0),
            program.get(id).position.clone(),
        )),
    }
}

fn type_keyword_type(program: &Program, id: NodeId) -> Result<PrimitiveType, Error> {
    match program.leaf(id) {
        Some(Leaf::TypeKeyword(ty)) => Ok(*ty),
        _ => Err(Error::internal(
            format!("node {} is not a type keyword", id.0),
            program.get(id).position.clone(),
        )),
    }
}
