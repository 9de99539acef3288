//! Renders a program back to source text.
//!
//! Every statement goes on its own line and every operator application is
//! parenthesised, so the output parses back to the same tree.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Leaf, NodeId, NodeKind, Program},
    expressions::Expression,
    statements::Statement,
};

impl Program {
    fn write_node(&self, f: &mut Formatter<'_>, id: NodeId) -> Result {
        match &self.get(id).kind {
            NodeKind::Program { code } => self.write_node(f, *code),
            NodeKind::CodeBlock { statements, .. } => {
                for statement in statements {
                    self.write_node(f, *statement)?;
                    writeln!(f)?;
                }
                Ok(())
            }
            NodeKind::Statement(statement) => self.write_statement(f, statement),
            NodeKind::Expression(expression) => self.write_expression(f, expression),
            NodeKind::Leaf(leaf) => write!(f, "{}", leaf),
        }
    }

    fn write_statement(&self, f: &mut Formatter<'_>, statement: &Statement) -> Result {
        match statement {
            Statement::VariableDeclaration {
                identifier,
                type_keyword,
                expression,
            } => {
                write!(f, "declare ")?;
                self.write_node(f, *identifier)?;
                write!(f, " :")?;
                if let Some(type_keyword) = type_keyword {
                    write!(f, " ")?;
                    self.write_node(f, *type_keyword)?;
                }
                if let Some(expression) = expression {
                    write!(f, " = ")?;
                    self.write_node(f, *expression)?;
                }
            }
            Statement::VariableAssignment {
                identifier,
                expression,
            } => {
                self.write_node(f, *identifier)?;
                write!(f, " := ")?;
                self.write_node(f, *expression)?;
            }
            Statement::ReadInput { identifier } => {
                write!(f, "stdin ")?;
                self.write_node(f, *identifier)?;
            }
            Statement::WriteOutput { expression } => {
                write!(f, "stdout ")?;
                self.write_node(f, *expression)?;
            }
        }
        write!(f, ";")
    }

    fn write_expression(&self, f: &mut Formatter<'_>, expression: &Expression) -> Result {
        match expression {
            Expression::Binary {
                operator,
                left,
                right,
                ..
            } => {
                write!(f, "(")?;
                self.write_node(f, *left)?;
                write!(f, " {} ", operator)?;
                self.write_node(f, *right)?;
                write!(f, ")")
            }
            Expression::Unary {
                operator, operand, ..
            } => {
                write!(f, "({}", operator)?;
                self.write_node(f, *operand)?;
                write!(f, ")")
            }
            Expression::SingleLeaf { leaf, .. } => self.write_node(f, *leaf),
        }
    }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Leaf::Identifier(name) => write!(f, "{}", name),
            Leaf::Literal(value) => write!(f, "{}", value),
            Leaf::TypeKeyword(ty) => write!(f, "{}", ty),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.write_node(f, self.root())
    }
}
