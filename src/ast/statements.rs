use super::ast::NodeId;

/// The statements of the language. Every child is a node of the same program arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement {
    /// `declare <identifier> : [<type>] [= <expression>]`
    VariableDeclaration {
        identifier: NodeId,
        type_keyword: Option<NodeId>,
        expression: Option<NodeId>,
    },
    /// `<identifier> : = <expression>`
    VariableAssignment {
        identifier: NodeId,
        expression: NodeId,
    },
    /// `stdin <identifier>`
    ReadInput { identifier: NodeId },
    /// `stdout <expression>`
    WriteOutput { expression: NodeId },
}

impl Statement {
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Statement::VariableDeclaration {
                identifier,
                type_keyword,
                expression,
            } => {
                let mut children = vec![*identifier];
                children.extend(type_keyword.iter().copied());
                children.extend(expression.iter().copied());
                children
            }
            Statement::VariableAssignment {
                identifier,
                expression,
            } => vec![*identifier, *expression],
            Statement::ReadInput { identifier } => vec![*identifier],
            Statement::WriteOutput { expression } => vec![*expression],
        }
    }
}
