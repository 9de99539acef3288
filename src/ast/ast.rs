use crate::{errors::errors::Error, Position};

use super::{
    expressions::Expression,
    scope::{Symbol, SymbolTable},
    statements::Statement,
    types::{LiteralValue, PrimitiveType},
};

/// Index of a node in its program's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Leaf nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    Identifier(String),
    Literal(LiteralValue),
    TypeKeyword(PrimitiveType),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Program { code: NodeId },
    /// Scope-defining: owns the symbols declared by its statements.
    CodeBlock {
        statements: Vec<NodeId>,
        symbols: SymbolTable,
    },
    Statement(Statement),
    Expression(Expression),
    Leaf(Leaf),
}

impl NodeKind {
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Program { code } => vec![*code],
            NodeKind::CodeBlock { statements, .. } => statements.clone(),
            NodeKind::Statement(statement) => statement.children(),
            NodeKind::Expression(expression) => expression.children(),
            NodeKind::Leaf(_) => vec![],
        }
    }
}

/// A node of the tree. `parent` is only ever followed upwards, for scope lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
    pub parent: Option<NodeId>,
}

/// A parsed program. All nodes live in one arena; the root is a `Program`
/// node owning exactly one `CodeBlock`.
#[derive(Debug, Clone)]
pub struct Program {
    nodes: Vec<Node>,
    root: NodeId,
    code: NodeId,
}

impl Program {
    pub fn new(position: Position) -> Self {
        let mut program = Program {
            nodes: vec![],
            root: NodeId(0),
            code: NodeId(0),
        };

        let code = program.add(
            NodeKind::CodeBlock {
                statements: vec![],
                symbols: SymbolTable::new(),
            },
            position.clone(),
        );
        program.root = program.add(NodeKind::Program { code }, position);
        program.code = code;

        program
    }

    /// Adds a node to the arena and attaches every child it names to it.
    pub fn add(&mut self, kind: NodeKind, position: Position) -> NodeId {
        let id = NodeId(self.nodes.len());
        let children = kind.children();

        self.nodes.push(Node {
            kind,
            position,
            parent: None,
        });

        for child in children {
            self.attach(child, id);
        }

        id
    }

    pub fn attach(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.0].parent = Some(parent);
    }

    /// Appends a statement to a code block, returning false if `block` is not a code block.
    pub fn push_statement(&mut self, block: NodeId, statement: NodeId) -> bool {
        match &mut self.nodes[block.0].kind {
            NodeKind::CodeBlock { statements, .. } => statements.push(statement),
            _ => return false,
        }

        self.attach(statement, block);
        true
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn code_block(&self) -> NodeId {
        self.code
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn statements(&self) -> &[NodeId] {
        match &self.get(self.code).kind {
            NodeKind::CodeBlock { statements, .. } => statements,
            _ => &[],
        }
    }

    pub fn statement(&self, id: NodeId) -> Option<&Statement> {
        match &self.get(id).kind {
            NodeKind::Statement(statement) => Some(statement),
            _ => None,
        }
    }

    pub fn expression(&self, id: NodeId) -> Option<&Expression> {
        match &self.get(id).kind {
            NodeKind::Expression(expression) => Some(expression),
            _ => None,
        }
    }

    pub fn leaf(&self, id: NodeId) -> Option<&Leaf> {
        match &self.get(id).kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// The type the analyzer inferred for an expression node, if any.
    pub fn expression_type(&self, id: NodeId) -> Option<PrimitiveType> {
        self.expression(id).and_then(|expression| expression.get_type())
    }

    pub fn symbols(&self, scope: NodeId) -> Option<&SymbolTable> {
        match &self.get(scope).kind {
            NodeKind::CodeBlock { symbols, .. } => Some(symbols),
            _ => None,
        }
    }

    pub fn symbols_mut(&mut self, scope: NodeId) -> Option<&mut SymbolTable> {
        match &mut self.get_mut(scope).kind {
            NodeKind::CodeBlock { symbols, .. } => Some(symbols),
            _ => None,
        }
    }

    /// Walks parent links from `from` (inclusive) to the nearest scope-defining node.
    pub fn nearest_scope(&self, from: NodeId) -> Option<NodeId> {
        let mut current = Some(from);

        while let Some(id) = current {
            let node = self.get(id);
            if let NodeKind::CodeBlock { .. } = node.kind {
                return Some(id);
            }
            current = node.parent;
        }

        None
    }

    /// Like [`Program::nearest_scope`], but a missing scope is an internal error:
    /// every statement of a parsed program sits inside a code block.
    pub fn enclosing_scope(&self, from: NodeId) -> Result<NodeId, Error> {
        self.nearest_scope(from).ok_or_else(|| {
            Error::internal(
                format!(
                    "could not find a scope-defining node above node {}",
                    from.0
                ),
                self.get(from).position.clone(),
            )
        })
    }

    /// Resolves an identifier along the scope chain, innermost scope first.
    ///
    /// # Returns
    ///
    /// The scope the symbol was found in together with the symbol, or `None`
    /// once the root is reached without a match.
    pub fn lookup_symbol(
        &self,
        from: NodeId,
        identifier: &str,
    ) -> Result<Option<(NodeId, &Symbol)>, Error> {
        let mut scope = Some(self.enclosing_scope(from)?);

        while let Some(id) = scope {
            if let Some(symbol) = self.symbols(id).and_then(|symbols| symbols.get(identifier)) {
                return Ok(Some((id, symbol)));
            }

            scope = self
                .get(id)
                .parent
                .and_then(|parent| self.nearest_scope(parent));
        }

        Ok(None)
    }
}
