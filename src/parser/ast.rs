use std::fmt;

/// Node kinds in the syntax tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Block,
    Assign,
    Suma,
    Resta,
    Multi,
    Dividir,
    Num,
    Id,
    Ident,
}

impl NodeKind {
    /// Label used in tree listings and graph output
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Block => "block",
            NodeKind::Assign => "assign",
            NodeKind::Suma => "suma",
            NodeKind::Resta => "resta",
            NodeKind::Multi => "multi",
            NodeKind::Dividir => "dividir",
            NodeKind::Num => "num",
            NodeKind::Id => "id",
            NodeKind::Ident => "ID",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            BinaryOp::Add => NodeKind::Suma,
            BinaryOp::Sub => NodeKind::Resta,
            BinaryOp::Mul => NodeKind::Multi,
            BinaryOp::Div => NodeKind::Dividir,
        }
    }
}

/// A syntax tree node.
///
/// Nodes are built bottom-up and never change afterwards: `num`, `id` and
/// `ID` leaves carry their literal text, every other kind carries no value
/// and owns its operands or statements as ordered children.
///
/// Operator chains can nest arbitrarily deep, so traversals and `Drop` walk
/// the tree with an explicit stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    value: Option<String>,
    children: Vec<Node>,
}

impl Node {
    pub fn block(statements: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Block,
            value: None,
            children: statements,
        }
    }

    /// `target` is the `ID` leaf from [`Node::ident`]
    pub fn assign(target: Node, value: Node) -> Self {
        Self {
            kind: NodeKind::Assign,
            value: None,
            children: vec![target, value],
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Self {
            kind: op.node_kind(),
            value: None,
            children: vec![left, right],
        }
    }

    pub fn num(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Num, text)
    }

    pub fn id(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Id, text)
    }

    /// Assignment target, labelled `ID` apart from `id` references
    pub fn ident(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Ident, text)
    }

    fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// `kind: value` with `None` standing in for a missing value
    pub fn label(&self) -> String {
        format!("{}: {}", self.kind, self.value().unwrap_or("None"))
    }

    /// Number of nodes in this subtree, including `self`
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Write the subtree pre-order, two spaces of indent per level.
    pub fn write_tree<W: fmt::Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        let mut stack = vec![(self, depth)];
        while let Some((node, depth)) = stack.pop() {
            writeln!(out, "{}{}", "  ".repeat(depth), node.label())?;
            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }

    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_tree(&mut out, 0);
        out
    }

    /// Append this subtree's graph lines, numbering from `node_id`.
    /// Returns the highest identity used.
    pub fn to_dot(
        &self,
        lines: &mut Vec<crate::graph::GraphLine>,
        node_id: usize,
    ) -> Result<usize, crate::graph::GraphError> {
        crate::graph::serialize(self, node_id, lines)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
