use crate::graph::GraphError;
use crate::parser::Node;
use log::trace;
use std::fmt;

/// One line of a DOT graph body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphLine {
    Node { id: usize, label: String },
    Edge { from: usize, to: usize },
}

impl GraphLine {
    pub fn is_node(&self) -> bool {
        matches!(self, GraphLine::Node { .. })
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, GraphLine::Edge { .. })
    }
}

impl fmt::Display for GraphLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphLine::Node { id, label } => {
                write!(f, "node{id} [label=\"{}\"];", escape_label(label))
            }
            GraphLine::Edge { from, to } => write!(f, "node{from} -> node{to};"),
        }
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Serialize `node` pre-order, assigning identities from `start_id`.
///
/// Each child is numbered right after everything its previous sibling used,
/// and its edge is emitted before its subtree. Returns the highest identity
/// assigned, so a second tree can continue from `returned + 1`. Fails
/// without emitting anything if the identities would not fit in `usize`.
pub fn serialize(
    node: &Node,
    start_id: usize,
    lines: &mut Vec<GraphLine>,
) -> Result<usize, GraphError> {
    let nodes = node.count();
    let last_id = start_id
        .checked_add(nodes - 1)
        .ok_or(GraphError::IdOverflow { start_id, nodes })?;

    // (node, parent identity); children pushed in reverse to pop in order
    let mut stack = vec![(node, None)];
    let mut offset = 0;
    while let Some((current, parent)) = stack.pop() {
        let id = start_id + offset;
        offset += 1;

        if let Some(from) = parent {
            lines.push(GraphLine::Edge { from, to: id });
        }
        lines.push(GraphLine::Node {
            id,
            label: current.label(),
        });
        stack.extend(current.children().iter().rev().map(|child| (child, Some(id))));
    }

    Ok(last_id)
}

/// Serialize a whole tree from identity 0
pub fn graph_lines(root: &Node) -> Result<Vec<GraphLine>, GraphError> {
    let mut lines = Vec::with_capacity(root.count() * 2);
    let last_id = serialize(root, 0, &mut lines)?;
    trace!("serialized {} graph lines, last id {}", lines.len(), last_id);
    Ok(lines)
}

/// Frame graph lines as a named `digraph` block, one indented line each.
pub fn render_lines(name: &str, lines: &[GraphLine]) -> String {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("digraph {name} {{"));
    out.extend(lines.iter().map(|line| format!("  {line}")));
    out.push("}".to_string());
    out.join("\n")
}

/// Serialize `root` from `start_id` and frame it as `digraph <name> { ... }`
pub fn render_digraph(name: &str, root: &Node, start_id: usize) -> Result<String, GraphError> {
    let mut lines = Vec::new();
    serialize(root, start_id, &mut lines)?;
    Ok(render_lines(name, &lines))
}
