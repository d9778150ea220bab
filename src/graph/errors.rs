use thiserror::Error;

/// Graph export error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node identities overflow: {nodes} nodes do not fit after start id {start_id}")]
    IdOverflow { start_id: usize, nodes: usize },
}
