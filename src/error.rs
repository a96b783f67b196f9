use thiserror::Error;

/// Fatal errors produced while building or parsing a graph.
///
/// The DFS itself is total on well-formed input: once a `Graph` has been
/// constructed, `find_components`/`three_edge_connect` cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed input at line {line}: {detail}")]
    MalformedInput { line: usize, detail: String },

    #[error("edge ({a}, {b}) appears in one endpoint's adjacency list without a mate in the other's")]
    InconsistentUndirected { a: usize, b: usize },

    #[error("allocation failure while growing a graph arena")]
    OutOfMemory,
}

pub type Result<T> = std::result::Result<T, Error>;
