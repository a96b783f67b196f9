use fxhash::FxHashMap;

use crate::error::Error;

/// An adjacency-list graph, internally 1-indexed (index `0` is the DFS
/// "no parent" sentinel, never a real vertex).
///
/// Every undirected edge `(a, b)` is stored twice, once in `a`'s list and
/// once in `b`'s — this duplication is what lets the DFS read degree
/// directly off list length, and is required for correctness. Self-loops
/// and parallel edges are permitted.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph on vertices `0..n` from a sequence of undirected
    /// edges. Each edge is pushed onto both endpoints' adjacency lists.
    pub fn build(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
        let mut adjacency = vec![Vec::new(); n + 1];
        let mut edge_count = 0;
        for (a, b) in edges {
            adjacency[a + 1].push(b + 1);
            adjacency[b + 1].push(a + 1);
            edge_count += 1;
        }
        log::debug!("built graph: {} vertices, {} edges", n, edge_count);
        Graph {
            adjacency,
            edge_count,
        }
    }

    /// Builds a graph from a sequence of undirected edges, inferring the
    /// vertex count as one more than the largest endpoint seen.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
        let edges: Vec<(usize, usize)> = edges.into_iter().collect();
        let n = edges.iter().map(|&(a, b)| a.max(b) + 1).max().unwrap_or(0);
        Graph::build(n, edges)
    }

    /// Builds a graph directly from pre-paired adjacency lists (0-based
    /// external ids), the shape `compute_three_edge_connected_components`
    /// is given: `adjacency[a]` already contains `b` for every edge
    /// `(a, b)`, with no further duplication performed here.
    pub fn from_adjacency_lists(adjacency: &[Vec<usize>]) -> Graph {
        let n = adjacency.len();
        let mut internal = vec![Vec::new(); n + 1];
        let mut edge_count = 0;
        for (a, neighbours) in adjacency.iter().enumerate() {
            internal[a + 1] = neighbours.iter().map(|&b| b + 1).collect();
            edge_count += neighbours.len();
        }
        Graph {
            adjacency: internal,
            edge_count: edge_count / 2,
        }
    }

    /// Parses the CLI text format:
    ///
    /// ```text
    /// N
    /// v_1>n1>n2>...
    /// v_2>n1>n2>...
    /// ...
    /// ```
    ///
    /// `N` is the vertex count; each of the following `N` lines gives a
    /// 1-based vertex id followed by its `>`-separated neighbour ids (also
    /// 1-based). Lines need not be given in vertex-id order. Every parsed
    /// `(a, b)` occurrence is checked for a matching `(b, a)` occurrence
    /// elsewhere in the input (by count, so parallel edges are fine); a
    /// mismatch is reported as [`Error::InconsistentUndirected`].
    pub fn parse(text: &str) -> Result<Graph, Error> {
        let mut lines = text.lines().enumerate();

        let (_, header) = lines.next().ok_or_else(|| Error::MalformedInput {
            line: 1,
            detail: "empty input, expected vertex count on line 1".to_string(),
        })?;
        let n: usize = header.trim().parse().map_err(|_| Error::MalformedInput {
            line: 1,
            detail: format!("expected a decimal vertex count, got {:?}", header),
        })?;

        let mut adjacency = vec![Vec::new(); n + 1];
        let mut edge_count = 0;
        let mut seen: FxHashMap<(usize, usize), isize> = FxHashMap::default();

        for (idx, line) in lines {
            let lineno = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('>');
            let vertex: usize = fields
                .next()
                .ok_or_else(|| Error::MalformedInput {
                    line: lineno,
                    detail: "missing vertex id".to_string(),
                })?
                .trim()
                .parse()
                .map_err(|_| Error::MalformedInput {
                    line: lineno,
                    detail: format!("expected a decimal vertex id on line {}", lineno),
                })?;
            if vertex == 0 || vertex > n {
                return Err(Error::MalformedInput {
                    line: lineno,
                    detail: format!("vertex id {} out of range 1..={}", vertex, n),
                });
            }

            for field in fields {
                let field = field.trim();
                if field.is_empty() {
                    continue;
                }
                let neighbour: usize = field.parse().map_err(|_| Error::MalformedInput {
                    line: lineno,
                    detail: format!("expected a decimal neighbour id, got {:?}", field),
                })?;
                if neighbour == 0 || neighbour > n {
                    return Err(Error::MalformedInput {
                        line: lineno,
                        detail: format!("neighbour id {} out of range 1..={}", neighbour, n),
                    });
                }
                adjacency[vertex].push(neighbour);
                edge_count += 1;
                *seen.entry((vertex, neighbour)).or_insert(0) += 1;
                *seen.entry((neighbour, vertex)).or_insert(0) -= 1;
            }
        }
        edge_count /= 2;

        for (&(a, b), balance) in &seen {
            if *balance != 0 {
                return Err(Error::InconsistentUndirected { a: a - 1, b: b - 1 });
            }
        }

        log::debug!("parsed graph: {} vertices, {} edges", n, edge_count);
        Ok(Graph {
            adjacency,
            edge_count,
        })
    }

    /// Number of vertices (0-based external ids run `0..self.len()`).
    pub fn len(&self) -> usize {
        self.adjacency.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Internal 1-based adjacency list for `internal_id` (`1..=len()`).
    pub(crate) fn adjacency_of(&self, internal_id: usize) -> &[usize] {
        &self.adjacency[internal_id]
    }
}
