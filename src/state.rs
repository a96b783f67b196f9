use crate::arena::{BackEdgeArena, CellId};
use crate::error::Error;
use crate::graph::Graph;

/// All per-vertex auxiliary arrays the DFS maintains, sized `n+1` (index
/// `0` is the "no parent" sentinel and is never touched by the algorithm).
#[derive(Debug)]
pub struct State {
    pub next_sigma: Vec<usize>,
    pub next_on_path: Vec<usize>,
    pub visited: Vec<bool>,
    pub outgoing_tree_edge: Vec<bool>,
    pub pre: Vec<usize>,
    pub lowpt: Vec<usize>,
    pub nd: Vec<usize>,
    pub count: usize,

    lb_head: Vec<Option<CellId>>,
    lb_tail: Vec<Option<CellId>>,
    back_edges: BackEdgeArena,

    components: Vec<Vec<usize>>,
}

impl State {
    pub fn initialize(graph: &Graph) -> Result<State, Error> {
        let num_nodes = graph.len() + 1;

        Ok(State {
            count: 1,
            next_sigma: vec![0; num_nodes],
            next_on_path: vec![0; num_nodes],
            pre: vec![0; num_nodes],
            lowpt: vec![0; num_nodes],
            nd: vec![1; num_nodes],
            visited: vec![false; num_nodes],
            outgoing_tree_edge: vec![true; num_nodes],
            lb_head: vec![None; num_nodes],
            lb_tail: vec![None; num_nodes],
            back_edges: BackEdgeArena::with_capacity_hint(graph.edge_count())?,
            components: Vec::new(),
        })
    }

    /// Per-vertex initialisation on first visit (§4.3).
    pub fn visit(&mut self, w: usize) {
        self.visited[w] = true;
        self.next_sigma[w] = w;
        self.next_on_path[w] = w;
        self.pre[w] = self.count;
        self.lowpt[w] = self.count;
        self.nd[w] = 1;
        self.count += 1;
    }

    pub fn is_null_path(&self, x: usize) -> bool {
        self.next_on_path[x] == x
    }

    pub fn has_outgoing_back_edges(&self, x: usize) -> bool {
        self.lb_head[x].is_some()
    }

    /// Prunes self-loops/outdated entries from the head of `LB[u]` and
    /// counts real back edges, stopping once `bedge > 1`; the first real
    /// entry found is temporarily detached so scanning can continue for a
    /// second, then restored as the head. Used when `u`'s path is empty.
    fn scan_null_path(&mut self, u: usize) -> usize {
        let mut bedge = 0usize;
        let mut first_real: Option<CellId> = None;
        while bedge <= 1 {
            let head = match self.lb_head[u] {
                Some(h) => h,
                None => break,
            };
            let target = self.back_edges.target(head);
            if self.pre[u] > self.pre[target] {
                bedge += 1;
                if bedge == 1 {
                    first_real = Some(head);
                    self.unlink_head(u, head);
                }
            } else {
                self.unlink_head(u, head);
            }
        }
        if let Some(cell) = first_real {
            self.relink_head(u, cell);
        }
        bedge
    }

    /// Same pruning, but stops as soon as a single real back edge is found
    /// (it is left at the head, not detached). Used when `u`'s path is
    /// non-empty, where a single outgoing back edge already rules out
    /// reduced degree 2.
    fn scan_non_null_path(&mut self, u: usize) -> usize {
        let mut bedge = 0usize;
        while bedge == 0 {
            let head = match self.lb_head[u] {
                Some(h) => h,
                None => break,
            };
            let target = self.back_edges.target(head);
            if self.pre[u] > self.pre[target] {
                bedge += 1;
            } else {
                self.unlink_head(u, head);
            }
        }
        bedge
    }

    /// Reduced degree of `u` is 2 iff, after pruning, the bound from
    /// §4.4 step 2 is met.
    pub fn reduced_degree_is_two(&mut self, u: usize) -> bool {
        if self.is_null_path(u) {
            self.scan_null_path(u) <= 1
        } else {
            self.scan_non_null_path(u) == 0
        }
    }

    fn unlink_head(&mut self, owner: usize, head: CellId) {
        self.lb_head[owner] = self.back_edges.next(head);
        if self.lb_head[owner].is_none() {
            self.lb_tail[owner] = None;
        }
    }

    fn relink_head(&mut self, owner: usize, cell: CellId) {
        self.back_edges.set_next(cell, self.lb_head[owner]);
        if self.lb_head[owner].is_none() {
            self.lb_tail[owner] = Some(cell);
        }
        self.lb_head[owner] = Some(cell);
    }

    /// Allocates a cell for the outgoing back edge `(owner, target)` and
    /// prepends it to `LB[owner]` (Case C).
    pub fn push_back_edge(&mut self, owner: usize, target: usize) -> Result<(), Error> {
        let cell = self.back_edges.alloc(target)?;
        self.relink_head(owner, cell);
        Ok(())
    }

    /// Moves the single remaining entry of `LB[u]` (there is at most one,
    /// by the precondition that `u` has reduced degree 2 with a non-empty
    /// `LB[u]`) onto the head of `LB[w]`.
    pub fn move_lone_back_edge(&mut self, u: usize, w: usize) {
        if let Some(cell) = self.lb_head[u] {
            self.relink_head(w, cell);
            self.lb_head[u] = None;
            self.lb_tail[u] = None;
        }
    }

    fn concat_back_edges(&mut self, root: usize, x: usize) {
        if let Some(x_head) = self.lb_head[x] {
            match self.lb_head[root] {
                None => self.lb_head[root] = Some(x_head),
                Some(_) => {
                    let tail = self.lb_tail[root].expect("non-empty LB always has a tail");
                    self.back_edges.set_next(tail, Some(x_head));
                }
            }
            self.lb_tail[root] = self.lb_tail[x];
            self.lb_head[x] = None;
            self.lb_tail[x] = None;
        }
    }

    /// Merges the chain `first, next_on_path[first], ...` into `σ(root)`,
    /// stopping after absorbing `terminator` (or at a fixed point). A
    /// no-op if `root` is itself the terminator (§4.5).
    pub fn absorb_path(&mut self, root: usize, first: usize, terminator: Option<usize>) {
        if Some(root) != terminator {
            let mut current = root;
            let mut step = first;
            while current != step {
                self.next_sigma.swap(root, step);
                self.concat_back_edges(root, step);
                current = step;
                if Some(step) != terminator {
                    step = self.next_on_path[step];
                }
            }
        }
    }

    pub fn sigma_iter(&self, start: usize) -> SigmaIter<'_> {
        SigmaIter::new(self, start)
    }

    /// Emits the σ-cycle anchored at `start` as a component, converting
    /// internal 1-based ids to the external 0-based ids (§4.6).
    pub fn emit_component(&mut self, start: usize) {
        let component: Vec<usize> = self.sigma_iter(start).map(|x| x - 1).collect();
        log::debug!("emitted component of {} vertices anchored at {}", component.len(), start);
        self.components.push(component);
    }

    pub fn into_components(self) -> Vec<Vec<usize>> {
        self.components
    }
}

/// Iterates the σ-cycle at `node`, yielding every vertex absorbed into its
/// class exactly once (order is a rotation of the cycle, not significant).
pub struct SigmaIter<'a> {
    start: usize,
    current: usize,
    next_sigma: &'a [usize],
    done: bool,
}

impl<'a> SigmaIter<'a> {
    fn new(state: &'a State, node: usize) -> SigmaIter<'a> {
        SigmaIter {
            start: node,
            current: state.next_sigma[node],
            next_sigma: &state.next_sigma,
            done: false,
        }
    }
}

impl<'a> Iterator for SigmaIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            None
        } else {
            if self.current == self.start {
                self.done = true;
            }
            self.current = self.next_sigma[self.current];
            Some(self.current)
        }
    }
}
