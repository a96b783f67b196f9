use std::collections::VecDeque;

use crate::error::Error;
use crate::graph::Graph;
use crate::state::State;

/// One entry of the explicit DFS control stack, standing in for a native
/// call frame. `Recur` is the "initial" phase of a frame (vertex
/// initialisation, begin scanning adjacency); `Loop` processes a single
/// edge; `Return` is the "resume" phase, the post-recursion continuation
/// that runs once the child frame for a tree edge has fully unwound.
#[derive(Debug)]
enum Inst {
    Recur(usize, usize),
    Loop(usize, usize, usize),
    Return(usize, usize),
}

type InstStack = VecDeque<Inst>;

fn run_inst(
    inst: Inst,
    stack: &mut InstStack,
    state: &mut State,
    graph: &Graph,
) -> Result<(), Error> {
    match inst {
        Inst::Recur(w, v) => {
            state.visit(w);
            // Pushed in reverse so popping the front replays the
            // adjacency list in its original order.
            for &u in graph.adjacency_of(w).iter().rev() {
                stack.push_front(Inst::Loop(w, v, u));
            }
        }
        Inst::Loop(w, v, u) => {
            if !state.visited[u] {
                // Tree edge: suspend w's frame at the Return continuation
                // and descend into u first.
                stack.push_front(Inst::Return(w, u));
                stack.push_front(Inst::Recur(u, w));
            } else if u == v && state.outgoing_tree_edge[w] {
                // The real parent edge, consumed exactly once; any further
                // (w, v) edge is a parallel edge and falls through to the
                // back-edge cases below.
                state.outgoing_tree_edge[w] = false;
            } else if state.pre[w] > state.pre[u] {
                // Case C: (w, u) is an outgoing back edge of w.
                state.push_back_edge(w, u)?;
                if state.pre[u] < state.lowpt[w] {
                    state.absorb_path(w, state.next_on_path[w], None);
                    state.next_on_path[w] = w;
                    state.lowpt[w] = state.pre[u];
                }
            } else if !state.is_null_path(w) {
                // Case D: (w, u) is an incoming back edge of w, and the
                // w-path is non-empty so there's something to absorb.
                let mut parent = w;
                let mut child = state.next_on_path[w];
                while parent != child
                    && state.pre[child] <= state.pre[u]
                    && state.pre[u] <= state.pre[child] + state.nd[child] - 1
                {
                    parent = child;
                    child = state.next_on_path[child];
                }
                state.absorb_path(w, state.next_on_path[w], Some(parent));
                state.next_on_path[w] = if state.is_null_path(parent) {
                    w
                } else {
                    state.next_on_path[parent]
                };
            }
            // Else: incoming back edge but the w-path is empty — nothing
            // to absorb yet.
        }
        Inst::Return(w, u) => {
            state.nd[w] += state.nd[u];

            let pu = if state.reduced_degree_is_two(u) {
                let pu = if !state.is_null_path(u) {
                    // u-path non-empty: u is spat out, its path resumes
                    // from its successor.
                    state.next_on_path[u]
                } else {
                    // u-path empty: nothing more to absorb from u's side.
                    // u's single remaining outgoing back edge, if any,
                    // becomes w's.
                    state.move_lone_back_edge(u, w);
                    w
                };
                state.emit_component(u);
                pu
            } else {
                // Reduced degree > 2: u itself is the next absorption
                // candidate.
                u
            };

            if state.lowpt[w] <= state.lowpt[u] {
                state.absorb_path(w, pu, None);
            } else {
                state.lowpt[w] = state.lowpt[u];
                state.absorb_path(w, state.next_on_path[w], None);
                state.next_on_path[w] = pu;
            }
        }
    }
    Ok(())
}

fn three_edge_connect(graph: &Graph, state: &mut State) -> Result<(), Error> {
    let mut stack: InstStack = VecDeque::new();

    for r in 1..=graph.len() {
        if !state.visited[r] {
            log::debug!("starting DFS at root {}", r - 1);
            stack.push_front(Inst::Recur(r, 0));
            while let Some(inst) = stack.pop_front() {
                run_inst(inst, &mut stack, state, graph)?;
            }
            state.emit_component(r);
        }
    }
    Ok(())
}

/// Runs the algorithm on `graph`, returning the 3-edge-connected
/// components as 0-based vertex id sets. Fails only if the internal arena
/// cannot be allocated.
pub fn try_find_components(graph: &Graph) -> Result<Vec<Vec<usize>>, Error> {
    let mut state = State::initialize(graph)?;
    three_edge_connect(graph, &mut state)?;
    Ok(state.into_components())
}

/// Infallible convenience wrapper over [`try_find_components`]. The DFS
/// itself never fails on well-formed input; the only failure mode is
/// arena allocation, which is as fatal here as an ordinary `Vec` growth
/// failure would be elsewhere in the crate.
pub fn find_components(graph: &Graph) -> Vec<Vec<usize>> {
    try_find_components(graph).expect("graph arena allocation failed")
}
