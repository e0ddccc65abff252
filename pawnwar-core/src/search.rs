//! Exhaustive alpha-beta search
//!
//! The search never depth-limits: every line is played out until a side
//! captures all opposing pieces or reaches its goal row. Values are
//! `WHITE_WIN` (+1) or `BLACK_WIN` (-1); White maximizes, Black minimizes.
//!
//! ## Root decision
//!
//! At a White root the first child that lifts alpha to `WHITE_WIN` is kept as
//! the chosen move; if none does, the last child evaluated is kept. The
//! choice is never revised, so a later child of equal value is not reported.
//! A Black root has no recording rule and reports no move.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::game::{Move, Side, UNDECIDED, WHITE_WIN};
use crate::trace::{NoopObserver, SearchEvent, SearchObserver};
use crate::tree::GameNode;

// ============================================================================
// RESULTS
// ============================================================================

/// Counters gathered during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, including terminal ones
    pub nodes_visited: u64,
    /// Nodes whose position was already decided
    pub terminal_nodes: u64,
    /// Nodes whose children were generated
    pub expansions: u64,
    /// Undecided nodes where the side to move had no legal move
    pub stalled_nodes: u64,
    /// Times the window closed with siblings still left to search
    pub cutoffs: u64,
    /// Deepest ply reached (root = 0)
    pub max_depth: usize,
}

/// Result of searching from a root
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Game-theoretic value of the root
    pub value: i32,
    /// Move recorded at the root, copied out of the tree
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

// ============================================================================
// ALPHA-BETA SEARCH
// ============================================================================

/// Alpha-beta search driver
pub struct AlphaBetaSearch<O: SearchObserver = NoopObserver> {
    config: SearchConfig,
    observer: O,
    stats: SearchStats,
}

impl AlphaBetaSearch<NoopObserver> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl Default for AlphaBetaSearch<NoopObserver> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<O: SearchObserver> AlphaBetaSearch<O> {
    pub fn with_observer(config: SearchConfig, observer: O) -> Self {
        Self {
            config,
            observer,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Solve `board` with White to move
    pub fn solve(&mut self, board: Board) -> Result<SearchOutcome> {
        let mut root = GameNode::root(board);
        self.solve_node(&mut root)
    }

    /// Search from `root` with the configured window and report the decision
    pub fn solve_node(&mut self, root: &mut GameNode) -> Result<SearchOutcome> {
        info!(
            "Starting search: {} to move, window [{}, {}]",
            root.side_to_move(),
            self.config.alpha,
            self.config.beta
        );

        let value = self.search(root, self.config.alpha, self.config.beta)?;
        let best_move = root.best_child().and_then(GameNode::last_move);

        match best_move {
            Some(mv) => info!(
                "Search finished: value={}, move {}, {} nodes",
                value, mv, self.stats.nodes_visited
            ),
            None => info!(
                "Search finished: value={}, no move recorded, {} nodes",
                value, self.stats.nodes_visited
            ),
        }

        Ok(SearchOutcome {
            value,
            best_move,
            stats: self.stats,
        })
    }

    /// Alpha-beta value of `node`, treating it as the root.
    ///
    /// Resets the statistics. If `node` is a White node, its chosen child is
    /// recorded on it (see the module docs).
    pub fn search(&mut self, node: &mut GameNode, alpha: i32, beta: i32) -> Result<i32> {
        self.stats = SearchStats::default();
        self.search_node(node, alpha, beta, 0)
    }

    fn search_node(&mut self, node: &mut GameNode, mut alpha: i32, mut beta: i32, depth: usize) -> Result<i32> {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let terminal = node.terminal_value();
        if terminal != UNDECIDED {
            self.stats.terminal_nodes += 1;
            return Ok(terminal);
        }

        let side = node.side_to_move();
        let retain = self.config.retain_tree;
        let children = node.expand_children()?;
        self.stats.expansions += 1;

        let count = children.len();
        debug!(depth, %side, children = count, "expanded");
        if count == 0 {
            self.stats.stalled_nodes += 1;
            debug!(depth, %side, "no legal move, returning bound unchanged");
        }

        let mut chosen = None;
        for (index, child) in children.iter_mut().enumerate() {
            let value = self.search_node(child, alpha, beta, depth + 1)?;

            match side {
                Side::White => {
                    alpha = alpha.max(value);
                    if depth == 0 && chosen.is_none() && (alpha == WHITE_WIN || index + 1 == count) {
                        chosen = Some(index);
                    }
                }
                Side::Black => beta = beta.min(value),
            }

            if !retain {
                child.discard_children();
            }

            let cutoff = beta <= alpha;
            let pruned = if cutoff { count - index - 1 } else { 0 };
            if let Some(mv) = child.last_move() {
                self.observer.on_event(&SearchEvent {
                    depth: depth + 1,
                    side,
                    mv,
                    value,
                    alpha,
                    beta,
                    pruned,
                });
            }

            if cutoff {
                if pruned > 0 {
                    self.stats.cutoffs += 1;
                    debug!(depth, %side, alpha, beta, pruned, "cutoff");
                }
                break;
            }
        }

        if let Some(index) = chosen {
            node.record_best_child(index);
        }

        Ok(if side.is_maximizing() { alpha } else { beta })
    }
}

// ============================================================================
// TESTS
// ============================================================================
