//! Game tree nodes, expanded lazily by the search

use crate::board::{Board, Point};
use crate::error::InvalidMoveError;
use crate::game::{apply_move, evaluate_terminal, generate_moves, Move, Side};

/// Expansion state of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// Children not generated yet
    Pending,
    /// Children generated and held
    Expanded,
    /// Children generated, evaluated and dropped
    Discarded,
}

/// A position in the game tree.
///
/// Each node owns a copy of its board and its children. Live children are
/// generated at most once; a discarded subtree is regenerated on demand.
#[derive(Clone, Debug)]
pub struct GameNode {
    board: Board,
    /// Move that produced this position (None for the root)
    last_move: Option<Move>,
    side_to_move: Side,
    children: Vec<GameNode>,
    expansion: Expansion,
    /// Index into `children` of the move chosen when this node is a search root
    best_child: Option<usize>,
}

impl GameNode {
    /// Root of a search: White moves first
    pub fn root(board: Board) -> Self {
        Self::new(board, Side::White)
    }

    pub fn new(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            last_move: None,
            side_to_move,
            children: Vec::new(),
            expansion: Expansion::Pending,
            best_child: None,
        }
    }

    fn child(&self, mv: Move) -> Result<Self, InvalidMoveError> {
        let board = apply_move(&self.board, mv.from, mv.to, self.side_to_move)?;
        Ok(Self {
            board,
            last_move: Some(mv),
            side_to_move: self.side_to_move.opponent(),
            children: Vec::new(),
            expansion: Expansion::Pending,
            best_child: None,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn moved_from(&self) -> Option<Point> {
        self.last_move.map(|mv| mv.from)
    }

    pub fn moved_to(&self) -> Option<Point> {
        self.last_move.map(|mv| mv.to)
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn children(&self) -> &[GameNode] {
        &self.children
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Search value if the position is already decided, else `UNDECIDED`
    pub fn terminal_value(&self) -> i32 {
        evaluate_terminal(&self.board)
    }

    /// Number of nodes currently held in this subtree, including self
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(GameNode::subtree_size).sum::<usize>()
    }

    // ========================================================================
    // EXPANSION
    // ========================================================================

    /// Generate one child per legal move of the side to move.
    ///
    /// White sweeps the board from (0, 0) forward, Black from the last cell
    /// backward; each piece contributes diagonal-left, forward and
    /// diagonal-right in that order. Held children are returned as they
    /// are; a node whose children were discarded generates them afresh.
    pub fn expand_children(&mut self) -> Result<&mut [GameNode], InvalidMoveError> {
        if self.expansion != Expansion::Expanded {
            let side = self.side_to_move;
            let mut children = Vec::new();
            for from in self.board.pieces(side) {
                for to in generate_moves(&self.board, from, side) {
                    children.push(self.child(Move::new(from, to))?);
                }
            }
            self.children = children;
            self.expansion = Expansion::Expanded;
        }
        Ok(&mut self.children)
    }

    /// Drop this node's subtree once its value is known
    pub fn discard_children(&mut self) {
        if self.expansion == Expansion::Expanded {
            self.children = Vec::new();
            self.expansion = Expansion::Discarded;
        }
    }

    // ========================================================================
    // ROOT DECISION
    // ========================================================================

    /// Remember which child the search picked. Only the first call counts.
    pub fn record_best_child(&mut self, index: usize) -> bool {
        if self.best_child.is_some() || index >= self.children.len() {
            return false;
        }
        self.best_child = Some(index);
        true
    }

    pub fn best_child(&self) -> Option<&GameNode> {
        self.best_child.and_then(|i| self.children.get(i))
    }

    pub fn best_child_index(&self) -> Option<usize> {
        self.best_child
    }
}
