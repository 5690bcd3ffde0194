//! Monte Carlo Tree Search with UCT selection.
//!
//! The search builds a fresh tree for every `select_move` call. Nodes live
//! in an arena and refer to each other by index: child lists are the owning
//! forward edges, the parent index is only ever followed upwards during
//! backpropagation.
//!
//! Each round runs the usual four phases:
//! 1. Selection - descend while the node has no untried moves left and is
//!    not terminal, picking the child with the best UCT score.
//! 2. Expansion - spawn a child for one untried move, chosen at random.
//! 3. Simulation - play a random game out from the new position.
//! 4. Backpropagation - credit the winner on every node up to the root.

use std::rc::Rc;

use log::debug;

use crate::agent::Agent;
use crate::board::{Move, Player, str_coord};
use crate::playout::{AreaScorer, Scorer, simulate_random_game};
use crate::position::{Position, apply_move};

/// Index of a node in the search tree arena.
type NodeId = usize;

/// One node of the search tree.
struct TreeNode {
    position: Rc<Position>,
    /// The move that produced this position; `None` only at the root.
    mv: Option<Move>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Wins per player, indexed by [`player_index`].
    win_counts: [u32; 2],
    num_rollouts: u32,
    /// Legal moves not yet expanded into children.
    unvisited_moves: Vec<Move>,
}

impl TreeNode {
    fn new(position: Rc<Position>, mv: Option<Move>, parent: Option<NodeId>) -> TreeNode {
        let unvisited_moves = position.legal_moves();
        TreeNode {
            position,
            mv,
            parent,
            children: Vec::new(),
            win_counts: [0, 0],
            num_rollouts: 0,
            unvisited_moves,
        }
    }

    fn can_add_child(&self) -> bool {
        !self.unvisited_moves.is_empty()
    }

    fn is_terminal(&self) -> bool {
        self.position.is_over()
    }

    fn record_win(&mut self, winner: Player) {
        self.win_counts[player_index(winner)] += 1;
        self.num_rollouts += 1;
    }

    /// Fraction of rollouts through this node won by `player`. Only called
    /// on nodes with at least one rollout.
    fn winning_frac(&self, player: Player) -> f64 {
        self.win_counts[player_index(player)] as f64 / self.num_rollouts as f64
    }
}

fn player_index(player: Player) -> usize {
    match player {
        Player::Black => 0,
        Player::White => 1,
    }
}

/// UCT: the exploitation term (win fraction) plus a visit-count-driven
/// exploration bonus scaled by `temperature`.
pub fn uct_score(parent_rollouts: u32, child_rollouts: u32, win_pct: f64, temperature: f64) -> f64 {
    let exploration = ((parent_rollouts as f64).ln() / child_rollouts as f64).sqrt();
    win_pct + temperature * exploration
}

struct SearchTree {
    nodes: Vec<TreeNode>,
}

const ROOT: NodeId = 0;

impl SearchTree {
    fn new(root_position: &Rc<Position>) -> SearchTree {
        SearchTree {
            nodes: vec![TreeNode::new(Rc::clone(root_position), None, None)],
        }
    }

    /// UCT child selection from the perspective of the player to move at
    /// `parent` - the player who chooses this branch. Ties go to the first
    /// child reaching the best score.
    fn select_child(&self, parent: NodeId, temperature: f64) -> NodeId {
        let node = &self.nodes[parent];
        let player = node.position.next_player();
        let total_rollouts: u32 = node
            .children
            .iter()
            .map(|&child| self.nodes[child].num_rollouts)
            .sum();

        let mut best_score = f64::NEG_INFINITY;
        let mut best_child = node.children[0];
        for &child_id in &node.children {
            let child = &self.nodes[child_id];
            let score = uct_score(
                total_rollouts,
                child.num_rollouts,
                child.winning_frac(player),
                temperature,
            );
            if score > best_score {
                best_score = score;
                best_child = child_id;
            }
        }
        best_child
    }

    /// Expand one untried move, chosen uniformly at random and removed from
    /// the untried set so it can never be expanded twice.
    fn add_random_child(&mut self, parent: NodeId, rng: &mut fastrand::Rng) -> NodeId {
        let unvisited = &mut self.nodes[parent].unvisited_moves;
        let index = rng.usize(..unvisited.len());
        let mv = unvisited.swap_remove(index);

        let position = apply_move(&self.nodes[parent].position, mv);
        let child = self.nodes.len();
        self.nodes.push(TreeNode::new(position, Some(mv), Some(parent)));
        self.nodes[parent].children.push(child);
        child
    }

    /// Credit the rollout winner on every node from `node` up to and
    /// including the root.
    fn backpropagate(&mut self, mut node: NodeId, winner: Player) {
        loop {
            self.nodes[node].record_win(winner);
            match self.nodes[node].parent {
                Some(parent) => node = parent,
                None => break,
            }
        }
    }
}

/// A Monte Carlo tree search agent.
///
/// Runs a fixed budget of rounds per move; the tree is discarded between
/// moves.
pub struct MctsAgent {
    num_rounds: u32,
    temperature: f64,
    rng: fastrand::Rng,
    scorer: Box<dyn Scorer>,
}

impl MctsAgent {
    /// An agent with the given round budget and exploration temperature,
    /// scoring finished rollouts by area.
    pub fn new(num_rounds: u32, temperature: f64) -> MctsAgent {
        Self::with_scorer(num_rounds, temperature, Box::new(AreaScorer::default()))
    }

    /// A deterministically seeded agent, for reproducible searches.
    pub fn with_seed(num_rounds: u32, temperature: f64, seed: u64) -> MctsAgent {
        let mut agent = Self::new(num_rounds, temperature);
        agent.rng = fastrand::Rng::with_seed(seed);
        agent
    }

    /// An agent with a caller-supplied terminal scorer.
    pub fn with_scorer(num_rounds: u32, temperature: f64, scorer: Box<dyn Scorer>) -> MctsAgent {
        MctsAgent {
            num_rounds,
            temperature,
            rng: fastrand::Rng::new(),
            scorer,
        }
    }
}

impl Agent for MctsAgent {
    /// Run the full round budget and pick the root child with the highest
    /// win fraction for the player to move. Ties go to the first child seen.
    fn select_move(&mut self, position: &Rc<Position>) -> Move {
        let mut tree = SearchTree::new(position);

        for _ in 0..self.num_rounds {
            // Selection.
            let mut node = ROOT;
            while !tree.nodes[node].can_add_child() && !tree.nodes[node].is_terminal() {
                node = tree.select_child(node, self.temperature);
            }

            // Expansion.
            if tree.nodes[node].can_add_child() {
                node = tree.add_random_child(node, &mut self.rng);
            }

            // Simulation.
            let winner =
                simulate_random_game(&tree.nodes[node].position, &mut self.rng, self.scorer.as_ref());

            // Backpropagation.
            tree.backpropagate(node, winner);
        }

        let player = position.next_player();
        let mut best_move = Move::Pass;
        let mut best_frac = -1.0;
        for &child_id in &tree.nodes[ROOT].children {
            let child = &tree.nodes[child_id];
            let frac = child.winning_frac(player);
            if frac > best_frac {
                best_frac = frac;
                best_move = child.mv.expect("non-root nodes record their move");
            }
        }
        debug!(
            "mcts: {} rounds, {} root children, picked {} (winrate {:.3})",
            self.num_rounds,
            tree.nodes[ROOT].children.len(),
            str_coord(best_move),
            best_frac,
        );
        best_move
    }
}
