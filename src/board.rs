//! Points, moves, groups and the board capture algorithm.
//!
//! The board maps occupied points to the group of stones that owns them;
//! unoccupied points are simply absent from the mapping. Groups are
//! immutable values shared behind `Rc`: updating a group means building the
//! new one and swapping it into the grid for every stone it covers, so a
//! cloned board keeps sharing the groups it was cloned with.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

/// A board coordinate. Rows and columns are 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }

    /// The four orthogonally adjacent points. Not bounds-checked; callers
    /// filter with [`Board::is_on_grid`].
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row - 1, self.col),
            Point::new(self.row + 1, self.col),
            Point::new(self.row, self.col - 1),
            Point::new(self.row, self.col + 1),
        ]
    }
}

/// One action in a turn: play a stone, pass, or resign.
///
/// The variants are mutually exclusive by construction; a move is never two
/// of these at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    pub fn is_play(self) -> bool {
        matches!(self, Move::Play(_))
    }
}

/// Column letters used in Go coordinates. 'I' is skipped by convention.
const COL_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRST";

/// Parse a coordinate string ("D4", "pass", "resign") into a move.
pub fn parse_coord(s: &str) -> Option<Move> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Move::Pass);
    }
    if s.eq_ignore_ascii_case("resign") {
        return Some(Move::Resign);
    }
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let col_char = bytes[0].to_ascii_uppercase();
    let col = COL_LETTERS.iter().position(|&c| c == col_char)? + 1;
    let row: usize = s[1..].parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Move::Play(Point::new(row, col)))
}

/// Format a move as a coordinate string.
pub fn str_coord(mv: Move) -> String {
    match mv {
        Move::Pass => "pass".into(),
        Move::Resign => "resign".into(),
        Move::Play(pt) => format!("{}{}", COL_LETTERS[pt.col - 1] as char, pt.row),
    }
}

/// A maximal connected set of same-color stones, together with its
/// liberties (the empty points adjacent to the set).
///
/// Groups are immutable: every operation returns a new group, and the board
/// swaps updated groups into its grid. The liberty set never contains one of
/// the group's own stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Player,
    stones: HashSet<Point>,
    liberties: HashSet<Point>,
}

impl Group {
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> Group {
        let stones: HashSet<Point> = stones.into_iter().collect();
        assert!(!stones.is_empty(), "a group must contain at least one stone");
        let liberties: HashSet<Point> = liberties.into_iter().collect();
        assert!(
            liberties.is_disjoint(&stones),
            "a group cannot have a liberty on one of its own stones"
        );
        Group { color, stones, liberties }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    /// Merge two same-color groups into one.
    ///
    /// The merged stones are the union of both stone sets; the merged
    /// liberties are the union of both liberty sets minus the merged stones.
    pub fn merged_with(&self, other: &Group) -> Group {
        assert_eq!(
            self.color, other.color,
            "cannot merge groups of different colors"
        );
        let stones: HashSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties: HashSet<Point> = self
            .liberties
            .union(&other.liberties)
            .copied()
            .filter(|p| !stones.contains(p))
            .collect();
        Group { color: self.color, stones, liberties }
    }

    /// A copy of this group with one liberty removed.
    pub fn without_liberty(&self, point: Point) -> Group {
        let mut liberties = self.liberties.clone();
        assert!(
            liberties.remove(&point),
            "removing a liberty the group does not have: {point:?}"
        );
        Group { color: self.color, stones: self.stones.clone(), liberties }
    }

    /// A copy of this group with one liberty added.
    pub fn with_liberty(&self, point: Point) -> Group {
        let mut liberties = self.liberties.clone();
        liberties.insert(point);
        Group { color: self.color, stones: self.stones.clone(), liberties }
    }
}

/// A fixed-size grid mapping occupied points to their owning groups.
///
/// The board is mutated in place by [`Board::place_stone`] and nothing here
/// can undo a move; reverting means going back to an earlier snapshot, which
/// is the position history's job.
#[derive(Clone, Debug)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    grid: HashMap<Point, Rc<Group>>,
}

impl PartialEq for Board {
    /// Boards compare by stone content. Group structure is fully determined
    /// by the stones, so point-by-point colors are enough.
    fn eq(&self, other: &Board) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self.grid.len() == other.grid.len()
            && self
                .grid
                .iter()
                .all(|(point, group)| other.get(*point) == Some(group.color()))
    }
}

impl Eq for Board {}

impl Board {
    pub fn new(num_rows: usize, num_cols: usize) -> Board {
        Board { num_rows, num_cols, grid: HashMap::new() }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        (1..=self.num_rows).contains(&point.row) && (1..=self.num_cols).contains(&point.col)
    }

    /// The color occupying a point, or `None` if it is empty.
    pub fn get(&self, point: Point) -> Option<Player> {
        self.grid.get(&point).map(|group| group.color())
    }

    /// The group occupying a point, or `None` if it is empty.
    pub fn get_group(&self, point: Point) -> Option<Rc<Group>> {
        self.grid.get(&point).cloned()
    }

    /// Place a stone for `player` and resolve any captures it causes.
    ///
    /// The point must be on the grid and empty; violating either is a bug in
    /// the caller and panics. Whether the move is *legal* (self-capture, ko)
    /// is decided at the position level before a move is applied for real.
    pub fn place_stone(&mut self, player: Player, point: Point) {
        assert!(self.is_on_grid(point), "point {point:?} is off the board");
        assert!(
            !self.grid.contains_key(&point),
            "point {point:?} is already occupied"
        );

        // Partition the neighbors of the new stone.
        let mut liberties = Vec::new();
        let mut adjacent_same_color: Vec<Rc<Group>> = Vec::new();
        let mut adjacent_opposite_color: Vec<Rc<Group>> = Vec::new();
        for neighbor in point.neighbors() {
            if !self.is_on_grid(neighbor) {
                continue;
            }
            match self.grid.get(&neighbor) {
                None => liberties.push(neighbor),
                Some(group) if group.color() == player => {
                    if !adjacent_same_color.iter().any(|g| Rc::ptr_eq(g, group)) {
                        adjacent_same_color.push(Rc::clone(group));
                    }
                }
                Some(group) => {
                    if !adjacent_opposite_color.iter().any(|g| Rc::ptr_eq(g, group)) {
                        adjacent_opposite_color.push(Rc::clone(group));
                    }
                }
            }
        }

        // Merge the new stone with every friendly neighbor group.
        let mut new_group = Group::new(player, [point], liberties);
        for same_color in &adjacent_same_color {
            new_group = new_group.merged_with(same_color);
        }
        self.write_group(Rc::new(new_group));

        // Commit every liberty reduction before removing anything, so a
        // stone capturing several groups sees one consistent board.
        let mut reduced_groups = Vec::new();
        for opposite in &adjacent_opposite_color {
            let reduced = Rc::new(opposite.without_liberty(point));
            self.write_group(Rc::clone(&reduced));
            reduced_groups.push(reduced);
        }
        for group in reduced_groups {
            if group.num_liberties() == 0 {
                self.remove_group(&group);
            }
        }
    }

    /// Point the grid at `group` for every stone the group covers.
    fn write_group(&mut self, group: Rc<Group>) {
        for &stone in group.stones() {
            self.grid.insert(stone, Rc::clone(&group));
        }
    }

    /// Remove a captured group from the board.
    ///
    /// Every surviving group adjacent to a removed stone gains that stone's
    /// point as a liberty.
    fn remove_group(&mut self, group: &Rc<Group>) {
        for &stone in group.stones() {
            for neighbor in stone.neighbors() {
                let Some(neighbor_group) = self.grid.get(&neighbor).cloned() else {
                    continue;
                };
                if !Rc::ptr_eq(&neighbor_group, group) {
                    self.write_group(Rc::new(neighbor_group.with_liberty(stone)));
                }
            }
            self.grid.remove(&stone);
        }
    }
}
