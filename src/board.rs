//! The board model: cell occupancy, move legality, connections and networks

use std::fmt;

use crate::{MAX_PIECES, MIN_NETWORK_LEN, SIZE};

// offsets for the 8 compass directions
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// One of the two players. An empty cell is never a mover
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A move for one player: placing a new piece, or relocating an old one
/// once all ten pieces are on the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Move {
    Add { x: usize, y: usize },
    Step { x: usize, y: usize, from_x: usize, from_y: usize },
}

impl Move {
    /// The cell the moved piece ends up in
    pub fn destination(self) -> (usize, usize) {
        match self {
            Move::Add { x, y } => (x, y),
            Move::Step { x, y, .. } => (x, y),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Move::Add { x, y } => write!(f, "add ({}, {})", x, y),
            Move::Step { x, y, from_x, from_y } => {
                write!(f, "step ({}, {}) -> ({}, {})", from_x, from_y, x, y)
            }
        }
    }
}

/// An 8x8 Network board, indexed `(x, y)` with both axes 0-based
///
/// Black's goal edges are the rows `y == 0` and `y == 7`, White's are the
/// columns `x == 0` and `x == 7`; the four corners belong to neither. All
/// rule queries are side-effect free, and `apply_move`/`reverse_move` are
/// exact inverses so the search can explore in place.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board for a fresh game
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from a grid snapshot, for setting up positions
    pub fn from_grid(grid: [[Cell; SIZE]; SIZE]) -> Self {
        Self { grid }
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.grid[x][y]
    }

    fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < SIZE as i32 && y >= 0 && y < SIZE as i32
    }

    fn is_corner(x: usize, y: usize) -> bool {
        (x == 0 || x == SIZE - 1) && (y == 0 || y == SIZE - 1)
    }

    // goal cells exclude the corners
    fn in_goal(color: Color, x: usize, y: usize) -> bool {
        if Self::is_corner(x, y) {
            return false;
        }
        match color {
            Color::Black => y == 0 || y == SIZE - 1,
            Color::White => x == 0 || x == SIZE - 1,
        }
    }

    // which of the color's two goal edges a goal cell lies in
    fn goal_side(color: Color, x: usize, y: usize) -> bool {
        match color {
            Color::Black => y == SIZE - 1,
            Color::White => x == SIZE - 1,
        }
    }

    fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            if Self::in_bounds(nx, ny) {
                Some((nx as usize, ny as usize))
            } else {
                None
            }
        })
    }

    /// The number of pieces the given player has on the board
    pub fn piece_count(&self, color: Color) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == color.cell())
            .count()
    }

    /// The positions of all of the given player's pieces
    ///
    /// The order is an artifact of the grid scan and carries no meaning.
    pub fn pieces_of(&self, color: Color) -> Vec<(usize, usize)> {
        let mut pieces = Vec::new();
        for x in 0..SIZE {
            for y in 0..SIZE {
                if self.grid[x][y] == color.cell() {
                    pieces.push((x, y));
                }
            }
        }
        pieces
    }

    /// Checks a proposed move against all of the placement rules
    ///
    /// Rejection is signalled by the return value; the board is never
    /// modified and no rule violation is an error.
    pub fn is_valid(&self, color: Color, mv: Move) -> bool {
        let (x, y) = mv.destination();
        if x >= SIZE || y >= SIZE {
            return false;
        }

        // no piece may occupy a corner
        if Self::is_corner(x, y) {
            return false;
        }

        // no piece may sit in the opponent's goal edges
        if Self::in_goal(color.opponent(), x, y) {
            return false;
        }

        // the destination must be empty
        if !self.grid[x][y].is_empty() {
            return false;
        }

        match mv {
            Move::Add { .. } => {
                // new pieces only while the player still has some in hand
                if self.piece_count(color) >= MAX_PIECES {
                    return false;
                }
                self.cluster_free(color, x, y, None)
            }
            Move::Step { from_x, from_y, .. } => {
                if from_x >= SIZE || from_y >= SIZE {
                    return false;
                }
                // relocation only once all pieces are placed, and only of
                // the mover's own piece
                if self.piece_count(color) != MAX_PIECES {
                    return false;
                }
                if self.grid[from_x][from_y] != color.cell() {
                    return false;
                }
                // the cluster rule sees the board with the source vacated
                self.cluster_free(color, x, y, Some((from_x, from_y)))
            }
        }
    }

    // Groups of 3+ mutually adjacent same-colored pieces are illegal: the
    // placement may touch at most one friendly neighbor, and that neighbor
    // may touch no other friendly piece.
    fn cluster_free(
        &self,
        color: Color,
        x: usize,
        y: usize,
        vacated: Option<(usize, usize)>,
    ) -> bool {
        let occupied = |cx: usize, cy: usize| {
            vacated != Some((cx, cy)) && self.grid[cx][cy] == color.cell()
        };

        let mut adjacent = 0;
        for (nx, ny) in Self::neighbors(x, y) {
            if !occupied(nx, ny) {
                continue;
            }
            adjacent += 1;
            if adjacent == 2 {
                return false;
            }
            for (kx, ky) in Self::neighbors(nx, ny) {
                if (kx, ky) == (x, y) {
                    continue;
                }
                if occupied(kx, ky) {
                    return false;
                }
            }
        }
        true
    }

    /// Tries to make the given move, returning whether it was legal
    ///
    /// An illegal move leaves the board untouched.
    pub fn apply_move(&mut self, color: Color, mv: Move) -> bool {
        if !self.is_valid(color, mv) {
            return false;
        }
        match mv {
            Move::Add { x, y } => {
                self.grid[x][y] = color.cell();
            }
            Move::Step { x, y, from_x, from_y } => {
                self.grid[from_x][from_y] = Cell::Empty;
                self.grid[x][y] = color.cell();
            }
        }
        true
    }

    /// Undoes a move previously made with `apply_move`
    ///
    /// The caller must reverse moves in strict LIFO order; only the most
    /// recently applied move can be reversed structurally.
    pub fn reverse_move(&mut self, color: Color, mv: Move) {
        match mv {
            Move::Add { x, y } => {
                debug_assert_eq!(self.grid[x][y], color.cell());
                self.grid[x][y] = Cell::Empty;
            }
            Move::Step { x, y, from_x, from_y } => {
                debug_assert_eq!(self.grid[x][y], color.cell());
                self.grid[x][y] = Cell::Empty;
                self.grid[from_x][from_y] = color.cell();
            }
        }
    }

    /// Enumerates every legal move for the given player
    ///
    /// While the player has pieces in hand these are all `Add` moves;
    /// afterwards they are all `Step` moves.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.piece_count(color) < MAX_PIECES {
            for x in 0..SIZE {
                for y in 0..SIZE {
                    let mv = Move::Add { x, y };
                    if self.is_valid(color, mv) {
                        moves.push(mv);
                    }
                }
            }
        } else {
            for (from_x, from_y) in self.pieces_of(color) {
                for x in 0..SIZE {
                    for y in 0..SIZE {
                        let mv = Move::Step { x, y, from_x, from_y };
                        if self.is_valid(color, mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }
        moves
    }

    /// Lists the pieces connected to the piece at `(x, y)`
    ///
    /// Two pieces are connected when one is the first occupied cell the
    /// other sees along a compass ray; any piece in between, of either
    /// color, blocks the connection. Returns nothing for an empty cell.
    pub fn connected(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut chips = Vec::new();
        if x >= SIZE || y >= SIZE || self.grid[x][y].is_empty() {
            return chips;
        }
        for &(dx, dy) in DIRECTIONS.iter() {
            let (mut cx, mut cy) = (x as i32 + dx, y as i32 + dy);
            // scan along the ray until a piece or the edge stops it
            while Self::in_bounds(cx, cy) && self.grid[cx as usize][cy as usize].is_empty() {
                cx += dx;
                cy += dy;
            }
            if Self::in_bounds(cx, cy) && self.grid[cx as usize][cy as usize] == self.grid[x][y] {
                chips.push((cx as usize, cy as usize));
            }
        }
        chips
    }

    /// Checks whether the given player has a winning network
    ///
    /// A network is a chain of at least 6 distinct connected pieces running
    /// from one of the player's goal edges to the opposite one, never making
    /// two consecutive hops in the same direction and touching the goal
    /// edges only at its two ends.
    pub fn has_network(&self, color: Color) -> bool {
        for &(x, y) in self.pieces_of(color).iter() {
            if !Self::in_goal(color, x, y) {
                continue;
            }
            let start_side = Self::goal_side(color, x, y);
            let mut path = vec![(x, y)];
            if self.network_dfs(color, (x, y), start_side, None, &mut path) {
                return true;
            }
        }
        false
    }

    // Backtracking search over the connection relation. `path` holds the
    // chain built so far; pieces are pushed before recursing and popped on
    // every return. Goal pieces may only terminate the chain, never carry
    // it, so reaching one either completes the network or ends the branch.
    fn network_dfs(
        &self,
        color: Color,
        pos: (usize, usize),
        start_side: bool,
        incoming: Option<(i32, i32)>,
        path: &mut Vec<(usize, usize)>,
    ) -> bool {
        for next in self.connected(pos.0, pos.1) {
            let dir = direction(pos, next);
            if incoming == Some(dir) || path.contains(&next) {
                continue;
            }
            if Self::in_goal(color, next.0, next.1) {
                if Self::goal_side(color, next.0, next.1) != start_side
                    && path.len() + 1 >= MIN_NETWORK_LEN
                {
                    return true;
                }
                continue;
            }
            path.push(next);
            if self.network_dfs(color, next, start_side, Some(dir), path) {
                return true;
            }
            path.pop();
        }
        false
    }

    /// The length of the longest chain the given player can trace under the
    /// network movement rules, from any starting piece
    ///
    /// A heuristic signal only: the goal/length success test is not
    /// applied, but chains still obey the traversal rules, so goal pieces
    /// only ever sit at the ends of a measured chain.
    pub fn longest_path(&self, color: Color) -> usize {
        let mut longest = 0;
        for &(x, y) in self.pieces_of(color).iter() {
            let mut path = vec![(x, y)];
            longest = longest.max(self.longest_path_dfs(color, (x, y), None, &mut path));
        }
        longest
    }

    fn longest_path_dfs(
        &self,
        color: Color,
        pos: (usize, usize),
        incoming: Option<(i32, i32)>,
        path: &mut Vec<(usize, usize)>,
    ) -> usize {
        let mut longest = path.len();
        for next in self.connected(pos.0, pos.1) {
            let dir = direction(pos, next);
            if incoming == Some(dir) || path.contains(&next) {
                continue;
            }
            if Self::in_goal(color, next.0, next.1) {
                // a goal piece ends the chain
                longest = longest.max(path.len() + 1);
                continue;
            }
            path.push(next);
            longest = longest.max(self.longest_path_dfs(color, next, Some(dir), path));
            path.pop();
        }
        longest
    }
}

// the compass direction of the hop between two ray-aligned cells
fn direction(from: (usize, usize), to: (usize, usize)) -> (i32, i32) {
    (
        (to.0 as i32 - from.0 as i32).signum(),
        (to.1 as i32 - from.1 as i32).signum(),
    )
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..SIZE {
            for x in 0..SIZE {
                let glyph = match self.grid[x][y] {
                    Cell::Black => " B",
                    Cell::White => " W",
                    Cell::Empty => " .",
                };
                f.write_str(glyph)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
