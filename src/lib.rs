// src/lib.rs
//
// Fog of War chess rules engine. Each player sees only the squares their own
// pieces stand on or can currently move to; kings are captured outright and
// capturing one wins the game. There is no check, castling, en passant,
// promotion or draw handling in this variant.
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Constants ---

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

// Direction and offset tables. Scan order is fixed so that move generation is
// deterministic for a given position.
const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook, PieceType::Knight, PieceType::Bishop, PieceType::Queen,
    PieceType::King, PieceType::Bishop, PieceType::Knight, PieceType::Rook,
];

// --- Enums and Basic Structs ---

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color { White, Black }

impl Color {
    pub fn opponent(&self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }

    /// Row delta a pawn of this color advances by. White moves toward row 0
    /// (rank 8 at the top of the grid), Black toward row 7.
    fn pawn_direction(&self) -> i8 {
        match self { Color::White => -1, Color::Black => 1 }
    }

    fn pawn_start_row(&self) -> i8 {
        match self { Color::White => 6, Color::Black => 1 }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType { Pawn, Knight, Bishop, Rook, Queen, King }

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color) -> Self { Piece { kind, color } }

    /// Parses the letter encoding used by `Display` (uppercase White).
    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_uppercase() { Color::White } else { Color::Black };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn, 'n' => PieceType::Knight, 'b' => PieceType::Bishop,
            'r' => PieceType::Rook, 'q' => PieceType::Queen, 'k' => PieceType::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.kind {
            PieceType::Pawn => 'p', PieceType::Knight => 'n', PieceType::Bishop => 'b',
            PieceType::Rook => 'r', PieceType::Queen => 'q', PieceType::King => 'k',
        };
        let symbol = match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        };
        write!(f, "{}", symbol)
    }
}

// --- Squares and Coordinates ---

/// A board coordinate. Row 0 is Black's home rank (rank 8), row 7 is White's
/// (rank 1); columns run from file 'a' (0) to file 'h' (7).
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self { Square { row, col } }

    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// The square (dr, dc) away, or None when that leaves the board.
    fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let shifted = Square::new(self.row + dr, self.col + dc);
        if shifted.in_bounds() { Some(shifted) } else { None }
    }
}

// Helper to convert algebraic notation (e.g., "e4") to a Square.
// "a1" maps to row 7, column 0 under the row-0-at-top convention.
pub fn algebraic_to_square(s: &str) -> Option<Square> {
    let mut chars = s.chars();
    let file_char = chars.next()?;
    let rank_char = chars.next()?;
    if chars.next().is_some() { return None; }
    let col = match file_char { 'a'..='h' => file_char as i8 - 'a' as i8, _ => return None };
    let row = match rank_char { '1'..='8' => '8' as i8 - rank_char as i8, _ => return None };
    Some(Square::new(row, col))
}

// Helper to convert a Square back to algebraic notation.
pub fn square_to_algebraic(sq: Square) -> String {
    if !sq.in_bounds() { return "??".to_string(); }
    let file_char = (b'a' + sq.col as u8) as char;
    let rank_char = (b'8' - sq.row as u8) as char;
    format!("{}{}", file_char, rank_char)
}

// --- Board ---

/// The true 8x8 position: a tagged piece per square, or nothing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn initial() -> Self {
        let mut squares = [[None; 8]; 8];
        for col in 0..8 {
            squares[0][col] = Some(Piece::new(BACK_RANK[col], Color::Black));
            squares[1][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            squares[6][col] = Some(Piece::new(PieceType::Pawn, Color::White));
            squares[7][col] = Some(Piece::new(BACK_RANK[col], Color::White));
        }
        Board { squares }
    }

    /// An empty board, for setting up arbitrary positions.
    pub fn empty() -> Self {
        Board { squares: [[None; 8]; 8] }
    }

    /// Puts `piece` on `sq`, replacing any occupant. Off-board squares are ignored.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        if sq.in_bounds() {
            self.squares[sq.row as usize][sq.col as usize] = Some(piece);
        }
    }

    /// The piece occupying `sq`, or None when the square is empty or off board.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.in_bounds() { return None; }
        self.squares[sq.row as usize][sq.col as usize]
    }

    // Internal write access. Callers guarantee `sq` is on the board.
    fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row as usize][sq.col as usize] = piece;
    }
}

// --- Move Generation ---

/// Generates the destination squares the piece on `from` could move to,
/// considering occupancy but not whose turn it is. Pure: the board is never
/// touched, and the same position always yields the same sequence. Returns an
/// empty list when `from` is empty or off the board.
///
/// The visibility projection calls this for either color regardless of the
/// turn, so turn ownership is deliberately not checked here.
pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
    let piece = match board.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let mut moves = Vec::new();
    match piece.kind {
        PieceType::Pawn => generate_pawn_moves(board, from, piece.color, &mut moves),
        PieceType::Knight => generate_offset_moves(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceType::Bishop => generate_sliding_moves(board, from, piece.color, &DIAGONAL_DIRECTIONS, &mut moves),
        PieceType::Rook => generate_sliding_moves(board, from, piece.color, &ORTHOGONAL_DIRECTIONS, &mut moves),
        PieceType::Queen => {
            generate_sliding_moves(board, from, piece.color, &ORTHOGONAL_DIRECTIONS, &mut moves);
            generate_sliding_moves(board, from, piece.color, &DIAGONAL_DIRECTIONS, &mut moves);
        }
        PieceType::King => generate_offset_moves(board, from, piece.color, &KING_OFFSETS, &mut moves),
    }
    moves
}

/// Pawn pushes and captures. One square forward onto an empty square, two from
/// the start rank when both squares are clear, and diagonal steps only onto
/// enemy-occupied squares. No en passant, no promotion in this variant.
fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one_ahead) = from.offset(dir, 0) {
        if board.piece_at(one_ahead).is_none() {
            moves.push(one_ahead);
            if from.row == color.pawn_start_row() {
                if let Some(two_ahead) = from.offset(2 * dir, 0) {
                    if board.piece_at(two_ahead).is_none() {
                        moves.push(two_ahead);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if board.piece_at(target).map_or(false, |p| p.color != color) {
                moves.push(target);
            }
        }
    }
}

/// Fixed-offset movement (knight and king): each listed square, empty or
/// holding an opposing piece.
fn generate_offset_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(dr, dc) in offsets {
        if let Some(target) = from.offset(dr, dc) {
            match board.piece_at(target) {
                None => moves.push(target),
                Some(p) if p.color != color => moves.push(target),
                Some(_) => {} // own piece
            }
        }
    }
}

/// Sliding movement (bishop, rook, queen): walk each ray until blocked. A
/// friendly piece ends the ray excluded; an opposing piece is included as a
/// capture and then ends it.
fn generate_sliding_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => {
                    moves.push(next);
                    current = next;
                }
                Some(p) => {
                    if p.color != color { moves.push(next); }
                    break;
                }
            }
        }
    }
}

// --- Game State and Perspectives ---

/// Terminal state is reached by capturing a king and never reverts.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum GameState { InProgress, WhiteWon, BlackWon }

/// Who is looking at the board. The observer sees everything; a player sees
/// through the fog only.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum Perspective { White, Black, Observer }

/// One square of a projected board. `Unknown` is a fogged square and is
/// distinct from a square known to be empty.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum SquareView {
    Unknown,
    Empty,
    Piece(Piece),
}

/// A board as seen from one perspective.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectedBoard {
    squares: [[SquareView; 8]; 8],
}

impl ProjectedBoard {
    /// The view of `sq`. Off-board squares read as fogged.
    pub fn at(&self, sq: Square) -> SquareView {
        if !sq.in_bounds() { return SquareView::Unknown; }
        self.squares[sq.row as usize][sq.col as usize]
    }

    pub fn rows(&self) -> &[[SquareView; 8]; 8] {
        &self.squares
    }
}

// Fogged squares render as '*', known-empty squares as '.'.
impl fmt::Display for ProjectedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for (row, rank_squares) in self.squares.iter().enumerate() {
            write!(f, "{} | ", 8 - row)?;
            for view in rank_squares {
                match view {
                    SquareView::Unknown => write!(f, "* ")?,
                    SquareView::Empty => write!(f, ". ")?,
                    SquareView::Piece(piece) => write!(f, "{} ", piece)?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")
    }
}

// --- Visibility Projection ---

fn reveal(board: &Board, sq: Square) -> SquareView {
    match board.piece_at(sq) {
        Some(p) => SquareView::Piece(p),
        None => SquareView::Empty,
    }
}

/// The full board with nothing fogged.
fn project_full(board: &Board) -> ProjectedBoard {
    let mut squares = [[SquareView::Unknown; 8]; 8];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let sq = Square::new(row, col);
            squares[row as usize][col as usize] = reveal(board, sq);
        }
    }
    ProjectedBoard { squares }
}

/// Projects `board` for one side. Every square holding one of `player`'s
/// pieces is revealed, along with each destination the move generator returns
/// for that piece (showing the true occupant at query time). All other
/// squares stay fogged.
fn project_for(board: &Board, player: Color) -> ProjectedBoard {
    let mut squares = [[SquareView::Unknown; 8]; 8];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = Square::new(row, col);
            let piece = match board.piece_at(from) {
                Some(p) if p.color == player => p,
                _ => continue,
            };
            squares[from.row as usize][from.col as usize] = SquareView::Piece(piece);
            for dest in generate_moves(board, from) {
                squares[dest.row as usize][dest.col as usize] = reveal(board, dest);
            }
        }
    }
    ProjectedBoard { squares }
}

// --- Game ---

/// One fog-of-war game: the true board, the side to move, and the outcome.
/// `view` borrows immutably and `make_move` mutably, so concurrent callers
/// get the required read/write exclusion from the borrow rules alone.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self { Game::new() }
}

impl Game {
    /// Creates a new game: standard layout, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            turn: Color::White,
            state: GameState::InProgress,
        }
    }

    /// Starts a game from an arbitrary position with `turn` to move. The
    /// caller is responsible for the position making sense (at most one king
    /// per color).
    pub fn from_position(board: Board, turn: Color) -> Self {
        Game { board, turn, state: GameState::InProgress }
    }

    pub fn game_state(&self) -> GameState { self.state }

    pub fn turn(&self) -> Color { self.turn }

    /// Read-only access to the true position.
    pub fn board(&self) -> &Board { &self.board }

    /// The board as seen from `perspective`, recomputed from the current
    /// position on every call.
    pub fn view(&self, perspective: Perspective) -> ProjectedBoard {
        match perspective {
            Perspective::Observer => project_full(&self.board),
            Perspective::White => project_for(&self.board, Color::White),
            Perspective::Black => project_for(&self.board, Color::Black),
        }
    }

    /// Every (origin, destination) pair available to the side to move. Empty
    /// once the game has ended.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        let mut all = Vec::new();
        if self.state != GameState::InProgress { return all; }
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let from = Square::new(row, col);
                if self.board.piece_at(from).map_or(false, |p| p.color == self.turn) {
                    for to in generate_moves(&self.board, from) {
                        all.push((from, to));
                    }
                }
            }
        }
        all
    }

    /// Attempts the move `origin` -> `destination`, both algebraic square
    /// names (e.g. "e2", "e4"). Returns false and changes nothing when the
    /// game is over, a coordinate is malformed, the origin does not hold a
    /// piece of the side to move, or the destination is not a generated move
    /// for that piece. On success the piece moves (discarding any capture),
    /// capturing a king ends the game in the mover's favor, and the turn
    /// passes to the other side either way.
    pub fn make_move(&mut self, origin: &str, destination: &str) -> bool {
        if self.state != GameState::InProgress { return false; }

        let from = match algebraic_to_square(origin) {
            Some(sq) => sq,
            None => return false,
        };
        let to = match algebraic_to_square(destination) {
            Some(sq) => sq,
            None => return false,
        };

        let piece = match self.board.piece_at(from) {
            Some(p) => p,
            None => return false,
        };
        if piece.color != self.turn { return false; }

        if !generate_moves(&self.board, from).contains(&to) { return false; }

        // Validated: apply the whole step at once.
        let captured = self.board.piece_at(to);
        self.board.set(to, Some(piece));
        self.board.set(from, None);

        if captured.map_or(false, |p| p.kind == PieceType::King) {
            self.state = match self.turn {
                Color::White => GameState::WhiteWon,
                Color::Black => GameState::BlackWon,
            };
        }

        // The turn flips even on the ending move; no move is accepted after it.
        self.turn = self.turn.opponent();
        true
    }
}

// Observer board plus whose turn it is and where the game stands.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.view(Perspective::Observer))?;
        writeln!(f, "Turn: {:?}", self.turn)?;
        writeln!(f, "State: {:?}", self.state)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test squares are well formed")
    }

    fn moves_from(board: &Board, name: &str) -> Vec<Square> {
        generate_moves(board, sq(name))
    }

    #[test]
    fn algebraic_mapping_follows_standard_orientation() {
        assert_eq!(sq("a1"), Square::new(7, 0));
        assert_eq!(sq("h8"), Square::new(0, 7));
        assert_eq!(sq("e2"), Square::new(6, 4));
        for name in ["a1", "d4", "h8", "c7"] {
            assert_eq!(square_to_algebraic(sq(name)), name);
        }
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "e", "e9", "e0", "i5", "e22", "E2", "4e", "??"] {
            assert_eq!(algebraic_to_square(bad), None, "parsed {:?}", bad);
        }
        assert_eq!(square_to_algebraic(Square::new(-1, 3)), "??");
        assert_eq!(square_to_algebraic(Square::new(2, 8)), "??");
    }

    #[test]
    fn initial_layout_is_standard() {
        let board = Board::initial();
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::new(PieceType::King, Color::White)));
        assert_eq!(board.piece_at(sq("e8")), Some(Piece::new(PieceType::King, Color::Black)));
        assert_eq!(board.piece_at(sq("d1")), Some(Piece::new(PieceType::Queen, Color::White)));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(PieceType::Queen, Color::Black)));
        for col in 0..8 {
            assert_eq!(board.piece_at(Square::new(6, col)), Some(Piece::new(PieceType::Pawn, Color::White)));
            assert_eq!(board.piece_at(Square::new(1, col)), Some(Piece::new(PieceType::Pawn, Color::Black)));
        }
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.piece_at(Square::new(row, col)), None);
            }
        }
    }

    #[test]
    fn pawn_double_step_only_from_start_rank() {
        let board = Board::initial();
        assert_eq!(moves_from(&board, "e2"), vec![sq("e3"), sq("e4")]);
        assert_eq!(moves_from(&board, "e7"), vec![sq("e6"), sq("e5")]);

        let mut advanced = Board::empty();
        advanced.place(sq("e3"), Piece::new(PieceType::Pawn, Color::White));
        assert_eq!(moves_from(&advanced, "e3"), vec![sq("e4")]);
    }

    #[test]
    fn pawn_forward_moves_require_empty_squares() {
        let mut board = Board::empty();
        board.place(sq("e2"), Piece::new(PieceType::Pawn, Color::White));
        board.place(sq("e4"), Piece::new(PieceType::Pawn, Color::Black));
        // Single step is clear, the double step is blocked.
        assert_eq!(moves_from(&board, "e2"), vec![sq("e3")]);

        board.place(sq("e3"), Piece::new(PieceType::Knight, Color::Black));
        // A blocked single step also rules out the double step.
        assert_eq!(moves_from(&board, "e2"), Vec::new());
    }

    #[test]
    fn pawn_captures_only_diagonally_onto_enemies() {
        let mut board = Board::empty();
        board.place(sq("e4"), Piece::new(PieceType::Pawn, Color::White));
        board.place(sq("e5"), Piece::new(PieceType::Pawn, Color::Black)); // blocks forward
        board.place(sq("d5"), Piece::new(PieceType::Pawn, Color::Black)); // capturable
        board.place(sq("f5"), Piece::new(PieceType::Pawn, Color::White)); // own piece
        assert_eq!(moves_from(&board, "e4"), vec![sq("d5")]);
    }

    #[test]
    fn knight_moves_from_corner_and_center() {
        let mut board = Board::empty();
        board.place(sq("a1"), Piece::new(PieceType::Knight, Color::White));
        board.place(sq("d4"), Piece::new(PieceType::Knight, Color::Black));

        let corner: Vec<Square> = moves_from(&board, "a1");
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&sq("b3")));
        assert!(corner.contains(&sq("c2")));

        assert_eq!(moves_from(&board, "d4").len(), 8);
    }

    #[test]
    fn knight_lands_on_empty_or_enemy_squares_only() {
        let mut board = Board::empty();
        board.place(sq("b1"), Piece::new(PieceType::Knight, Color::White));
        board.place(sq("a3"), Piece::new(PieceType::Pawn, Color::White));
        board.place(sq("c3"), Piece::new(PieceType::Pawn, Color::Black));
        let moves = moves_from(&board, "b1");
        assert!(!moves.contains(&sq("a3")), "own piece is not a destination");
        assert!(moves.contains(&sq("c3")), "enemy piece is capturable");
        assert!(moves.contains(&sq("d2")));
    }

    #[test]
    fn sliding_pieces_stop_at_first_occupied_square() {
        let mut board = Board::empty();
        board.place(sq("a1"), Piece::new(PieceType::Rook, Color::White));
        board.place(sq("a3"), Piece::new(PieceType::Pawn, Color::White));
        board.place(sq("d1"), Piece::new(PieceType::Pawn, Color::Black));

        let moves = moves_from(&board, "a1");
        assert!(moves.contains(&sq("b1")));
        assert!(moves.contains(&sq("c1")));
        assert!(moves.contains(&sq("d1")), "first enemy on the ray is a capture");
        assert!(!moves.contains(&sq("e1")), "the ray ends at the capture");
        assert!(moves.contains(&sq("a2")));
        assert!(!moves.contains(&sq("a3")), "own piece blocks and is excluded");
        assert!(!moves.contains(&sq("a4")));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn queen_covers_rook_and_bishop_lines() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::new(PieceType::Queen, Color::White));
        // 27 squares from d4 on an otherwise empty board.
        assert_eq!(moves_from(&board, "d4").len(), 27);
    }

    #[test]
    fn king_steps_one_square_in_any_direction() {
        let mut board = Board::empty();
        board.place(sq("e4"), Piece::new(PieceType::King, Color::White));
        board.place(sq("h1"), Piece::new(PieceType::King, Color::Black));
        assert_eq!(moves_from(&board, "e4").len(), 8);
        assert_eq!(moves_from(&board, "h1").len(), 3);
    }

    #[test]
    fn all_generated_moves_stay_on_the_board() {
        let board = Board::initial();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let from = Square::new(row, col);
                for dest in generate_moves(&board, from) {
                    assert!(dest.in_bounds(), "{:?} -> {:?} leaves the board", from, dest);
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic_and_ignores_turn() {
        let board = Board::initial();
        // Both colors generate even though White is to move in a fresh game.
        assert!(!generate_moves(&board, sq("b8")).is_empty());
        assert_eq!(generate_moves(&board, sq("g1")), generate_moves(&board, sq("g1")));
    }

    #[test]
    fn empty_square_generates_nothing() {
        let board = Board::initial();
        assert!(generate_moves(&board, sq("e4")).is_empty());
    }

    #[test]
    fn capturing_the_king_ends_the_game() {
        let mut board = Board::empty();
        board.place(sq("a1"), Piece::new(PieceType::King, Color::White));
        board.place(sq("e7"), Piece::new(PieceType::Queen, Color::White));
        board.place(sq("e8"), Piece::new(PieceType::King, Color::Black));

        let mut game = Game::from_position(board, Color::White);
        assert!(game.make_move("e7", "e8"));
        assert_eq!(game.game_state(), GameState::WhiteWon);
        // The turn flipped on the ending move, but nothing is accepted now.
        assert_eq!(game.turn(), Color::Black);
        assert!(!game.make_move("e8", "e7"));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn rejected_moves_leave_the_game_untouched() {
        let mut game = Game::new();
        let fresh = game.clone();
        assert!(!game.make_move("e2", "e5")); // too far with the path clear
        assert!(!game.make_move("e7", "e6")); // not Black's turn
        assert!(!game.make_move("e4", "e5")); // empty origin
        assert!(!game.make_move("e2", "x9")); // malformed destination
        assert_eq!(game, fresh);
    }
}
