//! Move legality rules. `classify` checks a move against the piece rules for
//! the position, `apply` mutates a board with a classified move, and the
//! check/checkmate/stalemate queries simulate candidate moves on board copies.

use crate::chess::{Board, CastlingRights, Color, Piece, PieceKind, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// How a classified move manipulates the board beyond the moving piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Standard,
    DoubleStep { skipped: Square },
    EnPassant { captured: Square },
    CastleKingside,
    CastleQueenside,
}

/// Validates `from -> to` for `color` against the piece rules. Does not test
/// whether the move leaves the mover's own king in check; castling is the
/// exception and refuses to pass through or out of check here.
pub fn classify(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    enpassant: Option<Square>,
    castling: CastlingRights,
) -> Option<MoveKind> {
    if from == to {
        return None;
    }
    let (piece_color, kind) = board.piece_at(from).split()?;
    if piece_color != color || board.piece_at(to).is_color(color) {
        return None;
    }
    match kind {
        PieceKind::Pawn => classify_pawn(board, color, from, to, enpassant),
        PieceKind::Knight => knight_reaches(from, to).then_some(MoveKind::Standard),
        PieceKind::Bishop => classify_slider(board, from, to, true, false),
        PieceKind::Rook => classify_slider(board, from, to, false, true),
        PieceKind::Queen => classify_slider(board, from, to, true, true),
        PieceKind::King => classify_king(board, color, from, to, castling),
    }
}

/// Plays a classified move, returning the en passant square the move opened
/// up, if any. A pawn reaching the far rank is promoted to a queen.
pub fn apply(
    board: &mut Board,
    color: Color,
    from: Square,
    to: Square,
    kind: MoveKind,
) -> Option<Square> {
    board.move_piece(from, to);
    let mut next_enpassant = None;
    match kind {
        MoveKind::Standard => {}
        MoveKind::DoubleStep { skipped } => next_enpassant = Some(skipped),
        MoveKind::EnPassant { captured } => board.clear(captured),
        MoveKind::CastleKingside => {
            board.move_piece(Square::new(from.rank, 7), Square::new(from.rank, 5));
        }
        MoveKind::CastleQueenside => {
            board.move_piece(Square::new(from.rank, 0), Square::new(from.rank, 3));
        }
    }
    if board.piece_at(to) == Piece::pawn(color) && to.rank == color.promotion_rank() {
        board.set_piece(Piece::queen(color), to);
    }
    next_enpassant
}

pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    if square
        .knight_jumps()
        .any(|jump| board.piece_at(jump) == Piece::knight(by))
    {
        return true;
    }
    for (rank_step, file_step) in ORTHOGONAL {
        if let Some((piece, found)) = board.first_piece_along(square, rank_step, file_step) {
            if piece == Piece::rook(by) || piece == Piece::queen(by) {
                return true;
            }
            if piece == Piece::king(by) && square.is_adjacent(found) {
                return true;
            }
        }
    }
    for (rank_step, file_step) in DIAGONAL {
        if let Some((piece, found)) = board.first_piece_along(square, rank_step, file_step) {
            if piece == Piece::bishop(by) || piece == Piece::queen(by) {
                return true;
            }
            if piece == Piece::king(by) && square.is_adjacent(found) {
                return true;
            }
        }
    }
    // a pawn attacks the two squares diagonally ahead of it
    for file_step in [-1, 1] {
        if let Some(pawn_square) = square.offset(-by.pawn_direction(), file_step) {
            if board.piece_at(pawn_square) == Piece::pawn(by) {
                return true;
            }
        }
    }
    false
}

pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king(color) {
        Some(king) => is_attacked(board, king, color.opposite()),
        None => false,
    }
}

/// Full legality: the piece rules admit the move and playing it leaves the
/// mover's king out of check.
pub fn is_legal(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    enpassant: Option<Square>,
    castling: CastlingRights,
) -> bool {
    match classify(board, color, from, to, enpassant, castling) {
        Some(kind) => {
            let mut next = *board;
            apply(&mut next, color, from, to, kind);
            !in_check(&next, color)
        }
        None => false,
    }
}

pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    enpassant: Option<Square>,
    castling: CastlingRights,
) -> bool {
    Square::all()
        .filter_map(|from| match board.piece_at(from).split() {
            Some((piece_color, kind)) if piece_color == color => Some((from, kind)),
            _ => None,
        })
        .any(|(from, kind)| {
            candidate_targets(board, color, from, kind)
                .into_iter()
                .any(|to| is_legal(board, color, from, to, enpassant, castling))
        })
}

pub fn is_checkmate(
    board: &Board,
    color: Color,
    enpassant: Option<Square>,
    castling: CastlingRights,
) -> bool {
    in_check(board, color) && !has_any_legal_move(board, color, enpassant, castling)
}

pub fn is_stalemate(
    board: &Board,
    color: Color,
    enpassant: Option<Square>,
    castling: CastlingRights,
) -> bool {
    !in_check(board, color) && !has_any_legal_move(board, color, enpassant, castling)
}

fn classify_pawn(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    enpassant: Option<Square>,
) -> Option<MoveKind> {
    let forward = from.forward(color);
    if board.piece_at(to).is_empty() {
        if forward == Some(to) {
            return Some(MoveKind::Standard);
        }
        if from.is_starting_pawn_square(color) && from.double_forward(color) == Some(to) {
            if let Some(skipped) = forward {
                if board.piece_at(skipped).is_empty() {
                    return Some(MoveKind::DoubleStep { skipped });
                }
            }
            return None;
        }
    }
    if from.forward_left(color) != Some(to) && from.forward_right(color) != Some(to) {
        return None;
    }
    let target = board.piece_at(to);
    if target.is_color(color.opposite()) {
        return Some(MoveKind::Standard);
    }
    if target.is_empty() && enpassant == Some(to) {
        return Some(MoveKind::EnPassant {
            captured: Square::new(from.rank, to.file),
        });
    }
    None
}

fn knight_reaches(from: Square, to: Square) -> bool {
    let rank_gap = (to.rank as i8 - from.rank as i8).abs();
    let file_gap = (to.file as i8 - from.file as i8).abs();
    (rank_gap, file_gap) == (2, 1) || (rank_gap, file_gap) == (1, 2)
}

fn classify_slider(
    board: &Board,
    from: Square,
    to: Square,
    diagonals: bool,
    orthogonals: bool,
) -> Option<MoveKind> {
    let (rank_step, file_step) = slider_step(from, to)?;
    let is_diagonal = rank_step != 0 && file_step != 0;
    if is_diagonal && !diagonals || !is_diagonal && !orthogonals {
        return None;
    }
    board
        .path_clear(from, to, rank_step, file_step)
        .then_some(MoveKind::Standard)
}

fn slider_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let rank_gap = to.rank as i8 - from.rank as i8;
    let file_gap = to.file as i8 - from.file as i8;
    if rank_gap == 0 || file_gap == 0 || rank_gap.abs() == file_gap.abs() {
        Some((rank_gap.signum(), file_gap.signum()))
    } else {
        None
    }
}

fn classify_king(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    castling: CastlingRights,
) -> Option<MoveKind> {
    let rank_gap = (to.rank as i8 - from.rank as i8).abs();
    let file_gap = (to.file as i8 - from.file as i8).abs();
    if rank_gap <= 1 && file_gap <= 1 {
        return Some(MoveKind::Standard);
    }
    if from != Square::king_start(color) || to.rank != from.rank {
        return None;
    }
    let enemy = color.opposite();
    if is_attacked(board, from, enemy) {
        return None;
    }
    if to.file == 6 && castling.kingside(color) {
        let crossed = [Square::new(from.rank, 5), Square::new(from.rank, 6)];
        if crossed.iter().all(|sq| board.piece_at(*sq).is_empty())
            && crossed.iter().all(|sq| !is_attacked(board, *sq, enemy))
        {
            return Some(MoveKind::CastleKingside);
        }
    }
    if to.file == 2 && castling.queenside(color) {
        let cleared = [
            Square::new(from.rank, 1),
            Square::new(from.rank, 2),
            Square::new(from.rank, 3),
        ];
        let crossed = [Square::new(from.rank, 2), Square::new(from.rank, 3)];
        if cleared.iter().all(|sq| board.piece_at(*sq).is_empty())
            && crossed.iter().all(|sq| !is_attacked(board, *sq, enemy))
        {
            return Some(MoveKind::CastleQueenside);
        }
    }
    None
}

/// Destinations worth classifying for the piece on `from`. A superset of the
/// piece's legal moves, but far smaller than the whole board: sliders stop at
/// the first occupied square, pawns and kings list their fixed patterns.
fn candidate_targets(board: &Board, color: Color, from: Square, kind: PieceKind) -> Vec<Square> {
    let mut targets = Vec::new();
    match kind {
        PieceKind::Pawn => {
            targets.extend(from.forward(color));
            targets.extend(from.double_forward(color));
            targets.extend(from.forward_left(color));
            targets.extend(from.forward_right(color));
        }
        PieceKind::Knight => targets.extend(from.knight_jumps()),
        PieceKind::Bishop => extend_along_rays(board, from, &DIAGONAL, &mut targets),
        PieceKind::Rook => extend_along_rays(board, from, &ORTHOGONAL, &mut targets),
        PieceKind::Queen => {
            extend_along_rays(board, from, &DIAGONAL, &mut targets);
            extend_along_rays(board, from, &ORTHOGONAL, &mut targets);
        }
        PieceKind::King => {
            for (rank_step, file_step) in ORTHOGONAL.into_iter().chain(DIAGONAL) {
                targets.extend(from.offset(rank_step, file_step));
            }
            // castle targets; classify rejects them when the king is astray
            targets.push(Square::new(from.rank, 6));
            targets.push(Square::new(from.rank, 2));
        }
    }
    targets
}

fn extend_along_rays(
    board: &Board,
    from: Square,
    directions: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(rank_step, file_step) in directions {
        for square in from.ray(rank_step, file_step) {
            targets.push(square);
            if board.piece_at(square).is_piece() {
                break;
            }
        }
    }
}
