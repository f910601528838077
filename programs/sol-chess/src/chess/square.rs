use crate::chess::Color;
use anchor_lang::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Board coordinate. Rank 0 is the top row of the array (black's back rank),
/// file 0 is the a-file, so "e2" parses to rank 6, file 4.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    pub const A1: Square = Square::new(7, 0);
    pub const E1: Square = Square::new(7, 4);
    pub const H1: Square = Square::new(7, 7);
    pub const A8: Square = Square::new(0, 0);
    pub const E8: Square = Square::new(0, 4);
    pub const H8: Square = Square::new(0, 7);

    pub const fn new(rank: u8, file: u8) -> Self {
        Square { rank, file }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::new(rank, file)))
    }

    pub fn king_start(color: Color) -> Square {
        if color.is_white() {
            Square::E1
        } else {
            Square::E8
        }
    }

    /// Square reached by stepping `rank_step`/`file_step`, or None past the edge.
    pub fn offset(self, rank_step: i8, file_step: i8) -> Option<Square> {
        let rank = self.rank as i8 + rank_step;
        let file = self.file as i8 + file_step;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::new(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Squares along one direction, nearest first, up to the board edge.
    pub fn ray(self, rank_step: i8, file_step: i8) -> impl Iterator<Item = Square> {
        std::iter::successors(self.offset(rank_step, file_step), move |square| {
            square.offset(rank_step, file_step)
        })
    }

    pub fn knight_jumps(self) -> impl Iterator<Item = Square> {
        const JUMPS: [(i8, i8); 8] = [
            (-2, -1),
            (-2, 1),
            (-1, -2),
            (-1, 2),
            (1, -2),
            (1, 2),
            (2, -1),
            (2, 1),
        ];
        JUMPS
            .into_iter()
            .filter_map(move |(rank_step, file_step)| self.offset(rank_step, file_step))
    }

    pub fn forward(self, color: Color) -> Option<Square> {
        self.offset(color.pawn_direction(), 0)
    }

    pub fn double_forward(self, color: Color) -> Option<Square> {
        self.offset(color.pawn_direction() * 2, 0)
    }

    pub fn forward_left(self, color: Color) -> Option<Square> {
        self.offset(color.pawn_direction(), -1)
    }

    pub fn forward_right(self, color: Color) -> Option<Square> {
        self.offset(color.pawn_direction(), 1)
    }

    pub fn is_starting_pawn_square(self, color: Color) -> bool {
        self.rank == color.starting_pawn_rank()
    }

    pub fn is_adjacent(self, other: Square) -> bool {
        let rank_gap = (self.rank as i8 - other.rank as i8).abs();
        let file_gap = (self.file as i8 - other.file as i8).abs();
        rank_gap <= 1 && file_gap <= 1 && (rank_gap, file_gap) != (0, 0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, 8 - self.rank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "squares are a file letter followed by a rank digit, like e4")
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    // written out in full, the anchor prelude shadows std's Result
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = match chars.next() {
            Some(c @ 'a'..='h') => c as u8 - b'a',
            _ => return Err(ParseSquareError),
        };
        let rank = match chars.next() {
            Some(c @ '1'..='8') => b'8' - c as u8,
            _ => return Err(ParseSquareError),
        };
        if chars.next().is_some() {
            return Err(ParseSquareError);
        }
        Ok(Square::new(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_algebraic_notation() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square::A1);
        assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
        assert_eq!("e2".parse::<Square>().unwrap(), Square::new(6, 4));
        assert_eq!("d5".parse::<Square>().unwrap(), Square::new(3, 3));
    }

    #[test]
    fn rejects_malformed_notation() {
        assert!("".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("i4".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
        assert!("4e".parse::<Square>().is_err());
    }

    #[test]
    fn displays_back_what_it_parsed() {
        for name in ["a1", "h1", "a8", "h8", "e4", "c7"] {
            assert_eq!(name.parse::<Square>().unwrap().to_string(), name);
        }
    }

    #[test]
    fn offset_stops_at_the_edge() {
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::A8.offset(0, -1), None);
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::H1.offset(0, 1), None);
        assert_eq!(Square::new(3, 3).offset(1, 1), Some(Square::new(4, 4)));
    }

    #[test]
    fn ray_walks_to_the_edge() {
        let ray: Vec<Square> = Square::new(7, 4).ray(-1, 0).collect();
        assert_eq!(ray.len(), 7);
        assert_eq!(ray[0], Square::new(6, 4));
        assert_eq!(ray[6], Square::new(0, 4));
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        assert_eq!(Square::A1.knight_jumps().count(), 2);
        assert_eq!(Square::new(3, 3).knight_jumps().count(), 8);
    }

    #[test]
    fn pawn_directions_run_toward_the_far_rank() {
        let e2 = Square::new(6, 4);
        assert_eq!(e2.forward(Color::White), Some(Square::new(5, 4)));
        assert_eq!(e2.double_forward(Color::White), Some(Square::new(4, 4)));
        let e7 = Square::new(1, 4);
        assert_eq!(e7.forward(Color::Black), Some(Square::new(2, 4)));
        assert!(e2.is_starting_pawn_square(Color::White));
        assert!(!e7.is_starting_pawn_square(Color::White));
    }
}
