//! The closed vocabulary of 18 face turns.

use std::{fmt, str::FromStr};

use crate::{error::CubeError, facelet::Face};



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn { Clockwise, CounterClockwise, Double }
impl Turn {
	pub const ALL: [Turn; 3] = { use Turn::*; [Clockwise, CounterClockwise, Double] };

	/// Number of clockwise quarter turns this turn is made of.
	pub const fn quarter_turns(self) -> usize {
		match self {
			Turn::Clockwise => 1,
			Turn::CounterClockwise => 3,
			Turn::Double => 2,
		}
	}

	pub const fn inverse(self) -> Self {
		match self {
			Turn::Clockwise => Turn::CounterClockwise,
			Turn::CounterClockwise => Turn::Clockwise,
			Turn::Double => Turn::Double,
		}
	}

	const fn suffix(self) -> &'static str {
		match self {
			Turn::Clockwise => "",
			Turn::CounterClockwise => "'",
			Turn::Double => "2",
		}
	}
}



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Move {
	L, LPrime, L2,
	R, RPrime, R2,
	U, UPrime, U2,
	D, DPrime, D2,
	F, FPrime, F2,
	B, BPrime, B2,
}
pub const ALL_MOVES: [Move; 18] = {use Move::*; [
	L, LPrime, L2,
	R, RPrime, R2,
	U, UPrime, U2,
	D, DPrime, D2,
	F, FPrime, F2,
	B, BPrime, B2,
]};

impl Move {
	pub const fn new(face: Face, turn: Turn) -> Self {
		use Move::*;
		let [clockwise, counter_clockwise, double] = match face {
			Face::Left => [L, LPrime, L2],
			Face::Right => [R, RPrime, R2],
			Face::Up => [U, UPrime, U2],
			Face::Down => [D, DPrime, D2],
			Face::Front => [F, FPrime, F2],
			Face::Back => [B, BPrime, B2],
		};
		match turn {
			Turn::Clockwise => clockwise,
			Turn::CounterClockwise => counter_clockwise,
			Turn::Double => double,
		}
	}

	pub const fn face(self) -> Face {
		use Move::*;
		match self {
			L | LPrime | L2 => Face::Left,
			R | RPrime | R2 => Face::Right,
			U | UPrime | U2 => Face::Up,
			D | DPrime | D2 => Face::Down,
			F | FPrime | F2 => Face::Front,
			B | BPrime | B2 => Face::Back,
		}
	}

	pub const fn turn(self) -> Turn {
		match self as u8 % 3 {
			0 => Turn::Clockwise,
			1 => Turn::CounterClockwise,
			_ => Turn::Double,
		}
	}

	/// The move that undoes this one: `X <-> X'`, `X2` undoes itself.
	pub const fn inverse(self) -> Self {
		Move::new(self.face(), self.turn().inverse())
	}
}

/// Moves that take the cube back to where `moves` started, last move first.
pub fn inverse_sequence(moves: &[Move]) -> Vec<Move> {
	moves.iter().rev().map(|move_| move_.inverse()).collect()
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.face().letter(), self.turn().suffix())
	}
}

impl FromStr for Move {
	type Err = CubeError;
	/// Accepts `X`, `X'`, `XPRIME` and `X2` for `X` in `L R U D F B`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let unknown = || CubeError::UnknownMove(s.to_string());
		let mut chars = s.chars();
		let face = match chars.next() {
			Some('L') => Face::Left,
			Some('R') => Face::Right,
			Some('U') => Face::Up,
			Some('D') => Face::Down,
			Some('F') => Face::Front,
			Some('B') => Face::Back,
			_ => return Err(unknown()),
		};
		let turn = match chars.as_str() {
			"" => Turn::Clockwise,
			"'" | "PRIME" => Turn::CounterClockwise,
			"2" => Turn::Double,
			_ => return Err(unknown()),
		};
		Ok(Move::new(face, turn))
	}
}

impl TryFrom<u8> for Move {
	type Error = CubeError;
	/// Decodes the position of a move in [`ALL_MOVES`], as stored in shuffle logs.
	fn try_from(value: u8) -> Result<Self, Self::Error> {
		ALL_MOVES.get(value as usize).copied().ok_or_else(|| CubeError::UnknownMove(value.to_string()))
	}
}

impl From<Move> for u8 {
	fn from(move_: Move) -> u8 {
		move_ as u8
	}
}

/// Parses a whitespace separated sequence such as `"R U R' U'"`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, CubeError> {
	s.split_whitespace().map(str::parse).collect()
}
